//! Countdown task driving the Pomodoro state machine

use std::time::Duration;
use tokio::{
    sync::{mpsc, watch},
    time::{interval_at, sleep_until, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::state::{AppState, Phase, TimerSnapshot};

/// Countdown resolution
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Delay before a skip takes effect; presses during it are ignored
pub const SKIP_DEBOUNCE: Duration = Duration::from_secs(1);
/// Delay between a reset and the work phase starting again
pub const RESTART_DELAY: Duration = Duration::from_secs(1);

/// Requests sent from the surface to the countdown task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle(Phase),
    Skip(Phase),
    Reset(Phase),
    Focus(Phase),
    Quit,
}

/// Timing of the countdown loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub tick: Duration,
    pub skip_debounce: Duration,
    pub restart: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            tick: TICK_PERIOD,
            skip_debounce: SKIP_DEBOUNCE,
            restart: RESTART_DELAY,
        }
    }
}

/// Own the timer, apply commands and tick once per period until asked to quit.
///
/// Every change is published on `updates`. Returns the final state.
pub async fn countdown_task(
    mut state: AppState,
    mut commands: mpsc::Receiver<Command>,
    updates: watch::Sender<TimerSnapshot>,
    delays: Delays,
) -> AppState {
    info!("Starting countdown task");

    let mut ticker = interval_at(Instant::now() + delays.tick, delays.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut pending_skip: Option<(Phase, Instant)> = None;
    let mut pending_restart: Option<Instant> = None;

    updates.send_replace(state.snapshot());

    loop {
        let running_before = state.running_phase();
        let skip_at = pending_skip.map(|(_, at)| at).unwrap_or_else(far_future);
        let restart_at = pending_restart.unwrap_or_else(far_future);

        tokio::select! {
            _ = ticker.tick() => {
                if let Some(transition) = state.tick() {
                    debug!("Countdown expired: {:?}", transition);
                }
            }

            command = commands.recv() => {
                match command {
                    Some(Command::Quit) | None => {
                        info!("Countdown task stopping");
                        break;
                    }
                    Some(Command::Toggle(phase)) => {
                        pending_restart = None;
                        state.toggle(phase);
                    }
                    Some(Command::Skip(phase)) => {
                        if pending_skip.is_some() {
                            debug!("Skip already pending, ignoring press on {}", phase);
                        } else {
                            pending_skip = Some((phase, Instant::now() + delays.skip_debounce));
                        }
                    }
                    Some(Command::Reset(phase)) => {
                        pending_skip = None;
                        state.reset(phase);
                        pending_restart = Some(Instant::now() + delays.restart);
                    }
                    Some(Command::Focus(phase)) => state.focus(phase),
                }
            }

            _ = sleep_until(skip_at), if pending_skip.is_some() => {
                if let Some((phase, _)) = pending_skip.take() {
                    state.skip(phase);
                }
            }

            _ = sleep_until(restart_at), if pending_restart.is_some() => {
                pending_restart = None;
                state.start(Phase::Work);
            }
        }

        // A countdown that just started gets a full period before its first decrement
        let running_after = state.running_phase();
        if running_after.is_some() && running_after != running_before {
            ticker.reset();
        }

        updates.send_if_modified(|current| {
            let next = state.snapshot();
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    state
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(24 * 60 * 60)
}
