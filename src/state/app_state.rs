//! Pomodoro state machine

use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::{
    snapshot::{Action, PhaseView, TimerSnapshot},
    Phase, TimerState,
};
use crate::settings::Durations;

/// A long break follows every fourth completed work interval
pub const LONG_BREAK_EVERY: u32 = 4;

/// Result of a phase switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub completed_work: u32,
}

/// Owns all timer state. At most one phase is running at any time.
#[derive(Debug, Clone)]
pub struct AppState {
    durations: Durations,
    timers: [TimerState; 3],
    focused: Phase,
    completed_work: u32,
    last_action: Option<Action>,
    last_action_time: Option<DateTime<Local>>,
}

impl AppState {
    /// Create a timer at rest with every phase holding its full duration
    pub fn new(durations: Durations) -> Self {
        Self {
            durations,
            timers: Phase::ALL.map(|phase| TimerState::new(durations.minutes(phase))),
            focused: Phase::Work,
            completed_work: 0,
            last_action: None,
            last_action_time: None,
        }
    }

    /// Create a timer and start the work phase right away
    pub fn launch(durations: Durations) -> Self {
        let mut state = Self::new(durations);
        state.start(Phase::Work);
        state
    }

    /// Durations the timer was built with
    pub fn durations(&self) -> Durations {
        self.durations
    }

    /// Countdown state of a phase
    pub fn timer(&self, phase: Phase) -> &TimerState {
        &self.timers[phase.index()]
    }

    fn timer_mut(&mut self, phase: Phase) -> &mut TimerState {
        &mut self.timers[phase.index()]
    }

    /// Tab currently shown
    pub fn focused(&self) -> Phase {
        self.focused
    }

    /// Work intervals finished since the last reset
    pub fn completed_work(&self) -> u32 {
        self.completed_work
    }

    /// Phase currently counting down, if any
    pub fn running_phase(&self) -> Option<Phase> {
        Phase::ALL.into_iter().find(|&phase| self.timer(phase).is_active())
    }

    /// Check if a phase is counting down
    pub fn is_running(&self, phase: Phase) -> bool {
        self.timer(phase).is_active()
    }

    fn record(&mut self, action: Action) {
        self.last_action = Some(action);
        self.last_action_time = Some(Local::now());
    }

    /// Start or stop the countdown of a phase
    pub fn toggle(&mut self, phase: Phase) {
        if self.is_running(phase) {
            self.timer_mut(phase).stop();
            info!("{} paused at {}", phase, self.timer(phase).display());
            self.record(Action::Stop(phase));
        } else {
            self.start(phase);
        }
    }

    /// Start a phase unless it is already running. Any other running phase is paused.
    pub fn start(&mut self, phase: Phase) {
        if self.is_running(phase) {
            return;
        }
        for other in Phase::ALL {
            if other != phase && self.is_running(other) {
                debug!("Pausing {} before starting {}", other, phase);
                self.timer_mut(other).stop();
            }
        }
        self.timer_mut(phase).start();
        info!("{} started at {}", phase, self.timer(phase).display());
        self.record(Action::Start(phase));
    }

    /// Advance the running phase by one second, switching when it expires
    pub fn tick(&mut self) -> Option<Transition> {
        let phase = self.running_phase()?;
        if self.timer_mut(phase).tick() {
            Some(self.switch(phase))
        } else {
            None
        }
    }

    /// Finish a phase and start the one that follows it
    pub fn switch(&mut self, finished: Phase) -> Transition {
        let next = match finished {
            Phase::Work => {
                self.completed_work += 1;
                if self.completed_work % LONG_BREAK_EVERY == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };

        self.timer_mut(finished).reset();
        self.timer_mut(next).reset();
        self.focused = next;
        self.start(next);

        info!(
            "{} finished, switching to {} (pomodoros: {})",
            finished, next, self.completed_work
        );
        self.record(Action::Switch {
            from: finished,
            to: next,
        });

        Transition {
            from: finished,
            to: next,
            completed_work: self.completed_work,
        }
    }

    /// Force a running phase to finish now. No-op when the phase is stopped.
    pub fn skip(&mut self, phase: Phase) -> Option<Transition> {
        if !self.is_running(phase) {
            debug!("Skip ignored, {} is not running", phase);
            return None;
        }
        info!("Skipping {}", phase);
        let transition = self.switch(phase);
        self.record(Action::Skip(phase));
        Some(transition)
    }

    /// Stop everything, restore all durations and clear the pomodoro count.
    ///
    /// Work is left stopped; the caller restarts it after its reset delay.
    pub fn reset(&mut self, requested_from: Phase) {
        if let Some(running) = self.running_phase() {
            debug!("Reset stops running {}", running);
        }
        for timer in self.timers.iter_mut() {
            timer.reset();
        }
        self.completed_work = 0;
        self.focused = Phase::Work;
        info!("Timer reset from the {} tab", requested_from);
        self.record(Action::Reset);
    }

    /// Change the visible tab without touching any countdown
    pub fn focus(&mut self, phase: Phase) {
        self.focused = phase;
    }

    /// Copy of the current state for the surface
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            focused: self.focused,
            completed_work: self.completed_work,
            phases: Phase::ALL.map(|phase| PhaseView {
                phase,
                remaining_seconds: self.timer(phase).remaining_seconds,
                running: self.is_running(phase),
            }),
            last_action: self.last_action,
            last_action_time: self.last_action_time,
        }
    }
}
