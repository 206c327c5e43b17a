//! Read-only views of the timer published to the surface

use chrono::{DateTime, Local};

use super::{timer_state::format_clock, Phase};

/// What a single tab shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseView {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub running: bool,
}

impl PhaseView {
    /// Countdown text as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Action recorded as the most recent change to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start(Phase),
    Stop(Phase),
    Skip(Phase),
    Reset,
    Switch { from: Phase, to: Phase },
}

impl Action {
    /// Human-readable description for the event log
    pub fn describe(&self) -> String {
        match self {
            Action::Start(phase) => format!("{} started", phase),
            Action::Stop(phase) => format!("{} paused", phase),
            Action::Skip(phase) => format!("{} skipped", phase),
            Action::Reset => "Timer reset".to_string(),
            Action::Switch { from, to } => format!("{} finished, {} started", from, to),
        }
    }
}

/// Full snapshot of the timer after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub focused: Phase,
    pub completed_work: u32,
    pub phases: [PhaseView; 3],
    pub last_action: Option<Action>,
    pub last_action_time: Option<DateTime<Local>>,
}

impl TimerSnapshot {
    /// View of a single phase
    pub fn phase(&self, phase: Phase) -> &PhaseView {
        &self.phases[phase.index()]
    }

    /// Phase currently counting down, if any
    pub fn running(&self) -> Option<Phase> {
        self.phases.iter().find(|view| view.running).map(|view| view.phase)
    }

    /// View of the focused tab
    pub fn focused_view(&self) -> &PhaseView {
        self.phase(self.focused)
    }
}
