//! Interval durations and the ranges the settings form accepts

use serde::{Deserialize, Serialize};

use crate::state::Phase;

/// Default work interval in minutes
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default short break in minutes
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break in minutes
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Range and increment of an editable duration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl FieldSpec {
    pub const WORK: FieldSpec = FieldSpec { min: 5, max: 60, step: 5 };
    pub const BREAK: FieldSpec = FieldSpec { min: 5, max: 59, step: 1 };

    /// Spec for the field that configures the given phase
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Work => Self::WORK,
            Phase::ShortBreak | Phase::LongBreak => Self::BREAK,
        }
    }

    /// Check that a value is in range and on the step grid
    pub fn validate(&self, value: u32) -> Result<(), String> {
        if value < self.min || value > self.max {
            return Err(format!(
                "{} is outside the allowed range {}-{}",
                value, self.min, self.max
            ));
        }
        if (value - self.min) % self.step != 0 {
            return Err(format!(
                "{} is not a multiple of {} from {}",
                value, self.step, self.min
            ));
        }
        Ok(())
    }

    /// Clamp into range and round down onto the step grid
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        clamped - (clamped - self.min) % self.step
    }

    /// Next value one step up, clamped at the maximum
    pub fn step_up(&self, value: u32) -> u32 {
        self.snap(value.saturating_add(self.step))
    }

    /// Next value one step down, clamped at the minimum
    pub fn step_down(&self, value: u32) -> u32 {
        self.snap(value.saturating_sub(self.step))
    }
}

/// Work, short break and long break durations in minutes.
///
/// Persisted as a bare JSON array `[work, short, long]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 3]", into = "[u32; 3]")]
pub struct Durations {
    work: u32,
    short_break: u32,
    long_break: u32,
}

impl Durations {
    /// Create durations, rejecting zero-length intervals
    pub fn new(work: u32, short_break: u32, long_break: u32) -> Result<Self, String> {
        if work == 0 || short_break == 0 || long_break == 0 {
            return Err(format!(
                "Durations must be at least one minute, got [{}, {}, {}]",
                work, short_break, long_break
            ));
        }
        Ok(Self {
            work,
            short_break,
            long_break,
        })
    }

    /// Work interval in minutes
    pub fn work(&self) -> u32 {
        self.work
    }

    /// Short break in minutes
    pub fn short_break(&self) -> u32 {
        self.short_break
    }

    /// Long break in minutes
    pub fn long_break(&self) -> u32 {
        self.long_break
    }

    /// Duration in minutes configured for a phase
    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_MINUTES,
            short_break: DEFAULT_SHORT_BREAK_MINUTES,
            long_break: DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl TryFrom<[u32; 3]> for Durations {
    type Error = String;

    fn try_from([work, short_break, long_break]: [u32; 3]) -> Result<Self, Self::Error> {
        Self::new(work, short_break, long_break)
    }
}

impl From<Durations> for [u32; 3] {
    fn from(durations: Durations) -> Self {
        [durations.work, durations.short_break, durations.long_break]
    }
}
