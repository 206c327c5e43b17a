//! Editable settings form

use super::{Durations, FieldSpec};
use crate::state::Phase;

/// Result of running the settings editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    /// Durations were confirmed and persisted
    Confirmed(Durations),
    /// The form was closed without confirming; no timer should be started
    Cancelled,
}

/// A spin-box style field bounded by its `FieldSpec`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinField {
    spec: FieldSpec,
    value: u32,
}

impl SpinField {
    /// Create a field, snapping the initial value onto the grid
    pub fn new(spec: FieldSpec, initial: u32) -> Self {
        Self {
            spec,
            value: spec.snap(initial),
        }
    }

    /// Current value in minutes
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Range and step of the field
    pub fn spec(&self) -> FieldSpec {
        self.spec
    }

    /// Move one step up, stopping at the maximum
    pub fn increment(&mut self) {
        self.value = self.spec.step_up(self.value);
    }

    /// Move one step down, stopping at the minimum
    pub fn decrement(&mut self) {
        self.value = self.spec.step_down(self.value);
    }

    /// Set an explicit value if it is in range and on the step grid
    pub fn set(&mut self, value: u32) -> Result<(), String> {
        self.spec.validate(value)?;
        self.value = value;
        Ok(())
    }
}

/// The three duration fields, keyed by the phase they configure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    fields: [SpinField; 3],
}

impl SettingsForm {
    /// Open the form with the loaded durations
    pub fn new(initial: Durations) -> Self {
        Self {
            fields: Phase::ALL
                .map(|phase| SpinField::new(FieldSpec::for_phase(phase), initial.minutes(phase))),
        }
    }

    /// Field configuring the given phase
    pub fn field(&self, phase: Phase) -> &SpinField {
        &self.fields[phase.index()]
    }

    /// Mutable field configuring the given phase
    pub fn field_mut(&mut self, phase: Phase) -> &mut SpinField {
        &mut self.fields[phase.index()]
    }

    /// Validate every field and produce the durations to persist
    pub fn confirm(&self) -> Result<Durations, String> {
        for phase in Phase::ALL {
            let field = self.field(phase);
            field
                .spec()
                .validate(field.value())
                .map_err(|e| format!("{}: {}", phase, e))?;
        }
        Durations::new(
            self.field(Phase::Work).value(),
            self.field(Phase::ShortBreak).value(),
            self.field(Phase::LongBreak).value(),
        )
    }
}
