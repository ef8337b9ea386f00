use crate::intake::{IntakePatch, IntakeRecord, Stage};

/// Owns the stage pointer and the intake record.
///
/// Navigation here is mechanical: `advance` performs no validation (the
/// session gates it before calling) and `jump_to` only moves backward.
#[derive(Debug, Default)]
pub struct WizardEngine {
    stage: Stage,
    record: IntakeRecord,
}

impl WizardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    /// Sole mutation path for the record.
    pub fn patch(&mut self, patch: IntakePatch) {
        self.record.apply(patch);
    }

    /// Move one stage forward, ceiling-clamped at `Preview`.
    pub fn advance(&mut self) {
        self.stage = self.stage.next();
    }

    /// Move one stage back, floor-clamped at `Business`.
    pub fn retreat(&mut self) {
        self.stage = self.stage.prev();
    }

    /// Revisit an already-completed, earlier stage. Jumping forward or to
    /// the current stage is rejected.
    pub fn jump_to(&mut self, target: Stage) -> bool {
        if target < self.stage {
            self.stage = target;
            true
        } else {
            false
        }
    }

    /// Empty record, stage back to `Business`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Direct stage move for orchestrated transitions (generation success
    /// forces `Preview`).
    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
}
