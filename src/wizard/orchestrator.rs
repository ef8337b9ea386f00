use std::sync::Mutex;

use crate::strategy::Strategy;

/// Where the generation lifecycle currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(Strategy),
    Failed(String),
}

#[derive(Debug, Default)]
struct GenerationState {
    status: GenerationStatus,
    /// Strategy from the previous successful run, held while a
    /// regeneration is in flight or after one fails.
    last_good: Option<Strategy>,
}

/// State machine for the generate call. The actual collaborator await
/// happens in the session, outside any lock; this type only records
/// transitions.
#[derive(Debug, Default)]
pub struct GenerationOrchestrator {
    state: Mutex<GenerationState>,
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.lock_state().status.clone()
    }

    /// The strategy the front-end should show: the current success, or
    /// the last known good one while a newer attempt is pending or failed.
    pub fn strategy(&self) -> Option<Strategy> {
        let state = self.lock_state();
        match &state.status {
            GenerationStatus::Succeeded(strategy) => Some(strategy.clone()),
            _ => state.last_good.clone(),
        }
    }

    pub fn failure(&self) -> Option<String> {
        match &self.lock_state().status {
            GenerationStatus::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Claim the in-flight slot. Returns false when a call is already
    /// running. A prior success is parked as last-known-good so it stays
    /// visible until the new attempt resolves.
    pub fn begin(&self) -> bool {
        let mut state = self.lock_state();
        if state.status == GenerationStatus::InFlight {
            return false;
        }
        if let GenerationStatus::Succeeded(strategy) =
            std::mem::take(&mut state.status)
        {
            state.last_good = Some(strategy);
        }
        state.status = GenerationStatus::InFlight;
        true
    }

    /// Fold the collaborator result into the terminal status. Success
    /// replaces the parked strategy atomically; failure leaves it intact.
    pub fn resolve(&self, result: Result<Strategy, String>) {
        let mut state = self.lock_state();
        match result {
            Ok(strategy) => {
                state.status = GenerationStatus::Succeeded(strategy);
                state.last_good = None;
            }
            Err(reason) => {
                state.status = GenerationStatus::Failed(reason);
            }
        }
    }

    pub fn reset(&self) {
        *self.lock_state() = GenerationState::default();
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, GenerationState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
