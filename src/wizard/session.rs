use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::GenerationError;
use crate::generate::StrategyGenerator;
use crate::intake::{IntakePatch, IntakeRecord, Stage, validate};
use crate::store::StrategyStore;
use crate::strategy::Strategy;
use crate::wizard::bridge::PersistenceBridge;
use crate::wizard::engine::WizardEngine;
use crate::wizard::orchestrator::{GenerationOrchestrator, GenerationStatus};

const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// How a `generate` call ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Succeeded,
    Failed,
    AlreadyInFlight,
    WrongStage,
}

/// Composition root the front-end talks to.
///
/// Everything takes `&self`; the engine sits behind a mutex so a UI can
/// hold the session in an `Arc` and call in from wherever. Collaborator
/// awaits never happen while that lock is held.
pub struct WizardSession {
    engine: Mutex<WizardEngine>,
    orchestrator: GenerationOrchestrator,
    bridge: PersistenceBridge,
    generator: Arc<dyn StrategyGenerator>,
    generation_timeout: Duration,
}

impl WizardSession {
    pub fn new(generator: Arc<dyn StrategyGenerator>, store: Arc<dyn StrategyStore>) -> Self {
        Self::with_timeout(generator, store, DEFAULT_GENERATION_TIMEOUT)
    }

    pub fn with_timeout(
        generator: Arc<dyn StrategyGenerator>,
        store: Arc<dyn StrategyStore>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            engine: Mutex::new(WizardEngine::new()),
            orchestrator: GenerationOrchestrator::new(),
            bridge: PersistenceBridge::new(store),
            generator,
            generation_timeout,
        }
    }

    // ─── Navigation and intake ───────────────────────────────────────────────

    pub fn stage(&self) -> Stage {
        self.lock_engine().stage()
    }

    pub fn record(&self) -> IntakeRecord {
        self.lock_engine().record().clone()
    }

    pub fn patch(&self, patch: IntakePatch) {
        self.lock_engine().patch(patch);
    }

    /// Advance one stage if the current one validates. Returns whether
    /// the stage actually moved, so a no-op at the ceiling is `false`.
    pub fn advance(&self) -> bool {
        let mut engine = self.lock_engine();
        if !validate(engine.stage(), engine.record()) {
            return false;
        }
        let before = engine.stage();
        engine.advance();
        engine.stage() != before
    }

    pub fn retreat(&self) {
        self.lock_engine().retreat();
    }

    pub fn jump_to(&self, target: Stage) -> bool {
        self.lock_engine().jump_to(target)
    }

    /// Back to a blank wizard: empty record, Business stage, no
    /// generation state, no save error.
    pub fn reset(&self) {
        self.lock_engine().reset();
        self.orchestrator.reset();
        self.bridge.clear();
    }

    // ─── Generation ──────────────────────────────────────────────────────────

    pub fn status(&self) -> GenerationStatus {
        self.orchestrator.status()
    }

    /// Current strategy if one exists, falling back to the last known
    /// good one during a regeneration or after a failure.
    pub fn strategy(&self) -> Option<Strategy> {
        self.orchestrator.strategy()
    }

    pub fn generation_error(&self) -> Option<String> {
        self.orchestrator.failure()
    }

    /// Run the generator against a snapshot of the record. Only legal on
    /// the Generating stage; at most one call is in flight at a time.
    /// Success moves the wizard to Preview, failure leaves it where it is.
    pub async fn generate(&self) -> GenerateOutcome {
        let record = {
            let engine = self.lock_engine();
            if engine.stage() != Stage::Generating {
                return GenerateOutcome::WrongStage;
            }
            engine.record().clone()
        };

        if !self.orchestrator.begin() {
            return GenerateOutcome::AlreadyInFlight;
        }

        tracing::info!(
            timeout_secs = self.generation_timeout.as_secs(),
            "strategy generation started"
        );
        let result = match tokio::time::timeout(
            self.generation_timeout,
            self.generator.generate_strategy(&record),
        )
        .await
        {
            Ok(Ok(strategy)) => Ok(strategy),
            Ok(Err(err)) => Err(err.to_string()),
            Err(_) => Err(GenerationError::Timeout {
                secs: self.generation_timeout.as_secs(),
            }
            .to_string()),
        };

        match result {
            Ok(strategy) => {
                self.orchestrator.resolve(Ok(strategy));
                self.lock_engine().set_stage(Stage::Preview);
                tracing::info!("strategy generation succeeded");
                GenerateOutcome::Succeeded
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "strategy generation failed");
                self.orchestrator.resolve(Err(reason));
                GenerateOutcome::Failed
            }
        }
    }

    /// Re-run generation from Preview (the stage drops back to Generating
    /// first) or retry from Generating after a failure. The previous
    /// strategy stays visible until a new one lands.
    pub async fn regenerate(&self) -> GenerateOutcome {
        {
            let mut engine = self.lock_engine();
            match engine.stage() {
                Stage::Preview => {
                    engine.jump_to(Stage::Generating);
                }
                Stage::Generating => {}
                _ => return GenerateOutcome::WrongStage,
            }
        }
        self.generate().await
    }

    // ─── Persistence ─────────────────────────────────────────────────────────

    /// Persist the visible strategy. Returns false, with the reason
    /// available from `save_error`, when there is nothing to save or the
    /// store rejects it. Stage and strategy state are left untouched.
    pub async fn save(&self) -> bool {
        let Some(strategy) = self.orchestrator.strategy() else {
            self.bridge.note_failure("no strategy to save yet");
            return false;
        };
        self.bridge.save(&strategy).await
    }

    pub fn save_error(&self) -> Option<String> {
        self.bridge.last_error()
    }

    fn lock_engine(&self) -> std::sync::MutexGuard<'_, WizardEngine> {
        self.engine
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
