use crate::error::GenerationError;
use crate::intake::IntakeRecord;
use crate::strategy::Strategy;
use async_trait::async_trait;

/// The generation collaborator: turns a completed intake into a strategy.
///
/// Implementations receive a read-only snapshot of the record and return a
/// new value; they never hold a live reference into session state.
#[async_trait]
pub trait StrategyGenerator: Send + Sync {
    async fn generate_strategy(
        &self,
        record: &IntakeRecord,
    ) -> Result<Strategy, GenerationError>;
}
