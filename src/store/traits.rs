use crate::error::PersistenceError;
use crate::strategy::Strategy;
use std::future::Future;
use std::pin::Pin;

/// Async strategy persistence contract.
///
/// Implementations receive a read-only strategy and must not assume
/// anything about wizard state; saving is append-only.
pub trait StrategyStore: Send + Sync {
    fn save_strategy<'a>(
        &'a self,
        strategy: &'a Strategy,
    ) -> Pin<Box<dyn Future<Output = Result<(), PersistenceError>> + Send + 'a>>;

    fn load_latest<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Strategy>, PersistenceError>> + Send + 'a>>;
}
