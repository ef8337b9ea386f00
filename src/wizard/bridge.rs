use std::sync::{Arc, Mutex};

use crate::store::StrategyStore;
use crate::strategy::Strategy;

/// Thin wrapper over the persistence collaborator.
///
/// Holds the most recent save error for the front-end. Saving never
/// touches wizard stage or strategy state; a failure only parks its
/// reason string here.
pub struct PersistenceBridge {
    store: Arc<dyn StrategyStore>,
    last_error: Mutex<Option<String>>,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn StrategyStore>) -> Self {
        Self {
            store,
            last_error: Mutex::new(None),
        }
    }

    /// Persist the strategy, returning whether it worked. A success
    /// clears any error left by an earlier attempt.
    pub async fn save(&self, strategy: &Strategy) -> bool {
        match self.store.save_strategy(strategy).await {
            Ok(()) => {
                *self.lock_error() = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "strategy save failed");
                *self.lock_error() = Some(err.to_string());
                false
            }
        }
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock_error().clone()
    }

    pub fn clear(&self) {
        *self.lock_error() = None;
    }

    /// Record a failure that never reached the store, such as saving
    /// before any strategy exists.
    pub(crate) fn note_failure(&self, reason: &str) {
        *self.lock_error() = Some(reason.to_string());
    }

    fn lock_error(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.last_error
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use crate::strategy::model::sample_strategy;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<Strategy>>,
        fail: AtomicBool,
    }

    impl StrategyStore for RecordingStore {
        fn save_strategy<'a>(
            &'a self,
            strategy: &'a Strategy,
        ) -> Pin<Box<dyn Future<Output = Result<(), PersistenceError>> + Send + 'a>> {
            Box::pin(async move {
                if self.fail.load(Ordering::SeqCst) {
                    return Err(PersistenceError::Database(sqlx::Error::RowNotFound));
                }
                self.saved.lock().unwrap().push(strategy.clone());
                Ok(())
            })
        }

        fn load_latest<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = Result<Option<Strategy>, PersistenceError>> + Send + 'a>>
        {
            Box::pin(async move { Ok(self.saved.lock().unwrap().last().cloned()) })
        }
    }

    #[tokio::test]
    async fn save_forwards_to_the_store() {
        let store = Arc::new(RecordingStore::default());
        let bridge = PersistenceBridge::new(store.clone());

        assert!(bridge.save(&sample_strategy()).await);
        assert!(bridge.last_error().is_none());
        assert_eq!(store.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_save_parks_the_reason() {
        let store = Arc::new(RecordingStore::default());
        store.fail.store(true, Ordering::SeqCst);
        let bridge = PersistenceBridge::new(store);

        assert!(!bridge.save(&sample_strategy()).await);
        let reason = bridge.last_error().unwrap();
        assert!(reason.starts_with("database:"), "got: {reason}");
    }

    #[tokio::test]
    async fn successful_save_clears_an_earlier_error() {
        let store = Arc::new(RecordingStore::default());
        store.fail.store(true, Ordering::SeqCst);
        let bridge = PersistenceBridge::new(store.clone());

        assert!(!bridge.save(&sample_strategy()).await);
        assert!(bridge.last_error().is_some());

        store.fail.store(false, Ordering::SeqCst);
        assert!(bridge.save(&sample_strategy()).await);
        assert!(bridge.last_error().is_none());
    }

    #[tokio::test]
    async fn clear_drops_a_noted_failure() {
        let store = Arc::new(RecordingStore::default());
        let bridge = PersistenceBridge::new(store);

        bridge.note_failure("no strategy to save yet");
        assert_eq!(
            bridge.last_error().as_deref(),
            Some("no strategy to save yet")
        );

        bridge.clear();
        assert!(bridge.last_error().is_none());
    }
}
