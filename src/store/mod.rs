pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteStrategyStore;
pub use traits::StrategyStore;
