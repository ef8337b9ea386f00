pub mod bridge;
pub mod engine;
pub mod orchestrator;
pub mod session;

pub use bridge::PersistenceBridge;
pub use engine::WizardEngine;
pub use orchestrator::{GenerationOrchestrator, GenerationStatus};
pub use session::{GenerateOutcome, WizardSession};
