use thiserror::Error;

// ─── Collaborator error seams ────────────────────────────────────────────────

/// Failures crossing the generation collaborator boundary.
///
/// The wizard layer folds these into a user-facing reason string via
/// `Display`; no variant is treated as fatal.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("generator returned an empty response")]
    EmptyResponse,

    #[error("could not parse strategy: {0}")]
    Malformed(String),

    #[error("API key not set. Set BRANDLOOM_API_KEY or edit config.toml.")]
    MissingApiKey,
}

/// Failures crossing the persistence collaborator boundary.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}
