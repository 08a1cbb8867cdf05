//! Error types for mb-bridge

use mb_engine::EngineError;
use thiserror::Error;

/// Bridge error type
///
/// Dependency-validation findings and per-model materialization failures are
/// data (see [`crate::validate::ValidationError`] and
/// [`mb_engine::RunReport`]), not errors; only configuration and whole-pass
/// failures surface here.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// B001: The resource configuration is invalid (fail-fast at construction)
    #[error("[B001] Invalid resource configuration: {message}")]
    Config { message: String },

    /// B002: Loading/compiling the project failed (retryable on the next call)
    #[error("[B002] {0}")]
    Load(#[from] EngineError),

    /// B003: A materialization selection named a model the project does not define
    #[error("[B003] Unknown model in selection: {name}")]
    UnknownModel { name: String },
}

/// Result type alias for BridgeError
pub type BridgeResult<T> = Result<T, BridgeError>;
