//! Error types for mb-engine

use mb_core::CoreError;
use thiserror::Error;

/// Transformation-engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Loading or compiling the project failed (G001)
    #[error("[G001] Project load failed: {0}")]
    Load(#[from] CoreError),

    /// Executing one model failed (G002)
    #[error("[G002] Execution failed for model '{model}': {message}")]
    Execution { model: String, message: String },

    /// The requested gateway is not usable by this engine (G003)
    #[error("[G003] Gateway '{gateway}' not supported: {message}")]
    Gateway { gateway: String, message: String },
}

/// Result type alias for EngineError
pub type EngineResult<T> = Result<T, EngineError>;
