//! Error types for mb-core

use thiserror::Error;

/// Core error type for modelbridge
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Project directory not found
    #[error("[E001] Project directory not found: {path}")]
    ProjectNotFound { path: String },

    /// E002: Project configuration file not found
    #[error("[E002] Project config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E003: Failed to parse the project configuration file
    #[error("[E003] Failed to parse project config: {message}")]
    ConfigParseError { message: String },

    /// E004: Invalid configuration value
    #[error("[E004] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E005: Model not found
    #[error("[E005] Model not found: {name}")]
    ModelNotFound { name: String },

    /// E006: Duplicate model name
    #[error("[E006] Duplicate model name: {name}")]
    DuplicateModel { name: String },

    /// E007: Circular dependency detected among internal models
    #[error("[E007] Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// E008: A name that must be non-empty was empty
    #[error("[E008] Empty name: {context}")]
    EmptyName { context: String },

    /// E009: Failed to parse a model definition file
    #[error("[E009] Failed to parse model file {path}: {details}")]
    ModelParseError { path: String, details: String },

    /// SRC001: Failed to parse a source definition file
    #[error("[SRC001] Failed to parse source file {path}: {details}")]
    SourceParseError { path: String, details: String },

    /// SRC002: Source has no tables defined
    #[error("[SRC002] Source '{name}' has no tables defined in {path}")]
    SourceEmptyTables { name: String, path: String },

    /// SRC003: Duplicate source name
    #[error("[SRC003] Duplicate source name: {name}")]
    SourceDuplicateName { name: String },

    /// SRC004: Duplicate table within a source
    #[error("[SRC004] Duplicate table '{table}' in source '{source_name}'")]
    SourceDuplicateTable { table: String, source_name: String },

    /// E010: IO error
    #[error("[E010] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E011: IO error with file path context
    #[error("[E011] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E012: YAML parse error
    #[error("[E012] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
