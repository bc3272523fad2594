//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Unmapped schema kinds are deliberately absent from this enum: the primitive
//! table falls back to the kind's own name instead of failing.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// An operation id collides with a reserved word of the target language.
    ///
    /// Fatal for the operation: the schema must be fixed upstream.
    #[from(ignore)]
    #[display("Naming Conflict: {name} (reserved word) cannot be used as method name")]
    NamingConflict {
        /// The raw operation id as it appeared in the schema.
        name: String,
    },

    /// A textual type expression (e.g. `array<model:Tag>`) could not be parsed.
    #[from(ignore)]
    #[display("Invalid Type Expression: {_0}")]
    InvalidTypeExpression(String),

    /// An OpenAPI schema fragment has no property classification.
    #[from(ignore)]
    #[display("Unsupported Schema: {_0}")]
    UnsupportedSchema(String),

    /// Invalid or unreadable generator options.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML (de)serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
