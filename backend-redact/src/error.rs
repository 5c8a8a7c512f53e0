//! Errors raised while loading a backend configuration.
//!
//! Rendering itself has no error path. These cover parsing and structural
//! checks only, and none of them carries a field value.

use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    ///
    /// Only the position and category are kept: `serde_json` messages quote
    /// the offending value, which may be a credential.
    #[error("invalid backend configuration at line {line}, column {column} ({category:?})")]
    Json {
        line: usize,
        column: usize,
        category: Category,
    },

    #[error("unsupported storage driver `{0}`")]
    UnsupportedDriver(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            line: err.line(),
            column: err.column(),
            category: err.classify(),
        }
    }
}
