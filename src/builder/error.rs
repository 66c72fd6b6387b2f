//! Build errors for history middleware configuration.

use thiserror::Error;

/// Errors that can occur when configuring a history middleware.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Control namespace is empty. Call .namespace(prefix) with a non-empty prefix")]
    EmptyNamespace,

    #[error("Control namespace '{0}' contains whitespace")]
    InvalidNamespace(String),

    #[error("Invalid history configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
