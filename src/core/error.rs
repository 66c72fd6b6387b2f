//! Restore point error types.

use thiserror::Error;

/// Errors that can occur when activating a restore point
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestorePointError {
    /// No retained entry carries the requested name, either because it was
    /// never set or because its entry was truncated or evicted
    #[error("restore point [{name}] doesn't exist")]
    NotFound { name: String },
}
