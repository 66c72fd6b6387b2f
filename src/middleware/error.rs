//! Dispatch error types.

use super::control::ControlKind;
use thiserror::Error;

/// Errors that can occur when routing an identifier and payload
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// A control identifier arrived with a payload for a different operation
    #[error("control action {kind} expects {expected} payload, got {found}")]
    PayloadMismatch {
        kind: ControlKind,
        expected: &'static str,
        found: &'static str,
    },
}
