//! Transition adapter between a host store and the history log.
//!
//! This module is the shell around [`crate::core`]:
//! - **Control identifiers**: namespaced so they never collide with host actions
//! - **Actions**: the closed set of control operations, plus ordinary recording
//! - **Middleware**: routes each host transition to the log and tells the
//!   host whether to adopt a different state
//!
//! Every callback runs synchronously, exactly once, before the call returns.

mod action;
mod adapter;
mod control;
mod error;

pub use action::{
    ActivateRestorePoint, ControlPayload, Deliver, HistoryAction, OnFailure, OnSuccess,
    QueryHistory,
};
pub use adapter::HistoryMiddleware;
pub use control::{
    ControlKind, Namespace, ACTIVATE_RESTORE_POINT, DEFAULT_NAMESPACE, QUERY_HISTORY,
    SET_RESTORE_POINT, STEP_BACK, STEP_FORWARD,
};
pub use error::DispatchError;
