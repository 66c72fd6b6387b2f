//! Control operations as a closed, typed set.
//!
//! [`HistoryAction`] is what the middleware actually executes. Hosts that
//! route by string identifier pass a [`ControlPayload`] instead, which is
//! matched against the identifier before anything runs.

use super::control::ControlKind;
use super::error::DispatchError;
use crate::core::{HistoryEntry, RestorePointError};
use std::fmt;

/// Called once when a restore point is activated.
pub type OnSuccess = Box<dyn FnOnce()>;

/// Called once with the reason a restore point could not be activated.
pub type OnFailure = Box<dyn FnOnce(&RestorePointError)>;

/// Receives the history copy for a query, exactly once.
pub type Deliver<S> = Box<dyn FnOnce(Vec<HistoryEntry<S>>)>;

/// Request to jump to a named restore point.
///
/// # Example
///
/// ```rust
/// use hindsight::middleware::ActivateRestorePoint;
///
/// let request = ActivateRestorePoint::new("basics")
///     .on_success(|| println!("restored"))
///     .on_failure(|error| eprintln!("{error}"));
/// assert_eq!(request.name, "basics");
/// ```
pub struct ActivateRestorePoint {
    pub name: String,
    pub on_success: Option<OnSuccess>,
    pub on_failure: Option<OnFailure>,
}

impl ActivateRestorePoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn on_failure<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&RestorePointError) + 'static,
    {
        self.on_failure = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ActivateRestorePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivateRestorePoint")
            .field("name", &self.name)
            .field("on_success", &self.on_success.is_some())
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

/// Request for a copy of the full history.
pub struct QueryHistory<S> {
    deliver: Deliver<S>,
}

impl<S> QueryHistory<S> {
    pub fn new<F>(deliver: F) -> Self
    where
        F: FnOnce(Vec<HistoryEntry<S>>) + 'static,
    {
        Self {
            deliver: Box::new(deliver),
        }
    }

    /// Hand the entries to the caller. Consumes the request.
    pub(crate) fn deliver(self, entries: Vec<HistoryEntry<S>>) {
        (self.deliver)(entries)
    }
}

impl<S> fmt::Debug for QueryHistory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryHistory").finish_non_exhaustive()
    }
}

/// Everything the middleware can be asked to do after a host transition.
#[derive(Debug)]
pub enum HistoryAction<S> {
    /// Move one entry back
    StepBack,
    /// Move one entry forward
    StepForward,
    /// Tag the current entry
    SetRestorePoint { name: String },
    /// Jump to a tagged entry
    ActivateRestorePoint(ActivateRestorePoint),
    /// Deliver a copy of the history
    QueryHistory(QueryHistory<S>),
    /// Any ordinary host transition: record its state
    Record,
}

impl<S> HistoryAction<S> {
    /// Build the action for a classified identifier and its payload.
    ///
    /// `kind` is `None` for ordinary host actions, whose payload is ignored.
    /// Stepping ignores the payload as well. The other control operations
    /// require the matching payload; a name alone is enough to activate.
    pub fn from_parts(
        kind: Option<ControlKind>,
        payload: ControlPayload<S>,
    ) -> Result<Self, DispatchError> {
        let Some(kind) = kind else {
            return Ok(Self::Record);
        };
        match (kind, payload) {
            (ControlKind::StepBack, _) => Ok(Self::StepBack),
            (ControlKind::StepForward, _) => Ok(Self::StepForward),
            (ControlKind::SetRestorePoint, ControlPayload::Name(name)) => {
                Ok(Self::SetRestorePoint { name })
            }
            (ControlKind::ActivateRestorePoint, ControlPayload::Name(name)) => {
                Ok(Self::ActivateRestorePoint(ActivateRestorePoint::new(name)))
            }
            (ControlKind::ActivateRestorePoint, ControlPayload::Activate(request)) => {
                Ok(Self::ActivateRestorePoint(request))
            }
            (ControlKind::QueryHistory, ControlPayload::Query(query)) => {
                Ok(Self::QueryHistory(query))
            }
            (kind, payload) => Err(DispatchError::PayloadMismatch {
                kind,
                expected: expected_payload(kind),
                found: payload.kind_name(),
            }),
        }
    }
}

fn expected_payload(kind: ControlKind) -> &'static str {
    match kind {
        ControlKind::StepBack | ControlKind::StepForward => "any",
        ControlKind::SetRestorePoint => "a name",
        ControlKind::ActivateRestorePoint => "a name or activation request",
        ControlKind::QueryHistory => "a query",
    }
}

/// Untyped payload accompanying an action identifier.
///
/// Ordinary host actions pass [`ControlPayload::Empty`]; their real payload
/// is the host's business.
#[derive(Debug)]
pub enum ControlPayload<S> {
    Empty,
    Name(String),
    Activate(ActivateRestorePoint),
    Query(QueryHistory<S>),
}

impl<S> Default for ControlPayload<S> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<S> ControlPayload<S> {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "an empty",
            Self::Name(_) => "a name",
            Self::Activate(_) => "an activation request",
            Self::Query(_) => "a query",
        }
    }
}
