//! History middleware invoked by the host after every transition.

use super::action::{ActivateRestorePoint, ControlPayload, HistoryAction};
use super::control::{ControlKind, Namespace};
use super::error::DispatchError;
use crate::core::{Capacity, HistoryLog, Snapshot};
use tracing::warn;

/// Transition adapter owning one history log.
///
/// The host calls [`HistoryMiddleware::after`] (or [`HistoryMiddleware::apply`])
/// once per completed transition with the state its own logic produced.
/// A returned `Some(state)` is the state the host must adopt; `None` means
/// the host keeps what it computed.
///
/// One middleware serves one host. Hosts that dispatch from several
/// threads must serialize their calls; nothing here locks.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Capacity;
/// use hindsight::middleware::{ControlPayload, HistoryMiddleware, STEP_BACK};
///
/// let mut history = HistoryMiddleware::new(Capacity::Unbounded);
///
/// history.after("ADD_TODO", ControlPayload::Empty, &vec![301]);
/// history.after("ADD_TODO", ControlPayload::Empty, &vec![301, 302]);
///
/// let state = history.after(STEP_BACK, ControlPayload::Empty, &vec![301, 302]);
/// assert_eq!(state, Some(vec![301]));
/// ```
#[derive(Debug)]
pub struct HistoryMiddleware<S> {
    log: HistoryLog<S>,
    namespace: Namespace,
}

impl<S: Snapshot> Default for HistoryMiddleware<S> {
    fn default() -> Self {
        Self::new(Capacity::Unbounded)
    }
}

impl<S: Snapshot> HistoryMiddleware<S> {
    /// Create a middleware using the default control namespace.
    pub fn new(capacity: Capacity) -> Self {
        Self::with_namespace(capacity, Namespace::default())
    }

    pub(crate) fn with_namespace(capacity: Capacity, namespace: Namespace) -> Self {
        Self {
            log: HistoryLog::new(capacity),
            namespace,
        }
    }

    /// Read-only access to the underlying log.
    pub fn log(&self) -> &HistoryLog<S> {
        &self.log
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Identifier the host should dispatch for a control operation.
    pub fn identifier(&self, kind: ControlKind) -> String {
        self.namespace.identifier(kind)
    }

    /// Route an action identifier and payload after a host transition.
    ///
    /// Payload mismatches on control identifiers are logged and absorbed:
    /// the host keeps its state and nothing is recorded.
    pub fn after(&mut self, action: &str, payload: ControlPayload<S>, state: &S) -> Option<S> {
        self.try_after(action, payload, state)
            .unwrap_or_else(|error| {
                warn!(action, %error, "Ignoring malformed history control action");
                None
            })
    }

    /// Like [`HistoryMiddleware::after`], but returns payload mismatches.
    pub fn try_after(
        &mut self,
        action: &str,
        payload: ControlPayload<S>,
        state: &S,
    ) -> Result<Option<S>, DispatchError> {
        let kind = self.namespace.classify(action);
        let action = HistoryAction::from_parts(kind, payload)?;
        Ok(self.apply(action, state))
    }

    /// Execute a typed history action.
    ///
    /// `state` is the state the host computed for this transition; it is
    /// only read by [`HistoryAction::Record`].
    pub fn apply(&mut self, action: HistoryAction<S>, state: &S) -> Option<S> {
        match action {
            HistoryAction::StepBack => self.log.step_back().cloned(),
            HistoryAction::StepForward => self.log.step_forward().cloned(),
            HistoryAction::SetRestorePoint { name } => {
                self.log.set_bookmark(name);
                None
            }
            HistoryAction::ActivateRestorePoint(request) => self.activate(request),
            HistoryAction::QueryHistory(query) => {
                query.deliver(self.log.snapshot_history());
                None
            }
            HistoryAction::Record => Some(self.log.record(state.clone())),
        }
    }

    fn activate(&mut self, request: ActivateRestorePoint) -> Option<S> {
        let ActivateRestorePoint {
            name,
            on_success,
            on_failure,
        } = request;

        match self.log.activate(&name) {
            Ok(snapshot) => {
                let snapshot = snapshot.clone();
                if let Some(callback) = on_success {
                    callback();
                }
                Some(snapshot)
            }
            Err(error) => {
                if let Some(callback) = on_failure {
                    callback(&error);
                }
                None
            }
        }
    }
}
