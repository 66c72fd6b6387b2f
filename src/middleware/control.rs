//! Namespaced control identifiers.
//!
//! Control actions share the host's action identifier space, so they are
//! prefixed with a namespace no host action is expected to use.

use std::fmt;

/// Namespace used unless the builder is given another one.
pub const DEFAULT_NAMESPACE: &str = "hindsight/history";

/// Separator between the namespace and the control suffix.
const SEPARATOR: &str = "--";

pub const STEP_BACK: &str = "hindsight/history--STEP_BACK";
pub const STEP_FORWARD: &str = "hindsight/history--STEP_FORWARD";
pub const SET_RESTORE_POINT: &str = "hindsight/history--SET_RESTORE_POINT";
pub const ACTIVATE_RESTORE_POINT: &str = "hindsight/history--ACTIVATE_RESTORE_POINT";
pub const QUERY_HISTORY: &str = "hindsight/history--QUERY_HISTORY";

/// The closed set of control operations the middleware understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    StepBack,
    StepForward,
    SetRestorePoint,
    ActivateRestorePoint,
    QueryHistory,
}

impl ControlKind {
    pub const ALL: [ControlKind; 5] = [
        Self::StepBack,
        Self::StepForward,
        Self::SetRestorePoint,
        Self::ActivateRestorePoint,
        Self::QueryHistory,
    ];

    /// Identifier suffix appended after the namespace.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::StepBack => "STEP_BACK",
            Self::StepForward => "STEP_FORWARD",
            Self::SetRestorePoint => "SET_RESTORE_POINT",
            Self::ActivateRestorePoint => "ACTIVATE_RESTORE_POINT",
            Self::QueryHistory => "QUERY_HISTORY",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Prefix that separates control identifiers from host action identifiers.
///
/// # Example
///
/// ```rust
/// use hindsight::middleware::{ControlKind, Namespace, STEP_BACK};
///
/// let namespace = Namespace::default();
/// assert_eq!(namespace.identifier(ControlKind::StepBack), STEP_BACK);
/// assert_eq!(namespace.classify(STEP_BACK), Some(ControlKind::StepBack));
/// assert_eq!(namespace.classify("ADD_TODO"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace(String);

impl Namespace {
    /// Wrap a namespace prefix. Validation happens in the builder.
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full identifier for a control operation in this namespace.
    pub fn identifier(&self, kind: ControlKind) -> String {
        format!("{}{SEPARATOR}{}", self.0, kind.suffix())
    }

    /// Map an action identifier to its control operation.
    ///
    /// Returns `None` for anything that is not one of this namespace's
    /// control identifiers, which the middleware treats as an ordinary
    /// host transition.
    pub fn classify(&self, action: &str) -> Option<ControlKind> {
        let suffix = action.strip_prefix(self.0.as_str())?.strip_prefix(SEPARATOR)?;
        ControlKind::ALL
            .into_iter()
            .find(|kind| kind.suffix() == suffix)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
