//! Snapshot marker trait for recorded host state.
//!
//! The history engine never looks inside a snapshot. It only needs to
//! clone it back out when the host travels in time.

use std::fmt::Debug;

/// Trait for values that can be kept in a history log.
///
/// Implemented automatically for every `Clone + Debug + Send + Sync` type,
/// so host state structs need no extra code.
///
/// # Required Traits
///
/// - `Clone`: snapshots are handed back to the host on navigation
/// - `Debug`: snapshots show up in diagnostics
/// - `Send` + `Sync`: a log may be moved to whichever thread owns the host
///
/// # Example
///
/// ```rust
/// use hindsight::core::Snapshot;
///
/// #[derive(Clone, Debug)]
/// struct TodoState {
///     todos: Vec<String>,
/// }
///
/// fn accepts_snapshot<S: Snapshot>(_: &S) {}
///
/// accepts_snapshot(&TodoState { todos: vec![] });
/// ```
pub trait Snapshot: Clone + Debug + Send + Sync {}

impl<T> Snapshot for T where T: Clone + Debug + Send + Sync {}
