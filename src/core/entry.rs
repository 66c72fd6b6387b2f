//! A single recorded point in the history log.

use super::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one completed host transition.
///
/// Entries are created once when a transition is recorded. Afterwards
/// only the `bookmark` tag may change; the snapshot itself never does.
///
/// # Example
///
/// ```rust
/// use hindsight::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry::new(Utc::now(), 0, vec![301]);
/// assert!(entry.bookmark.is_none());
/// assert_eq!(entry.snapshot, vec![301]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<S> {
    /// When the entry was recorded
    pub captured_at: DateTime<Utc>,
    /// Milliseconds since the previous entry was recorded (0 for the first)
    pub elapsed_ms: u64,
    /// The host state at this point
    pub snapshot: S,
    /// Restore point name tagging this entry, if any
    pub bookmark: Option<String>,
}

impl<S: Snapshot> HistoryEntry<S> {
    /// Create an untagged entry.
    pub fn new(captured_at: DateTime<Utc>, elapsed_ms: u64, snapshot: S) -> Self {
        Self {
            captured_at,
            elapsed_ms,
            snapshot,
            bookmark: None,
        }
    }

    /// Check whether this entry carries the given restore point name.
    pub fn is_tagged(&self, name: &str) -> bool {
        self.bookmark.as_deref() == Some(name)
    }
}
