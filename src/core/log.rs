//! Capacity-bounded history log with a navigation cursor.
//!
//! The log records one entry per ordinary host transition and keeps a
//! cursor on the entry whose snapshot the host should currently be using.
//! Stepping moves the cursor; recording while the cursor sits behind the
//! tail drops the abandoned future first.

use super::entry::HistoryEntry;
use super::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

/// Maximum number of entries a log retains.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Capacity;
///
/// assert_eq!(Capacity::from(-1), Capacity::Unbounded);
/// assert_eq!(Capacity::from(2), Capacity::Bounded(2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// Keep every entry
    #[default]
    Unbounded,
    /// Keep at most this many entries, evicting the oldest
    Bounded(usize),
}

/// Negative sizes mean unbounded, matching the `-1` configuration default.
impl From<i64> for Capacity {
    fn from(size: i64) -> Self {
        usize::try_from(size).map_or(Self::Unbounded, Self::Bounded)
    }
}

/// Ordered record of snapshots plus the cursor used for undo/redo.
///
/// Invariants:
/// - `cursor` is `None` exactly when the log is empty
/// - `cursor`, when set, is always a valid index
/// - the log never holds more entries than its `Capacity` allows
///
/// # Example
///
/// ```rust
/// use hindsight::core::{Capacity, HistoryLog};
///
/// let mut log = HistoryLog::new(Capacity::Unbounded);
/// log.record("a");
/// log.record("b");
///
/// assert_eq!(log.step_back(), Some(&"a"));
/// assert_eq!(log.step_back(), None); // already at the earliest entry
/// assert_eq!(log.step_forward(), Some(&"b"));
/// ```
#[derive(Clone, Debug)]
pub struct HistoryLog<S> {
    pub(super) entries: VecDeque<HistoryEntry<S>>,
    pub(super) cursor: Option<usize>,
    capacity: Capacity,
    last_recorded_at: Option<DateTime<Utc>>,
}

impl<S: Snapshot> Default for HistoryLog<S> {
    fn default() -> Self {
        Self::new(Capacity::Unbounded)
    }
}

impl<S: Snapshot> HistoryLog<S> {
    /// Create an empty log.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity,
            last_recorded_at: None,
        }
    }

    /// Move the cursor one entry back and return that snapshot.
    ///
    /// Returns `None` without touching the cursor when there is nothing
    /// earlier, including on an empty log.
    pub fn step_back(&mut self) -> Option<&S> {
        let previous = self.cursor?.checked_sub(1)?;
        self.cursor = Some(previous);
        debug!(cursor = previous, "Stepped back in history");
        self.entries.get(previous).map(|entry| &entry.snapshot)
    }

    /// Move the cursor one entry forward and return that snapshot.
    ///
    /// Returns `None` without touching the cursor when the cursor already
    /// addresses the latest entry.
    pub fn step_forward(&mut self) -> Option<&S> {
        let next = self.cursor? + 1;
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        debug!(cursor = next, "Stepped forward in history");
        self.entries.get(next).map(|entry| &entry.snapshot)
    }

    /// Record a completed transition, stamped with the current time.
    ///
    /// See [`HistoryLog::record_at`].
    pub fn record(&mut self, snapshot: S) -> S {
        self.record_at(snapshot, Utc::now())
    }

    /// Record a completed transition with an explicit timestamp.
    ///
    /// 1. If the cursor is behind the tail, every later entry is discarded,
    ///    together with any restore point tagging them.
    /// 2. The snapshot is appended and the cursor moves to it.
    /// 3. If the log is now over capacity, the oldest entries are evicted
    ///    and the cursor is clamped back into range.
    ///
    /// Returns the recorded snapshot. A timestamp earlier than the previous
    /// record yields an `elapsed_ms` of zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::{Capacity, HistoryLog};
    /// use chrono::{Duration, Utc};
    ///
    /// let mut log = HistoryLog::new(Capacity::Unbounded);
    /// let start = Utc::now();
    /// log.record_at(1, start);
    /// log.record_at(2, start + Duration::milliseconds(250));
    ///
    /// assert_eq!(log.entries()[0].elapsed_ms, 0);
    /// assert_eq!(log.entries()[1].elapsed_ms, 250);
    /// ```
    pub fn record_at(&mut self, snapshot: S, now: DateTime<Utc>) -> S {
        self.truncate_future();

        let elapsed_ms = self.last_recorded_at.map_or(0, |last| {
            u64::try_from(now.signed_duration_since(last).num_milliseconds()).unwrap_or(0)
        });
        let recorded = snapshot.clone();
        self.entries
            .push_back(HistoryEntry::new(now, elapsed_ms, snapshot));
        self.cursor = Some(self.entries.len() - 1);
        self.last_recorded_at = Some(now);
        debug!(len = self.entries.len(), elapsed_ms, "Recorded history entry");

        self.evict_overflow();
        recorded
    }

    /// Tag the entry under the cursor with a restore point name.
    ///
    /// Any previous tag on that entry is replaced. Returns `false` and does
    /// nothing when the log is empty.
    pub fn set_bookmark(&mut self, name: impl Into<String>) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let Some(entry) = self.entries.get_mut(cursor) else {
            return false;
        };
        let name = name.into();
        debug!(name = %name, cursor, "Set restore point");
        entry.bookmark = Some(name);
        true
    }

    /// Copy of every retained entry, oldest first.
    pub fn snapshot_history(&self) -> Vec<HistoryEntry<S>> {
        self.entries.iter().cloned().collect()
    }

    /// Borrowing view of the retained entries, oldest first.
    pub fn entries(&self) -> &VecDeque<HistoryEntry<S>> {
        &self.entries
    }

    /// Snapshot the host should currently be using.
    pub fn current(&self) -> Option<&S> {
        self.cursor
            .and_then(|c| self.entries.get(c))
            .map(|entry| &entry.snapshot)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Check if [`HistoryLog::step_back`] would move the cursor.
    pub fn can_step_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Check if [`HistoryLog::step_forward`] would move the cursor.
    pub fn can_step_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Time spanned by the retained entries.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.captured_at
            .signed_duration_since(first.captured_at)
            .to_std()
            .ok()
    }

    fn truncate_future(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let keep = cursor + 1;
        if keep < self.entries.len() {
            let discarded = self.entries.len() - keep;
            self.entries.truncate(keep);
            debug!(discarded, cursor, "Truncated abandoned future");
        }
    }

    fn evict_overflow(&mut self) {
        let Capacity::Bounded(limit) = self.capacity else {
            return;
        };
        if self.entries.len() <= limit {
            return;
        }
        let evicted = self.entries.len() - limit;
        self.entries.drain(..evicted);

        // The cursor must never point into the evicted range or past the tail.
        self.cursor = match (self.cursor, self.entries.len().checked_sub(1)) {
            (Some(cursor), Some(last)) => Some(cursor.saturating_sub(evicted).min(last)),
            _ => None,
        };
        debug!(evicted, limit, cursor = ?self.cursor, "Evicted oldest history entries");
    }
}
