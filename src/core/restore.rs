//! Restore point resolution over the history log.
//!
//! Restore points are not stored separately: a name resolves to the
//! earliest retained entry whose bookmark matches it. Losing the entry
//! to truncation or eviction loses the name with it.

use super::error::RestorePointError;
use super::log::HistoryLog;
use super::snapshot::Snapshot;
use tracing::{debug, warn};

/// A resolvable restore point name and the entry index it resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestorePoint<'a> {
    pub name: &'a str,
    pub index: usize,
}

impl<S: Snapshot> HistoryLog<S> {
    /// Index of the earliest entry tagged with `name`.
    pub fn find_restore_point(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_tagged(name))
    }

    /// Move the cursor to the entry tagged with `name` and return its snapshot.
    ///
    /// On failure the cursor is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::core::{Capacity, HistoryLog, RestorePointError};
    ///
    /// let mut log = HistoryLog::new(Capacity::Unbounded);
    /// log.record("basics");
    /// log.set_bookmark("basics");
    /// log.record("evening");
    ///
    /// assert_eq!(log.activate("basics"), Ok(&"basics"));
    /// assert_eq!(
    ///     log.activate("night"),
    ///     Err(RestorePointError::NotFound { name: "night".to_string() })
    /// );
    /// assert_eq!(log.cursor(), Some(0));
    /// ```
    pub fn activate(&mut self, name: &str) -> Result<&S, RestorePointError> {
        let Some(index) = self.find_restore_point(name) else {
            let error = RestorePointError::NotFound {
                name: name.to_string(),
            };
            warn!(name, "Cannot activate restore point: {error}");
            return Err(error);
        };
        self.cursor = Some(index);
        debug!(name, cursor = index, "Activated restore point");
        Ok(&self.entries[index].snapshot)
    }

    /// Every resolvable restore point, in log order.
    ///
    /// A name tagged on several entries is listed once, at its earliest
    /// entry, since that is the only one activation can reach.
    pub fn restore_points(&self) -> Vec<RestorePoint<'_>> {
        let mut points: Vec<RestorePoint<'_>> = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(name) = entry.bookmark.as_deref() else {
                continue;
            };
            if points.iter().all(|p| p.name != name) {
                points.push(RestorePoint { name, index });
            }
        }
        points
    }
}
