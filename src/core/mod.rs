//! Core history types and logic.
//!
//! This module contains the host-independent part of the engine:
//! - Snapshot marker trait for recorded state
//! - History entries and the capacity-bounded log with its cursor
//! - Restore point resolution over the log
//!
//! Nothing here knows about action identifiers or payloads; that routing
//! lives in [`crate::middleware`].

mod entry;
mod error;
mod log;
mod restore;
mod snapshot;

pub use entry::HistoryEntry;
pub use error::RestorePointError;
pub use log::{Capacity, HistoryLog};
pub use restore::RestorePoint;
pub use snapshot::Snapshot;
