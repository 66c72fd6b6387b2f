//! Hindsight: undo/redo and named restore points for state stores
//!
//! Hindsight sits behind a host store that produces a new immutable state
//! after every transition. It records those states, lets the host travel
//! backward and forward through them, and lets callers tag points with a
//! name to jump back to later.
//!
//! # Core Concepts
//!
//! - **History Log**: bounded, ordered record of snapshots with a cursor
//! - **Restore Points**: names tagged on entries, resolved on demand
//! - **Middleware**: routes each host transition to the log and tells the
//!   host which state to adopt
//!
//! # Example
//!
//! ```rust
//! use hindsight::builder::HistoryBuilder;
//! use hindsight::middleware::{ControlPayload, SET_RESTORE_POINT, ACTIVATE_RESTORE_POINT};
//!
//! let mut history = HistoryBuilder::new().capacity(50).build::<Vec<u32>>().unwrap();
//!
//! history.after("ADD_TODO", ControlPayload::Empty, &vec![301]);
//! history.after(SET_RESTORE_POINT, ControlPayload::name("basics"), &vec![301]);
//! history.after("ADD_TODO", ControlPayload::Empty, &vec![301, 302]);
//!
//! let restored = history.after(
//!     ACTIVATE_RESTORE_POINT,
//!     ControlPayload::name("basics"),
//!     &vec![301, 302],
//! );
//! assert_eq!(restored, Some(vec![301]));
//! ```

pub mod builder;
pub mod core;
pub mod middleware;

// Re-export commonly used types
pub use crate::builder::{HistoryBuilder, HistoryConfig};
pub use crate::core::{Capacity, HistoryEntry, HistoryLog, Snapshot};
pub use crate::middleware::{ControlPayload, HistoryAction, HistoryMiddleware};
