//! Configuration and builder API for history middleware.
//!
//! Middleware can be built fluently with [`HistoryBuilder`] or from a
//! serialized [`HistoryConfig`].

pub mod config;
pub mod error;
pub mod middleware;

pub use config::HistoryConfig;
pub use error::BuildError;
pub use middleware::HistoryBuilder;
