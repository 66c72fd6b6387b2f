//! Builder for constructing history middleware.

use crate::builder::config::HistoryConfig;
use crate::builder::error::BuildError;
use crate::core::{Capacity, Snapshot};
use crate::middleware::{HistoryMiddleware, Namespace, DEFAULT_NAMESPACE};
use tracing::debug;

/// Builder for constructing history middleware with a fluent API.
#[derive(Clone, Debug)]
pub struct HistoryBuilder {
    capacity: Capacity,
    namespace: String,
}

impl HistoryBuilder {
    /// Create a builder for an unbounded log in the default namespace.
    pub fn new() -> Self {
        Self {
            capacity: Capacity::Unbounded,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Keep at most `size` entries. Negative sizes mean unbounded.
    pub fn capacity(mut self, size: i64) -> Self {
        self.capacity = Capacity::from(size);
        self
    }

    /// Keep every entry.
    pub fn unbounded(mut self) -> Self {
        self.capacity = Capacity::Unbounded;
        self
    }

    /// Prefix control identifiers with `prefix` instead of the default.
    pub fn namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespace = prefix.into();
        self
    }

    /// Build the middleware.
    /// Returns an error if the namespace is unusable.
    pub fn build<S: Snapshot>(self) -> Result<HistoryMiddleware<S>, BuildError> {
        if self.namespace.is_empty() {
            return Err(BuildError::EmptyNamespace);
        }
        if self.namespace.chars().any(char::is_whitespace) {
            return Err(BuildError::InvalidNamespace(self.namespace));
        }

        debug!(
            capacity = ?self.capacity,
            namespace = %self.namespace,
            "Created history middleware"
        );
        Ok(HistoryMiddleware::with_namespace(
            self.capacity,
            Namespace::new(self.namespace),
        ))
    }
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HistoryConfig> for HistoryBuilder {
    fn from(config: HistoryConfig) -> Self {
        Self::new()
            .capacity(config.capacity)
            .namespace(config.namespace)
    }
}
