//! Serializable history configuration.

use crate::builder::error::BuildError;
use crate::builder::middleware::HistoryBuilder;
use crate::core::Snapshot;
use crate::middleware::{HistoryMiddleware, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

/// Configuration supplied once when a middleware is created.
///
/// `capacity` follows the host convention: any negative value (the
/// default is `-1`) keeps every entry.
///
/// # Example
///
/// ```rust
/// use hindsight::builder::HistoryConfig;
///
/// let config = HistoryConfig::from_json(r#"{ "capacity": 2 }"#).unwrap();
/// assert_eq!(config.capacity, 2);
///
/// let history = config.build::<Vec<u32>>().unwrap();
/// assert!(history.log().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum retained entries, negative for unbounded
    #[serde(alias = "historySize")]
    pub capacity: i64,
    /// Prefix for control identifiers
    pub namespace: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: -1,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl HistoryConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration and create a middleware from it.
    pub fn build<S: Snapshot>(self) -> Result<HistoryMiddleware<S>, BuildError> {
        HistoryBuilder::from(self).build()
    }
}
