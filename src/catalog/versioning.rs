use chrono::{DateTime, Utc};

use crate::types::identifiers::{CategoryId, DatasetVersion, PolicyId};

// Serializable, comparable, explicit defaults.
// The config is hashed into the dataset version.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadConfig {
    pub version: String,
    /// Reject the whole load on an unknown category reference instead of
    /// dropping the offending record.
    pub strict: bool,
}

impl LoadConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            strict: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::v0()
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// A record left out of the catalog because its category does not exist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DroppedPolicy {
    pub id: PolicyId,
    pub category: CategoryId,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadReport {
    pub dataset_version: DatasetVersion,
    pub load_config: LoadConfig,
    pub loaded_at: DateTime<Utc>, // informational only
    pub category_count: usize,
    pub policy_count: usize,
    pub dropped: Vec<DroppedPolicy>,
}

impl LoadReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}
