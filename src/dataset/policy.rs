use serde::{Deserialize, Serialize};

use crate::types::identifiers::{CategoryId, PolicyId};

/// One government policy or notice entry.
///
/// `title`, `summary` and `latest_notice` are the searchable fields. The
/// remaining metadata is carried for the detail view only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: PolicyId,
    pub title: String,
    pub category: CategoryId,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub latest_notice: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub applicants: Vec<String>,
    /// Reference URL of the original notice.
    #[serde(default)]
    pub source: String,
}

impl PolicyRecord {
    /// Fields consulted by free-text search, in match order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.summary, &self.latest_notice]
    }
}
