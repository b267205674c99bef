use serde::{Deserialize, Serialize};

use crate::types::identifiers::CategoryId;

/// A named grouping that partitions policy records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display glyph. Opaque to every operation in this crate.
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Category {
            id: CategoryId::new(id),
            name: name.into(),
            icon: icon.into(),
        }
    }
}
