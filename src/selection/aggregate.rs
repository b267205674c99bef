use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::types::catalog_view::{BadgeSummary, CategoryBadge};
use crate::types::identifiers::CategoryId;

/// Record counts per category over the full catalog.
///
/// Categories without records are absent from the map; [`get`](Self::get)
/// reports them as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    total: usize,
    counts: BTreeMap<CategoryId, usize>,
}

impl CategoryCounts {
    pub fn get(&self, id: &CategoryId) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.counts.contains_key(id)
    }

    /// The "all policies" count.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, usize)> {
        self.counts.iter().map(|(id, n)| (id, *n))
    }

    /// Number of categories with at least one record.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count records per category. Always over the whole catalog, never a
/// filtered view, so badges do not move with the search state.
pub fn count_by_category(catalog: &Catalog) -> CategoryCounts {
    let mut counts = BTreeMap::new();
    for record in catalog.records() {
        *counts.entry(record.category.clone()).or_insert(0) += 1;
    }

    let result = CategoryCounts {
        total: catalog.len(),
        counts,
    };
    debug_assert_eq!(result.counts.values().sum::<usize>(), result.total);
    result
}

pub fn category_badges(catalog: &Catalog) -> BadgeSummary<'_> {
    let counts = count_by_category(catalog);

    BadgeSummary {
        total: counts.total(),
        categories: catalog
            .categories()
            .iter()
            .map(|category| CategoryBadge {
                category,
                count: counts.get(&category.id),
            })
            .collect(),
    }
}
