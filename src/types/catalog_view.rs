use crate::catalog::PolicyRef;
use crate::dataset::Category;

/// A free-text search query.
///
/// The raw text is kept verbatim: no trimming, no whitespace collapsing.
/// Matching is case-insensitive, so the lowercased form is computed once
/// here instead of per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
    needle: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();

        Self { raw, needle }
    }

    /// An empty query matches every record. Whitespace-only is not empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form matched against lowercased record text.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Query::new(raw)
    }
}

/// What the presentation layer should render for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'c> {
    /// No record open: the filtered list, in catalog order.
    Listing(Vec<PolicyRef<'c>>),
    /// Exactly one record open for full display.
    Detail(PolicyRef<'c>),
}

/// Sidebar entry: a category and the number of records filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBadge<'c> {
    pub category: &'c Category,
    pub count: usize,
}

/// Badge counts for the whole catalog, independent of the current filter.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSummary<'c> {
    /// The "all policies" entry.
    pub total: usize,
    /// One entry per category, in catalog order, including empty ones.
    pub categories: Vec<CategoryBadge<'c>>,
}
