use crate::dataset::PolicyRecord;
use crate::types::catalog_view::Query;
use crate::types::identifiers::CategoryId;

/// Search predicate applied after the category predicate.
pub trait RecordMatcher {
    fn matches(&self, record: &PolicyRecord, query: &Query) -> bool;
}

/// v0: case-insensitive substring containment over title, summary and
/// latest notice. No tokenization, no trimming, no scoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl RecordMatcher for SubstringMatcher {
    fn matches(&self, record: &PolicyRecord, query: &Query) -> bool {
        if query.is_empty() {
            return true;
        }

        record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query.needle()))
    }
}

/// `None` selects every category. Otherwise an exact, case-sensitive match.
pub fn category_matches(record: &PolicyRecord, active_category: Option<&CategoryId>) -> bool {
    match active_category {
        Some(id) => &record.category == id,
        None => true,
    }
}
