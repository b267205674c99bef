pub mod aggregate;
pub mod filters;
pub mod state;

use crate::catalog::PolicyRef;
use crate::types::catalog_view::Query;
use crate::types::identifiers::CategoryId;
pub use aggregate::{category_badges, count_by_category, CategoryCounts};
pub use filters::{category_matches, RecordMatcher, SubstringMatcher};
pub use state::{SelectionState, ViewMode};

/// Category + search filter over catalog records.
pub struct PolicyFilter<M> {
	matcher: M,
}

impl Default for PolicyFilter<SubstringMatcher> {
	fn default() -> Self {
		Self {
			matcher: SubstringMatcher,
		}
	}
}

impl<M> PolicyFilter<M>
where
	M: RecordMatcher,
{
	pub fn new(matcher: M) -> Self {
		Self { matcher }
	}

	/// Keep the records passing both the category and the search predicate.
	///
	/// Stable: survivors keep their input order. The input may be the whole
	/// catalog or an earlier result; records are never copied.
	pub fn apply<'c, I>(
		&self,
		records: I,
		active_category: Option<&CategoryId>,
		query: &Query,
	) -> Vec<PolicyRef<'c>>
	where
		I: IntoIterator<Item = PolicyRef<'c>>,
	{
		let mut considered = 0usize;
		let matched: Vec<PolicyRef<'c>> = records
			.into_iter()
			.inspect(|_| considered += 1)
			.filter(|record| category_matches(record, active_category))
			.filter(|record| self.matcher.matches(record, query))
			.collect();

		log::debug!(
			"filter category={:?} query={:?}: {} of {} records",
			active_category.map(CategoryId::as_str),
			query.as_str(),
			matched.len(),
			considered
		);

		matched
	}
}

/// [`PolicyFilter::apply`] with the default substring matcher.
pub fn filter<'c, I>(
	records: I,
	active_category: Option<&CategoryId>,
	query: &Query,
) -> Vec<PolicyRef<'c>>
where
	I: IntoIterator<Item = PolicyRef<'c>>,
{
	PolicyFilter::default().apply(records, active_category, query)
}
