pub mod catalog_view;
pub mod identifiers;

pub use catalog_view::{BadgeSummary, CategoryBadge, Query, View};
pub use identifiers::{CategoryId, DatasetVersion, PolicyId};
