use crate::catalog::{Catalog, PolicyRef};
use crate::selection::filter;
use crate::types::catalog_view::{Query, View};
use crate::types::identifiers::CategoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Listing,
    Detail,
}

/// Selection state of one browsing session.
///
/// Starts in `Listing` with no category and an empty query. There is no
/// terminal state. The open record borrows from the catalog, so it cannot
/// outlive it or come from anywhere else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState<'c> {
    active_category: Option<CategoryId>,
    query: Query,
    open_record: Option<PolicyRef<'c>>,
}

impl<'c> SelectionState<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        match self.open_record {
            Some(_) => ViewMode::Detail,
            None => ViewMode::Listing,
        }
    }

    pub fn active_category(&self) -> Option<&CategoryId> {
        self.active_category.as_ref()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn current_record(&self) -> Option<PolicyRef<'c>> {
        self.open_record
    }

    /// Whether `id` is the highlighted sidebar entry (`None` is "all").
    pub fn is_active(&self, id: Option<&CategoryId>) -> bool {
        self.active_category.as_ref() == id
    }

    /// Whether there is anything for a clear button to clear.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Valid in either mode. An open record stays open; the new category
    /// only shows once the list is back.
    pub fn select_category(&mut self, id: Option<CategoryId>) {
        self.active_category = id;
    }

    /// Stored verbatim.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = Query::new(text);
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// `Listing -> Detail`. In `Detail` the open record is replaced.
    pub fn open_record(&mut self, record: PolicyRef<'c>) {
        log::debug!("opening policy {}", record.id);
        self.open_record = Some(record);
    }

    /// `Detail -> Listing`, keeping category and query. No-op in `Listing`.
    pub fn close_record(&mut self) {
        if let Some(record) = self.open_record.take() {
            log::debug!("closing policy {}", record.id);
        }
    }

    /// Records the list view would show for the current category and query.
    pub fn visible(&self, catalog: &'c Catalog) -> Vec<PolicyRef<'c>> {
        filter(catalog.records(), self.active_category.as_ref(), &self.query)
    }

    pub fn view(&self, catalog: &'c Catalog) -> View<'c> {
        match self.open_record {
            Some(record) => View::Detail(record),
            None => View::Listing(self.visible(catalog)),
        }
    }
}
