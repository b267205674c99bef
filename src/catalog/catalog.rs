// Immutable once loaded:
// no mutation
// no "update" methods
// records are only handed out by reference

use std::ops::Deref;
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::catalog::LoadReport;
use crate::dataset::{Category, PolicyRecord};
use crate::types::identifiers::{CategoryId, DatasetVersion, PolicyId};

/// Pre-parsed, unvalidated dataset as produced by an external loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub policies: Vec<PolicyRecord>,
}

/// The validated, resident dataset.
///
/// Every record's category resolves, and both id sets are unique. The only
/// constructor is [`Catalog::load`].
#[derive(Debug)]
pub struct Catalog {
    pub(crate) categories: Vec<Category>,
    pub(crate) policies: Vec<PolicyRecord>,
    pub(crate) report: LoadReport,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All records in dataset order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = PolicyRef<'_>> + Clone + '_ {
        self.policies.iter().map(PolicyRef)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn policy(&self, id: &PolicyId) -> Option<PolicyRef<'_>> {
        self.policies.iter().find(|p| &p.id == id).map(PolicyRef)
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.report.dataset_version
    }
}

/// A borrowed record that is known to live inside a [`Catalog`].
///
/// There is no public constructor: the only way to get one is from a
/// catalog accessor or from a filter over such references. Equality is
/// identity of the referenced instance.
#[derive(Debug, Clone, Copy)]
pub struct PolicyRef<'c>(&'c PolicyRecord);

impl<'c> PolicyRef<'c> {
    pub fn record(&self) -> &'c PolicyRecord {
        self.0
    }

    /// The record's category, looked up in the catalog it came from.
    pub fn category_in<'a>(&self, catalog: &'a Catalog) -> Option<&'a Category> {
        catalog.category(&self.0.category)
    }
}

impl Deref for PolicyRef<'_> {
    type Target = PolicyRecord;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl PartialEq for PolicyRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for PolicyRef<'_> {}
