//! Deterministic filtering, aggregation and selection over a static catalog
//! of government policy records.
//!
//! `policy-catalog` validates a pre-parsed dataset once, then exposes pure
//! functions over it: a category + substring filter that preserves dataset
//! order, per-category counts for badges, and a small selection state
//! machine switching between the list and a single open record. Identical
//! inputs always produce identical outputs.

pub mod catalog;
pub mod dataset;
pub mod selection;
pub mod types;
