use std::collections::BTreeSet;

use chrono::Utc;
use thiserror::Error;

use crate::catalog::catalog::{Catalog, RawCatalog};
use crate::catalog::versioning::{DroppedPolicy, LoadConfig, LoadReport};
use crate::types::identifiers::{CategoryId, DatasetVersion, PolicyId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate category ID: {0}")]
    DuplicateCategoryId(CategoryId),
    #[error("Duplicate policy ID: {0}")]
    DuplicatePolicyId(PolicyId),
    #[error("Policy {policy} references unknown category {category}")]
    UnknownCategory {
        policy: PolicyId,
        category: CategoryId,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Catalog {
    /// Validate a raw dataset and take ownership of it.
    ///
    /// Duplicate ids always reject the load. A record whose category does
    /// not resolve is dropped and reported, or rejects the load when
    /// `config.strict` is set. Surviving records keep their input order.
    pub fn load(raw: RawCatalog, config: &LoadConfig) -> Result<Catalog, CatalogError> {
        let RawCatalog {
            categories,
            policies,
        } = raw;

        // 1. Category ids must be unique
        let mut known = BTreeSet::new();
        for category in &categories {
            if !known.insert(&category.id) {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
        }

        // 2. Policy ids must be unique, categories must resolve
        let mut seen_ids = BTreeSet::new();
        let mut accepted = Vec::with_capacity(policies.len());
        let mut dropped = Vec::new();

        for policy in policies {
            if !seen_ids.insert(policy.id.clone()) {
                return Err(CatalogError::DuplicatePolicyId(policy.id));
            }

            if known.contains(&policy.category) {
                accepted.push(policy);
                continue;
            }

            if config.strict {
                return Err(CatalogError::UnknownCategory {
                    policy: policy.id,
                    category: policy.category,
                });
            }

            log::warn!(
                "dropping policy {}: unknown category {}",
                policy.id,
                policy.category
            );
            dropped.push(DroppedPolicy {
                id: policy.id,
                category: policy.category,
            });
        }

        // 3. Version over config + accepted content, in order
        let mut canonical = serde_json::to_vec(config)?;
        canonical.extend(serde_json::to_vec(&categories)?);
        canonical.extend(serde_json::to_vec(&accepted)?);
        let dataset_version = DatasetVersion::from_content(&canonical);

        log::debug!(
            "loaded catalog {}: {} categories, {} policies, {} dropped",
            dataset_version.as_str(),
            categories.len(),
            accepted.len(),
            dropped.len()
        );

        let report = LoadReport {
            dataset_version,
            load_config: config.clone(),
            loaded_at: Utc::now(),
            category_count: categories.len(),
            policy_count: accepted.len(),
            dropped,
        };

        Ok(Catalog {
            categories,
            policies: accepted,
            report,
        })
    }
}
