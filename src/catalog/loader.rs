use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::catalog::catalog::{Catalog, RawCatalog};
use crate::catalog::validation::CatalogError;
use crate::catalog::versioning::LoadConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid dataset: {0}")]
    Invalid(#[from] CatalogError),
}

/// Parse a `{ "categories": [...], "policies": [...] }` document and validate it.
pub fn load_from_str(json: &str, config: &LoadConfig) -> Result<Catalog, LoadError> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    Ok(Catalog::load(raw, config)?)
}

pub fn load_from_reader<R: Read>(reader: R, config: &LoadConfig) -> Result<Catalog, LoadError> {
    let raw: RawCatalog = serde_json::from_reader(reader)?;
    Ok(Catalog::load(raw, config)?)
}

pub fn load_from_path(path: &Path, config: &LoadConfig) -> Result<Catalog, LoadError> {
    let f = File::open(path)?;
    load_from_reader(BufReader::new(f), config)
}
