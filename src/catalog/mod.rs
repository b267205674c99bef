pub mod catalog;
pub mod loader;
pub mod validation;
pub mod versioning;

pub use catalog::{Catalog, PolicyRef, RawCatalog};
pub use loader::{load_from_path, load_from_reader, load_from_str, LoadError};
pub use validation::CatalogError;
pub use versioning::{DroppedPolicy, LoadConfig, LoadReport};
