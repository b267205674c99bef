pub mod category;
pub mod policy;

pub use crate::types::identifiers::{CategoryId, PolicyId};
pub use category::Category;
pub use policy::PolicyRecord;
