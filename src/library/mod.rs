mod catalog;
mod library;
mod search;

pub use catalog::{Catalog, CatalogId};
pub use library::Library;
pub use search::MATCH_THRESHOLD;
