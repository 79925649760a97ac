//! Catalog handlers.

mod browse_catalog;

pub use browse_catalog::{BrowseCatalogHandler, BrowseCatalogQuery, BrowseCatalogResult};
