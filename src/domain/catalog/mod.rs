//! Catalog domain module.
//!
//! Products offered in the marketplace, the requirements a subscription to
//! each must satisfy, and the browsing filters of the catalog page.
//!
//! # Module Structure
//!
//! - `product` - Product entity and SubscriptionRequirements
//! - `filter` - Category / search / price filtering
//! - `seed` - Built-in demo catalog

mod filter;
mod product;
pub mod seed;

pub use filter::{active_categories, active_price_bounds, CatalogFilter, PriceRange};
pub use product::{Product, ProductStatus, SubscriptionRequirements};
