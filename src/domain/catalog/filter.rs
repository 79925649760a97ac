//! Catalog browsing filters.
//!
//! Only active products are browsable. Category, free-text search and price
//! range are combined with AND.

use std::collections::BTreeSet;

use super::Product;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Criteria for browsing the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// `None` means all categories.
    pub category: Option<String>,

    /// Case-insensitive substring matched against name and description.
    pub search: String,

    /// `None` means any price.
    pub price_range: Option<PriceRange>,
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active() {
            return false;
        }

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| product.category == category);

        let needle = self.search.to_lowercase();
        let matches_search = product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle);

        let matches_price = self
            .price_range
            .map_or(true, |range| range.contains(product.price));

        matches_category && matches_search && matches_price
    }

    /// Returns the matching products in catalog order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Distinct categories of active products, sorted.
pub fn active_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter(|p| p.is_active())
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lowest and highest price among active products.
pub fn active_price_bounds(products: &[Product]) -> Option<PriceRange> {
    let mut prices = products.iter().filter(|p| p.is_active()).map(|p| p.price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    Some(PriceRange::new(min, max))
}
