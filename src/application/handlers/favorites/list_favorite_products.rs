//! ListFavoriteProductsHandler - Query handler for the favorites page.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::favorites::{product_matches, FavoriteItemType};
use crate::domain::foundation::DomainError;
use crate::ports::{FavoritesStore, ProductCatalog};

/// Query for favorite products.
#[derive(Debug, Clone, Default)]
pub struct ListFavoriteProductsQuery {
    /// Matched against product name and description. Empty matches all.
    pub search: String,
}

pub type ListFavoriteProductsResult = Vec<Product>;

/// Handler for listing favorite products in the order they were favorited.
///
/// Favorites pointing at products no longer in the catalog are skipped.
pub struct ListFavoriteProductsHandler {
    favorites: Arc<dyn FavoritesStore>,
    catalog: Arc<dyn ProductCatalog>,
}

impl ListFavoriteProductsHandler {
    pub fn new(favorites: Arc<dyn FavoritesStore>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { favorites, catalog }
    }

    pub async fn handle(
        &self,
        query: ListFavoriteProductsQuery,
    ) -> Result<ListFavoriteProductsResult, DomainError> {
        let favorites = self.favorites.list().await?;
        let products = self.catalog.list_products().await?;

        Ok(favorites
            .iter()
            .filter(|f| f.item_type == FavoriteItemType::Product)
            .filter_map(|f| products.iter().find(|p| p.id.as_str() == f.item_id))
            .filter(|p| product_matches(p, &query.search))
            .cloned()
            .collect())
    }
}
