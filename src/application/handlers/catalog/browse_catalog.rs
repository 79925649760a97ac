//! BrowseCatalogHandler - Query handler for the product catalog page.

use std::sync::Arc;

use crate::domain::catalog::{
    active_categories, active_price_bounds, CatalogFilter, PriceRange, Product,
};
use crate::domain::foundation::DomainError;
use crate::ports::ProductCatalog;

/// Query for browsable products.
#[derive(Debug, Clone, Default)]
pub struct BrowseCatalogQuery {
    pub filter: CatalogFilter,
}

/// Result of browsing.
#[derive(Debug, Clone)]
pub struct BrowseCatalogResult {
    /// Active products matching the filter, in catalog order.
    pub products: Vec<Product>,
    /// Every category with at least one active product, sorted.
    pub categories: Vec<String>,
    /// Price span of all active products. `None` for an empty catalog.
    pub price_bounds: Option<PriceRange>,
}

/// Handler for browsing the catalog.
pub struct BrowseCatalogHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl BrowseCatalogHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: BrowseCatalogQuery) -> Result<BrowseCatalogResult, DomainError> {
        let all = self.catalog.list_products().await?;
        let products = query.filter.apply(&all);
        tracing::debug!("Catalog filter matched {} of {} products", products.len(), all.len());

        Ok(BrowseCatalogResult {
            products,
            categories: active_categories(&all),
            price_bounds: active_price_bounds(&all),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticProductCatalog;

    fn handler() -> BrowseCatalogHandler {
        BrowseCatalogHandler::new(Arc::new(StaticProductCatalog::demo()))
    }

    #[tokio::test]
    async fn default_query_shows_active_products() {
        let result = handler().handle(BrowseCatalogQuery::default()).await.unwrap();

        assert_eq!(result.products.len(), 17);
        assert_eq!(result.categories.len(), 6);
        assert_eq!(result.price_bounds, Some(PriceRange::new(99, 999)));
    }

    #[tokio::test]
    async fn category_and_price_combine() {
        let query = BrowseCatalogQuery {
            filter: CatalogFilter {
                category: Some("AI".to_string()),
                search: String::new(),
                price_range: Some(PriceRange::new(500, 800)),
            },
        };

        let result = handler().handle(query).await.unwrap();

        let ids: Vec<_> = result.products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["PROD009", "PROD014"]);
    }

    #[tokio::test]
    async fn facets_ignore_the_filter() {
        let query = BrowseCatalogQuery {
            filter: CatalogFilter {
                search: "no such product".to_string(),
                ..Default::default()
            },
        };

        let result = handler().handle(query).await.unwrap();

        assert!(result.products.is_empty());
        assert_eq!(result.categories.len(), 6);
    }

    #[tokio::test]
    async fn empty_catalog_has_no_bounds() {
        let handler = BrowseCatalogHandler::new(Arc::new(StaticProductCatalog::new(vec![])));

        let result = handler.handle(BrowseCatalogQuery::default()).await.unwrap();

        assert!(result.products.is_empty());
        assert!(result.price_bounds.is_none());
    }
}
