//! Static product catalog adapter.

use async_trait::async_trait;

use crate::domain::catalog::{seed::demo_products, Product};
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductCatalog;

/// Catalog served from a fixed product list.
#[derive(Debug, Clone)]
pub struct StaticProductCatalog {
    products: Vec<Product>,
}

impl StaticProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Self::new(demo_products())
    }
}

#[async_trait]
impl ProductCatalog for StaticProductCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }

    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_catalog_lists_every_product() {
        let catalog = StaticProductCatalog::demo();
        assert_eq!(catalog.list_products().await.unwrap().len(), 18);
    }

    #[tokio::test]
    async fn find_product_by_id() {
        let catalog = StaticProductCatalog::demo();
        let product = catalog
            .find_product(&ProductId::new("PROD003").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.name, "Data Analytics Basic");
        assert_eq!(product.price, 199);
    }

    #[tokio::test]
    async fn find_unknown_product_returns_none() {
        let catalog = StaticProductCatalog::demo();
        let found = catalog
            .find_product(&ProductId::new("PROD999").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
