//! Product catalog port (read side).

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ProductId};

/// Reader port for catalog products.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Every product, active or not, in catalog order.
    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by id.
    ///
    /// Returns `None` if no product has this id.
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;
}
