//! Favorites domain module.
//!
//! A favorite points at a product or a data source. Favorites are kept in a
//! single shared list; an item appears in it at most once.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;
use crate::domain::foundation::{FavoriteId, Timestamp};

/// Kind of item a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FavoriteItemType {
    Product,
    DataSource,
}

/// An entry of the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub id: FavoriteId,
    pub item_id: String,
    pub item_type: FavoriteItemType,
    pub added_at: Timestamp,
}

impl FavoriteItem {
    pub fn new(item_id: impl Into<String>, item_type: FavoriteItemType, added_at: Timestamp) -> Self {
        Self {
            id: FavoriteId::generate(),
            item_id: item_id.into(),
            item_type,
            added_at,
        }
    }

    pub fn points_at(&self, item_id: &str, item_type: FavoriteItemType) -> bool {
        self.item_id == item_id && self.item_type == item_type
    }
}

/// Case-insensitive substring match over product name and description.
pub fn product_matches(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed::demo_products;

    #[test]
    fn item_type_serializes_camel_case() {
        let json = serde_json::to_string(&FavoriteItemType::DataSource).unwrap();
        assert_eq!(json, "\"dataSource\"");
    }

    #[test]
    fn favorite_item_serializes_with_camel_case_keys() {
        let item = FavoriteItem::new(
            "PROD001",
            FavoriteItemType::Product,
            Timestamp::from_ymd(2024, 2, 1).unwrap(),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemId"], "PROD001");
        assert_eq!(json["itemType"], "product");
        assert_eq!(json["addedAt"], "2024-02-01T00:00:00.000Z");
        assert!(json["id"].as_str().unwrap().starts_with("fav"));
    }

    #[test]
    fn points_at_checks_id_and_type() {
        let item = FavoriteItem::new("PROD001", FavoriteItemType::Product, Timestamp::now());
        assert!(item.points_at("PROD001", FavoriteItemType::Product));
        assert!(!item.points_at("PROD001", FavoriteItemType::DataSource));
        assert!(!item.points_at("PROD002", FavoriteItemType::Product));
    }

    #[test]
    fn product_search_ignores_case() {
        let products = demo_products();
        let hits: Vec<_> = products
            .iter()
            .filter(|p| product_matches(p, "ENCRYPTION"))
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(hits, vec!["PROD016"]);
    }
}
