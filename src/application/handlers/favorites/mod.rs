//! Favorites handlers.
//!
//! ## Commands
//! - Toggling a favorite
//!
//! ## Queries
//! - Favorite products with search

mod list_favorite_products;
mod toggle_favorite;

pub use list_favorite_products::{
    ListFavoriteProductsHandler, ListFavoriteProductsQuery, ListFavoriteProductsResult,
};
pub use toggle_favorite::{ToggleFavoriteCommand, ToggleFavoriteHandler, ToggleFavoriteResult};
