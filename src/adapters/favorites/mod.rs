//! Favorites store adapters.

mod local_favorites_store;

pub use local_favorites_store::LocalFavoritesStore;
