//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - Durable string storage with optional quota
//! - `SubscriptionStore` - Active / deleted subscription collections
//! - `FavoritesStore` - Shared favorites list
//! - `ProfileStore` - Account profiles with user edits
//!
//! ## Read Ports
//!
//! - `ProductCatalog` - Catalog products
//!
//! ## Environment Ports
//!
//! - `Clock` - Current time

mod clock;
mod favorites_store;
mod key_value_store;
mod product_catalog;
mod profile_store;
mod subscription_store;

pub use clock::Clock;
pub use favorites_store::{FavoriteToggle, FavoritesStore};
pub use key_value_store::{
    entry_size, json_entry, profile_edits_key, read_json, validate_key, KeyValueStore,
    StorageError, DELETED_SUBSCRIPTIONS_KEY, FAVORITES_KEY, PROFILE_EDITS_KEY_PREFIX,
    SUBSCRIPTIONS_KEY,
};
pub use product_catalog::ProductCatalog;
pub use profile_store::ProfileStore;
pub use subscription_store::SubscriptionStore;
