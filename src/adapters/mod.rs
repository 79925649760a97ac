//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value storage (file, in-memory)
//! - `subscription` - Subscription store over key-value storage
//! - `favorites` - Favorites store over key-value storage
//! - `profile` - Profile store over key-value storage
//! - `catalog` - Static product catalog
//! - `clock` - System and fixed clocks

pub mod catalog;
pub mod clock;
pub mod favorites;
pub mod profile;
pub mod storage;
pub mod subscription;

pub use catalog::StaticProductCatalog;
pub use clock::{FixedClock, SystemClock};
pub use favorites::LocalFavoritesStore;
pub use profile::LocalProfileStore;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use subscription::LocalSubscriptionStore;
