//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `subscription` - Subscribe, cancel, delete, restore, purge, lists
//! - `favorites` - Favorite toggling and the favorites page
//! - `catalog` - Catalog browsing
//! - `profile` - Account profile and edits

pub mod catalog;
pub mod favorites;
pub mod profile;
pub mod subscription;
