//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `catalog` - Marketplace products, requirements and catalog filtering
//! - `subscription` - Subscription records, soft-deleted records and lifecycle
//! - `favorites` - Favorited products and data sources
//! - `profile` - Account profiles and user edits

pub mod catalog;
pub mod favorites;
pub mod foundation;
pub mod profile;
pub mod subscription;
