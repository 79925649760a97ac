//! Subscription domain module.
//!
//! A subscription lives in exactly one of two collections, active or
//! deleted, and moves between them through create, cancel, soft-delete,
//! restore and purge.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription, DeletedSubscription and SubscriptionRequest
//! - `status` - SubscriptionStatus state machine
//! - `errors` - SubscriptionError
//! - `search` - List search predicate
//! - `seed` - Demo subscriptions

mod aggregate;
mod errors;
mod search;
pub mod seed;
mod status;

pub use aggregate::{DeletedSubscription, Subscription, SubscriptionRequest};
pub use errors::{Collection, SubscriptionError};
pub use search::matches_query;
pub use status::SubscriptionStatus;
