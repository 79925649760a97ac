//! Subscription store adapters.

mod local_subscription_store;

pub use local_subscription_store::LocalSubscriptionStore;
