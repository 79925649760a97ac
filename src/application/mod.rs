//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the subscription and favorites collections and
//! profile edits; query handlers read them. [`AppContext`] wires both over
//! the configured adapters.

mod context;
pub mod handlers;

pub use context::AppContext;

pub use handlers::catalog::{BrowseCatalogHandler, BrowseCatalogQuery, BrowseCatalogResult};
pub use handlers::favorites::{
    ListFavoriteProductsHandler, ListFavoriteProductsQuery, ListFavoriteProductsResult,
    ToggleFavoriteCommand, ToggleFavoriteHandler, ToggleFavoriteResult,
};
pub use handlers::profile::{
    GetProfileHandler, GetProfileQuery, GetProfileResult, UpdateProfileCommand,
    UpdateProfileHandler, UpdateProfileResult,
};
pub use handlers::subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, CancelSubscriptionResult,
    DeleteSubscriptionCommand, DeleteSubscriptionHandler, DeleteSubscriptionResult,
    DeletedSubscriptionListItem, ListDeletedSubscriptionsHandler, ListDeletedSubscriptionsQuery,
    ListDeletedSubscriptionsResult, ListSubscriptionsHandler, ListSubscriptionsQuery,
    ListSubscriptionsResult, PurgeSubscriptionCommand, PurgeSubscriptionHandler,
    PurgeSubscriptionResult, RestoreSubscriptionCommand, RestoreSubscriptionHandler,
    RestoreSubscriptionResult, SubscribeToProductCommand, SubscribeToProductHandler,
    SubscribeToProductResult, SubscriptionListItem,
};
