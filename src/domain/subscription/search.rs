//! Free-text search over subscription lists.

use super::Subscription;

/// Case-insensitive substring match over product name, id and status.
///
/// An empty query matches everything.
pub fn matches_query(subscription: &Subscription, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    subscription.product_name.to_lowercase().contains(&needle)
        || subscription.id.as_str().to_lowercase().contains(&needle)
        || subscription.status.as_str().contains(&needle)
}
