//! Demo subscriptions for the built-in customer account (user `2`).

use super::{Subscription, SubscriptionStatus};
use crate::domain::foundation::{ProductId, SubscriptionId, Timestamp, UserId};

/// User id of the demo customer account.
pub const DEMO_USER_ID: &str = "2";

type Day = (i32, u32, u32);

const ROWS: &[(&str, &str, &str, Day, Day, u32, SubscriptionStatus)] = &[
    ("SUB001", "PROD001", "Cloud Storage Basic", (2023, 4, 1), (2023, 7, 1), 2, SubscriptionStatus::Active),
    ("SUB002", "PROD003", "Data Analytics Basic", (2023, 3, 15), (2023, 6, 15), 1, SubscriptionStatus::Active),
    ("SUB003", "PROD005", "Security Monitoring Service", (2023, 1, 1), (2024, 1, 1), 1, SubscriptionStatus::Active),
    ("SUB004", "PROD007", "Data Visualization Platform", (2023, 5, 10), (2023, 8, 10), 3, SubscriptionStatus::Active),
    ("SUB005", "PROD009", "AI Predictive Analytics", (2023, 2, 15), (2023, 8, 15), 1, SubscriptionStatus::Active),
    ("SUB006", "PROD012", "Cloud Database Service", (2023, 6, 1), (2023, 9, 1), 2, SubscriptionStatus::Active),
    ("SUB007", "PROD014", "AI Image Recognition", (2023, 4, 20), (2023, 5, 20), 1, SubscriptionStatus::Expired),
    ("SUB008", "PROD016", "Data Encryption Service", (2023, 3, 5), (2023, 9, 5), 1, SubscriptionStatus::Cancelled),
];

fn day((y, m, d): Day) -> Timestamp {
    Timestamp::from_ymd(y, m, d).unwrap_or_default()
}

/// The eight demo subscriptions, in listing order.
pub fn demo_subscriptions() -> Vec<Subscription> {
    ROWS.iter()
        .map(|&(id, product_id, product_name, start, end, quantity, status)| Subscription {
            id: SubscriptionId::from_static(id),
            user_id: UserId::from_static(DEMO_USER_ID),
            product_id: ProductId::from_static(product_id),
            product_name: product_name.to_string(),
            start_date: day(start),
            end_date: day(end),
            quantity,
            status,
        })
        .collect()
}
