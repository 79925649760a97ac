//! Built-in demo catalog.

use once_cell::sync::Lazy;

use super::{Product, ProductStatus, SubscriptionRequirements};
use crate::domain::foundation::{ProductId, Timestamp};

pub const CLOUD_STORAGE: &str = "Cloud Storage";
pub const DATA_ANALYTICS: &str = "Data Analytics";
pub const SECURITY: &str = "Security";
pub const AI: &str = "AI";
pub const IOT: &str = "IoT";
pub const BIG_DATA: &str = "Big Data";

struct Row {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: u32,
    active: bool,
    min_duration: u32,
    max_quantity: u32,
    created: (i32, u32, u32),
}

const ROWS: &[Row] = &[
    Row {
        id: "PROD001",
        name: "Cloud Storage Basic",
        description: "Basic cloud storage for individuals and small businesses",
        category: CLOUD_STORAGE,
        price: 99,
        active: true,
        min_duration: 1,
        max_quantity: 5,
        created: (2023, 1, 10),
    },
    Row {
        id: "PROD002",
        name: "Cloud Storage Professional",
        description: "Advanced cloud storage for mid-size and large enterprises",
        category: CLOUD_STORAGE,
        price: 299,
        active: true,
        min_duration: 3,
        max_quantity: 10,
        created: (2023, 1, 15),
    },
    Row {
        id: "PROD003",
        name: "Data Analytics Basic",
        description: "Basic data analysis tools for junior analysts",
        category: DATA_ANALYTICS,
        price: 199,
        active: true,
        min_duration: 1,
        max_quantity: 3,
        created: (2023, 2, 1),
    },
    Row {
        id: "PROD004",
        name: "Data Analytics Professional",
        description: "Advanced data analysis tools for professional analysts",
        category: DATA_ANALYTICS,
        price: 499,
        active: true,
        min_duration: 6,
        max_quantity: 5,
        created: (2023, 2, 15),
    },
    Row {
        id: "PROD005",
        name: "Security Monitoring Service",
        description: "Round-the-clock security monitoring that keeps your data safe",
        category: SECURITY,
        price: 399,
        active: false,
        min_duration: 12,
        max_quantity: 1,
        created: (2023, 3, 1),
    },
    Row {
        id: "PROD006",
        name: "Cloud Storage Enterprise",
        description: "High-performance storage for large enterprises with PB-scale capacity and high concurrency",
        category: CLOUD_STORAGE,
        price: 999,
        active: true,
        min_duration: 6,
        max_quantity: 20,
        created: (2023, 3, 15),
    },
    Row {
        id: "PROD007",
        name: "Data Visualization Platform",
        description: "Turns complex data into easy-to-read charts and dashboards",
        category: DATA_ANALYTICS,
        price: 349,
        active: true,
        min_duration: 3,
        max_quantity: 8,
        created: (2023, 4, 5),
    },
    Row {
        id: "PROD008",
        name: "Network Security Assessment",
        description: "Comprehensive assessment that finds vulnerabilities and recommends fixes",
        category: SECURITY,
        price: 599,
        active: true,
        min_duration: 1,
        max_quantity: 2,
        created: (2023, 4, 20),
    },
    Row {
        id: "PROD009",
        name: "AI Predictive Analytics",
        description: "AI-driven forecasting for data-driven decisions",
        category: AI,
        price: 799,
        active: true,
        min_duration: 6,
        max_quantity: 3,
        created: (2023, 5, 10),
    },
    Row {
        id: "PROD010",
        name: "IoT Data Platform",
        description: "Real-time collection and analysis for large fleets of connected devices",
        category: IOT,
        price: 599,
        active: true,
        min_duration: 3,
        max_quantity: 10,
        created: (2023, 5, 25),
    },
    Row {
        id: "PROD011",
        name: "Big Data Processing Engine",
        description: "High-performance engine for fast processing of PB-scale data",
        category: BIG_DATA,
        price: 899,
        active: true,
        min_duration: 6,
        max_quantity: 5,
        created: (2023, 6, 15),
    },
    Row {
        id: "PROD012",
        name: "Cloud Database Service",
        description: "Highly available, scalable cloud databases with automatic backups",
        category: CLOUD_STORAGE,
        price: 449,
        active: true,
        min_duration: 3,
        max_quantity: 8,
        created: (2023, 7, 1),
    },
    Row {
        id: "PROD013",
        name: "Real-time Stream Processing",
        description: "Process and analyze live data streams for instant insight",
        category: BIG_DATA,
        price: 649,
        active: true,
        min_duration: 3,
        max_quantity: 6,
        created: (2023, 7, 20),
    },
    Row {
        id: "PROD014",
        name: "AI Image Recognition",
        description: "Deep-learning image recognition for object and face detection",
        category: AI,
        price: 549,
        active: true,
        min_duration: 1,
        max_quantity: 5,
        created: (2023, 8, 5),
    },
    Row {
        id: "PROD015",
        name: "Edge Computing Platform",
        description: "Compute at the network edge to cut latency and save bandwidth",
        category: IOT,
        price: 499,
        active: true,
        min_duration: 3,
        max_quantity: 10,
        created: (2023, 8, 25),
    },
    Row {
        id: "PROD016",
        name: "Data Encryption Service",
        description: "Advanced encryption that protects sensitive data from unauthorized access",
        category: SECURITY,
        price: 349,
        active: true,
        min_duration: 6,
        max_quantity: 10,
        created: (2023, 9, 10),
    },
    Row {
        id: "PROD017",
        name: "Natural Language Processing API",
        description: "Text analysis, sentiment analysis and language understanding",
        category: AI,
        price: 399,
        active: true,
        min_duration: 1,
        max_quantity: 8,
        created: (2023, 9, 30),
    },
    Row {
        id: "PROD018",
        name: "Data Lake Storage",
        description: "Cost-effective storage for large volumes of unstructured data",
        category: BIG_DATA,
        price: 749,
        active: true,
        min_duration: 6,
        max_quantity: 5,
        created: (2023, 10, 15),
    },
];

static DEMO_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    ROWS.iter()
        .map(|row| {
            let (y, m, d) = row.created;
            Product {
                id: ProductId::from_static(row.id),
                name: row.name.to_string(),
                description: row.description.to_string(),
                category: row.category.to_string(),
                price: row.price,
                status: if row.active {
                    ProductStatus::Active
                } else {
                    ProductStatus::Inactive
                },
                subscription_requirements: SubscriptionRequirements::new(
                    row.min_duration,
                    row.max_quantity,
                ),
                created_at: Timestamp::from_ymd(y, m, d).unwrap_or_default(),
            }
        })
        .collect()
});

/// The demo catalog, in listing order.
pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS.clone()
}
