//! Demo data configuration

use serde::Deserialize;

/// Startup seeding
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Seed the demo subscriptions when no subscription collection exists
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
        }
    }
}

fn default_demo_data() -> bool {
    true
}
