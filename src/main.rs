use anyhow::Result;
use marketplace_console::application::AppContext;
use marketplace_console::config::{init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Marketplace console exited with error: {}", error);
        eprintln!("marketplace-console: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.telemetry)?;
    info!("Configuration has been loaded");

    let context = AppContext::from_config(&config);
    info!(
        "Storage backend {:?} at {}",
        config.storage.backend,
        config.storage.data_dir.display()
    );

    if config.seed.demo_data {
        if context.seed_demo_data().await? {
            info!("Demo subscriptions have been seeded");
        }
    } else {
        info!("Demo seeding disabled");
    }

    let products = context.catalog().list_products().await?;
    let favorites = context.favorites_store().list().await?;
    info!(
        "Marketplace console ready: {} catalog products, {} favorites",
        products.len(),
        favorites.len()
    );

    Ok(())
}
