mod application;
mod domain;
mod infrastructure;
mod presentation;

#[cfg(test)]
mod test_support;

use infrastructure::{AppConfig, AppContainer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Starting dashboard API ({:?} store, port {})",
        config.store_backend,
        config.server_port
    );

    let container = AppContainer::new(&config)?;

    if config.seed_on_startup {
        container.seed().await?;
    }

    container.http_server().run().await
}
