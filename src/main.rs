mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use config::AppConfig;
use infrastructure::container::AppContainer;
use presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting with {:?}", config);

    let container = AppContainer::new(&config)?;
    let server = HttpServer::new(container.document_handler.clone(), config.server.clone());

    server.run().await?;
    Ok(())
}
