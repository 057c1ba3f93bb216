use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use webbuilder_site::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("webbuilder_site=info".parse()?),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    let addr = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving site on {} (base url {})", addr, config.base_url);

    axum::serve(listener, server::app(config)).await?;
    Ok(())
}
