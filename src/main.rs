//! Process entry point - configuration, database bootstrap, HTTP serve

use axum::Router;
use clap::Parser;
use product_api::api::rest::routes::register_routes;
use product_api::config::AppConfig;
use product_api::domain::repository::ProductRepository;
use product_api::infra::storage;
use product_api::infra::storage::repositories::SeaOrmProductRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "product-api", version, about = "Paginated product catalog CRUD service")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load(&args.config)?;

    let db = Arc::new(storage::connect(&config.database).await?);
    let repository: Arc<dyn ProductRepository> = Arc::new(SeaOrmProductRepository::new(db));

    let router = register_routes(Router::new(), repository);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "product api listening");
    axum::serve(listener, router).await?;

    Ok(())
}
