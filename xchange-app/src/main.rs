//! # Xchange Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging
//! - Pick the rate source adapter
//! - Create the resolver
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::{HttpRateSource, StaticRateSource};
use xchange_hex::{Resolver, inbound::HttpServer};
use xchange_types::RateSource;

use config::{Config, LogFormat, RateSourceKind};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,xchange_app=debug,xchange_hex=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn serve<S: RateSource>(source: S, addr: &str) -> anyhow::Result<()> {
    let resolver = Resolver::new(source);
    HttpServer::new(resolver).run(addr).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    let addr = config.listen_addr();
    tracing::info!("Starting exchange server on {}", addr);

    match config.rate_source {
        RateSourceKind::Http => {
            tracing::info!(
                "Using remote rate source: {} (timeout {:?})",
                config.rate_source_url,
                config.rate_source_timeout
            );
            let source =
                HttpRateSource::new(&config.rate_source_url, config.rate_source_timeout)?;
            serve(source, &addr).await
        }
        RateSourceKind::Static => {
            tracing::info!("Using static rate table");
            serve(StaticRateSource::new(), &addr).await
        }
    }
}
