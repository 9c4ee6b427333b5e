//! Medirisk Web Server
//!
//! Run with: cargo run -p medirisk-web

use std::net::SocketAddr;
use std::sync::Arc;

use medirisk_common::Domain;
use medirisk_serving::{DomainRegistry, PredictionService};
use medirisk_web::config::Config;
use medirisk_web::router::build_router;
use medirisk_web::state::AppState;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Medirisk prediction service...");

    let config = Config::load()?;

    // Load every domain pair before accepting any traffic. A missing or
    // corrupt artifact aborts startup here rather than failing requests later.
    let mut builder = DomainRegistry::builder();
    for domain in Domain::ALL {
        let (scaler_path, model_path) = config.artifacts.paths_for(domain);
        builder = builder.load_domain(domain, &scaler_path, &model_path)?;
    }
    let registry = builder.build_for(&Domain::ALL)?;
    info!("All {} domain pairs loaded, service is ready", registry.len());

    let service = PredictionService::new(Arc::new(registry));
    let app = build_router(AppState::new(service));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
