use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use geo_routes::api;
use geo_routes::dataset::RouteDataset;

const ROUTE_DATA_PATH: &str = "data/routes.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let dataset = RouteDataset::from_file(ROUTE_DATA_PATH)
        .with_context(|| format!("failed to load route data from {ROUTE_DATA_PATH}"))?;
    info!("loaded {} routes from {ROUTE_DATA_PATH}", dataset.len());

    let port: u16 = match env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
        Err(_) => 3000,
    };

    let app = api::build_router(Arc::new(dataset));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("server is running on http://localhost:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
