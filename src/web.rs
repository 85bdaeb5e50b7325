use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::planner::PlannerService;

pub async fn run(port: u16, service: Arc<PlannerService>) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(service).layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Travel plan service running at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
