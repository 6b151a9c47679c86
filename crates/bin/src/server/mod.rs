//! The dashboard web server.
//!
//! One immutable `DashboardContext` behind an `Arc`; every figure
//! request recomputes its aggregate from scratch. The reactive wiring
//! lives in the served binding table plus the front-end assets.

pub(crate) mod app_state;
pub(crate) mod bindings;
pub(crate) mod error;
pub(crate) mod handlers;

use app_state::AppState;
use axum::{Router, routing::get};
use podium::DashboardContext;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assemble the dashboard router.
pub(crate) fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/assets/app.js", get(handlers::app_js))
        .route("/api/controls", get(handlers::controls))
        .route("/api/bindings", get(handlers::chart_bindings))
        .route("/api/charts/choropleth", get(handlers::choropleth))
        .route("/api/charts/line", get(handlers::line))
        .route("/api/charts/sunburst", get(handlers::sunburst))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub(crate) async fn serve(
    host: &str,
    port: u16,
    ctx: DashboardContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(Arc::new(ctx));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dashboard listening on http://{addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
