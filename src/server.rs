use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    api::handler::{
        batch_update, clear_pending, get_pending, health_check, service_info, submit_timesheet,
        AppState,
    },
    middleware::auth::require_api_key,
};

pub async fn create_app(state: AppState, api_key: Option<String>) -> Router {
    info!("⚙️ Setting up HTTP routes...");

    // Timesheet routes sit behind the API key check; health and the banner
    // stay public.
    let timesheet_routes = Router::new()
        .route("/submit", post(submit_timesheet))
        .route("/pending", get(get_pending))
        .route("/batch-update", post(batch_update))
        .route("/clear-pending", post(clear_pending))
        .layer(from_fn_with_state(api_key, require_api_key));

    let app = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .nest("/api/timesheet", timesheet_routes)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("✓ HTTP routes configured");
    app
}

pub async fn run_server(app: Router, bind_address: &str) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("🌐 Server listening on: {}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
