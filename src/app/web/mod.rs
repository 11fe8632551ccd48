pub mod handlers;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::intake::IntakeService;
use crate::utils::error::Result;

pub fn app_router(service: IntakeService, static_dir: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/db", get(handlers::list_polls))
        .route("/input", get(handlers::input_form).post(handlers::submit_poll))
        // the form handler redirects here; POST is accepted for clients that
        // replay the original method on redirect
        .route(
            "/input/:poll_id/",
            get(handlers::poll_detail).post(handlers::poll_detail),
        )
        .route("/input/:poll_id/json", get(handlers::poll_json));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(service)
}

/// Serve until ctrl-c. The service, and the store inside it, are dropped
/// when this returns.
pub async fn serve(service: IntakeService, bind_addr: &str, static_dir: Option<&str>) -> Result<()> {
    let app = app_router(service, static_dir);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
