use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::container::Container;
use super::controller::{self, AppState};

pub const CHAT_PATH: &str = "/api/v1/chat";
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Any origin, with credentials. The request origin is mirrored since `*` cannot
/// be combined with credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(CORS_MAX_AGE)
}

/// Builds the axum router: the CORS-wrapped chat API plus `/health`.
pub fn create_router(container: &Container) -> Router {
    let state = AppState::new(container.chat_use_case());

    let api = Router::new()
        .route(
            CHAT_PATH,
            post(controller::chat).options(controller::preflight),
        )
        .layer(cors_layer());

    Router::new()
        .route("/health", get(controller::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `addr` until Ctrl-C.
pub async fn serve(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
