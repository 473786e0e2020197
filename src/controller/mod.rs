use std::sync::Arc;
use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::services::reservation_service::ReservationService;

pub mod health_check;
pub mod reservation_controller;

#[derive(Clone)]
pub struct AppState {
    pub reservation_service: Arc<ReservationService>,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = application(app_state, config.cors_enabled);

    info!("API server listening on: {}", config.listen_address);
    axum::Server::bind(&config.listen_address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn application(app_state: AppState, cors_enabled: bool) -> Router {
    let router = router_endpoints(app_state).fallback(page_not_found_handler);

    if cors_enabled {
        router.layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(Any)
                        .allow_headers([CONTENT_TYPE])
                )
        )
    } else {
        router
    }
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(reservation_controller::router(app_state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining in-flight requests");
}
