//! Contributors API Server
//!
//! Serves the site's contributor directory, read from its JSON feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::JsonFeedClient;
use app::ContributorService;
use config::Config;
use domain::ports::FeedFetcher;

/// Application state shared across all handlers
pub struct AppState<F: FeedFetcher> {
    pub contributor_service: Arc<ContributorService<F>>,
}

impl<F: FeedFetcher> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            contributor_service: self.contributor_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any feed fetcher
pub fn router<F: FeedFetcher + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/contributors", get(handlers::list_contributors::<F>))
        .route("/contributors/:username", get(handlers::get_contributor::<F>))
        .route("/vips", get(handlers::list_vips::<F>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contributors_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting contributors API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Reading contributors from {}", config.feed_base_url);

    // Create adapters
    let feed = Arc::new(
        JsonFeedClient::new(
            &config.feed_base_url,
            config.feed_timeout,
            config.feed_max_pages,
        )
        .context("Failed to create JSON feed client")?,
    );

    // Create application services
    let contributor_service = Arc::new(ContributorService::new(
        feed,
        config.feed_base_url.clone(),
    ));

    let app = router(AppState {
        contributor_service,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
