//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::services::ColorAdvisor;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<ColorAdvisor>,
}

impl FromRef<AppState> for Arc<ColorAdvisor> {
    fn from_ref(state: &AppState) -> Self {
        state.advisor.clone()
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> AppState {
    let config = AppConfig::load_from_assets(asset_loader);
    AppState {
        advisor: Arc::new(ColorAdvisor::from_config(&config)),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/color-advice", post(api::handle_color_advice))
        .route("/api/colors/matching", post(api::handle_matching_colors))
        .route("/api/palette", get(api::handle_palette))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
