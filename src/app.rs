use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::document::Page;
use crate::index;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The page is rendered once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Page>,
}

pub fn create_app(state: AppState, assets_path: &str) -> Router {
    let mut app = Router::new()
        .route("/", get(index::get_index))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("serving assets from {}", assets_path);
    let assets_service = ServeDir::new(assets_path);
    app = app.fallback_service(assets_service);
    app
}
