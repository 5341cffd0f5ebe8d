// src/api/http/mod.rs
// HTTP router composition

mod categorize;

pub use categorize::{categorize_handler, CategorizeRequest};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::state::AppState;

pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/categorize", post(categorize_handler))
        .with_state(app_state)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
