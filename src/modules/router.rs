use super::{auth, menu_item, order, restaurant};
use crate::types::Context;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Mealdrop API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/auth", auth::routes::get_router())
        .nest("/restaurants", restaurant::routes::get_router())
        .nest("/menu-items", menu_item::routes::get_router())
        .nest("/orders", order::routes::get_router())
        .route("/health", get(health))
}
