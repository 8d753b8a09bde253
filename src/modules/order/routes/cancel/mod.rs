mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{routing::put, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/:id/cancel", put(handler::handler))
}
