use super::{service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(category_id): Path<i32>,
    Query(filters): Query<request::Filters>,
) -> impl IntoResponse {
    service::service(ctx, category_id, filters).await
}
