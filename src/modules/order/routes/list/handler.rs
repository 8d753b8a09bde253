use super::service;
use crate::{modules::auth::middleware::OptionalAuth, types::Context, utils::pagination::Pagination};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    OptionalAuth(auth_user): OptionalAuth,
    pagination: Pagination,
) -> impl IntoResponse {
    service::service(ctx, auth_user, pagination).await
}
