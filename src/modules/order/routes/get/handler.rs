use super::service;
use crate::{modules::auth::middleware::OptionalAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    OptionalAuth(auth_user): OptionalAuth,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    service::service(ctx, auth_user, id).await
}
