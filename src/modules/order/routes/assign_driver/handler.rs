use super::{service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path(id): Path<i32>,
    Json(payload): Json<request::Payload>,
) -> impl IntoResponse {
    service::service(ctx, auth.user, id, payload).await
}
