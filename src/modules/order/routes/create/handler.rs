use super::{service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Json(payload): Json<request::Payload>,
) -> impl IntoResponse {
    service::service(ctx, auth.user, payload).await
}
