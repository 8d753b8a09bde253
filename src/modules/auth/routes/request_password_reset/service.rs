use super::types::{request, response};
use crate::{
    modules::{auth::service as auth, notification, user},
    types::Context,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::UserNotFound)?;

    let reset_token = auth::password::generate_reset_token();
    let expires_at = (Utc::now() + Duration::hours(1)).naive_utc();

    user::repository::set_password_reset_token(&ctx.db_conn.pool, user.id, &reset_token, expires_at)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    tokio::spawn(notification::service::send(
        ctx.clone(),
        notification::service::Notification::password_reset_requested(user, reset_token),
        notification::service::Backend::Email,
    ));

    Ok(response::Success::ResetRequested)
}
