use super::types::{request, response};
use crate::{
    modules::{auth::service as auth, user},
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !auth::password::meets_policy(&payload.new_password) {
        return Err(response::Error::WeakPassword);
    }

    let user = user::repository::find_by_password_reset_token(&ctx.db_conn.pool, &payload.token)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::InvalidToken)?;

    match user.password_reset_expires {
        Some(expires_at) if expires_at > Utc::now().naive_utc() => (),
        _ => return Err(response::Error::InvalidToken),
    }

    let password_hash = auth::password::hash(&payload.new_password)
        .map_err(|_| response::Error::UnexpectedError)?;

    user::repository::reset_password_by_id(&ctx.db_conn.pool, user.id, &password_hash)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::PasswordReset)
}
