use super::types::{request, response};
use crate::{
    modules::{auth::service as auth, user},
    types::Context,
};
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
        .ok_or(response::Error::InvalidCredentials)?;

    if !auth::password::verify(&payload.password, &user.password) {
        return Err(response::Error::InvalidCredentials);
    }

    let token = auth::token::sign(&ctx.auth.jwt_secret, ctx.auth.token_expiry_secs, &user)
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::LoggedIn { user, token })
}
