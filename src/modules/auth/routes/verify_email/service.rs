use super::types::{request, response};
use crate::{modules::user, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let verified = user::repository::verify_email_by_code(
        &ctx.db_conn.pool,
        payload.user_id,
        &payload.confirmation_code,
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    match verified {
        true => Ok(response::Success::Verified),
        false => Err(response::Error::InvalidCode),
    }
}
