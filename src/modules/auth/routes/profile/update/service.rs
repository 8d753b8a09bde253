use super::types::{request, response};
use crate::{
    modules::{auth::middleware::AuthUser, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth_user: AuthUser,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    user::repository::update_profile_by_id(
        &ctx.db_conn.pool,
        auth_user.id,
        user::repository::UpdateUserPayload {
            name: payload.name,
            contact_phone: payload.contact_phone,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .map(response::Success::Updated)
    .ok_or(response::Error::UserNotFound)
}
