use super::types::{request, response};
use crate::{
    modules::{auth::middleware::AuthUser, restaurant::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth_user: AuthUser,
    id: i32,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    if !repository::is_owned_by(&ctx.db_conn.pool, id, auth_user.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::NotOwner);
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        id,
        repository::UpdateRestaurantPayload {
            name: payload.name,
            street_address: payload.street_address,
            zip_code: payload.zip_code,
            city_id: payload.city_id,
            phone: payload.phone,
            email: payload.email,
            description: payload.description,
            image_url: payload.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .map(response::Success::Updated)
    .ok_or(response::Error::NotFound)
}
