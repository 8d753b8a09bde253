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
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let restaurant = repository::create(
        &mut *tx,
        repository::CreateRestaurantPayload {
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
    .map_err(|_| response::Error::UnexpectedError)?;

    repository::add_owner(&mut *tx, auth_user.id, restaurant.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::Created(restaurant))
}
