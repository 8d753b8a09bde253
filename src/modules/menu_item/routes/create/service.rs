use super::types::{request, response};
use crate::{
    modules::{
        auth::middleware::AuthUser,
        menu_item::repository,
        restaurant,
        user::repository::Role,
    },
    types::Context,
};
use bigdecimal::BigDecimal;
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

    if payload.price <= BigDecimal::from(0) {
        return Err(response::Error::InvalidPrice);
    }

    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    if !restaurant::repository::is_owned_by(&ctx.db_conn.pool, payload.restaurant_id, auth_user.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::NotOwner);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateMenuItemPayload {
            restaurant_id: payload.restaurant_id,
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            ingredients: payload.ingredients,
            price: payload.price,
            image_url: payload.image_url,
        },
    )
    .await
    .map(response::Success::Created)
    .map_err(|_| response::Error::UnexpectedError)
}
