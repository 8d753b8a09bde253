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
    id: i32,
    payload: request::Payload,
) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if let Some(price) = &payload.price {
        if *price <= BigDecimal::from(0) {
            return Err(response::Error::InvalidPrice);
        }
    }

    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    let menu_item = repository::find_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::NotFound)?;

    if !restaurant::repository::is_owned_by(
        &ctx.db_conn.pool,
        menu_item.restaurant_id,
        auth_user.id,
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::NotOwner);
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        id,
        repository::UpdateMenuItemPayload {
            category_id: payload.category_id,
            name: payload.name,
            description: payload.description,
            ingredients: payload.ingredients,
            price: payload.price,
            image_url: payload.image_url,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .map(response::Success::Updated)
    .ok_or(response::Error::NotFound)
}
