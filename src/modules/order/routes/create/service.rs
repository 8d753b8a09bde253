use super::types::{request, response};
use crate::{
    modules::{auth::middleware::AuthUser, menu_item, order::repository, user::repository::Role},
    types::Context,
};
use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
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

    if !matches!(auth_user.role, Role::Customer | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    // Snapshot each unit price inside the transaction so a concurrent catalog
    // change cannot leave the order inconsistent with its line items.
    let mut lines = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        let menu_item = menu_item::repository::find_by_id(&mut *tx, item.menu_item_id)
            .await
            .map_err(|_| response::Error::UnexpectedError)?
            .ok_or(response::Error::MenuItemNotFound(item.menu_item_id))?;

        if !menu_item.active {
            return Err(response::Error::MenuItemUnavailable(menu_item.name));
        }

        lines.push((menu_item.price, item));
    }

    let total = repository::order_total(
        lines
            .iter()
            .map(|(price, item)| (price, item.quantity)),
    );

    let order = repository::create(
        &mut *tx,
        repository::CreateOrderPayload {
            restaurant_id: payload.restaurant_id,
            user_id: auth_user.id,
            delivery_address_id: payload.delivery_address_id,
            price: total.clone(),
            discount: BigDecimal::from(0),
            final_price: total,
            comment: payload.comment.clone(),
            estimated_delivery_time: (Utc::now() + Duration::minutes(45)).naive_utc(),
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    for (price, item) in lines {
        repository::create_line_item(
            &mut *tx,
            order.id,
            repository::CreateLineItemPayload {
                menu_item_id: item.menu_item_id,
                quantity: item.quantity,
                item_price: price,
                comment: item.comment.clone(),
            },
        )
        .await
        .map_err(|_| response::Error::UnexpectedError)?;
    }

    repository::append_status(&mut *tx, order.id, "Pending")
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::Created(order))
}
