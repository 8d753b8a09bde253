use super::types::{request, response};
use crate::{
    modules::{auth::middleware::AuthUser, order::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(
    ctx: Arc<Context>,
    auth_user: AuthUser,
    order_id: i32,
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

    repository::append_status(&mut *tx, order_id, &payload.status)
        .await
        .map_err(|err| match err {
            repository::Error::StatusNotFound(name) => response::Error::StatusNotFound(name),
            repository::Error::UnexpectedError => response::Error::UnexpectedError,
        })?;

    if payload.status == "Delivered" {
        repository::stamp_actual_delivery(&mut *tx, order_id)
            .await
            .map_err(|_| response::Error::UnexpectedError)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::Updated)
}
