use super::types::{request, response};
use crate::{
    modules::{auth::middleware::AuthUser, driver, order::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth_user: AuthUser,
    order_id: i32,
    payload: request::Payload,
) -> response::Response {
    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    if repository::find_by_id(&ctx.db_conn.pool, order_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .is_none()
    {
        return Err(response::Error::OrderNotFound);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    // Conditional update, so two concurrent assignments can never both claim
    // the same driver.
    let assigned_driver = driver::repository::claim_for_delivery(&mut *tx, payload.driver_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::DriverUnavailable)?;

    repository::set_driver(&mut *tx, order_id, assigned_driver.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    repository::append_status(&mut *tx, order_id, "Picked Up")
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::Assigned)
}
