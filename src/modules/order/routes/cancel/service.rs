use super::types::response;
use crate::{
    modules::{auth::middleware::AuthUser, driver, order::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth_user: AuthUser, order_id: i32) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, order_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::NotFound)?;

    match auth_user.role {
        Role::Customer if order.user_id != auth_user.id => {
            return Err(response::Error::NotPermitted);
        }
        Role::Driver => {
            // A driver may only cancel an order assigned to them.
            let assigned = driver::repository::find_by_user_id(&ctx.db_conn.pool, auth_user.id)
                .await
                .map_err(|_| response::Error::UnexpectedError)?
                .is_some_and(|d| order.driver_id == Some(d.id));
            if !assigned {
                return Err(response::Error::NotPermitted);
            }
        }
        Role::RestaurantOwner => return Err(response::Error::NotPermitted),
        _ => {}
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    repository::append_status(&mut *tx, order_id, "Cancelled")
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    // Compensating action: a cancelled delivery frees its driver.
    if let Some(driver_id) = order.driver_id {
        driver::repository::release_by_id(&mut *tx, driver_id)
            .await
            .map_err(|_| response::Error::UnexpectedError)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::Cancelled)
}
