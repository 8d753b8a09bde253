use super::types::response;
use crate::{
    modules::{
        auth::middleware::AuthUser,
        order::repository::{self, OrderDetails},
        user::repository::Role,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth_user: Option<AuthUser>,
    id: i32,
) -> response::Response {
    let order = repository::find_with_customer_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .ok_or(response::Error::NotFound)?;

    if let Some(user) = &auth_user {
        match user.role {
            Role::Customer if order.user_id != user.id => {
                return Err(response::Error::NotPermitted);
            }
            Role::Driver if order.driver_user_id != Some(user.id) => {
                return Err(response::Error::NotPermitted);
            }
            _ => {}
        }
    }

    let items = repository::find_line_items(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;
    let status_history = repository::find_status_history(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Order(Box::new(OrderDetails {
        order,
        items,
        status_history,
    })))
}
