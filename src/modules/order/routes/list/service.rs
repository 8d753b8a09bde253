use super::types::response;
use crate::{
    modules::{
        auth::middleware::AuthUser,
        order::repository::{self, OwnershipFilter},
        user::repository::Role,
    },
    types::Context,
    utils::pagination::{Paginated, Pagination},
};
use std::sync::Arc;

fn ownership_filter(auth_user: Option<&AuthUser>) -> OwnershipFilter {
    match auth_user {
        Some(user) if user.role == Role::Customer => OwnershipFilter {
            customer_id: Some(user.id),
            ..Default::default()
        },
        Some(user) if user.role == Role::Driver => OwnershipFilter {
            driver_user_id: Some(user.id),
            ..Default::default()
        },
        _ => OwnershipFilter::default(),
    }
}

pub async fn service(
    ctx: Arc<Context>,
    auth_user: Option<AuthUser>,
    pagination: Pagination,
) -> response::Response {
    let filter = ownership_filter(auth_user.as_ref());

    let orders = repository::find_many(&ctx.db_conn.pool, filter, pagination)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;
    let total = repository::count(&ctx.db_conn.pool, filter)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Orders(Paginated::new(
        orders,
        total as u32,
        pagination,
    )))
}
