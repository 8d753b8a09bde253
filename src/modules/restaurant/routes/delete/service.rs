use super::types::response;
use crate::{
    modules::{auth::middleware::AuthUser, restaurant::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth_user: AuthUser, id: i32) -> response::Response {
    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    if !repository::is_owned_by(&ctx.db_conn.pool, id, auth_user.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::NotOwner);
    }

    match repository::deactivate_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        true => Ok(response::Success::Deleted),
        false => Err(response::Error::NotFound),
    }
}
