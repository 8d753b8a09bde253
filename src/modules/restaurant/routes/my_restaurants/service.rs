use super::types::response;
use crate::{
    modules::{auth::middleware::AuthUser, restaurant::repository, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth_user: AuthUser) -> response::Response {
    if !matches!(auth_user.role, Role::RestaurantOwner | Role::Admin) {
        return Err(response::Error::InsufficientPermissions);
    }

    repository::find_by_owner(&ctx.db_conn.pool, auth_user.id)
        .await
        .map(response::Success::Restaurants)
        .map_err(|_| response::Error::UnexpectedError)
}
