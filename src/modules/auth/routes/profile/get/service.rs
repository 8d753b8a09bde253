use super::types::response;
use crate::{
    modules::{auth::middleware::AuthUser, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth_user: AuthUser) -> response::Response {
    user::repository::find_by_id(&ctx.db_conn.pool, auth_user.id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .map(response::Success::Profile)
        .ok_or(response::Error::UserNotFound)
}
