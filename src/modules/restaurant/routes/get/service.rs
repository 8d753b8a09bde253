use super::types::response;
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: i32) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .map(response::Success::Restaurant)
        .ok_or(response::Error::NotFound)
}
