use super::types::{request, response};
use crate::{modules::menu_item::repository, types::Context};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    category_id: i32,
    filters: request::Filters,
) -> response::Response {
    repository::find_active_by_category(&ctx.db_conn.pool, category_id, filters.restaurant_id)
        .await
        .map(response::Success::MenuItems)
        .map_err(|_| response::Error::UnexpectedError)
}
