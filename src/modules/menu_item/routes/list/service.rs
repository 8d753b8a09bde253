use super::types::{request, response};
use crate::{
    modules::menu_item::repository,
    types::Context,
    utils::pagination::{Paginated, Pagination},
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    filters: request::Filters,
    pagination: Pagination,
) -> response::Response {
    let menu_items =
        repository::find_many_active(&ctx.db_conn.pool, filters.restaurant_id, pagination)
            .await
            .map_err(|_| response::Error::UnexpectedError)?;
    let total = repository::count_active(&ctx.db_conn.pool, filters.restaurant_id)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::MenuItems(Paginated::new(
        menu_items,
        total as u32,
        pagination,
    )))
}
