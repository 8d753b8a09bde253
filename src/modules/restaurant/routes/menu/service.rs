use super::types::response;
use crate::{modules::menu_item, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, restaurant_id: i32) -> response::Response {
    menu_item::repository::find_active_by_restaurant(&ctx.db_conn.pool, restaurant_id)
        .await
        .map(response::Success::Menu)
        .map_err(|_| response::Error::UnexpectedError)
}
