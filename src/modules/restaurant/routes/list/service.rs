use super::types::response;
use crate::{
    modules::restaurant::repository,
    types::Context,
    utils::pagination::{Paginated, Pagination},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, pagination: Pagination) -> response::Response {
    let restaurants = repository::find_many_active(&ctx.db_conn.pool, pagination)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;
    let total = repository::count_active(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    Ok(response::Success::Restaurants(Paginated::new(
        restaurants,
        total as u32,
        pagination,
    )))
}
