mod create;
mod delete;
mod get;
mod list;
mod menu;
mod my_restaurants;
mod update;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(my_restaurants::get_router())
        .merge(get::get_router())
        .merge(menu::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
}
