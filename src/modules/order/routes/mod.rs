mod assign_driver;
mod cancel;
mod create;
mod get;
mod list;
mod update_status;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
        .merge(update_status::get_router())
        .merge(assign_driver::get_router())
        .merge(cancel::get_router())
}
