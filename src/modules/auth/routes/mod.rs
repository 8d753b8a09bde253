mod login;
mod profile;
mod register;
mod request_password_reset;
mod reset_password;
mod verify_email;

use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(register::get_router())
        .merge(login::get_router())
        .merge(verify_email::get_router())
        .merge(request_password_reset::get_router())
        .merge(reset_password::get_router())
        .merge(profile::get_router())
}
