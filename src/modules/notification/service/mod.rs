pub mod email;

use crate::{modules::user::repository::User, types::Context};
use std::sync::Arc;

pub enum Notification {
    Registered {
        user: User,
        confirmation_code: String,
    },
    PasswordResetRequested {
        user: User,
        reset_token: String,
    },
}

impl Notification {
    pub fn registered(user: User, confirmation_code: String) -> Self {
        Notification::Registered {
            user,
            confirmation_code,
        }
    }

    pub fn password_reset_requested(user: User, reset_token: String) -> Self {
        Notification::PasswordResetRequested { user, reset_token }
    }
}

pub enum Backend {
    Email,
}

#[derive(Debug)]
pub enum Error {
    NotSent,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification, backend: Backend) -> Result<()> {
    match backend {
        Backend::Email => email::send(ctx, notification).await,
    }
}
