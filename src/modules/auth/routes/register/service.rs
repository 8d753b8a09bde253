use super::types::{request, response};
use crate::{
    modules::{auth::service as auth, driver, notification, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let role = payload.role.unwrap_or(user::repository::Role::Customer);
    if role == user::repository::Role::Admin {
        return Err(response::Error::InvalidRole);
    }

    if !auth::password::meets_policy(&payload.password) {
        return Err(response::Error::WeakPassword);
    }

    if user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        auth::password::hash(&payload.password).map_err(|_| response::Error::UnexpectedError)?;
    let confirmation_code = auth::password::generate_confirmation_code();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            name: payload.name,
            email: payload.email,
            password_hash,
            contact_phone: payload.contact_phone,
            role,
            confirmation_code: confirmation_code.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?;

    if role == user::repository::Role::Driver {
        driver::repository::create(&mut *tx, user.id)
            .await
            .map_err(|_| response::Error::UnexpectedError)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit a database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let token = auth::token::sign(&ctx.auth.jwt_secret, ctx.auth.token_expiry_secs, &user)
        .map_err(|_| response::Error::UnexpectedError)?;

    // Delivery failures are logged by the notification service, registration
    // itself has already succeeded.
    tokio::spawn(notification::service::send(
        ctx.clone(),
        notification::service::Notification::registered(user.clone(), confirmation_code),
        notification::service::Backend::Email,
    ));

    Ok(response::Success::Registered { user, token })
}
