use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "VARCHAR", rename_all = "snake_case")]
pub enum Role {
    Customer,
    Driver,
    RestaurantOwner,
    Admin,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub contact_phone: Option<String>,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub confirmation_code: Option<String>,
    #[serde(skip_serializing)]
    pub password_reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub password_reset_expires: Option<NaiveDateTime>,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_phone: Option<String>,
    pub role: Role,
    pub confirmation_code: String,
}

pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (name, email, password, contact_phone, role, confirmation_code, email_verified, phone_verified)
        VALUES ($1, $2, $3, $4, $5, $6, FALSE, FALSE)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.contact_phone)
    .bind(payload.role)
    .bind(payload.confirmation_code)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch user by id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch user by email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_password_reset_token<'e, E: PgExecutor<'e>>(
    e: E,
    token: &str,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE password_reset_token = $1")
        .bind(token)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch user by password reset token: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_profile_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            name = COALESCE($1, name),
            contact_phone = COALESCE($2, contact_phone),
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.contact_phone)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update user by id {}: {}", id, err);
        Error::UnexpectedError
    })
}

// Only flips the flag when the code still matches, so a replayed code is a no-op.
pub async fn verify_email_by_code<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    confirmation_code: &str,
) -> Result<bool> {
    sqlx::query(
        "
        UPDATE users SET
            email_verified = TRUE,
            confirmation_code = NULL,
            updated_at = NOW()
        WHERE id = $1 AND confirmation_code = $2
        ",
    )
    .bind(id)
    .bind(confirmation_code)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to verify email for user {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|res| res.rows_affected() > 0)
}

pub async fn set_password_reset_token<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    token: &str,
    expires_at: NaiveDateTime,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE users SET
            password_reset_token = $1,
            password_reset_expires = $2,
            updated_at = NOW()
        WHERE id = $3
        ",
    )
    .bind(token)
    .bind(expires_at)
    .bind(id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to set password reset token for user {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn reset_password_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE users SET
            password = $1,
            password_reset_token = NULL,
            password_reset_expires = NULL,
            updated_at = NOW()
        WHERE id = $2
        ",
    )
    .bind(password_hash)
    .bind(id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to reset password for user {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}
