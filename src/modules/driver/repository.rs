use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i32,
    pub user_id: i32,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
    pub car_color: Option<String>,
    pub car_plate_number: Option<String>,
    pub online: bool,
    pub delivering: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, user_id: i32) -> Result<Driver> {
    sqlx::query_as::<_, Driver>(
        "
        INSERT INTO drivers (user_id, online, delivering)
        VALUES ($1, FALSE, FALSE)
        RETURNING *
        ",
    )
    .bind(user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create a driver for user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: i32) -> Result<Option<Driver>> {
    sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch driver by user id {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

// Claims the driver for a delivery in one statement so two concurrent
// assignments can never both succeed. Zero rows means offline, already
// delivering or no such driver.
pub async fn claim_for_delivery<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: i32,
) -> Result<Option<Driver>> {
    sqlx::query_as::<_, Driver>(
        "
        UPDATE drivers SET
            delivering = TRUE,
            updated_at = NOW()
        WHERE user_id = $1 AND online = TRUE AND delivering = FALSE
        RETURNING *
        ",
    )
    .bind(user_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to claim driver {} for delivery: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn release_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<()> {
    sqlx::query(
        "
        UPDATE drivers SET
            delivering = FALSE,
            updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to release driver {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}
