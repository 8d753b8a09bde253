use crate::utils::pagination::Pagination;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub street_address: String,
    pub zip_code: String,
    pub city_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A restaurant row joined with its city and state names.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantWithLocation {
    pub id: i32,
    pub name: String,
    pub street_address: String,
    pub zip_code: String,
    pub city_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub city: Option<String>,
    pub state: Option<String>,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub street_address: String,
    pub zip_code: String,
    pub city_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Default)]
pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub zip_code: Option<String>,
    pub city_id: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (name, street_address, zip_code, city_id, phone, email, description, image_url, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.street_address)
    .bind(payload.zip_code)
    .bind(payload.city_id)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(payload.description)
    .bind(payload.image_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn add_owner<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: i32,
    restaurant_id: i32,
) -> Result<()> {
    sqlx::query("INSERT INTO restaurant_owners (user_id, restaurant_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(restaurant_id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to record ownership of restaurant {} for user {}: {}",
                restaurant_id,
                user_id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}

pub async fn is_owned_by<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: i32,
    user_id: i32,
) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "
        SELECT EXISTS (
            SELECT 1 FROM restaurant_owners
            WHERE restaurant_id = $1 AND user_id = $2
        )
        ",
    )
    .bind(restaurant_id)
    .bind(user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to check ownership of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_active<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Vec<RestaurantWithLocation>> {
    sqlx::query_as::<_, RestaurantWithLocation>(
        "
        SELECT restaurants.*, cities.name AS city, states.name AS state
        FROM restaurants
        LEFT JOIN cities ON restaurants.city_id = cities.id
        LEFT JOIN states ON cities.state_id = states.id
        WHERE restaurants.active = TRUE
        ORDER BY restaurants.name ASC
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many restaurants: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_active<'e, E: PgExecutor<'e>>(e: E) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants WHERE active = TRUE")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count restaurants: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
) -> Result<Option<RestaurantWithLocation>> {
    sqlx::query_as::<_, RestaurantWithLocation>(
        "
        SELECT restaurants.*, cities.name AS city, states.name AS state
        FROM restaurants
        LEFT JOIN cities ON restaurants.city_id = cities.id
        LEFT JOIN states ON cities.state_id = states.id
        WHERE restaurants.id = $1
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_owner<'e, E: PgExecutor<'e>>(e: E, user_id: i32) -> Result<Vec<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        SELECT restaurants.*
        FROM restaurants
        INNER JOIN restaurant_owners ON restaurants.id = restaurant_owners.restaurant_id
        WHERE restaurant_owners.user_id = $1
        ORDER BY restaurants.name ASC
        ",
    )
    .bind(user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch restaurants owned by user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = COALESCE($1, name),
            street_address = COALESCE($2, street_address),
            zip_code = COALESCE($3, zip_code),
            city_id = COALESCE($4, city_id),
            phone = COALESCE($5, phone),
            email = COALESCE($6, email),
            description = COALESCE($7, description),
            image_url = COALESCE($8, image_url),
            updated_at = NOW()
        WHERE id = $9
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.street_address)
    .bind(payload.zip_code)
    .bind(payload.city_id)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(payload.description)
    .bind(payload.image_url)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

// Soft delete, historical orders keep referencing the row.
pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<bool> {
    sqlx::query(
        "
        UPDATE restaurants SET
            active = FALSE,
            updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to deactivate restaurant {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|res| res.rows_affected() > 0)
}
