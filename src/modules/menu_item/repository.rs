use crate::utils::pagination::Pagination;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i32,
    pub restaurant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A menu item joined with its category and restaurant names.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDetails {
    pub id: i32,
    pub restaurant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub category: Option<String>,
    pub restaurant: Option<String>,
}

/// The shape a restaurant's public menu is served in.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenuEntry {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub active: bool,
    pub category: String,
    pub category_id: i32,
}

pub struct CreateMenuItemPayload {
    pub restaurant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMenuItemPayload) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (restaurant_id, category_id, name, description, ingredients, price, image_url, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        RETURNING *
        ",
    )
    .bind(payload.restaurant_id)
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.ingredients)
    .bind(payload.price)
    .bind(payload.image_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch menu item by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_details_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
) -> Result<Option<MenuItemDetails>> {
    sqlx::query_as::<_, MenuItemDetails>(
        "
        SELECT menu_items.*, categories.name AS category, restaurants.name AS restaurant
        FROM menu_items
        LEFT JOIN categories ON menu_items.category_id = categories.id
        LEFT JOIN restaurants ON menu_items.restaurant_id = restaurants.id
        WHERE menu_items.id = $1
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu item details by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_active<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: Option<i32>,
    pagination: Pagination,
) -> Result<Vec<MenuItemDetails>> {
    sqlx::query_as::<_, MenuItemDetails>(
        "
        SELECT menu_items.*, categories.name AS category, restaurants.name AS restaurant
        FROM menu_items
        LEFT JOIN categories ON menu_items.category_id = categories.id
        LEFT JOIN restaurants ON menu_items.restaurant_id = restaurants.id
        WHERE menu_items.active = TRUE
            AND ($1::INT4 IS NULL OR menu_items.restaurant_id = $1)
        ORDER BY categories.name ASC, menu_items.name ASC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(restaurant_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many menu items: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_active<'e, E: PgExecutor<'e>>(e: E, restaurant_id: Option<i32>) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "
        SELECT COUNT(*) FROM menu_items
        WHERE active = TRUE AND ($1::INT4 IS NULL OR restaurant_id = $1)
        ",
    )
    .bind(restaurant_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count menu items: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_active_by_restaurant<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: i32,
) -> Result<Vec<RestaurantMenuEntry>> {
    sqlx::query_as::<_, RestaurantMenuEntry>(
        "
        SELECT
            menu_items.id, menu_items.name, menu_items.description, menu_items.ingredients,
            menu_items.price, menu_items.image_url, menu_items.active,
            categories.name AS category, categories.id AS category_id
        FROM menu_items
        INNER JOIN categories ON menu_items.category_id = categories.id
        WHERE menu_items.restaurant_id = $1 AND menu_items.active = TRUE
        ORDER BY categories.name ASC, menu_items.name ASC
        ",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch the menu of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_active_by_category<'e, E: PgExecutor<'e>>(
    e: E,
    category_id: i32,
    restaurant_id: Option<i32>,
) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        SELECT * FROM menu_items
        WHERE category_id = $1 AND active = TRUE
            AND ($2::INT4 IS NULL OR restaurant_id = $2)
        ORDER BY name ASC
        ",
    )
    .bind(category_id)
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu items by category {}: {}",
            category_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items SET
            category_id = COALESCE($1, category_id),
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            ingredients = COALESCE($4, ingredients),
            price = COALESCE($5, price),
            image_url = COALESCE($6, image_url),
            updated_at = NOW()
        WHERE id = $7
        RETURNING *
        ",
    )
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.ingredients)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update menu item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

// Soft delete, snapshotted line items keep referencing the row.
pub async fn deactivate_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<bool> {
    sqlx::query(
        "
        UPDATE menu_items SET
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
            "Error occurred while trying to deactivate menu item {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|res| res.rows_affected() > 0)
}
