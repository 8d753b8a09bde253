use crate::utils::pagination::Pagination;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub restaurant_id: i32,
    pub user_id: i32,
    pub driver_id: Option<i32>,
    pub delivery_address_id: i32,
    pub estimated_delivery_time: Option<NaiveDateTime>,
    pub actual_delivery_time: Option<NaiveDateTime>,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub final_price: BigDecimal,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// An order row joined with restaurant and buyer identity. `driver_user_id`
/// carries the assigned driver's user id, the externally visible driver key.
#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithCustomer {
    pub id: i32,
    pub restaurant_id: i32,
    pub user_id: i32,
    pub driver_id: Option<i32>,
    pub driver_user_id: Option<i32>,
    pub delivery_address_id: i32,
    pub estimated_delivery_time: Option<NaiveDateTime>,
    pub actual_delivery_time: Option<NaiveDateTime>,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub final_price: BigDecimal,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub restaurant: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub item_price: BigDecimal,
    pub comment: Option<String>,
    pub menu_item_name: Option<String>,
    pub menu_item_description: Option<String>,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusEntry {
    pub id: i32,
    pub status_name: Option<String>,
    pub status_description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: OrderWithCustomer,
    pub items: Vec<OrderLineItem>,
    pub status_history: Vec<OrderStatusEntry>,
}

pub struct CreateOrderPayload {
    pub restaurant_id: i32,
    pub user_id: i32,
    pub delivery_address_id: i32,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub final_price: BigDecimal,
    pub comment: Option<String>,
    pub estimated_delivery_time: NaiveDateTime,
}

pub struct CreateLineItemPayload {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub item_price: BigDecimal,
    pub comment: Option<String>,
}

/// Ownership scoping for order listings. Both fields unset means an
/// unrestricted (admin or anonymous) view.
#[derive(Clone, Copy, Default)]
pub struct OwnershipFilter {
    pub customer_id: Option<i32>,
    pub driver_user_id: Option<i32>,
}

#[derive(Debug)]
pub enum Error {
    StatusNotFound(String),
    UnexpectedError,
}

/// Exact decimal sum of `unit price x quantity` over all line items.
pub fn order_total<'a, I>(lines: I) -> BigDecimal
where
    I: IntoIterator<Item = (&'a BigDecimal, i32)>,
{
    lines.into_iter().fold(BigDecimal::from(0), |total, (price, quantity)| {
        total + price * BigDecimal::from(quantity)
    })
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (restaurant_id, user_id, delivery_address_id, price, discount, final_price, comment, estimated_delivery_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(payload.restaurant_id)
    .bind(payload.user_id)
    .bind(payload.delivery_address_id)
    .bind(payload.price)
    .bind(payload.discount)
    .bind(payload.final_price)
    .bind(payload.comment)
    .bind(payload.estimated_delivery_time)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create_line_item<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: i32,
    payload: CreateLineItemPayload,
) -> Result<()> {
    sqlx::query(
        "
        INSERT INTO order_menu_items (order_id, menu_item_id, quantity, item_price, comment)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(order_id)
    .bind(payload.menu_item_id)
    .bind(payload.quantity)
    .bind(payload.item_price)
    .bind(payload.comment)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create a line item for order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

// The single entry point for status progression. Transitions are deliberately
// unguarded; a guard rule would slot in here without touching call sites.
pub async fn append_status<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: i32,
    status_name: &str,
) -> Result<()> {
    let result = sqlx::query(
        "
        INSERT INTO order_status (order_id, status_catalog_id)
        SELECT $1, id FROM status_catalog WHERE name = $2
        ",
    )
    .bind(order_id)
    .bind(status_name)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to append status '{}' to order {}: {}",
            status_name,
            order_id,
            err
        );
        Error::UnexpectedError
    })?;

    match result.rows_affected() {
        0 => Err(Error::StatusNotFound(status_name.to_string())),
        _ => Ok(()),
    }
}

pub async fn stamp_actual_delivery<'e, E: PgExecutor<'e>>(e: E, order_id: i32) -> Result<()> {
    sqlx::query(
        "
        UPDATE orders SET
            actual_delivery_time = NOW(),
            updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(order_id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to stamp delivery time on order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_with_customer_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
) -> Result<Option<OrderWithCustomer>> {
    sqlx::query_as::<_, OrderWithCustomer>(
        "
        SELECT
            orders.*, drivers.user_id AS driver_user_id,
            restaurants.name AS restaurant,
            users.name AS customer_name, users.email AS customer_email
        FROM orders
        LEFT JOIN restaurants ON orders.restaurant_id = restaurants.id
        LEFT JOIN users ON orders.user_id = users.id
        LEFT JOIN drivers ON orders.driver_id = drivers.id
        WHERE orders.id = $1
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch order details by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filter: OwnershipFilter,
    pagination: Pagination,
) -> Result<Vec<OrderWithCustomer>> {
    sqlx::query_as::<_, OrderWithCustomer>(
        "
        SELECT
            orders.*, drivers.user_id AS driver_user_id,
            restaurants.name AS restaurant,
            users.name AS customer_name, users.email AS customer_email
        FROM orders
        LEFT JOIN restaurants ON orders.restaurant_id = restaurants.id
        LEFT JOIN users ON orders.user_id = users.id
        LEFT JOIN drivers ON orders.driver_id = drivers.id
        WHERE ($1::INT4 IS NULL OR orders.user_id = $1)
            AND ($2::INT4 IS NULL OR drivers.user_id = $2)
        ORDER BY orders.created_at DESC
        LIMIT $3 OFFSET $4
        ",
    )
    .bind(filter.customer_id)
    .bind(filter.driver_user_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E, filter: OwnershipFilter) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "
        SELECT COUNT(*)
        FROM orders
        LEFT JOIN drivers ON orders.driver_id = drivers.id
        WHERE ($1::INT4 IS NULL OR orders.user_id = $1)
            AND ($2::INT4 IS NULL OR drivers.user_id = $2)
        ",
    )
    .bind(filter.customer_id)
    .bind(filter.driver_user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_line_items<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: i32,
) -> Result<Vec<OrderLineItem>> {
    sqlx::query_as::<_, OrderLineItem>(
        "
        SELECT
            order_menu_items.id, order_menu_items.menu_item_id, order_menu_items.quantity,
            order_menu_items.item_price, order_menu_items.comment,
            menu_items.name AS menu_item_name, menu_items.description AS menu_item_description
        FROM order_menu_items
        LEFT JOIN menu_items ON order_menu_items.menu_item_id = menu_items.id
        WHERE order_menu_items.order_id = $1
        ",
    )
    .bind(order_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch line items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_status_history<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: i32,
) -> Result<Vec<OrderStatusEntry>> {
    sqlx::query_as::<_, OrderStatusEntry>(
        "
        SELECT
            order_status.id, order_status.created_at,
            status_catalog.name AS status_name, status_catalog.description AS status_description
        FROM order_status
        LEFT JOIN status_catalog ON order_status.status_catalog_id = status_catalog.id
        WHERE order_status.order_id = $1
        ORDER BY order_status.created_at DESC
        ",
    )
    .bind(order_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch status history of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn set_driver<'e, E: PgExecutor<'e>>(e: E, order_id: i32, driver_id: i32) -> Result<()> {
    sqlx::query(
        "
        UPDATE orders SET
            driver_id = $1,
            updated_at = NOW()
        WHERE id = $2
        ",
    )
    .bind(driver_id)
    .bind(order_id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to set driver {} on order {}: {}",
            driver_id,
            order_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn order_total_sums_exact_decimals() {
        let burger = BigDecimal::from_str("12.99").unwrap();
        let fries = BigDecimal::from_str("4.99").unwrap();

        let total = order_total([(&burger, 2), (&fries, 1)]);

        assert_eq!(total, BigDecimal::from_str("30.97").unwrap());
        assert_eq!(total.to_string(), "30.97");
    }

    #[test]
    fn order_total_of_no_lines_is_zero() {
        let lines: Vec<(&BigDecimal, i32)> = Vec::new();
        assert_eq!(order_total(lines), BigDecimal::from(0));
    }
}
