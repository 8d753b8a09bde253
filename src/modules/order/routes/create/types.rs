pub mod request {
    use serde::{Deserialize, Serialize};
    use validator::Validate;

    // Serialize is required because the length rule on `Payload::items`
    // records the offending value in the validation error.
    #[derive(Serialize, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct LineItem {
        pub menu_item_id: i32,
        #[validate(range(min = 1, message = "Quantity must be at least 1"))]
        pub quantity: i32,
        pub comment: Option<String>,
    }

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub restaurant_id: i32,
        pub delivery_address_id: i32,
        #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
        pub items: Vec<LineItem>,
        pub comment: Option<String>,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Created(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Created(order) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "data": order,
                        "message": "Order created successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InsufficientPermissions,
        MenuItemNotFound(i32),
        MenuItemUnavailable(String),
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::InsufficientPermissions => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Insufficient permissions" })),
                )
                    .into_response(),
                Self::MenuItemNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "success": false,
                        "error": format!("Menu item with ID {} not found", id),
                    })),
                )
                    .into_response(),
                Self::MenuItemUnavailable(name) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!("Menu item {} is not available", name),
                    })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = std::result::Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request;
    use serde_json::json;
    use validator::Validate;

    fn payload(items: serde_json::Value) -> request::Payload {
        serde_json::from_value(json!({
            "restaurantId": 1,
            "deliveryAddressId": 1,
            "items": items,
        }))
        .unwrap()
    }

    #[test]
    fn order_without_items_fails_validation() {
        let errors = payload(json!([])).validate().unwrap_err();
        assert!(errors.errors().contains_key("items"));
    }

    #[test]
    fn zero_quantity_line_fails_validation() {
        let result = payload(json!([{ "menuItemId": 1, "quantity": 0 }])).validate();
        assert!(result.is_err());
    }

    #[test]
    fn single_item_order_passes_validation() {
        let result = payload(json!([{ "menuItemId": 1, "quantity": 2 }])).validate();
        assert!(result.is_ok());
    }
}
