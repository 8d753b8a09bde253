pub mod request {
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub restaurant_id: i32,
        pub category_id: i32,
        #[validate(length(
            min = 2,
            max = 100,
            message = "Name must be between 2 and 100 characters"
        ))]
        pub name: String,
        pub description: Option<String>,
        pub ingredients: Option<String>,
        pub price: BigDecimal,
        #[validate(url(message = "Invalid image URL"))]
        pub image_url: Option<String>,
    }
}

pub mod response {
    use crate::{modules::menu_item::repository::MenuItem, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Created(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Created(menu_item) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "data": menu_item,
                        "message": "Menu item created successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidPrice,
        InsufficientPermissions,
        NotOwner,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::InvalidPrice => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Price must be greater than 0" })),
                )
                    .into_response(),
                Self::InsufficientPermissions => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Insufficient permissions" })),
                )
                    .into_response(),
                Self::NotOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "success": false,
                        "error": "You do not have permission to add menu items to this restaurant",
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
