pub mod response {
    use crate::modules::menu_item::repository::MenuItemDetails;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        MenuItem(MenuItemDetails),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItem(menu_item) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": menu_item })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Menu item not found" })),
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
