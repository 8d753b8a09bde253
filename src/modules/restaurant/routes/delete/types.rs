pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Deleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Deleted => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Restaurant deleted successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InsufficientPermissions,
        NotOwner,
        NotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InsufficientPermissions => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Insufficient permissions" })),
                )
                    .into_response(),
                Self::NotOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "success": false,
                        "error": "You do not have permission to delete this restaurant",
                    })),
                )
                    .into_response(),
                Self::NotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Restaurant not found" })),
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
