pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Cancelled,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cancelled => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Order cancelled successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NotFound,
        NotPermitted,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "success": false,
                        "error": "Order not found or cannot be cancelled",
                    })),
                )
                    .into_response(),
                Self::NotPermitted => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "success": false,
                        "error": "You do not have permission to cancel this order",
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
