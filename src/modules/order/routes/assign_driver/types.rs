pub mod request {
    use serde::Deserialize;

    /// `driver_id` is the driver's user id, the externally visible key.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub driver_id: i32,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Assigned,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Assigned => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Driver assigned to order successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InsufficientPermissions,
        OrderNotFound,
        DriverUnavailable,
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
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Order not found" })),
                )
                    .into_response(),
                Self::DriverUnavailable => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Driver not found or not available",
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
