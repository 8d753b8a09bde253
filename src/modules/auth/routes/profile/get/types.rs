pub mod response {
    use crate::modules::user::repository::User;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Profile(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Profile(user) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "User not found" })),
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
