pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(message = "Invalid email format"))]
        pub email: String,
    }
}

pub mod response {
    use crate::utils::validation;
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ResetRequested,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ResetRequested => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Password reset link sent to your email",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UserNotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
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
