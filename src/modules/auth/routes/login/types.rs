pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(message = "Invalid email format"))]
        pub email: String,
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        LoggedIn { user: User, token: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LoggedIn { user, token } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": { "user": user, "token": token },
                        "message": "Login successful",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCredentials,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "success": false, "error": "Invalid email or password" })),
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
