pub mod request {
    use crate::{modules::user::repository::Role, utils::validation::validate_contact_phone};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[validate(length(
            min = 2,
            max = 100,
            message = "Name must be between 2 and 100 characters"
        ))]
        pub name: String,
        #[validate(email(message = "Invalid email format"))]
        pub email: String,
        pub password: String,
        #[validate(custom(function = "validate_contact_phone"))]
        pub contact_phone: Option<String>,
        pub role: Option<Role>,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Registered { user: User, token: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered { user, token } => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "data": { "user": user, "token": token },
                        "message": "User registered successfully. Please check your email for the verification code.",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidRole,
        WeakPassword,
        EmailAlreadyInUse,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::InvalidRole => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid role" })),
                )
                    .into_response(),
                Self::WeakPassword => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Password must be at least 8 characters long and contain an uppercase letter, a lowercase letter and a number",
                    })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "success": false,
                        "error": "User with this email already exists",
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
