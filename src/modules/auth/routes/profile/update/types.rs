pub mod request {
    use crate::utils::validation::validate_contact_phone;
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
        pub name: Option<String>,
        #[validate(custom(function = "validate_contact_phone"))]
        pub contact_phone: Option<String>,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Updated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Updated(user) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": user,
                        "message": "Profile updated successfully",
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
