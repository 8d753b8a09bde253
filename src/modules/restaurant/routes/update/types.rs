pub mod request {
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
        pub street_address: Option<String>,
        #[validate(length(min = 1, max = 10, message = "Zip code is required"))]
        pub zip_code: Option<String>,
        pub city_id: Option<i32>,
        pub phone: Option<String>,
        #[validate(email(message = "Invalid email format"))]
        pub email: Option<String>,
        pub description: Option<String>,
        #[validate(url(message = "Invalid image URL"))]
        pub image_url: Option<String>,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        Updated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Updated(restaurant) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": restaurant,
                        "message": "Restaurant updated successfully",
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InsufficientPermissions,
        NotOwner,
        NotFound,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Self::InsufficientPermissions => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Insufficient permissions" })),
                )
                    .into_response(),
                Self::NotOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "success": false,
                        "error": "You do not have permission to update this restaurant",
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
