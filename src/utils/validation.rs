use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": errors })),
    )
}

pub fn validate_contact_phone(phone: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^\+?[0-9][0-9 \-()]{8,15}$").expect("Invalid phone number regex");
    match regex.is_match(phone) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_CONTACT_PHONE")
            .with_message(Cow::from("Contact phone must be a valid phone number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_international_numbers() {
        assert!(validate_contact_phone("08012345678").is_ok());
        assert!(validate_contact_phone("+2348012345678").is_ok());
        assert!(validate_contact_phone("+1 (555) 123-4567").is_ok());
    }

    #[test]
    fn rejects_short_and_alphabetic_input() {
        assert!(validate_contact_phone("12345").is_err());
        assert!(validate_contact_phone("not-a-number").is_err());
    }
}
