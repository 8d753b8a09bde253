use crate::modules::user::repository::{Role, User};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum Error {
    SigningFailed,
    ExpiredToken,
    InvalidToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

pub fn sign(secret: &str, expiry_secs: i64, user: &User) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
        iat: now,
        exp: now + expiry_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Error occurred while trying to sign a bearer token: {}", err);
        Error::SigningFailed
    })
}

pub fn verify(secret: &str, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => Error::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn test_user() -> User {
        User {
            id: 42,
            name: String::from("Jane"),
            email: String::from("jane@example.com"),
            password: String::from("$2b$12$irrelevant"),
            contact_phone: None,
            phone_verified: false,
            email_verified: false,
            confirmation_code: None,
            password_reset_token: None,
            password_reset_expires: None,
            role: Role::Customer,
            created_at: NaiveDateTime::default(),
            updated_at: None,
        }
    }

    #[test]
    fn token_round_trips_identity_claims() {
        let token = sign("secret", 604_800, &test_user()).unwrap();
        let claims = verify("secret", &token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = sign("secret", 604_800, &test_user()).unwrap();
        assert!(matches!(
            verify("other-secret", &token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: 42,
            email: String::from("jane@example.com"),
            role: Role::Customer,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(matches!(verify("secret", &token), Err(Error::ExpiredToken)));
    }
}
