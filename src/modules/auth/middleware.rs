use super::service;
use crate::{modules::user::repository::Role, types::Context};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{self, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json, RequestPartsExt,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Serialize, Clone, Debug)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl From<service::token::Claims> for AuthUser {
    fn from(claims: service::token::Claims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        }
    }
}

enum Error {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "Access token is required" })),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::FORBIDDEN,
                Json(json!({ "success": false, "error": "Invalid or expired token" })),
            )
                .into_response(),
        }
    }
}

fn get_token_from_header(header: &str) -> Option<&str> {
    header.split(' ').nth(1)
}

async fn get_user_from_parts(parts: &mut Parts) -> Result<AuthUser, Error> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|_| Error::InvalidToken)?;
    let headers = parts
        .extract::<HeaderMap>()
        .await
        .map_err(|_| Error::MissingToken)?;

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingToken)?;
    let token = get_token_from_header(auth_header).ok_or(Error::MissingToken)?;

    service::token::verify(&ctx.auth.jwt_secret, token)
        .map(AuthUser::from)
        .map_err(|_| Error::InvalidToken)
}

/// Rejects the request when no valid bearer token is attached.
pub struct Auth {
    pub user: AuthUser,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        get_user_from_parts(parts)
            .await
            .map(|user| Auth { user })
            .map_err(IntoResponse::into_response)
    }
}

/// Like [`Auth`] but never rejects, a bad or absent token simply yields `None`.
pub struct OptionalAuth(pub Option<AuthUser>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OptionalAuth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(get_user_from_parts(parts).await.ok()))
    }
}
