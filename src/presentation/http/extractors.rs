// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    application::dto::AuthenticatedUser,
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn state_from(parts: &mut Parts) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, &())
        .await
        .map(|Extension(state)| state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let user = app_state
            .services
            .token_manager()
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let user = app_state
                    .services
                    .token_manager()
                    .authenticate(header.token())
                    .await
                    .map_err(HttpError::from_error)?;
                Ok(Self(Some(user)))
            }
            None => Ok(Self(None)),
        }
    }
}
