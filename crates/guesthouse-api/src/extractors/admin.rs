//! Admin session extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use guesthouse_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the dashboard session token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Extractor that admits a request only with a valid dashboard session.
#[derive(Debug, Clone)]
pub struct AdminToken(pub String);

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiError(AppError::authentication("Missing admin session token"))
            })?;

        state.admin_service.authorize(token)?;
        Ok(Self(token.to_string()))
    }
}
