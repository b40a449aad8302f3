//! Per-request HTTP Basic authentication

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;

/// Extractor that authenticates the request via Basic Auth credentials.
///
/// Every request re-authenticates; there are no sessions. An unknown
/// handle surfaces as 404, a password mismatch as 401, matching the
/// upstream API contract.
#[derive(Debug, Clone)]
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = extract_basic_credentials(&parts.headers)?;

        debug!(handle = %credentials.handle, "authenticating request");

        let user = state
            .user_service
            .authenticate(&credentials.handle, &credentials.password)
            .await?;

        Ok(RequireUser(user))
    }
}

/// Decoded Basic Auth credential pair
#[derive(Debug)]
pub struct BasicCredentials {
    pub handle: String,
    pub password: String,
}

/// Extract and decode credentials from the Authorization header
pub fn extract_basic_credentials(
    headers: &axum::http::HeaderMap,
) -> Result<BasicCredentials, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(missing_credentials)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

    let encoded = auth_str
        .strip_prefix("Basic ")
        .ok_or_else(missing_credentials)?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| ApiError::unauthorized("Invalid Basic Auth encoding"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::unauthorized("Invalid Basic Auth encoding"))?;

    // Password may itself hold ':', the handle may not
    let (handle, password) = decoded
        .split_once(':')
        .ok_or_else(|| ApiError::unauthorized("Invalid Basic Auth credentials"))?;

    Ok(BasicCredentials {
        handle: handle.to_string(),
        password: password.to_string(),
    })
}

fn missing_credentials() -> ApiError {
    ApiError::unauthorized(
        "Authentication required. Provide credentials via 'Authorization: Basic' header",
    )
}
