//! User endpoints: registration and lookup

use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::api::tweets::TweetResponse;
use crate::domain::user::User;

/// Registration form
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub name: String,
    pub handle: String,
    pub password: String,
}

/// User response (safe to expose; no password field)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            handle: user.handle.clone(),
            created_at: user.created_at,
        }
    }
}

/// Register a new user
///
/// POST /users/create
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .register(&form.name, &form.handle, &form.password)
        .await?;

    info!(handle = %user.handle, id = user.id, "user registered");

    Ok(Json(UserResponse::from_user(&user)))
}

/// Get a user by handle
///
/// GET /users/@{handle}
pub async fn get_user(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let handle = strip_handle_prefix(&handle)?;
    let user = state.user_service.get_by_handle(handle).await?;

    Ok(Json(UserResponse::from_user(&user)))
}

/// List a user's tweets, authors embedded
///
/// GET /users/@{handle}/tweets
pub async fn list_tweets(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Vec<TweetResponse>>, ApiError> {
    let handle = strip_handle_prefix(&handle)?;
    let tweets = state.tweet_service.list_by_user(handle).await?;

    Ok(Json(tweets.iter().map(TweetResponse::from_tweet).collect()))
}

/// User paths address handles as `@handle`; anything else is a miss.
fn strip_handle_prefix(raw: &str) -> Result<&str, ApiError> {
    raw.strip_prefix('@')
        .ok_or_else(|| ApiError::not_found("user not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_handle_prefix() {
        assert_eq!(strip_handle_prefix("@alice").unwrap(), "alice");
        assert!(strip_handle_prefix("alice").is_err());
        assert!(strip_handle_prefix("").is_err());
    }

    #[test]
    fn test_user_response_excludes_password() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            handle: "alice".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from_user(&user)).unwrap();
        assert!(json.contains("\"handle\":\"alice\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }
}
