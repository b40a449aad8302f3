//! Tweet endpoints: posting, lookup and deletion

use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::api::users::UserResponse;
use crate::domain::tweet::TweetWithAuthor;

/// Tweet form
#[derive(Debug, Deserialize)]
pub struct CreateTweetForm {
    pub text: String,
}

/// Tweet response with its author embedded
#[derive(Debug, Serialize)]
pub struct TweetResponse {
    pub id: i64,
    pub text: String,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
}

impl TweetResponse {
    pub fn from_tweet(tweet: &TweetWithAuthor) -> Self {
        Self {
            id: tweet.id,
            text: tweet.text.clone(),
            author: UserResponse::from_user(&tweet.author),
            created_at: tweet.created_at,
        }
    }
}

/// Post a tweet as the authenticated user
///
/// POST /tweet (Basic Auth)
pub async fn create_tweet(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<CreateTweetForm>,
) -> Result<Json<TweetResponse>, ApiError> {
    let tweet = state.tweet_service.post(&form.text, &user).await?;

    info!(id = tweet.id, author = %user.handle, "tweet posted");

    Ok(Json(TweetResponse::from_tweet(&tweet)))
}

/// Get a tweet by id
///
/// GET /tweet/{id}
pub async fn get_tweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TweetResponse>, ApiError> {
    let tweet = state.tweet_service.get(id).await?;

    Ok(Json(TweetResponse::from_tweet(&tweet)))
}

/// Delete an owned tweet, returning the pre-delete snapshot
///
/// DELETE /tweet/{id} (Basic Auth)
pub async fn delete_tweet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RequireUser(user): RequireUser,
) -> Result<Json<TweetResponse>, ApiError> {
    let tweet = state.tweet_service.delete(id, &user).await?;

    info!(id = tweet.id, author = %user.handle, "tweet deleted");

    Ok(Json(TweetResponse::from_tweet(&tweet)))
}
