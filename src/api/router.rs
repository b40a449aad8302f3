//! HTTP route table

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::state::AppState;
use crate::api::{health, tweets, users};

/// Build the application router over the shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/live", get(health::live))
        .route("/ready", get(health::ready))
        .route("/users/create", post(users::create_user))
        .route("/users/{handle}", get(users::get_user))
        .route("/users/{handle}/tweets", get(users::list_tweets))
        .route("/tweet", post(tweets::create_tweet))
        .route("/tweet/{id}", get(tweets::get_tweet))
        .route("/tweet/{id}", delete(tweets::delete_tweet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
