//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::tweet::TweetService;
use crate::infrastructure::user::UserService;

/// Application state containing the shared services.
///
/// Built once at startup from explicit configuration; lives for the
/// process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub tweet_service: Arc<TweetService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, tweet_service: Arc<TweetService>) -> Self {
        Self {
            user_service,
            tweet_service,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::config::{SecurityConfig, TweetsConfig, UsersConfig};
    use crate::domain::tweet::repository::mock::MockTweetRepository;
    use crate::domain::tweet::TweetPolicy;
    use crate::domain::user::repository::mock::MockUserRepository;
    use crate::domain::user::UserPolicy;
    use crate::infrastructure::auth::Argon2Hasher;

    /// State over in-memory repositories with fast hashing parameters
    pub fn mock_state() -> AppState {
        let users = Arc::new(MockUserRepository::new());
        let tweets = Arc::new(MockTweetRepository::new());

        let security = SecurityConfig {
            salt: "salt".to_string(),
            pepper: "pepper".to_string(),
            time_cost: 1,
            memory_cost: 1024,
            parallelism: 1,
        };
        let hasher = Arc::new(Argon2Hasher::new(&security).unwrap());

        let user_policy = UserPolicy::new(&UsersConfig::default()).unwrap();
        let tweet_policy = TweetPolicy::new(&TweetsConfig::default());

        let user_service = Arc::new(UserService::new(users.clone(), hasher, user_policy));
        let tweet_service = Arc::new(TweetService::new(tweets, users, tweet_policy));

        AppState::new(user_service, tweet_service)
    }
}
