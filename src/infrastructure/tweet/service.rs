//! Tweet service: posting, lookup and ownership-scoped deletion

use std::sync::Arc;

use crate::domain::tweet::{NewTweet, TweetPolicy, TweetRepository, TweetWithAuthor};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Tweet service wrapping validation and storage.
///
/// Authors are resolved by explicit fetches against the user repository;
/// nothing is loaded lazily.
#[derive(Debug)]
pub struct TweetService {
    tweets: Arc<dyn TweetRepository>,
    users: Arc<dyn UserRepository>,
    policy: TweetPolicy,
}

impl TweetService {
    pub fn new(
        tweets: Arc<dyn TweetRepository>,
        users: Arc<dyn UserRepository>,
        policy: TweetPolicy,
    ) -> Self {
        Self {
            tweets,
            users,
            policy,
        }
    }

    /// Post a tweet as the authenticated user
    pub async fn post(&self, text: &str, author: &User) -> Result<TweetWithAuthor, DomainError> {
        self.policy
            .validate_text(text)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let tweet = self
            .tweets
            .create(NewTweet {
                text: text.to_string(),
                author_id: author.id,
            })
            .await?;

        Ok(TweetWithAuthor::new(tweet, author.clone()))
    }

    /// Get a tweet by id with its author resolved
    pub async fn get(&self, id: i64) -> Result<TweetWithAuthor, DomainError> {
        let tweet = self
            .tweets
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("tweet not found"))?;

        let author = self
            .users
            .get(tweet.author_id)
            .await?
            .ok_or_else(|| {
                DomainError::storage(format!(
                    "tweet {} references missing author {}",
                    tweet.id, tweet.author_id
                ))
            })?;

        Ok(TweetWithAuthor::new(tweet, author))
    }

    /// List all tweets by a user, resolved by handle.
    ///
    /// An unknown handle propagates as NotFound.
    pub async fn list_by_user(&self, handle: &str) -> Result<Vec<TweetWithAuthor>, DomainError> {
        let author = self
            .users
            .get_by_handle(handle)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))?;

        let tweets = self.tweets.list_by_author(author.id).await?;

        Ok(tweets
            .into_iter()
            .map(|tweet| TweetWithAuthor::new(tweet, author.clone()))
            .collect())
    }

    /// Delete a tweet owned by the authenticated user, returning the
    /// pre-delete snapshot.
    ///
    /// "Exists but owned by someone else" and "does not exist" are the same
    /// NotFound to the caller.
    pub async fn delete(&self, id: i64, author: &User) -> Result<TweetWithAuthor, DomainError> {
        let tweet = self
            .tweets
            .delete_owned(id, author.id)
            .await?
            .ok_or_else(|| DomainError::not_found("tweet not found"))?;

        Ok(TweetWithAuthor::new(tweet, author.clone()))
    }

    /// Count stored tweets (readiness probe)
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.tweets.count().await
    }
}
