//! Tweet repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewTweet, Tweet};
use crate::domain::DomainError;

/// Repository trait for tweet storage
#[async_trait]
pub trait TweetRepository: Send + Sync + Debug {
    /// Persist a new tweet; the storage layer assigns the id
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, DomainError>;

    /// Get a tweet by id
    async fn get(&self, id: i64) -> Result<Option<Tweet>, DomainError>;

    /// List all tweets by a given author, oldest first
    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Tweet>, DomainError>;

    /// Delete a tweet owned by the given author and return the pre-delete
    /// snapshot.
    ///
    /// Ownership is part of the lookup: a tweet that exists under a
    /// different author yields `None`, indistinguishable from a missing id.
    async fn delete_owned(&self, id: i64, author_id: i64)
        -> Result<Option<Tweet>, DomainError>;

    /// Count all tweets
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory tweet repository for testing
    #[derive(Debug, Default)]
    pub struct MockTweetRepository {
        tweets: Arc<RwLock<HashMap<i64, Tweet>>>,
        next_id: AtomicI64,
    }

    impl MockTweetRepository {
        pub fn new() -> Self {
            Self {
                tweets: Arc::new(RwLock::new(HashMap::new())),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl TweetRepository for MockTweetRepository {
        async fn create(&self, tweet: NewTweet) -> Result<Tweet, DomainError> {
            let mut tweets = self.tweets.write().await;

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let tweet = Tweet {
                id,
                text: tweet.text,
                author_id: tweet.author_id,
                created_at: Utc::now(),
            };

            tweets.insert(id, tweet.clone());
            Ok(tweet)
        }

        async fn get(&self, id: i64) -> Result<Option<Tweet>, DomainError> {
            let tweets = self.tweets.read().await;
            Ok(tweets.get(&id).cloned())
        }

        async fn list_by_author(&self, author_id: i64) -> Result<Vec<Tweet>, DomainError> {
            let tweets = self.tweets.read().await;

            let mut result: Vec<Tweet> = tweets
                .values()
                .filter(|t| t.author_id == author_id)
                .cloned()
                .collect();
            result.sort_by_key(|t| t.id);

            Ok(result)
        }

        async fn delete_owned(
            &self,
            id: i64,
            author_id: i64,
        ) -> Result<Option<Tweet>, DomainError> {
            let mut tweets = self.tweets.write().await;

            let owned = matches!(tweets.get(&id), Some(t) if t.author_id == author_id);
            if !owned {
                return Ok(None);
            }

            Ok(tweets.remove(&id))
        }

        async fn count(&self) -> Result<usize, DomainError> {
            let tweets = self.tweets.read().await;
            Ok(tweets.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn new_tweet(text: &str, author_id: i64) -> NewTweet {
            NewTweet {
                text: text.to_string(),
                author_id,
            }
        }

        #[tokio::test]
        async fn test_create_and_get() {
            let repo = MockTweetRepository::new();

            let tweet = repo.create(new_tweet("hello", 1)).await.unwrap();
            assert_eq!(tweet.id, 1);

            let found = repo.get(tweet.id).await.unwrap();
            assert_eq!(found, Some(tweet));
        }

        #[tokio::test]
        async fn test_list_by_author_ordered() {
            let repo = MockTweetRepository::new();

            repo.create(new_tweet("first", 1)).await.unwrap();
            repo.create(new_tweet("other author", 2)).await.unwrap();
            repo.create(new_tweet("second", 1)).await.unwrap();

            let tweets = repo.list_by_author(1).await.unwrap();
            assert_eq!(tweets.len(), 2);
            assert_eq!(tweets[0].text, "first");
            assert_eq!(tweets[1].text, "second");
        }

        #[tokio::test]
        async fn test_delete_owned_returns_snapshot() {
            let repo = MockTweetRepository::new();
            let tweet = repo.create(new_tweet("hello", 1)).await.unwrap();

            let deleted = repo.delete_owned(tweet.id, 1).await.unwrap();
            assert_eq!(deleted, Some(tweet.clone()));

            assert!(repo.get(tweet.id).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_delete_owned_wrong_author_is_none() {
            let repo = MockTweetRepository::new();
            let tweet = repo.create(new_tweet("hello", 1)).await.unwrap();

            // Same observable outcome as a missing id
            let wrong_owner = repo.delete_owned(tweet.id, 2).await.unwrap();
            let missing = repo.delete_owned(9999, 2).await.unwrap();
            assert!(wrong_owner.is_none());
            assert!(missing.is_none());

            // Tweet still present
            assert!(repo.get(tweet.id).await.unwrap().is_some());
        }

        #[tokio::test]
        async fn test_count() {
            let repo = MockTweetRepository::new();
            assert_eq!(repo.count().await.unwrap(), 0);

            repo.create(new_tweet("one", 1)).await.unwrap();
            repo.create(new_tweet("two", 1)).await.unwrap();
            assert_eq!(repo.count().await.unwrap(), 2);
        }
    }
}
