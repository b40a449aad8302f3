//! Tweet entity and related types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::user::User;

/// A stored tweet.
///
/// Tweets reference exactly one author and support create/read/delete
/// only; there is no update operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    /// Storage-assigned identifier
    pub id: i64,
    /// Tweet text, bounded length
    pub text: String,
    /// Foreign key to the author's user id
    pub author_id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to persist a new tweet.
#[derive(Debug, Clone)]
pub struct NewTweet {
    pub text: String,
    pub author_id: i64,
}

/// A tweet with its author record resolved.
///
/// The author is loaded by an explicit fetch in the service layer, never
/// implicitly.
#[derive(Debug, Clone, Serialize)]
pub struct TweetWithAuthor {
    pub id: i64,
    pub text: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
}

impl TweetWithAuthor {
    pub fn new(tweet: Tweet, author: User) -> Self {
        Self {
            id: tweet.id,
            text: tweet.text,
            author,
            created_at: tweet.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_author_carries_tweet_fields() {
        let now = Utc::now();
        let tweet = Tweet {
            id: 7,
            text: "hello".to_string(),
            author_id: 1,
            created_at: now,
        };
        let author = User {
            id: 1,
            name: "Alice".to_string(),
            handle: "alice".to_string(),
            password_hash: "hash".to_string(),
            created_at: now,
        };

        let resolved = TweetWithAuthor::new(tweet, author);
        assert_eq!(resolved.id, 7);
        assert_eq!(resolved.text, "hello");
        assert_eq!(resolved.author.handle, "alice");
    }

    #[test]
    fn test_serialization_embeds_author_without_password() {
        let now = Utc::now();
        let resolved = TweetWithAuthor::new(
            Tweet {
                id: 1,
                text: "hello".to_string(),
                author_id: 1,
                created_at: now,
            },
            User {
                id: 1,
                name: "Alice".to_string(),
                handle: "alice".to_string(),
                password_hash: "$argon2id$secret".to_string(),
                created_at: now,
            },
        );

        let json = serde_json::to_string(&resolved).unwrap();
        assert!(json.contains("\"handle\":\"alice\""));
        assert!(!json.contains("argon2id"));
    }
}
