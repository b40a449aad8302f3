//! PostgreSQL tweet repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::tweet::{NewTweet, Tweet, TweetRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of TweetRepository
#[derive(Debug, Clone)]
pub struct PostgresTweetRepository {
    pool: PgPool,
}

impl PostgresTweetRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PostgresTweetRepository {
    async fn create(&self, tweet: NewTweet) -> Result<Tweet, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tweets (text, author_id, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, text, author_id, created_at
            "#,
        )
        .bind(&tweet.text)
        .bind(tweet.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create tweet: {}", e)))?;

        Ok(row_to_tweet(&row))
    }

    async fn get(&self, id: i64) -> Result<Option<Tweet>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, text, author_id, created_at
            FROM tweets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get tweet: {}", e)))?;

        Ok(row.as_ref().map(row_to_tweet))
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Tweet>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, text, author_id, created_at
            FROM tweets
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list tweets: {}", e)))?;

        Ok(rows.iter().map(row_to_tweet).collect())
    }

    async fn delete_owned(
        &self,
        id: i64,
        author_id: i64,
    ) -> Result<Option<Tweet>, DomainError> {
        // Ownership is part of the predicate: a tweet under another author
        // deletes nothing and is indistinguishable from a missing id.
        let row = sqlx::query(
            r#"
            DELETE FROM tweets
            WHERE id = $1 AND author_id = $2
            RETURNING id, text, author_id, created_at
            "#,
        )
        .bind(id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to delete tweet: {}", e)))?;

        Ok(row.as_ref().map(row_to_tweet))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tweets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count tweets: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_tweet(row: &sqlx::postgres::PgRow) -> Tweet {
    Tweet {
        id: row.get("id"),
        text: row.get("text"),
        author_id: row.get("author_id"),
        created_at: row.get("created_at"),
    }
}
