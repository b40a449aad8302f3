//! Embedded schema migrations

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// A single schema migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub up: &'static str,
}

/// All migrations in apply order
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration {
            version: 1,
            description: "create users table",
            up: r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                handle TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );
            CREATE UNIQUE INDEX IF NOT EXISTS users_handle_key ON users (handle);
            "#,
        },
        Migration {
            version: 2,
            description: "create tweets table",
            up: r#"
            CREATE TABLE IF NOT EXISTS tweets (
                id BIGSERIAL PRIMARY KEY,
                text TEXT NOT NULL,
                author_id BIGINT NOT NULL REFERENCES users (id),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );
            CREATE INDEX IF NOT EXISTS tweets_author_id_idx ON tweets (author_id);
            "#,
        },
    ]
}

/// Applies embedded migrations, tracking them in a `_migrations` table
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending migrations
    pub async fn run(&self) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        for migration in migrations() {
            self.run_migration(&migration).await?;
        }

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read migration version: {}", e)))
    }

    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
                .bind(migration.version)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check migration status: {}", e))
                })?;

        if applied {
            return Ok(());
        }

        // Migration bodies may hold several statements
        sqlx::raw_sql(migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered_and_unique() {
        let all = migrations();

        let mut versions: Vec<i64> = all.iter().map(|m| m.version).collect();
        let sorted = versions.clone();
        versions.dedup();

        assert_eq!(versions, sorted);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_schema_enforces_handle_uniqueness() {
        // The unique index is the authority for the registration race
        let users = &migrations()[0];
        assert!(users.up.contains("UNIQUE INDEX"));
        assert!(users.up.contains("handle"));
    }

    #[test]
    fn test_tweets_reference_users() {
        let tweets = &migrations()[1];
        assert!(tweets.up.contains("REFERENCES users"));
    }
}
