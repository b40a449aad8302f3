//! chirp - a small microblogging backend
//!
//! Users register with a handle, display name and password, authenticate
//! via HTTP Basic Auth on every request, and post short tweets backed by
//! Postgres. Passwords are hashed with Argon2id and transparently
//! re-hashed when the configured parameters get stronger.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use api::state::AppState;
use domain::tweet::TweetPolicy;
use domain::user::UserPolicy;
use infrastructure::auth::Argon2Hasher;
use infrastructure::storage::{ensure_database_exists, PostgresMigrator};
use infrastructure::tweet::{PostgresTweetRepository, TweetService};
use infrastructure::user::{PostgresUserRepository, UserService};

/// Create the application state with all services initialized.
///
/// Connects to Postgres (creating the database first when configured to),
/// runs pending migrations and wires the repositories, hasher and
/// validation policies into the services.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.database.create_if_missing {
        ensure_database_exists(&config.database.url).await?;
    }

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    let migrator = PostgresMigrator::new(pool.clone());
    migrator.run().await?;
    info!(
        "Schema at version {}",
        migrator.version().await?.unwrap_or(0)
    );

    let hasher = Arc::new(Argon2Hasher::new(&config.security)?);
    let user_policy = UserPolicy::new(&config.users)?;
    let tweet_policy = TweetPolicy::new(&config.tweets);

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let tweet_repository = Arc::new(PostgresTweetRepository::new(pool));

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        hasher,
        user_policy,
    ));
    let tweet_service = Arc::new(TweetService::new(
        tweet_repository,
        user_repository,
        tweet_policy,
    ));

    Ok(AppState::new(user_service, tweet_service))
}
