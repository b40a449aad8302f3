//! User service for registration and authentication

use std::sync::Arc;

use tracing::warn;

use crate::domain::user::{NewUser, User, UserPolicy, UserRepository};
use crate::domain::DomainError;

use crate::infrastructure::auth::PasswordHasher;

/// User service wrapping validation, hashing and storage
#[derive(Debug)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    policy: UserPolicy,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        policy: UserPolicy,
    ) -> Self {
        Self {
            repository,
            hasher,
            policy,
        }
    }

    /// Register a new user.
    ///
    /// Validates all three fields against the configured policy, pre-checks
    /// handle availability, then hashes and persists. The pre-check is
    /// advisory; the storage unique index decides races.
    pub async fn register(
        &self,
        name: &str,
        handle: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        self.policy
            .validate_name(name)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        self.policy
            .validate_handle(handle)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        self.policy
            .validate_password(password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.handle_exists(handle).await? {
            return Err(DomainError::conflict(format!(
                "handle '{}' already taken",
                handle
            )));
        }

        let password_hash = self.hasher.hash(password)?;

        self.repository
            .create(NewUser {
                name: name.to_string(),
                handle: handle.to_string(),
                password_hash,
            })
            .await
    }

    /// Authenticate a user with handle and password.
    ///
    /// An unknown handle yields NotFound, a password mismatch Unauthorized;
    /// the two stay distinguishable. On success, a digest produced under
    /// outdated cost parameters is opportunistically replaced.
    pub async fn authenticate(&self, handle: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .repository
            .get_by_handle(handle)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DomainError::unauthorized(
                "invalid authentication credentials",
            ));
        }

        if self.hasher.needs_rehash(&user.password_hash) {
            // Upgrade is opportunistic; a failure here must not fail the
            // request that just authenticated correctly.
            match self.hasher.hash(password) {
                Ok(new_hash) => {
                    if let Err(e) = self
                        .repository
                        .update_password_hash(user.id, &new_hash)
                        .await
                    {
                        warn!(handle = %user.handle, "failed to store rehashed password: {}", e);
                    } else {
                        return Ok(User {
                            password_hash: new_hash,
                            ..user
                        });
                    }
                }
                Err(e) => {
                    warn!(handle = %user.handle, "failed to rehash password: {}", e);
                }
            }
        }

        Ok(user)
    }

    /// Get a user by their unique handle
    pub async fn get_by_handle(&self, handle: &str) -> Result<User, DomainError> {
        self.repository
            .get_by_handle(handle)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))
    }

    /// Count registered users (readiness probe)
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
