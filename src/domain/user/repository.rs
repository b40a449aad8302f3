//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a new user; the storage layer assigns the id and enforces
    /// handle uniqueness (duplicate handles surface as Conflict)
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Get a user by storage id
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by their unique handle (for login and lookup)
    async fn get_by_handle(&self, handle: &str) -> Result<Option<User>, DomainError>;

    /// Check if a handle is already registered
    async fn handle_exists(&self, handle: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_handle(handle).await?.is_some())
    }

    /// Replace a user's stored password digest (rehash-on-verify path)
    async fn update_password_hash(&self, id: i64, password_hash: &str)
        -> Result<(), DomainError>;

    /// Count all users
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

    /// In-memory user repository for testing.
    ///
    /// Assigns sequential ids the way the Postgres sequence does.
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<i64, User>>>,
        next_id: AtomicI64,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self {
                users: Arc::new(RwLock::new(HashMap::new())),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, user: NewUser) -> Result<User, DomainError> {
            let mut users = self.users.write().await;

            if users.values().any(|u| u.handle == user.handle) {
                return Err(DomainError::conflict(format!(
                    "handle '{}' already taken",
                    user.handle
                )));
            }

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user = User {
                id,
                name: user.name,
                handle: user.handle,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            };

            users.insert(id, user.clone());
            Ok(user)
        }

        async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.get(&id).cloned())
        }

        async fn get_by_handle(&self, handle: &str) -> Result<Option<User>, DomainError> {
            let users = self.users.read().await;
            Ok(users.values().find(|u| u.handle == handle).cloned())
        }

        async fn update_password_hash(
            &self,
            id: i64,
            password_hash: &str,
        ) -> Result<(), DomainError> {
            let mut users = self.users.write().await;

            match users.get_mut(&id) {
                Some(user) => {
                    user.password_hash = password_hash.to_string();
                    Ok(())
                }
                None => Err(DomainError::not_found(format!("user '{}' not found", id))),
            }
        }

        async fn count(&self) -> Result<usize, DomainError> {
            let users = self.users.read().await;
            Ok(users.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn new_user(name: &str, handle: &str) -> NewUser {
            NewUser {
                name: name.to_string(),
                handle: handle.to_string(),
                password_hash: "hashed_password".to_string(),
            }
        }

        #[tokio::test]
        async fn test_create_assigns_sequential_ids() {
            let repo = MockUserRepository::new();

            let alice = repo.create(new_user("Alice", "alice")).await.unwrap();
            let bob = repo.create(new_user("Bob", "bob")).await.unwrap();

            assert_eq!(alice.id, 1);
            assert_eq!(bob.id, 2);
        }

        #[tokio::test]
        async fn test_get_by_handle() {
            let repo = MockUserRepository::new();
            repo.create(new_user("Alice", "alice")).await.unwrap();

            let found = repo.get_by_handle("alice").await.unwrap();
            assert!(found.is_some());
            assert_eq!(found.unwrap().name, "Alice");

            let missing = repo.get_by_handle("bob").await.unwrap();
            assert!(missing.is_none());
        }

        #[tokio::test]
        async fn test_duplicate_handle_conflicts() {
            let repo = MockUserRepository::new();
            repo.create(new_user("Alice", "alice")).await.unwrap();

            let result = repo.create(new_user("Impostor", "alice")).await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));
        }

        #[tokio::test]
        async fn test_handle_exists() {
            let repo = MockUserRepository::new();
            repo.create(new_user("Alice", "alice")).await.unwrap();

            assert!(repo.handle_exists("alice").await.unwrap());
            assert!(!repo.handle_exists("bob").await.unwrap());
        }

        #[tokio::test]
        async fn test_update_password_hash() {
            let repo = MockUserRepository::new();
            let user = repo.create(new_user("Alice", "alice")).await.unwrap();

            repo.update_password_hash(user.id, "new_hash").await.unwrap();

            let reloaded = repo.get(user.id).await.unwrap().unwrap();
            assert_eq!(reloaded.password_hash, "new_hash");
        }

        #[tokio::test]
        async fn test_update_password_hash_missing_user() {
            let repo = MockUserRepository::new();

            let result = repo.update_password_hash(42, "new_hash").await;
            assert!(matches!(result, Err(DomainError::NotFound { .. })));
        }

        #[tokio::test]
        async fn test_count() {
            let repo = MockUserRepository::new();
            assert_eq!(repo.count().await.unwrap(), 0);

            repo.create(new_user("Alice", "alice")).await.unwrap();
            repo.create(new_user("Bob", "bob")).await.unwrap();
            assert_eq!(repo.count().await.unwrap(), 2);
        }
    }
}
