//! Password hashing using Argon2 with configuration-driven cost parameters

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use std::fmt::Debug;

use crate::config::SecurityConfig;
use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password into a PHC string
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a stored digest.
    ///
    /// Mismatch is a normal boolean outcome, not an error.
    fn verify(&self, password: &str, hash: &str) -> bool;

    /// Whether the stored digest was produced under cost parameters that
    /// differ from the current configuration. Unparseable digests count as
    /// needing a rehash.
    fn needs_rehash(&self, hash: &str) -> bool;
}

/// Argon2id hasher.
///
/// The configured static salt and pepper are wrapped around the password
/// before hashing; Argon2 adds its own per-hash random salt, so equal
/// passwords still produce distinct digests.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    salt: String,
    pepper: String,
    params: Params,
}

impl Argon2Hasher {
    pub fn new(config: &SecurityConfig) -> Result<Self, DomainError> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            None,
        )
        .map_err(|e| DomainError::configuration(format!("invalid argon2 parameters: {}", e)))?;

        Ok(Self {
            salt: config.salt.clone(),
            pepper: config.pepper.clone(),
            params,
        })
    }

    fn context(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn peppered(&self, password: &str) -> String {
        format!("{}{}{}", self.salt, password, self.pepper)
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.context()
            .hash_password(self.peppered(password).as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Cost parameters come from the stored digest, so digests produced
        // under older configurations still verify.
        self.context()
            .verify_password(self.peppered(password).as_bytes(), &parsed_hash)
            .is_ok()
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return true,
        };

        match Params::try_from(&parsed_hash) {
            Ok(stored) => {
                stored.m_cost() != self.params.m_cost()
                    || stored.t_cost() != self.params.t_cost()
                    || stored.p_cost() != self.params.p_cost()
            }
            Err(_) => true,
        }
    }
}
