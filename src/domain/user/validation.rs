//! User field validation against configured bounds and patterns

use regex::Regex;
use thiserror::Error;

use crate::config::UsersConfig;
use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("name has to be more than {min} characters and less than {max}")]
    NameLength { min: usize, max: usize },

    #[error("name has to match {pattern}")]
    NamePattern { pattern: String },

    #[error("handle has to be more than {min} characters and less than {max}")]
    HandleLength { min: usize, max: usize },

    #[error("handle has to match {pattern}")]
    HandlePattern { pattern: String },

    #[error("password has to be more than {min} characters and less than {max}")]
    PasswordLength { min: usize, max: usize },
}

/// Validation policy for user-submitted registration fields.
///
/// Bounds are exclusive on both ends, matching the configured
/// `min < len < max` contract. Patterns are compiled once at startup.
#[derive(Debug, Clone)]
pub struct UserPolicy {
    name_pattern: Regex,
    min_name_length: usize,
    max_name_length: usize,
    handle_pattern: Regex,
    min_handle_length: usize,
    max_handle_length: usize,
    min_password_length: usize,
    max_password_length: usize,
}

impl UserPolicy {
    pub fn new(config: &UsersConfig) -> Result<Self, DomainError> {
        let name_pattern = Regex::new(&config.name_pattern).map_err(|e| {
            DomainError::configuration(format!(
                "invalid name pattern '{}': {}",
                config.name_pattern, e
            ))
        })?;
        let handle_pattern = Regex::new(&config.handle_pattern).map_err(|e| {
            DomainError::configuration(format!(
                "invalid handle pattern '{}': {}",
                config.handle_pattern, e
            ))
        })?;

        Ok(Self {
            name_pattern,
            min_name_length: config.min_name_length,
            max_name_length: config.max_name_length,
            handle_pattern,
            min_handle_length: config.min_handle_length,
            max_handle_length: config.max_handle_length,
            min_password_length: config.min_password_length,
            max_password_length: config.max_password_length,
        })
    }

    /// Validate a display name: exclusive length bounds plus pattern match.
    pub fn validate_name(&self, name: &str) -> Result<(), UserValidationError> {
        let len = name.chars().count();

        if !(self.min_name_length < len && len < self.max_name_length) {
            return Err(UserValidationError::NameLength {
                min: self.min_name_length,
                max: self.max_name_length,
            });
        }

        if !self.name_pattern.is_match(name) {
            return Err(UserValidationError::NamePattern {
                pattern: self.name_pattern.as_str().to_string(),
            });
        }

        Ok(())
    }

    /// Validate a handle: exclusive length bounds plus pattern match.
    ///
    /// Uniqueness is a storage concern and checked separately.
    pub fn validate_handle(&self, handle: &str) -> Result<(), UserValidationError> {
        let len = handle.chars().count();

        if !(self.min_handle_length < len && len < self.max_handle_length) {
            return Err(UserValidationError::HandleLength {
                min: self.min_handle_length,
                max: self.max_handle_length,
            });
        }

        if !self.handle_pattern.is_match(handle) {
            return Err(UserValidationError::HandlePattern {
                pattern: self.handle_pattern.as_str().to_string(),
            });
        }

        Ok(())
    }

    /// Validate a password: exclusive length bounds, no pattern.
    ///
    /// Checked on the raw submitted string, never the hashed form.
    pub fn validate_password(&self, password: &str) -> Result<(), UserValidationError> {
        let len = password.chars().count();

        if !(self.min_password_length < len && len < self.max_password_length) {
            return Err(UserValidationError::PasswordLength {
                min: self.min_password_length,
                max: self.max_password_length,
            });
        }

        Ok(())
    }
}
