//! Tweet text validation

use thiserror::Error;

use crate::config::TweetsConfig;

/// Errors that can occur during tweet validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TweetValidationError {
    #[error("tweet has to be at most {max} characters")]
    TextTooLong { max: usize },
}

/// Validation policy for tweet text.
///
/// Unlike user fields, the bound is an inclusive maximum only; there is no
/// lower bound.
#[derive(Debug, Clone)]
pub struct TweetPolicy {
    max_length: usize,
}

impl TweetPolicy {
    pub fn new(config: &TweetsConfig) -> Self {
        Self {
            max_length: config.max_length,
        }
    }

    pub fn validate_text(&self, text: &str) -> Result<(), TweetValidationError> {
        if text.chars().count() > self.max_length {
            return Err(TweetValidationError::TextTooLong {
                max: self.max_length,
            });
        }

        Ok(())
    }
}
