//! Tweet domain: entity, validation policy and repository trait

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{NewTweet, Tweet, TweetWithAuthor};
pub use repository::TweetRepository;
pub use validation::{TweetPolicy, TweetValidationError};
