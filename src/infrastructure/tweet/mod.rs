//! Tweet infrastructure: Postgres repository and service

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresTweetRepository;
pub use service::TweetService;
