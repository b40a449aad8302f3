//! Infrastructure: hashing, storage implementations and services

pub mod auth;
pub mod logging;
pub mod storage;
pub mod tweet;
pub mod user;
