//! HTTP API surface

pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tweets;
pub mod types;
pub mod users;

pub use router::create_router;
pub use state::AppState;
