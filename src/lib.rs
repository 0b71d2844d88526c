/// Postline
///
/// A social posting service. Users register and sign in, author text posts,
/// and browse anyone's posts; comments, likes and friendships hang off them.
/// Reading is public, authoring requires a signed-in user, editing and
/// deleting are owner-only.
///
/// The crate is laid out as:
/// - `handlers`: HTTP request handlers
/// - `routes`: the route table shared by `main` and the HTTP tests
/// - `policy`: the access-control rules, in one place
/// - `models`: domain records and validated request payloads
/// - `store`: in-memory repositories
/// - `auth`: password hashing, bearer tokens, caller resolution
/// - `validators`: field checks and 422 message mapping
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod policy;
pub mod routes;
pub mod state;
pub mod store;
pub mod validators;

// Re-export the types nearly every consumer needs
pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
