/// Authentication building blocks
///
/// This module contains:
/// - Password hashing and verification (Argon2id)
/// - Bearer token mint and verify (HS256)
/// - The request extractor that resolves the calling user
pub mod extract;
pub mod password;
pub mod token;

pub use extract::Actor;
pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, Claims};
