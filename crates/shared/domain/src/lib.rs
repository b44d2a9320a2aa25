//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! credentials as submitted by clients, the persisted user, the hashed
//! password value object and the session token data handed back on login.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod password;
pub mod session;
pub mod user;

pub use constants::*;
pub use credentials::Credentials;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use session::TokenData;
pub use user::{NewUser, User};
