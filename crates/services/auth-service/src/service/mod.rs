//! Authentication business logic.

mod auth_service;
mod registrar;
mod session_issuer;
pub mod token;

pub use auth_service::{AuthService, Authenticator};
pub use registrar::Registrar;
pub use session_issuer::{Session, SessionIssuer};
pub use token::Claims;
