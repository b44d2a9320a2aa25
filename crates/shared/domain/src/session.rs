//! Session token data produced on login.

/// Signed token together with its lifetime.
///
/// Computed fresh for every login and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// Signed token asserting the user id
    pub token: String,
    /// Lifetime in milliseconds
    pub max_age: i64,
    /// Expiry as ISO-8601 UTC with millisecond precision
    pub expiration_date: String,
}
