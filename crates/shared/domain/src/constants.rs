//! Domain-level constants.
//!
//! These constants define the business rules of registration and login,
//! including the exact messages clients rely on.

// =============================================================================
// Password hashing
// =============================================================================

/// Default bcrypt cost factor for newly registered passwords
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

// =============================================================================
// Session token
// =============================================================================

/// Lifetime of an issued session token in milliseconds (15 minutes)
pub const TOKEN_MAX_AGE_MS: i64 = 15 * 60 * 1000;

/// Milliseconds per second (for token claim calculation)
pub const MILLIS_PER_SECOND: i64 = 1000;

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE_NAME: &str = "token";

// =============================================================================
// Client-facing messages
// =============================================================================

/// Registration succeeded
pub const MSG_REGISTERED: &str = "registered";

/// Registration attempted without email or password
pub const MSG_REQUIRED_EMAIL_AND_PASSWORD: &str = "Required email and password";

/// Login attempted without email or password
pub const MSG_INCOMPLETE_CREDENTIALS: &str = "Incomplete credentials";

/// Unknown email or wrong password (deliberately indistinguishable)
pub const MSG_WRONG_EMAIL_OR_PASSWORD: &str = "Wrong email or password";

/// Server is missing a required secret
pub const MSG_MISSING_ENVIRONMENT_CONFIG: &str = "Missing environment config";
