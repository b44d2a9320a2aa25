//! Auth service configuration.

use std::env;

use common::{DatabaseConfig, HashingConfig, ServiceConfig, TokenConfig};
use domain::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Auth service configuration, built once at startup and injected into
/// the components that need it.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// HTTP bind address
    pub server: ServiceConfig,
    /// User store connection
    pub database: DatabaseConfig,
    /// Session token signing
    pub token: TokenConfig,
    /// Password hashing
    pub hashing: HashingConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// A missing `TOKEN_SECRET` is not fatal here; logins fail with a
    /// configuration error until it is provided.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let token = TokenConfig {
            secret: get("TOKEN_SECRET"),
        };
        if token.secret_bytes().is_none() {
            tracing::warn!("TOKEN_SECRET not set, logins will fail until it is configured");
        }

        Self {
            server: ServiceConfig {
                service_name: defaults.server.service_name,
                host: get("HOST").unwrap_or(defaults.server.host),
                port: get("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            database: DatabaseConfig {
                url: get("DATABASE_URI")
                    .or_else(|| get("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
            },
            token,
            hashing: HashingConfig {
                cost: get("BCRYPT_COST")
                    .map(|raw| parse_cost(&raw, defaults.hashing.cost))
                    .unwrap_or(defaults.hashing.cost),
            },
        }
    }
}

fn parse_cost(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(cost) if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) => cost,
        _ => {
            tracing::warn!(
                value = raw,
                "BCRYPT_COST must be between {} and {}, using {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST,
                default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AuthServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AuthServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]);

        assert_eq!(config.server.addr(), "0.0.0.0:3500");
        assert_eq!(config.hashing.cost, 10);
        assert!(config.token.secret_bytes().is_none());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URI", "postgres://db/auth"),
            ("TOKEN_SECRET", "s3cret"),
            ("BCRYPT_COST", "12"),
        ]);

        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.database.url, "postgres://db/auth");
        assert_eq!(config.token.secret_bytes(), Some("s3cret".as_bytes()));
        assert_eq!(config.hashing.cost, 12);
    }

    #[test]
    fn test_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://fallback/auth")]);
        assert_eq!(config.database.url, "postgres://fallback/auth");

        let config = load(&[
            ("DATABASE_URI", "postgres://primary/auth"),
            ("DATABASE_URL", "postgres://fallback/auth"),
        ]);
        assert_eq!(config.database.url, "postgres://primary/auth");
    }

    #[test]
    fn test_out_of_range_cost_falls_back_to_default() {
        for raw in ["40", "3", "0", "ten", "-1"] {
            let config = load(&[("BCRYPT_COST", raw)]);
            assert_eq!(config.hashing.cost, 10, "BCRYPT_COST={raw}");
        }

        assert_eq!(load(&[("BCRYPT_COST", "4")]).hashing.cost, 4);
        assert_eq!(load(&[("BCRYPT_COST", "31")]).hashing.cost, 31);
    }

    #[test]
    fn test_unparsable_port_falls_back_to_default() {
        assert_eq!(load(&[("PORT", "http")]).server.port, 3500);
    }
}
