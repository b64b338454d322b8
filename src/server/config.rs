use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Credentials for the staff account created at startup.
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Whether unauthenticated callers may place orders.
    pub allow_anonymous_orders: bool,
    /// Single browser origin allowed by CORS. `None` allows any origin.
    pub cors_allowed_origin: Option<String>,

    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = optional_var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let allow_anonymous_orders = match optional_var("ALLOW_ANONYMOUS_ORDERS") {
            Some(value) => parse_bool("ALLOW_ANONYMOUS_ORDERS", &value)?,
            None => false,
        };

        let admin = match (optional_var("ADMIN_USERNAME"), optional_var("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminBootstrap {
                username,
                password,
                email: optional_var("ADMIN_EMAIL").unwrap_or_default(),
            }),
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            allow_anonymous_orders,
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
            admin,
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
