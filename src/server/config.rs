//! Environment-driven server configuration.

use std::{
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};

use crate::server::error::config::ConfigError;

static DEFAULT_PORT: u16 = 3000;
static DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// `DATABASE_URL` is required, `HOST`, `PORT` and `DATABASE_MAX_CONNECTIONS` fall back to
    /// defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: optional(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            host: optional("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: optional("PORT", DEFAULT_PORT)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn optional<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}
