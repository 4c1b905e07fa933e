use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8081";

pub struct Config {
    pub database_url: String,
    pub server_address: SocketAddr,
}

impl Config {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` set and `SERVER_ADDRESS` absent or a valid socket address
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` not set
    /// - `Err(ConfigError::InvalidEnvVar)` - `SERVER_ADDRESS` is not a socket address
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let address = lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_address =
            address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "SERVER_ADDRESS".to_string(),
                    value: address.clone(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url,
            server_address,
        })
    }
}
