//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Seed for reproducible event ids. Random ids when unset.
    pub id_seed: Option<u64>,
}

impl Config {
    /// Reads `HOST`, `PORT`, and `ANDARA_ID_SEED` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let id_seed = lookup("ANDARA_ID_SEED")
            .map(|raw| {
                raw.parse().map_err(|e| {
                    AppError::Config(format!("ANDARA_ID_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            id_seed,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a socket
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
