use std::net::SocketAddr;

use thiserror::Error;

use crate::services::indicators::DEFAULT_MA_WINDOW;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StoreBackend,
    pub database: Option<DatabaseConfig>,
    pub bind_addr: SocketAddr,
    /// `["*"]` allows any origin.
    pub cors_allowed_origins: Vec<String>,
    pub ma_window: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STOCK_STORE")
            .unwrap_or_else(|| "postgres".to_string())
            .to_lowercase()
            .as_str()
        {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "STOCK_STORE",
                    value: other.to_string(),
                })
            }
        };

        let database = match backend {
            StoreBackend::Memory => None,
            StoreBackend::Postgres => Some(DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
                run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            }),
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;
        let bind_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: host.clone(),
            })?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let ma_window: usize = parse_or(&lookup, "STRATEGY_MA_WINDOW", DEFAULT_MA_WINDOW)?;
        if ma_window == 0 {
            return Err(ConfigError::Invalid {
                key: "STRATEGY_MA_WINDOW",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            backend,
            database,
            bind_addr,
            cors_allowed_origins,
            ma_window,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
