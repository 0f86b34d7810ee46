use std::env;
use std::fmt;

use crate::candidates::store::{DEFAULT_PAGE_SIZE, DEFAULT_STORAGE_KEY};

/// Top-level configuration for an embedding application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let storage_key =
            env::var("APP_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());

        let page_size = match env::var("APP_PAGE_SIZE") {
            Ok(value) => {
                let parsed = value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidPageSize { value: value.clone() })?;
                if parsed == 0 {
                    return Err(ConfigError::InvalidPageSize { value });
                }
                parsed
            }
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            store: StoreConfig {
                storage_key,
                page_size,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling the candidate store's persistence key and paging.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub storage_key: String,
    pub page_size: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPageSize { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPageSize { value } => {
                write!(f, "APP_PAGE_SIZE must be a positive integer, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
