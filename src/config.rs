use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
    /// The single origin allowed to call the API from a browser
    pub cors_origin: HeaderValue,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub ssl_mode: String,
    pub max_connections: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let port = var_or("PORT", "3000")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let cors_origin = HeaderValue::from_str(&var_or("CORS_ORIGIN", "http://127.0.0.1:5500"))
            .context("CORS_ORIGIN must be a valid origin")?;

        let database = DatabaseConfig::from_env()?;

        if port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }
        database.validate()?;

        Ok(Config {
            port,
            database,
            cors_origin,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let port = var_or("DB_PORT", "3306")
            .parse::<u16>()
            .context("DB_PORT must be a valid port number")?;

        let max_connections = var_or("DB_MAX_CONNECTIONS", "10")
            .parse::<usize>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        Ok(DatabaseConfig {
            host: var_or("DB_HOST", "localhost"),
            port,
            database: var_or("DB_NAME", "home_storage_db"),
            username: var_or("DB_USER", "root"),
            password: var_or("DB_PASSWORD", "1234"),
            ssl_mode: var_or("DB_SSL_MODE", "prefer"),
            max_connections,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("Database host cannot be empty");
        }

        if self.port == 0 {
            anyhow::bail!("Database port must be greater than 0");
        }

        if self.database.trim().is_empty() {
            anyhow::bail!("Database name cannot be empty");
        }

        if self.username.trim().is_empty() {
            anyhow::bail!("Database username cannot be empty");
        }

        match self.ssl_mode.as_str() {
            "disable" | "prefer" | "require" => {}
            _ => anyhow::bail!("Invalid SSL mode. Must be one of: disable, prefer, require"),
        }

        if self.max_connections == 0 {
            anyhow::bail!("Max connections must be greater than 0");
        }

        Ok(())
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Serializes tests that read or write process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
