use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

/// Which work-hours store backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Persistent append-only SQLite table (default)
    #[default]
    Sqlite,
    /// Process-local map, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "Invalid STORE_BACKEND '{other}' (expected 'sqlite' or 'memory')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub store_backend: StoreBackend,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/work_hours.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/work_hours.db".to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => StoreBackend::default(),
        };

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            store_backend,
        })
    }
}
