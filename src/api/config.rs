use dotenvy::dotenv;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub media_dir: PathBuf,
    pub media_base_url: String,
    pub public_dir: PathBuf,
}

impl Config {
    /// Returns the process-wide config, loading it from the environment on first use.
    pub fn get() -> Result<&'static Config, ConfigError> {
        CONFIG.get_or_try_init(Config::from_env)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let server_port = var_or("SERVER_PORT", "3000")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid("SERVER_PORT", e.to_string()))?;

        let config = Config {
            database_url,
            server_host: var_or("SERVER_HOST", "127.0.0.1"),
            server_port,
            media_dir: PathBuf::from(var_or("MEDIA_DIR", "public/uploads")),
            media_base_url: var_or("MEDIA_BASE_URL", "/public/uploads"),
            public_dir: PathBuf::from(var_or("PUBLIC_DIR", "public")),
        };

        tracing::info!("Config loaded");

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

static CONFIG: OnceCell<Config> = OnceCell::new();
