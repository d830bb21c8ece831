// src/config.rs
use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// HTML page served on `GET /`, resolved against the working directory.
    pub index_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            index_file: PathBuf::from("index.html"),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env is fine.
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            index_file: env::var("INDEX_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.index_file),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
