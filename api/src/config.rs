//! Process configuration, read from the environment (and `.env`).

use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://pizza_store.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
