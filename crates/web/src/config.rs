use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Postgres connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub seed_default_classes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let seed_default_classes = match std::env::var("SEED_DEFAULT_CLASSES") {
            Ok(value) => parse_flag(&value)
                .with_context(|| format!("SEED_DEFAULT_CLASSES must be a boolean, got '{value}'"))?,
            Err(_) => database_url.is_none(),
        };

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url,
            seed_default_classes,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
