use std::num::NonZeroU32;

use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://job_recommendation.db";

/// Storage location and pool sizing, handed to `db::create_pool`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a working local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub seed_sample_data: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = DatabaseConfig::default();

        Ok(Config {
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
                max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
                    Ok(raw) => parse_max_connections(&raw)?,
                    Err(_) => defaults.max_connections,
                },
            },
            seed_sample_data: match std::env::var("SEED_SAMPLE_DATA") {
                Ok(raw) => parse_flag(&raw)
                    .with_context(|| format!("SEED_SAMPLE_DATA has invalid value '{raw}'"))?,
                Err(_) => false,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32> {
    let n = raw
        .trim()
        .parse::<NonZeroU32>()
        .with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))?;
    Ok(n.get())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
