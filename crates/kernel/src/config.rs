//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 5000).
    pub port: u16,

    /// Number of catalogs seeded at startup (default: 5).
    ///
    /// Also the upper bound of the fixed catalog id range enforced by
    /// prize listing, prize creation and catalog deletion.
    pub seed_catalogs: u64,

    /// Prizes seeded into each catalog (default: 10).
    pub prizes_per_catalog: u64,

    /// Log every seeded prize at debug level on startup (default: false).
    pub log_seeded_catalogs: bool,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            seed_catalogs: 5,
            prizes_per_catalog: 10,
            log_seeded_catalogs: false,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().context("PORT must be a valid u16")?,
            None => defaults.port,
        };

        let seed_catalogs = match lookup("SEED_CATALOGS") {
            Some(v) => v
                .trim()
                .parse()
                .context("SEED_CATALOGS must be a valid u64")?,
            None => defaults.seed_catalogs,
        };

        let prizes_per_catalog = match lookup("PRIZES_PER_CATALOG") {
            Some(v) => v
                .trim()
                .parse()
                .context("PRIZES_PER_CATALOG must be a valid u64")?,
            None => defaults.prizes_per_catalog,
        };

        let log_seeded_catalogs = match lookup("LOG_SEEDED_CATALOGS") {
            Some(v) => parse_flag(&v).context("LOG_SEEDED_CATALOGS must be a boolean")?,
            None => defaults.log_seeded_catalogs,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            port,
            seed_catalogs,
            prizes_per_catalog,
            log_seeded_catalogs,
            cors_allowed_origins,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}
