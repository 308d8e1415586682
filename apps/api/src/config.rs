use anyhow::{Context, Result};

use crate::matching::weights::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weights: ScoringWeights,
    /// Upper bound on postings accepted by one rank request.
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoringWeights::default();
        let weights = ScoringWeights {
            skill: parse_or(&lookup, "FIT_WEIGHT_SKILL", defaults.skill)?,
            seniority: parse_or(&lookup, "FIT_WEIGHT_SENIORITY", defaults.seniority)?,
            location: parse_or(&lookup, "FIT_WEIGHT_LOCATION", defaults.location)?,
        };
        weights.validate().context("Invalid scoring weights")?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            weights,
            max_batch_size: parse_or(&lookup, "FIT_MAX_BATCH_SIZE", 1000)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
