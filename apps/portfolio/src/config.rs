use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::content::filter::{FilterCriteria, YEAR_MAX, YEAR_MIN};
use crate::content::Category;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub assets_dir: PathBuf,
    /// Seeds dashboard metrics so every session sees the same series.
    pub metrics_seed: Option<u64>,
    pub session_ttl: Duration,
    /// Projects-page filter used until the visitor submits their own.
    pub default_filter: FilterCriteria,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            assets_dir: PathBuf::from("assets"),
            metrics_seed: None,
            session_ttl: Duration::from_secs(3600),
            default_filter: FilterCriteria::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let default_filter = FilterCriteria::new(
            match optional_env("PROJECT_FILTER_CATEGORIES") {
                Some(raw) => parse_categories(&raw)
                    .context("PROJECT_FILTER_CATEGORIES must list known categories")?,
                None => defaults.default_filter.categories.iter().copied().collect(),
            },
            match optional_env("PROJECT_FILTER_YEARS") {
                Some(raw) => parse_year_range(&raw)
                    .context("PROJECT_FILTER_YEARS must look like 2021-2024")?,
                None => defaults.default_filter.year_range,
            },
        );

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            assets_dir: optional_env("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            metrics_seed: optional_env("METRICS_SEED")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("METRICS_SEED must be an unsigned integer")?,
            session_ttl: match optional_env("SESSION_TTL_SECS") {
                Some(raw) => Duration::from_secs(
                    raw.parse::<u64>()
                        .context("SESSION_TTL_SECS must be a number of seconds")?,
                ),
                None => defaults.session_ttl,
            },
            default_filter,
        })
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// "EDA, Dashboard" → [Eda, Dashboard]
pub fn parse_categories(raw: &str) -> Result<Vec<Category>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Category>().map_err(anyhow::Error::msg))
        .collect()
}

/// "2021-2024" → (2021, 2024), both ends within the selector bounds.
pub fn parse_year_range(raw: &str) -> Result<(i32, i32)> {
    let (lo, hi) = raw
        .split_once('-')
        .with_context(|| format!("'{raw}' is not a year range"))?;
    let lo: i32 = lo.trim().parse().context("invalid start year")?;
    let hi: i32 = hi.trim().parse().context("invalid end year")?;
    for year in [lo, hi] {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            bail!("year {year} outside {YEAR_MIN}-{YEAR_MAX}");
        }
    }
    Ok((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!(
            parse_categories("EDA, visualization").unwrap(),
            vec![Category::Eda, Category::Visualization]
        );
        assert!(parse_categories("").unwrap().is_empty());
        assert!(parse_categories("EDA,Forecast").is_err());
    }

    #[test]
    fn test_parse_year_range() {
        assert_eq!(parse_year_range("2022-2024").unwrap(), (2022, 2024));
        assert_eq!(parse_year_range(" 2021 - 2021 ").unwrap(), (2021, 2021));
        assert!(parse_year_range("2024").is_err());
        assert!(parse_year_range("2019-2024").is_err());
        assert!(parse_year_range("abcd-2024").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.metrics_seed, None);
        assert_eq!(config.default_filter, FilterCriteria::default());
    }
}
