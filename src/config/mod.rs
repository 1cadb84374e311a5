use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Every field has a default, so running without a config file behaves like
/// the plain script: public stats API, ESPN logo CDN, current season.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the stats provider, without trailing slash.
    #[serde(default = "default_stats_api_domain")]
    pub stats_api_domain: String,
    /// Base URL of the logo CDN, without trailing slash.
    #[serde(default = "default_logo_cdn_domain")]
    pub logo_cdn_domain: String,
    /// Season in `YYYY-YY` format. Derived from the current date when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Where the rendered PNG is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Number of logo requests in flight. 1 fetches strictly in order.
    #[serde(default = "default_logo_concurrency")]
    pub logo_concurrency: usize,
}

fn default_stats_api_domain() -> String {
    constants::stats_api::DEFAULT_DOMAIN.to_string()
}

fn default_logo_cdn_domain() -> String {
    constants::logos::DEFAULT_CDN_DOMAIN.to_string()
}

fn default_output_path() -> String {
    constants::DEFAULT_OUTPUT_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_logo_concurrency() -> usize {
    constants::DEFAULT_LOGO_CONCURRENCY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_api_domain: default_stats_api_domain(),
            logo_cdn_domain: default_logo_cdn_domain(),
            season: None,
            output_path: default_output_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            logo_concurrency: default_logo_concurrency(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to defaults when no file exists. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `NBA_RATINGS_STATS_API` - Override stats API base URL
    /// - `NBA_RATINGS_LOGO_CDN` - Override logo CDN base URL
    /// - `NBA_RATINGS_LOG_FILE` - Override log file path
    /// - `NBA_RATINGS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies the `NBA_RATINGS_*` environment overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(domain) = std::env::var(env_vars::STATS_API) {
            self.stats_api_domain = domain;
        }

        if let Ok(domain) = std::env::var(env_vars::LOGO_CDN) {
            self.logo_cdn_domain = domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", config.stats_api_domain);
        println!("────────────────────────────────────");
        println!("Logo CDN:");
        println!("{}", config.logo_cdn_domain);
        println!("────────────────────────────────────");
        println!("Season:");
        match &config.season {
            Some(season) => println!("{season}"),
            None => println!("(Current season)"),
        }
        println!("────────────────────────────────────");
        println!("Output:");
        println!("{}", config.output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Logo Concurrency:");
        println!("{}", config.logo_concurrency);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/nba_ratings.log");
            println!("(Default location)");
        }

        Ok(())
    }
}
