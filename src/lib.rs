//! NBA offensive vs. defensive ratings chart
//!
//! This library fetches the estimated team metrics of a season, derives win
//! percentage and league averages, and renders a scatter plot of offensive
//! against defensive rating, either with colored labeled markers or with
//! team logos.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_ratings::app::{RunOptions, run};
//! use nba_ratings::chart::ChartVariant;
//! use nba_ratings::config::Config;
//! use nba_ratings::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let options = RunOptions {
//!         variant: ChartVariant::Logos,
//!         ..RunOptions::default()
//!     };
//!
//!     let summary = run(&config, options).await?;
//!     println!("Plotted {} teams", summary.teams_plotted);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod logos;
pub mod ratings;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use app::{RunOptions, RunSummary, run, run_with};
pub use chart::{ChartModel, ChartRenderer, ChartVariant, PngRenderer};
pub use config::Config;
pub use data_fetcher::{NbaStatsClient, StatsProvider, fetch_league_data};
pub use error::AppError;
pub use logos::{CdnLogoSource, LogoOutcome, LogoSource};
pub use ratings::{AverageMode, LeagueAverages, RatedLeague, RatingEntry, transform};
