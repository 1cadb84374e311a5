use crate::config::Config;
use crate::constants::stats_api;
use crate::data_fetcher::models::{MetricsRow, StatsResponse, TeamRecord, static_roster};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::season::current_season;
use super::urls::build_team_metrics_url;

/// Source of the roster and the metrics table.
///
/// [`NbaStatsClient`] talks to the public stats API; tests substitute
/// in-memory providers.
#[allow(async_fn_in_trait)]
pub trait StatsProvider {
    /// Every current franchise.
    async fn fetch_roster(&self) -> Result<Vec<TeamRecord>, AppError>;

    /// Estimated metrics, one row per team, for the provider's season.
    async fn fetch_metrics(&self) -> Result<Vec<MetricsRow>, AppError>;
}

/// Roster and metrics as fetched for one run.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub roster: Vec<TeamRecord>,
    pub metrics: Vec<MetricsRow>,
}

/// Stats provider backed by the public stats API.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    api_domain: String,
    season: String,
}

impl NbaStatsClient {
    /// Builds a client from the configuration. The season falls back to the
    /// current one when the config does not pin it.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let season = config.season.clone().unwrap_or_else(current_season);
        Ok(Self::with_client(client, &config.stats_api_domain, season))
    }

    pub fn with_client(client: Client, api_domain: &str, season: impl Into<String>) -> Self {
        Self {
            client,
            api_domain: api_domain.to_string(),
            season: season.into(),
        }
    }

    pub fn season(&self) -> &str {
        &self.season
    }
}

impl StatsProvider for NbaStatsClient {
    /// The roster is the provider's static team list; it ships with the
    /// binary rather than being requested.
    async fn fetch_roster(&self) -> Result<Vec<TeamRecord>, AppError> {
        Ok(static_roster())
    }

    #[instrument(skip(self), fields(season = %self.season))]
    async fn fetch_metrics(&self) -> Result<Vec<MetricsRow>, AppError> {
        let url = build_team_metrics_url(&self.api_domain, &self.season);
        let response: StatsResponse = fetch(&self.client, &url).await?;

        let table = response
            .table(stats_api::METRICS_TABLE)
            .ok_or_else(|| AppError::api_no_data("Response contains no tables", &url))?;

        let rows = MetricsRow::from_result_set(table, &url)?;
        if rows.is_empty() {
            return Err(AppError::api_no_data(
                format!("No team metrics for season {}", self.season),
                &url,
            ));
        }

        info!("Fetched metrics for {} teams", rows.len());
        Ok(rows)
    }
}

/// Fetches roster and metrics, tagging a failure with the call that failed.
pub async fn fetch_league_data<P: StatsProvider>(provider: &P) -> Result<LeagueData, AppError> {
    let roster = provider
        .fetch_roster()
        .await
        .map_err(|e| AppError::fetch_failed("team roster", e))?;
    info!("Roster contains {} teams", roster.len());

    let metrics = provider
        .fetch_metrics()
        .await
        .map_err(|e| AppError::fetch_failed("team estimated metrics", e))?;

    Ok(LeagueData { roster, metrics })
}
