//! URL building utilities for the stats provider and the logo CDN

use crate::constants::stats_api;

/// Builds the estimated team metrics URL for a season.
///
/// # Example
/// ```
/// use nba_ratings::data_fetcher::api::build_team_metrics_url;
///
/// let url = build_team_metrics_url("https://stats.nba.com/stats", "2024-25");
/// assert_eq!(
///     url,
///     "https://stats.nba.com/stats/teamestimatedmetrics?LeagueID=00&Season=2024-25&SeasonType=Regular%20Season"
/// );
/// ```
pub fn build_team_metrics_url(api_domain: &str, season: &str) -> String {
    let season_type = stats_api::SEASON_TYPE.replace(' ', "%20");
    format!(
        "{api_domain}/teamestimatedmetrics?LeagueID={}&Season={season}&SeasonType={season_type}",
        stats_api::LEAGUE_ID
    )
}

/// Builds the 500px logo URL for a CDN slug.
///
/// # Example
/// ```
/// use nba_ratings::data_fetcher::api::build_logo_url;
///
/// let url = build_logo_url("https://a.espncdn.com", "utah");
/// assert_eq!(url, "https://a.espncdn.com/i/teamlogos/nba/500/utah.png");
/// ```
pub fn build_logo_url(cdn_domain: &str, slug: &str) -> String {
    format!("{cdn_domain}/i/teamlogos/nba/500/{slug}.png")
}
