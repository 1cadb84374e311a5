use crate::data_fetcher::models::MetricsRow;
use crate::ratings::{RatingEntry, win_pct};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a rating entry; win percentage is derived from the record
    pub fn entry(
        short_name: &str,
        abbreviation: Option<&str>,
        offensive_rating: f64,
        defensive_rating: f64,
        wins: u32,
        losses: u32,
    ) -> RatingEntry {
        RatingEntry {
            team_short_name: short_name.to_string(),
            abbreviation: abbreviation.map(str::to_string),
            offensive_rating,
            defensive_rating,
            wins,
            losses,
            win_pct: win_pct(wins, losses),
        }
    }

    /// Creates a metrics row as the provider would report it
    pub fn metrics_row(
        team_id: i64,
        team_name: &str,
        offensive_rating: f64,
        defensive_rating: f64,
        wins: u32,
        losses: u32,
    ) -> MetricsRow {
        MetricsRow {
            team_id,
            team_name: team_name.to_string(),
            estimated_offensive_rating: offensive_rating,
            estimated_defensive_rating: defensive_rating,
            wins,
            losses,
        }
    }

    /// Metrics for a handful of real franchises with distinct records
    pub fn sample_metrics() -> Vec<MetricsRow> {
        vec![
            Self::metrics_row(1610612738, "Boston Celtics", 122.2, 110.6, 61, 21),
            Self::metrics_row(1610612760, "Oklahoma City Thunder", 119.2, 106.6, 68, 14),
            Self::metrics_row(1610612747, "Los Angeles Lakers", 115.4, 113.0, 50, 32),
            Self::metrics_row(1610612740, "New Orleans Pelicans", 108.9, 117.1, 21, 61),
            Self::metrics_row(1610612762, "Utah Jazz", 110.2, 119.9, 17, 65),
            Self::metrics_row(1610612757, "Portland Trail Blazers", 111.0, 114.3, 36, 46),
        ]
    }
}
