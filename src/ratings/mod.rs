//! Derived per-team ratings: short names, win percentage, draw order and
//! league averages.

pub mod averages;
pub mod ordering;

use crate::data_fetcher::models::{MetricsRow, TeamRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

pub use averages::{AverageMode, LeagueAverages};
pub use ordering::sort_by_win_pct;

/// One point of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEntry {
    /// Last word of the team name, used as the label.
    pub team_short_name: String,
    /// `None` when the metrics row has no roster match.
    pub abbreviation: Option<String>,
    pub offensive_rating: f64,
    pub defensive_rating: f64,
    pub wins: u32,
    pub losses: u32,
    /// NaN when no games have been played.
    pub win_pct: f64,
}

/// Entries in draw order plus the averages used for the reference lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedLeague {
    pub entries: Vec<RatingEntry>,
    pub averages: LeagueAverages,
}

/// Returns the last whitespace-delimited token of a team name.
///
/// This is a display label, not a key: two franchises whose names end in
/// the same word would share it.
///
/// ```
/// use nba_ratings::ratings::team_short_name;
///
/// assert_eq!(team_short_name("Los Angeles Lakers"), "Lakers");
/// assert_eq!(team_short_name("Portland Trail Blazers"), "Blazers");
/// ```
pub fn team_short_name(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or(full_name)
}

/// `wins / (wins + losses)`. Zero games gives NaN rather than an error.
pub fn win_pct(wins: u32, losses: u32) -> f64 {
    let wins = f64::from(wins);
    wins / (wins + f64::from(losses))
}

/// Builds one entry per metrics row, in row order.
pub fn build_entries(roster: &[TeamRecord], metrics: &[MetricsRow]) -> Vec<RatingEntry> {
    let abbreviations: HashMap<i64, &str> = roster
        .iter()
        .map(|team| (team.id, team.abbreviation.as_str()))
        .collect();

    metrics
        .iter()
        .map(|row| {
            let abbreviation = abbreviations.get(&row.team_id).map(|a| a.to_string());
            if abbreviation.is_none() {
                warn!(
                    "No roster entry for team {} ({})",
                    row.team_name, row.team_id
                );
            }

            RatingEntry {
                team_short_name: team_short_name(&row.team_name).to_string(),
                abbreviation,
                offensive_rating: row.estimated_offensive_rating,
                defensive_rating: row.estimated_defensive_rating,
                wins: row.wins,
                losses: row.losses,
                win_pct: win_pct(row.wins, row.losses),
            }
        })
        .collect()
}

/// Runs the whole transformation: build, sort by win percentage, average.
pub fn transform(roster: &[TeamRecord], metrics: &[MetricsRow], mode: AverageMode) -> RatedLeague {
    let mut entries = build_entries(roster, metrics);
    sort_by_win_pct(&mut entries);
    let averages = LeagueAverages::compute(&entries, mode);

    debug!(
        "Transformed {} entries, averages off={:.2} def={:.2}",
        entries.len(),
        averages.offense,
        averages.defense
    );

    RatedLeague { entries, averages }
}
