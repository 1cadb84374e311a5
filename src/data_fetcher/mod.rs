pub mod api;
pub mod models;

pub use api::{LeagueData, NbaStatsClient, StatsProvider, fetch_league_data};
pub use models::{MetricsRow, TeamRecord};
