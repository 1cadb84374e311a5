pub mod stats;
pub mod team;

pub use stats::{MetricsRow, ResultSet, StatsResponse};
pub use team::{TeamRecord, static_roster};
