use super::RatingEntry;
use crate::constants::LEAGUE_TEAM_COUNT;

/// How the league averages are divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AverageMode {
    /// Sum divided by the league size (30) no matter how many entries there
    /// are. Off whenever the provider returns a different number of teams.
    #[default]
    FixedLeagueSize,
    /// Sum divided by the number of entries.
    EntryCount,
}

impl AverageMode {
    fn divisor(self, entry_count: usize) -> f64 {
        match self {
            AverageMode::FixedLeagueSize => LEAGUE_TEAM_COUNT as f64,
            AverageMode::EntryCount => entry_count as f64,
        }
    }
}

/// Mean offensive and defensive rating, drawn as the reference lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueAverages {
    pub offense: f64,
    pub defense: f64,
}

impl LeagueAverages {
    pub fn compute(entries: &[RatingEntry], mode: AverageMode) -> Self {
        let divisor = mode.divisor(entries.len());
        let offense: f64 = entries.iter().map(|e| e.offensive_rating).sum();
        let defense: f64 = entries.iter().map(|e| e.defensive_rating).sum();

        LeagueAverages {
            offense: offense / divisor,
            defense: defense / divisor,
        }
    }
}
