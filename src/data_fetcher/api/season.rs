//! Season string utilities

use crate::constants::stats_api::SEASON_START_MONTH;
use chrono::{Datelike, Local, NaiveDate, Utc};

/// Returns the provider season string for today, e.g. `2024-25`.
pub fn current_season() -> String {
    let today = Utc::now().with_timezone(&Local).date_naive();
    season_for_date(today)
}

/// Returns the season a date belongs to. Seasons start in October, so
/// dates from January to September belong to the season that started the
/// previous year.
pub fn season_for_date(date: NaiveDate) -> String {
    let start_year = if date.month() >= SEASON_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_for_date() {
        assert_eq!(season_for_date(date(2024, 10, 22)), "2024-25");
        assert_eq!(season_for_date(date(2024, 12, 31)), "2024-25");
        assert_eq!(season_for_date(date(2025, 1, 1)), "2024-25");
        assert_eq!(season_for_date(date(2025, 9, 30)), "2024-25");
    }

    #[test]
    fn test_season_for_date_century_boundary() {
        assert_eq!(season_for_date(date(1999, 11, 1)), "1999-00");
        assert_eq!(season_for_date(date(2009, 10, 1)), "2009-10");
    }

    #[test]
    fn test_current_season_is_well_formed() {
        let season = current_season();
        assert!(crate::config::validation::validate_season(&season).is_ok());
    }
}
