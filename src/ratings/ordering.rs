use super::RatingEntry;
use std::cmp::Ordering;

/// Sorts entries by win percentage, best first.
///
/// The sort is stable, so ties keep their input order. NaN percentages go
/// after every number.
pub fn sort_by_win_pct(entries: &mut [RatingEntry]) {
    entries.sort_by(|a, b| descending_nan_last(a.win_pct, b.win_pct));
}

fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
