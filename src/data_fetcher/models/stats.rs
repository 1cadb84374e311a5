use crate::constants::columns;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One table of a stats provider response: column headers plus rows of
/// loosely typed cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    fn column(&self, name: &str, url: &str) -> Result<usize, AppError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| {
                AppError::api_unexpected_structure(
                    format!("Missing column {name} in table {}", self.name),
                    url,
                )
            })
    }
}

/// Top-level stats provider response. Some endpoints return a single
/// `resultSet`, others a list of `resultSets`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
    #[serde(rename = "resultSet", default, skip_serializing_if = "Option::is_none")]
    pub result_set: Option<ResultSet>,
}

impl StatsResponse {
    /// Returns the table with the given name, or the first table when no
    /// table carries that name.
    pub fn table(&self, name: &str) -> Option<&ResultSet> {
        let mut tables = self.result_set.iter().chain(self.result_sets.iter());
        let first = tables.clone().next();
        tables.find(|set| set.name == name).or(first)
    }
}

/// Estimated metrics for one team, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub team_id: i64,
    pub team_name: String,
    pub estimated_offensive_rating: f64,
    pub estimated_defensive_rating: f64,
    pub wins: u32,
    pub losses: u32,
}

impl MetricsRow {
    /// Projects the metrics table onto [`MetricsRow`]s by column name.
    ///
    /// Any missing column or mistyped cell is reported as an
    /// unexpected-structure error for `url`.
    pub fn from_result_set(set: &ResultSet, url: &str) -> Result<Vec<MetricsRow>, AppError> {
        let team_id = set.column(columns::TEAM_ID, url)?;
        let team_name = set.column(columns::TEAM_NAME, url)?;
        let offense = set.column(columns::OFFENSIVE_RATING, url)?;
        let defense = set.column(columns::DEFENSIVE_RATING, url)?;
        let wins = set.column(columns::WINS, url)?;
        let losses = set.column(columns::LOSSES, url)?;

        set.row_set
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cell = |column: usize, name: &str| {
                    row.get(column).ok_or_else(|| {
                        AppError::api_unexpected_structure(
                            format!("Row {index} has no value for {name}"),
                            url,
                        )
                    })
                };
                let mistyped = |name: &str| {
                    AppError::api_unexpected_structure(
                        format!("Row {index} has an invalid value for {name}"),
                        url,
                    )
                };

                Ok(MetricsRow {
                    team_id: as_integer(cell(team_id, columns::TEAM_ID)?)
                        .ok_or_else(|| mistyped(columns::TEAM_ID))?,
                    team_name: cell(team_name, columns::TEAM_NAME)?
                        .as_str()
                        .ok_or_else(|| mistyped(columns::TEAM_NAME))?
                        .to_string(),
                    estimated_offensive_rating: cell(offense, columns::OFFENSIVE_RATING)?
                        .as_f64()
                        .ok_or_else(|| mistyped(columns::OFFENSIVE_RATING))?,
                    estimated_defensive_rating: cell(defense, columns::DEFENSIVE_RATING)?
                        .as_f64()
                        .ok_or_else(|| mistyped(columns::DEFENSIVE_RATING))?,
                    wins: as_count(cell(wins, columns::WINS)?)
                        .ok_or_else(|| mistyped(columns::WINS))?,
                    losses: as_count(cell(losses, columns::LOSSES)?)
                        .ok_or_else(|| mistyped(columns::LOSSES))?,
                })
            })
            .collect()
    }
}

// The provider occasionally serializes integral columns as floats (`41.0`).
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn as_count(value: &Value) -> Option<u32> {
    as_integer(value).and_then(|v| u32::try_from(v).ok())
}
