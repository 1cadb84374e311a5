//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers of the pipeline: provider
//! endpoints, the league size used for averages, and chart geometry.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Number of teams in the league. League averages divide by this value
/// regardless of how many rows the provider returned.
pub const LEAGUE_TEAM_COUNT: usize = 30;

/// Default number of logo requests in flight. 1 keeps the fetch sequential.
pub const DEFAULT_LOGO_CONCURRENCY: usize = 1;

/// Default path of the rendered chart
pub const DEFAULT_OUTPUT_PATH: &str = "nba_ratings.png";

/// Stats provider settings
pub mod stats_api {
    /// Base URL of the public stats API
    pub const DEFAULT_DOMAIN: &str = "https://stats.nba.com/stats";

    /// League identifier of the NBA
    pub const LEAGUE_ID: &str = "00";

    /// Season type requested from the metrics endpoint
    pub const SEASON_TYPE: &str = "Regular Season";

    /// Name of the metrics table in the response
    pub const METRICS_TABLE: &str = "TeamEstimatedMetrics";

    /// Month (1-based) in which a new season is considered started
    pub const SEASON_START_MONTH: u32 = 10;

    /// The provider refuses requests that do not look like a browser
    pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    pub const REFERER: &str = "https://www.nba.com/";
    pub const ORIGIN: &str = "https://www.nba.com";
}

/// Column names of the metrics table
pub mod columns {
    pub const TEAM_ID: &str = "TEAM_ID";
    pub const TEAM_NAME: &str = "TEAM_NAME";
    pub const OFFENSIVE_RATING: &str = "E_OFF_RATING";
    pub const DEFENSIVE_RATING: &str = "E_DEF_RATING";
    pub const WINS: &str = "W";
    pub const LOSSES: &str = "L";
}

/// Logo CDN settings
pub mod logos {
    /// Base URL of the logo CDN
    pub const DEFAULT_CDN_DOMAIN: &str = "https://a.espncdn.com";

    /// Teams whose CDN slug differs from the lowercased abbreviation
    pub const SLUG_OVERRIDES: [(&str, &str); 2] = [("NOP", "no"), ("UTA", "utah")];

    /// Logos are scaled to fit a square of this many pixels
    pub const LOGO_SIZE_PX: u32 = 40;
}

/// Chart geometry and styling
pub mod chart {
    /// Figure size in pixels (12 x 8 inches at 100 dpi)
    pub const WIDTH_PX: u32 = 1200;
    pub const HEIGHT_PX: u32 = 800;

    /// Padding added beyond the floor/ceil of the data range on each axis
    pub const AXIS_PADDING: f64 = 1.0;

    /// Distance between tick marks in rating units
    pub const TICK_STEP: f64 = 2.0;

    /// Figure and plot area backgrounds
    pub const FIGURE_BACKGROUND: (u8, u8, u8) = (0xf0, 0xf0, 0xf0);
    pub const PLOT_BACKGROUND: (u8, u8, u8) = (0xf8, 0xf8, 0xf8);

    /// Reference line color (matplotlib "darkred")
    pub const REFERENCE_LINE: (u8, u8, u8) = (0x8b, 0x00, 0x00);

    /// Marker radius for the colored points
    pub const MARKER_RADIUS_PX: i32 = 5;

    /// Label offset from the point, below-right
    pub const LABEL_OFFSET_PX: (i32, i32) = (6, 6);

    /// Width reserved for the colorbar on the right side of the figure
    pub const COLORBAR_AREA_PX: u32 = 110;

    pub const TITLE: &str = "NBA Offensive and Defensive Ratings";
    pub const X_LABEL: &str = "Offensive Ratings";
    pub const Y_LABEL: &str = "Defensive Ratings";
    pub const COLORBAR_LABEL: &str = "Win Percentage";
}

/// Environment variable names
pub mod env_vars {
    /// Override for the stats API base URL
    pub const STATS_API: &str = "NBA_RATINGS_STATS_API";

    /// Override for the logo CDN base URL
    pub const LOGO_CDN: &str = "NBA_RATINGS_LOGO_CDN";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NBA_RATINGS_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_RATINGS_HTTP_TIMEOUT";
}
