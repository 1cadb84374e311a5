mod core;
pub mod fetch_utils;
pub mod http_client;
pub mod season;
pub mod urls;

pub use core::*;
pub use http_client::create_http_client_with_timeout;
pub use season::{current_season, season_for_date};
pub use urls::*;
