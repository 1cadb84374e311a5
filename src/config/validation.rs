use crate::error::AppError;

/// Validates a base URL setting such as the stats API or the logo CDN.
///
/// # Validation Rules
/// - cannot be empty
/// - must carry an http:// or https:// scheme
/// - must not end with a slash, URLs are built by appending `/path`
pub fn validate_base_url(name: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https://: '{value}'"
        )));
    }

    if value.ends_with('/') {
        return Err(AppError::config_error(format!(
            "{name} must not end with '/': '{value}'"
        )));
    }

    Ok(())
}

/// Validates a season string of the form `YYYY-YY` where the second part is
/// the year following the first, e.g. `2024-25`.
pub fn validate_season(season: &str) -> Result<(), AppError> {
    let invalid = || {
        AppError::config_error(format!(
            "Season must be in YYYY-YY format (e.g. 2024-25): '{season}'"
        ))
    };

    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }

    let start: u32 = start.parse().map_err(|_| invalid())?;
    let end: u32 = end.parse().map_err(|_| invalid())?;
    if (start + 1) % 100 != end {
        return Err(invalid());
    }

    Ok(())
}

/// Validates the full configuration
///
/// # Validation Rules
/// - both base URLs pass [`validate_base_url`]
/// - an explicit season passes [`validate_season`]
/// - the output path and a custom log file path cannot be empty
/// - timeout and logo concurrency must be positive
pub fn validate_config(config: &super::Config) -> Result<(), AppError> {
    validate_base_url("Stats API domain", &config.stats_api_domain)?;
    validate_base_url("Logo CDN domain", &config.logo_cdn_domain)?;

    if let Some(season) = &config.season {
        validate_season(season)?;
    }

    if config.output_path.is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.logo_concurrency == 0 {
        return Err(AppError::config_error("Logo concurrency must be at least 1"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("Stats API domain", "https://stats.nba.com/stats").is_ok());
        assert!(validate_base_url("Stats API domain", "http://localhost:8080").is_ok());

        assert!(validate_base_url("Stats API domain", "").is_err());
        assert!(validate_base_url("Stats API domain", "stats.nba.com").is_err());
        assert!(validate_base_url("Stats API domain", "https://stats.nba.com/").is_err());
    }

    #[test]
    fn test_validate_season() {
        assert!(validate_season("2024-25").is_ok());
        assert!(validate_season("1999-00").is_ok());

        assert!(validate_season("2024").is_err());
        assert!(validate_season("2024-26").is_err());
        assert!(validate_season("24-25").is_err());
        assert!(validate_season("abcd-ef").is_err());
    }
}
