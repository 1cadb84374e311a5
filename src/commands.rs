use crate::app::{self, RunOptions};
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;

/// Validates command line argument combinations.
///
/// Returns an error if a flag has a value that can never work.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.logo_concurrency == Some(0) {
        return Err(AppError::config_error(
            "Logo concurrency (--logo-concurrency) must be at least 1",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Formats an error that ends the program, as printed to stderr.
pub fn fatal_message(error: &AppError) -> String {
    format!("Error: {error}")
}

/// Handles the default command: draw the chart and report where it went.
pub async fn handle_chart_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let summary = app::run(config, RunOptions::from_args(args, config)).await?;

    match summary.logos_resolved {
        Some(resolved) => println!(
            "Chart with {} teams ({resolved} logos) written to {}",
            summary.teams_plotted, config.output_path
        ),
        None => println!(
            "Chart with {} teams written to {}",
            summary.teams_plotted, config.output_path
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_zero_logo_concurrency_rejected() {
        let args = Args::parse_from(["nba_ratings", "-L", "--logo-concurrency", "0"]);
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_fatal_message_names_failed_call() {
        let error = AppError::fetch_failed(
            "team estimated metrics",
            AppError::api_not_found("https://stats.nba.com/stats/teamestimatedmetrics"),
        );

        let message = fatal_message(&error);

        assert_eq!(
            message,
            "Error: Failed to fetch team estimated metrics: API request not found (404): \
             https://stats.nba.com/stats/teamestimatedmetrics"
        );
        assert!(!message.contains("Fetch {"));
        assert!(!message.contains("source:"));
    }

    #[test]
    fn test_default_args_valid() {
        let args = Args::parse_from(["nba_ratings"]);
        assert!(validate_args(&args).is_ok());
    }
}
