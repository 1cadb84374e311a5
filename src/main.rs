// src/main.rs
use clap::Parser;
use nba_ratings::cli::Args;
use nba_ratings::commands::{
    fatal_message, handle_chart_command, handle_list_config_command, validate_args,
};
use nba_ratings::config::Config;
use nba_ratings::error::AppError;
use nba_ratings::logging::setup_logging;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", fatal_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Handle configuration listing before touching logs or the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    args.apply_overrides(&mut config);
    config.validate()?;

    // The guard flushes the file log when `run` returns, before any exit
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_chart_command(&args, &config).await
}
