use crate::chart::ChartVariant;
use crate::config::Config;
use crate::ratings::AverageMode;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA offensive vs. defensive ratings chart
///
/// Fetches the estimated team metrics of a season from the public stats API
/// and plots every team by offensive rating (x) and defensive rating (y,
/// inverted so better defenses sit at the top). Dashed lines mark the league
/// averages.
///
/// By default each team is a marker colored by win percentage with its name
/// next to it. With --logos the markers are replaced by team logos.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Draw team logos instead of colored markers and labels.
    #[arg(short = 'L', long = "logos", help_heading = "Chart Options")]
    pub logos: bool,

    /// Path of the PNG file to write. Overrides the configured output path.
    #[arg(short = 'o', long = "output", help_heading = "Chart Options")]
    pub output: Option<String>,

    /// Season in YYYY-YY format, e.g. 2024-25.
    /// If not provided, the current season is derived from today's date.
    #[arg(short = 's', long = "season", help_heading = "Chart Options")]
    pub season: Option<String>,

    /// Divide the league averages by the number of teams returned
    /// instead of the fixed league size of 30.
    #[arg(long = "corrected-average", help_heading = "Chart Options")]
    pub corrected_average: bool,

    /// Number of logo requests in flight. 1 fetches logos one at a time.
    #[arg(long = "logo-concurrency", help_heading = "Chart Options")]
    pub logo_concurrency: Option<usize>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout. Logs always go to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn chart_variant(&self) -> ChartVariant {
        if self.logos {
            ChartVariant::Logos
        } else {
            ChartVariant::Labeled
        }
    }

    pub fn average_mode(&self) -> AverageMode {
        if self.corrected_average {
            AverageMode::EntryCount
        } else {
            AverageMode::FixedLeagueSize
        }
    }

    /// Command line values take precedence over the config file and the
    /// environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(season) = &self.season {
            config.season = Some(season.clone());
        }
        if let Some(concurrency) = self.logo_concurrency {
            config.logo_concurrency = concurrency;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
