use crate::chart::{ChartModel, ChartRenderer, ChartVariant, PngRenderer};
use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::{NbaStatsClient, StatsProvider, fetch_league_data};
use crate::error::AppError;
use crate::logos::{CdnLogoSource, LogoSource, resolve_logos};
use crate::ratings::{AverageMode, transform};
use tracing::info;

/// Settings of one run that are not part of the persisted config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub variant: ChartVariant,
    pub average_mode: AverageMode,
    pub logo_concurrency: usize,
}

impl RunOptions {
    pub fn from_args(args: &Args, config: &Config) -> Self {
        Self {
            variant: args.chart_variant(),
            average_mode: args.average_mode(),
            logo_concurrency: config.logo_concurrency,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            variant: ChartVariant::default(),
            average_mode: AverageMode::default(),
            logo_concurrency: crate::constants::DEFAULT_LOGO_CONCURRENCY,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub teams_plotted: usize,
    /// `None` for the labeled variant
    pub logos_resolved: Option<usize>,
}

/// Runs the pipeline against the public stats API and writes the PNG
/// configured in `config`.
pub async fn run(config: &Config, options: RunOptions) -> Result<RunSummary, AppError> {
    let provider = NbaStatsClient::new(config)?;
    let logo_source = CdnLogoSource::new(config)?;
    let renderer = PngRenderer::new(&config.output_path);
    info!(
        "Charting season {} to {}",
        provider.season(),
        config.output_path
    );

    run_with(&provider, &logo_source, &renderer, options).await
}

/// Fetch, transform, resolve logos when drawing the logo variant, render.
///
/// Fetch and render failures are fatal. A missing logo is not: that point is
/// drawn without an image.
pub async fn run_with<P, S, R>(
    provider: &P,
    logo_source: &S,
    renderer: &R,
    options: RunOptions,
) -> Result<RunSummary, AppError>
where
    P: StatsProvider,
    S: LogoSource,
    R: ChartRenderer,
{
    let data = fetch_league_data(provider).await?;
    let league = transform(&data.roster, &data.metrics, options.average_mode);
    info!(
        "League averages: offense {:.2}, defense {:.2} ({:?})",
        league.averages.offense, league.averages.defense, options.average_mode
    );

    let (model, logos_resolved) = match options.variant {
        ChartVariant::Labeled => (ChartModel::labeled(&league)?, None),
        ChartVariant::Logos => {
            let logos = resolve_logos(logo_source, &league.entries, options.logo_concurrency).await;
            let resolved = logos.iter().filter(|o| o.is_resolved()).count();
            (ChartModel::with_logos(&league, logos)?, Some(resolved))
        }
    };

    renderer.render(&model)?;

    Ok(RunSummary {
        teams_plotted: league.entries.len(),
        logos_resolved,
    })
}
