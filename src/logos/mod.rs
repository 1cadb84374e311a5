//! Team logo resolution for the logo variant of the chart.
//!
//! A failed logo never aborts the run: it becomes
//! [`LogoOutcome::Unavailable`] and the chart skips that point's image.

pub mod cdn;
pub mod slug;

use crate::error::AppError;
use crate::ratings::RatingEntry;
use futures::stream::{self, StreamExt};
use image::RgbaImage;
use tracing::{info, warn};

pub use cdn::CdnLogoSource;
pub use slug::logo_slug;

/// Fetches and decodes a logo for an abbreviation.
#[allow(async_fn_in_trait)]
pub trait LogoSource {
    async fn fetch_logo(&self, abbreviation: &str) -> Result<RgbaImage, AppError>;
}

/// Result of resolving one team's logo.
#[derive(Debug, Clone)]
pub enum LogoOutcome {
    Resolved(RgbaImage),
    Unavailable {
        abbreviation: Option<String>,
        reason: String,
    },
}

impl LogoOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, LogoOutcome::Resolved(_))
    }

    pub fn into_image(self) -> Option<RgbaImage> {
        match self {
            LogoOutcome::Resolved(image) => Some(image),
            LogoOutcome::Unavailable { .. } => None,
        }
    }
}

/// Resolves one entry's logo, converting any failure into `Unavailable`.
pub async fn resolve_logo<S: LogoSource>(source: &S, entry: &RatingEntry) -> LogoOutcome {
    let Some(abbreviation) = entry.abbreviation.as_deref() else {
        warn!(
            "No abbreviation for {}, skipping logo",
            entry.team_short_name
        );
        return LogoOutcome::Unavailable {
            abbreviation: None,
            reason: "team is not on the roster".to_string(),
        };
    };

    match source.fetch_logo(abbreviation).await {
        Ok(image) => LogoOutcome::Resolved(image),
        Err(e) => {
            warn!("Failed to load logo for {abbreviation}: {e}");
            LogoOutcome::Unavailable {
                abbreviation: Some(abbreviation.to_string()),
                reason: e.to_string(),
            }
        }
    }
}

/// Resolves logos for all entries with at most `concurrency` requests in
/// flight. Outcomes are returned in entry order.
pub async fn resolve_logos<S: LogoSource>(
    source: &S,
    entries: &[RatingEntry],
    concurrency: usize,
) -> Vec<LogoOutcome> {
    let outcomes: Vec<LogoOutcome> = stream::iter(entries)
        .map(|entry| resolve_logo(source, entry))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let resolved = outcomes.iter().filter(|o| o.is_resolved()).count();
    info!("Resolved {resolved}/{} team logos", outcomes.len());

    outcomes
}
