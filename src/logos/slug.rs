use crate::constants::logos::SLUG_OVERRIDES;

/// Maps a team abbreviation to its logo CDN slug.
///
/// Most slugs are the lowercased abbreviation; New Orleans and Utah are
/// published under different names.
///
/// ```
/// use nba_ratings::logos::logo_slug;
///
/// assert_eq!(logo_slug("BOS"), "bos");
/// assert_eq!(logo_slug("NOP"), "no");
/// ```
pub fn logo_slug(abbreviation: &str) -> String {
    SLUG_OVERRIDES
        .iter()
        .find(|(team, _)| *team == abbreviation)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| abbreviation.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_slugs() {
        assert_eq!(logo_slug("NOP"), "no");
        assert_eq!(logo_slug("UTA"), "utah");
    }

    #[test]
    fn test_default_slug_is_lowercase() {
        assert_eq!(logo_slug("BOS"), "bos");
        assert_eq!(logo_slug("GSW"), "gsw");
        assert_eq!(logo_slug("PHX"), "phx");
    }

    #[test]
    fn test_overrides_match_exact_abbreviation() {
        assert_eq!(logo_slug("nop"), "nop");
    }
}
