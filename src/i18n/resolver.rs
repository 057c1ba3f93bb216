//! Locale resolution: derive the active language for a request.
//!
//! Resolution follows a fixed priority chain, mirroring the detection order
//! used by the site's navigation scheme:
//!
//! 1. URL path segment (`/bg/services` → Bulgarian)
//! 2. Stored preference (the `lang` cookie from an earlier visit)
//! 3. Browser negotiation (Accept-Language, first supported match)
//! 4. The default language (English)
//!
//! Resolution never fails. The resolver itself is pure; when the path
//! segment decides the language, the HTTP layer persists it as the stored
//! preference for future visits.

use crate::i18n::Language;

/// Which link in the priority chain produced the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The first URL path segment was a supported code.
    Path,
    /// A previously stored preference was supported.
    Stored,
    /// Negotiated from the browser-reported language list.
    Browser,
    /// No supported signal anywhere; fell back to the default.
    Fallback,
}

/// The outcome of locale resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub language: Language,
    pub source: ResolutionSource,
}

impl ResolvedLocale {
    /// Whether the caller should persist this resolution as the stored
    /// preference. Only a path-segment win is persisted, matching the
    /// original detection cache behavior.
    pub fn should_persist(&self) -> bool {
        self.source == ResolutionSource::Path
    }
}

/// Resolve the active language for a request.
///
/// # Arguments
/// * `path_segments` - URL path split on `/`, empty segments removed
/// * `stored_preference` - previously persisted language code, if any
/// * `browser_languages` - ordered language tags from Accept-Language
///   (highest preference first; use [`parse_accept_language`] to build this)
pub fn resolve(
    path_segments: &[&str],
    stored_preference: Option<&str>,
    browser_languages: &[&str],
) -> ResolvedLocale {
    if let Some(first) = path_segments.first() {
        if let Ok(language) = Language::from_code(first) {
            return ResolvedLocale {
                language,
                source: ResolutionSource::Path,
            };
        }
    }

    if let Some(stored) = stored_preference {
        if let Ok(language) = Language::from_code(stored) {
            return ResolvedLocale {
                language,
                source: ResolutionSource::Stored,
            };
        }
    }

    for tag in browser_languages {
        let primary = primary_subtag(tag).to_ascii_lowercase();
        if let Ok(language) = Language::from_code(&primary) {
            return ResolvedLocale {
                language,
                source: ResolutionSource::Browser,
            };
        }
    }

    ResolvedLocale {
        language: Language::default_language(),
        source: ResolutionSource::Fallback,
    }
}

/// Parse an Accept-Language header value into an ordered list of language
/// tags, highest quality first.
///
/// Entries with an explicit `q=0` are dropped. Malformed quality values are
/// treated as `q=1`. The original header order is kept for equal qualities.
///
/// # Example
/// `"en-US,en;q=0.9,bg;q=0.8"` → `["en-US", "en", "bg"]`
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut entries: Vec<(String, f32)> = Vec::new();

    for part in header.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let mut pieces = part.split(';');
        let tag = match pieces.next() {
            Some(tag) if !tag.trim().is_empty() => tag.trim().to_string(),
            _ => continue,
        };

        let mut quality = 1.0f32;
        for param in pieces {
            let param = param.trim();
            if let Some(value) = param.strip_prefix("q=") {
                quality = value.parse().unwrap_or(1.0);
            }
        }

        if quality > 0.0 {
            entries.push((tag, quality));
        }
    }

    // Stable sort keeps header order for equal qualities
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(tag, _)| tag).collect()
}

/// Extract the primary subtag of a language tag (`en-US` → `en`).
fn primary_subtag(tag: &str) -> &str {
    let primary = tag.split(['-', '_']).next().unwrap_or(tag);
    primary.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Priority Chain Tests ====================

    #[test]
    fn test_path_segment_wins_over_stored_and_browser() {
        let resolved = resolve(&["bg", "services"], Some("en"), &["ru"]);
        assert_eq!(resolved.language, Language::BULGARIAN);
        assert_eq!(resolved.source, ResolutionSource::Path);
    }

    #[test]
    fn test_stored_preference_wins_without_path_segment() {
        let resolved = resolve(&[], Some("ru"), &["en"]);
        assert_eq!(resolved.language, Language::RUSSIAN);
        assert_eq!(resolved.source, ResolutionSource::Stored);
    }

    #[test]
    fn test_browser_negotiation_skips_unsupported() {
        let resolved = resolve(&[], None, &["fr", "bg"]);
        assert_eq!(resolved.language, Language::BULGARIAN);
        assert_eq!(resolved.source, ResolutionSource::Browser);
    }

    #[test]
    fn test_fallback_to_default() {
        let resolved = resolve(&[], None, &[]);
        assert_eq!(resolved.language, Language::ENGLISH);
        assert_eq!(resolved.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_unsupported_path_segment_falls_through() {
        // "/about" is not a language prefix; the stored preference decides
        let resolved = resolve(&["about"], Some("bg"), &[]);
        assert_eq!(resolved.language, Language::BULGARIAN);
        assert_eq!(resolved.source, ResolutionSource::Stored);
    }

    #[test]
    fn test_unsupported_stored_preference_falls_through() {
        let resolved = resolve(&[], Some("de"), &["ru"]);
        assert_eq!(resolved.language, Language::RUSSIAN);
        assert_eq!(resolved.source, ResolutionSource::Browser);
    }

    #[test]
    fn test_regional_browser_tag_matches_primary_subtag() {
        let resolved = resolve(&[], None, &["ru-RU"]);
        assert_eq!(resolved.language, Language::RUSSIAN);
    }

    #[test]
    fn test_all_signals_unsupported_falls_back() {
        let resolved = resolve(&["about"], Some("de"), &["fr", "it"]);
        assert_eq!(resolved.language, Language::ENGLISH);
        assert_eq!(resolved.source, ResolutionSource::Fallback);
    }

    // ==================== Persistence Tests ====================

    #[test]
    fn test_path_win_is_persisted() {
        let resolved = resolve(&["ru"], None, &[]);
        assert!(resolved.should_persist());
    }

    #[test]
    fn test_stored_win_is_not_persisted() {
        let resolved = resolve(&[], Some("bg"), &[]);
        assert!(!resolved.should_persist());
    }

    #[test]
    fn test_fallback_is_not_persisted() {
        let resolved = resolve(&[], None, &[]);
        assert!(!resolved.should_persist());
    }

    // ==================== Accept-Language Parsing Tests ====================

    #[test]
    fn test_parse_accept_language_ordering() {
        let tags = parse_accept_language("en-US,en;q=0.9,bg;q=0.8");
        assert_eq!(tags, vec!["en-US", "en", "bg"]);
    }

    #[test]
    fn test_parse_accept_language_reorders_by_quality() {
        let tags = parse_accept_language("bg;q=0.5,ru;q=0.9");
        assert_eq!(tags, vec!["ru", "bg"]);
    }

    #[test]
    fn test_parse_accept_language_drops_q_zero() {
        let tags = parse_accept_language("bg;q=0,ru");
        assert_eq!(tags, vec!["ru"]);
    }

    #[test]
    fn test_parse_accept_language_wildcard_kept_but_unmatched() {
        let tags = parse_accept_language("*");
        assert_eq!(tags, vec!["*"]);

        // A wildcard never matches a concrete language
        let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let resolved = resolve(&[], None, &refs);
        assert_eq!(resolved.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_parse_accept_language_empty() {
        assert!(parse_accept_language("").is_empty());
        assert!(parse_accept_language("  ,  ").is_empty());
    }

    #[test]
    fn test_parse_accept_language_malformed_quality() {
        let tags = parse_accept_language("bg;q=abc,ru;q=0.5");
        assert_eq!(tags, vec!["bg", "ru"]);
    }

    // ==================== Primary Subtag Tests ====================

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("en-US"), "en");
        assert_eq!(primary_subtag("bg"), "bg");
        assert_eq!(primary_subtag("ru_RU"), "ru");
    }
}
