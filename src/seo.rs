//! SEO head-tag synchronization.
//!
//! `DocumentHead` models the mutable head of the rendered document: the
//! `lang` attribute, the title, the meta description, and the set of
//! `hreflang` alternate links. [`DocumentHead::sync`] reconciles the head
//! against the active language and logical path; the alternate-link set is
//! fully replaced on every call (old links removed before new ones are
//! added), so repeated navigations never accumulate stale tags. `sync` is
//! idempotent.

use crate::i18n::Language;
use crate::routes::build_localized_path;

/// One `<link rel="alternate" hreflang="...">` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    /// `hreflang` value: a language code or `x-default`
    pub hreflang: &'static str,
    /// Fully qualified URL of the page in that language
    pub href: String,
}

/// Compute the alternate-link set for a logical path: one link per enabled
/// language plus an `x-default` pointing at the default language.
pub fn alternate_links(logical_path: &str, base_url: &str) -> Vec<AlternateLink> {
    let base = base_url.trim_end_matches('/');
    let mut links: Vec<AlternateLink> = Language::all()
        .into_iter()
        .map(|lang| AlternateLink {
            hreflang: lang.code(),
            href: format!("{base}{}", build_localized_path(logical_path, lang)),
        })
        .collect();

    let default = Language::default_language();
    links.push(AlternateLink {
        hreflang: "x-default",
        href: format!("{base}{}", build_localized_path(logical_path, default)),
    });

    links
}

/// The observable state of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    lang: Option<&'static str>,
    title: Option<String>,
    description: Option<String>,
    alternates: Vec<AlternateLink>,
}

impl DocumentHead {
    /// Create an empty head (no title, no description, no alternates).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the head with the active language and logical path.
    ///
    /// - sets the document `lang` attribute
    /// - overwrites the title and description when provided; callers
    ///   pre-format, no formatting is applied here
    /// - replaces the entire alternate-link set with a freshly computed one
    ///
    /// Calling `sync` twice with identical arguments leaves the head in the
    /// same observable state as calling it once.
    pub fn sync(
        &mut self,
        lang: Language,
        logical_path: &str,
        title: Option<&str>,
        description: Option<&str>,
        base_url: &str,
    ) {
        self.lang = Some(lang.code());

        if let Some(title) = title {
            self.title = Some(title.to_string());
        }
        if let Some(description) = description {
            self.description = Some(description.to_string());
        }

        // Remove-then-add, every invocation
        self.alternates.clear();
        self.alternates = alternate_links(logical_path, base_url);
    }

    /// Remove every alternate link this synchronizer added. Called when the
    /// consuming view is torn down; title and description belong to the next
    /// view and are left for it to overwrite.
    pub fn teardown(&mut self) {
        self.alternates.clear();
    }

    /// The document `lang` attribute, if set.
    pub fn lang(&self) -> Option<&'static str> {
        self.lang
    }

    /// The document title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The meta description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The current alternate-link set.
    pub fn alternates(&self) -> &[AlternateLink] {
        &self.alternates
    }

    /// Render the head as an HTML fragment (everything inside `<head>`).
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );

        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        if let Some(description) = &self.description {
            out.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape_html(description)
            ));
        }
        for link in &self.alternates {
            out.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
                link.hreflang,
                escape_html(&link.href)
            ));
        }
        out
    }
}

/// Escape text for safe interpolation into HTML content or attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://webbuilder.bg";

    // ==================== Alternate Link Tests ====================

    #[test]
    fn test_alternate_links_home() {
        let links = alternate_links("/", BASE);

        assert_eq!(links.len(), 4);
        assert_eq!(links[0].hreflang, "en");
        assert_eq!(links[0].href, "https://webbuilder.bg/en");
        assert_eq!(links[1].hreflang, "bg");
        assert_eq!(links[1].href, "https://webbuilder.bg/bg");
        assert_eq!(links[2].hreflang, "ru");
        assert_eq!(links[2].href, "https://webbuilder.bg/ru");
        assert_eq!(links[3].hreflang, "x-default");
        assert_eq!(links[3].href, "https://webbuilder.bg/en");
    }

    #[test]
    fn test_alternate_links_inner_page() {
        let links = alternate_links("/services/web-design", BASE);

        assert_eq!(links.len(), 4);
        assert_eq!(links[1].href, "https://webbuilder.bg/bg/services/web-design");
        assert_eq!(links[3].href, "https://webbuilder.bg/en/services/web-design");
    }

    #[test]
    fn test_alternate_links_trailing_slash_base() {
        let links = alternate_links("/contact", "https://webbuilder.bg/");
        assert_eq!(links[0].href, "https://webbuilder.bg/en/contact");
    }

    // ==================== Sync Tests ====================

    #[test]
    fn test_sync_sets_lang_title_description() {
        let mut head = DocumentHead::new();
        head.sync(
            Language::BULGARIAN,
            "/contact",
            Some("Контакти - WebBuilder"),
            Some("Свържете се с нас"),
            BASE,
        );

        assert_eq!(head.lang(), Some("bg"));
        assert_eq!(head.title(), Some("Контакти - WebBuilder"));
        assert_eq!(head.description(), Some("Свържете се с нас"));
        assert_eq!(head.alternates().len(), 4);
    }

    #[test]
    fn test_sync_without_title_keeps_previous() {
        let mut head = DocumentHead::new();
        head.sync(Language::ENGLISH, "/", Some("Home"), Some("Desc"), BASE);
        head.sync(Language::ENGLISH, "/blog", None, None, BASE);

        // Title and description are only overwritten when provided
        assert_eq!(head.title(), Some("Home"));
        assert_eq!(head.description(), Some("Desc"));
        // Alternates always track the new path
        assert_eq!(head.alternates()[0].href, "https://webbuilder.bg/en/blog");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut head = DocumentHead::new();
        head.sync(Language::RUSSIAN, "/services", Some("Услуги"), Some("..."), BASE);
        let after_once = head.clone();

        head.sync(Language::RUSSIAN, "/services", Some("Услуги"), Some("..."), BASE);

        assert_eq!(head, after_once);
        assert_eq!(head.alternates().len(), 4);
    }

    #[test]
    fn test_sync_replaces_alternates_on_navigation() {
        let mut head = DocumentHead::new();
        head.sync(Language::ENGLISH, "/services", None, None, BASE);
        head.sync(Language::ENGLISH, "/portfolio", None, None, BASE);

        // Fully replaced, never accumulated
        assert_eq!(head.alternates().len(), 4);
        for link in head.alternates() {
            assert!(link.href.ends_with("/portfolio"));
        }
    }

    #[test]
    fn test_repeated_navigation_does_not_accumulate() {
        let mut head = DocumentHead::new();
        for _ in 0..50 {
            head.sync(Language::ENGLISH, "/blog", None, None, BASE);
        }
        assert_eq!(head.alternates().len(), 4);
    }

    #[test]
    fn test_teardown_removes_all_alternates() {
        let mut head = DocumentHead::new();
        head.sync(Language::ENGLISH, "/contact", Some("Contact"), None, BASE);
        head.teardown();

        assert!(head.alternates().is_empty());
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_contains_all_tags() {
        let mut head = DocumentHead::new();
        head.sync(
            Language::ENGLISH,
            "/services",
            Some("Services - WebBuilder"),
            Some("What we do"),
            BASE,
        );
        let html = head.render();

        assert!(html.contains("<title>Services - WebBuilder</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"What we do\">"));
        assert!(html.contains("hreflang=\"en\""));
        assert!(html.contains("hreflang=\"bg\""));
        assert!(html.contains("hreflang=\"ru\""));
        assert!(html.contains("hreflang=\"x-default\""));
        assert_eq!(html.matches("rel=\"alternate\"").count(), 4);
    }

    #[test]
    fn test_render_escapes_title() {
        let mut head = DocumentHead::new();
        head.sync(
            Language::ENGLISH,
            "/",
            Some("Design & <Dev>"),
            None,
            BASE,
        );

        assert!(head.render().contains("<title>Design &amp; &lt;Dev&gt;</title>"));
    }

    // ==================== Escape Tests ====================

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
