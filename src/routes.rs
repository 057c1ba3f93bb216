//! Localized routing: the page catalog and the language-prefix path scheme.
//!
//! Every externally visible URL has the shape `/{lang}/{logical-path}`,
//! where the logical path identifies a page independent of language. This
//! module owns the two directions of that mapping (build and strip) and the
//! catalog of logical paths the site serves.
//!
//! Logical paths are canonicalized to a leading-slash form with no trailing
//! slash; the home page is `/`, never the empty string.

use crate::i18n::Language;

/// Canonicalize a logical path: leading slash, no trailing slash, empty
/// segments collapsed. `""` and `"/"` both canonicalize to `"/"`.
pub fn normalize(logical: &str) -> String {
    let segments: Vec<&str> = logical.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Build the externally visible URL path for a logical path and a language.
///
/// The home page yields `/{lang}`; everything else `/{lang}/{logical}`,
/// never with a trailing slash. A logical path must not itself carry a
/// language prefix; if a caller passes one anyway it is stripped first, so
/// double-prefixing is impossible.
pub fn build_localized_path(logical: &str, lang: Language) -> String {
    let logical = strip_language_prefix(logical);
    if logical == "/" {
        format!("/{}", lang.code())
    } else {
        format!("/{}{}", lang.code(), logical)
    }
}

/// Recover the logical path from an externally visible URL path.
///
/// A leading segment is removed only when it is a supported language code;
/// any other path is already logical and is returned canonicalized. The
/// home page is represented as `/`, never the empty string.
pub fn strip_language_prefix(path: &str) -> String {
    let normalized = normalize(path);
    let without_slash = normalized.trim_start_matches('/');
    let mut pieces = without_slash.splitn(2, '/');
    let first = pieces.next().unwrap_or("");

    if Language::from_code(first).is_ok() {
        match pieces.next() {
            Some(rest) if !rest.is_empty() => format!("/{rest}"),
            _ => "/".to_string(),
        }
    } else {
        normalized
    }
}

/// The service groups shown on the services page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Presence,
    Seo,
    Marketing,
}

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [ServiceCategory; 3] = [
        ServiceCategory::Presence,
        ServiceCategory::Seo,
        ServiceCategory::Marketing,
    ];

    /// Dictionary key fragment (`services.categories.{key}.*`).
    pub fn key(&self) -> &'static str {
        match self {
            ServiceCategory::Presence => "presence",
            ServiceCategory::Seo => "seo",
            ServiceCategory::Marketing => "marketing",
        }
    }

    /// The services in this category, in display order.
    pub fn services(&self) -> [ServiceKey; 3] {
        match self {
            ServiceCategory::Presence => [
                ServiceKey::WebDesign,
                ServiceKey::Ecommerce,
                ServiceKey::MobileApps,
            ],
            ServiceCategory::Seo => [
                ServiceKey::GoogleAds,
                ServiceKey::SeoOptimization,
                ServiceKey::GoogleMyBusiness,
            ],
            ServiceCategory::Marketing => [
                ServiceKey::SocialNetworks,
                ServiceKey::OnlineReputation,
                ServiceKey::EmailMarketing,
            ],
        }
    }
}

/// The nine services in the catalog.
///
/// Each service has a URL slug (`/services/{slug}`) and a dictionary key
/// fragment (`services.items.{key}.*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKey {
    WebDesign,
    Ecommerce,
    MobileApps,
    GoogleAds,
    SeoOptimization,
    GoogleMyBusiness,
    SocialNetworks,
    OnlineReputation,
    EmailMarketing,
}

impl ServiceKey {
    /// All services, in catalog order.
    pub const ALL: [ServiceKey; 9] = [
        ServiceKey::WebDesign,
        ServiceKey::Ecommerce,
        ServiceKey::MobileApps,
        ServiceKey::GoogleAds,
        ServiceKey::SeoOptimization,
        ServiceKey::GoogleMyBusiness,
        ServiceKey::SocialNetworks,
        ServiceKey::OnlineReputation,
        ServiceKey::EmailMarketing,
    ];

    /// The URL slug for this service.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKey::WebDesign => "web-design",
            ServiceKey::Ecommerce => "ecommerce",
            ServiceKey::MobileApps => "mobile-apps",
            ServiceKey::GoogleAds => "google-ads",
            ServiceKey::SeoOptimization => "seo",
            ServiceKey::GoogleMyBusiness => "google-my-business",
            ServiceKey::SocialNetworks => "social-networks",
            ServiceKey::OnlineReputation => "online-reputation",
            ServiceKey::EmailMarketing => "email-marketing",
        }
    }

    /// The dictionary key fragment for this service.
    pub fn translation_key(&self) -> &'static str {
        match self {
            ServiceKey::WebDesign => "webDesign",
            ServiceKey::Ecommerce => "ecommerce",
            ServiceKey::MobileApps => "mobileApps",
            ServiceKey::GoogleAds => "googleAds",
            ServiceKey::SeoOptimization => "seoOptimization",
            ServiceKey::GoogleMyBusiness => "googleMyBusiness",
            ServiceKey::SocialNetworks => "socialNetworks",
            ServiceKey::OnlineReputation => "onlineReputation",
            ServiceKey::EmailMarketing => "emailMarketing",
        }
    }

    /// Resolve a URL slug to a service. Unknown slugs are a routing miss.
    pub fn from_slug(slug: &str) -> Option<ServiceKey> {
        ServiceKey::ALL.into_iter().find(|key| key.slug() == slug)
    }
}

/// The pages the site serves, identified by logical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    ServiceDetail(ServiceKey),
    Portfolio,
    Blog,
    Contact,
}

impl Page {
    /// Resolve a logical path to a page, or `None` for a routing miss.
    pub fn from_logical_path(logical: &str) -> Option<Page> {
        let normalized = normalize(logical);
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Page::Home),
            ["services"] => Some(Page::Services),
            ["services", slug] => ServiceKey::from_slug(slug).map(Page::ServiceDetail),
            ["portfolio"] => Some(Page::Portfolio),
            ["blog"] => Some(Page::Blog),
            ["contact"] => Some(Page::Contact),
            _ => None,
        }
    }

    /// The canonical logical path of this page.
    pub fn logical_path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Services => "/services".to_string(),
            Page::ServiceDetail(key) => format!("/services/{}", key.slug()),
            Page::Portfolio => "/portfolio".to_string(),
            Page::Blog => "/blog".to_string(),
            Page::Contact => "/contact".to_string(),
        }
    }
}
