//! HTTP layer: the axum router and request handlers.
//!
//! Routing follows the `/{lang}/{page}` URL scheme. The bare root redirects
//! to the resolved language; a path whose first segment is not a supported
//! language code is an unrecognized top-level path and renders the
//! not-found view. When the path segment decides the language, the choice
//! is persisted in the `lang` cookie for future visits.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Config;
use crate::contact::{ContactFields, ContactForm, SimulatedDelivery};
use crate::i18n::{self, Language, ResolvedLocale};
use crate::pages::{self, PageContext};
use crate::routes::{normalize, Page};

/// Name of the stored-preference cookie.
const LANG_COOKIE: &str = "lang";

/// Build the site router.
pub fn app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/healthz", get(health))
        .route("/:lang", get(language_root))
        .route("/:lang/contact", post(contact_submit))
        .route("/:lang/*rest", get(localized_page))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Bare `/` answers 302 Found pointing at the resolved language's home
/// page. The target depends on the visitor, so the redirect must not be
/// cached as permanent.
async fn root_redirect(headers: HeaderMap) -> impl IntoResponse {
    let resolved = resolve_locale(&[], &headers);
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/{}", resolved.language.code()))],
    )
}

async fn language_root(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    Path(lang): Path<String>,
) -> Response {
    render_route(&config, &headers, &lang, "")
}

async fn localized_page(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    Path((lang, rest)): Path<(String, String)>,
) -> Response {
    render_route(&config, &headers, &lang, &rest)
}

/// Resolve the locale for a request from its path segments, the `lang`
/// cookie, and the Accept-Language header.
fn resolve_locale(path_segments: &[&str], headers: &HeaderMap) -> ResolvedLocale {
    let stored = cookie_value(headers, LANG_COOKIE);

    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let browser_tags = i18n::parse_accept_language(accept_language);
    let browser_refs: Vec<&str> = browser_tags.iter().map(String::as_str).collect();

    i18n::resolve(path_segments, stored.as_deref(), &browser_refs)
}

fn render_route(config: &Config, headers: &HeaderMap, first: &str, rest: &str) -> Response {
    let mut segments: Vec<&str> = vec![first];
    segments.extend(rest.split('/').filter(|s| !s.is_empty()));

    let resolved = resolve_locale(&segments, headers);
    let language_prefixed = Language::from_code(first).is_ok();

    // The logical path is the URL with the language prefix removed; a path
    // without a supported prefix is already logical (and always a miss at
    // the top level)
    let logical = if language_prefixed {
        normalize(rest)
    } else {
        normalize(&format!("{first}/{rest}"))
    };

    let ctx = PageContext {
        lang: resolved.language,
        logical_path: logical.clone(),
        base_url: &config.base_url,
    };

    let page = if language_prefixed {
        Page::from_logical_path(&logical)
    } else {
        None
    };

    let mut response = match page {
        Some(page) => Html(pages::render(page, &ctx)).into_response(),
        None => {
            warn!(path = %logical, "no route for path");
            (StatusCode::NOT_FOUND, Html(pages::render_not_found(&ctx))).into_response()
        }
    };

    // Persist a path-segment win so future visits to `/` land here
    if resolved.should_persist() {
        let stored = cookie_value(headers, LANG_COOKIE);
        if stored.as_deref() != Some(resolved.language.code()) {
            if let Ok(value) = HeaderValue::from_str(&format!(
                "{LANG_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
                resolved.language.code()
            )) {
                response.headers_mut().insert(header::SET_COOKIE, value);
            }
        }
    }

    response
}

/// Handle a contact form submission and re-render the contact page around
/// the resulting form state.
async fn contact_submit(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    Path(lang): Path<String>,
    Form(fields): Form<ContactFields>,
) -> Response {
    // Same contract as the GET side: a first segment that is not a
    // supported language code makes the whole path an unknown page
    let Ok(language) = Language::from_code(&lang) else {
        let resolved = resolve_locale(&[], &headers);
        let ctx = PageContext {
            lang: resolved.language,
            logical_path: normalize(&format!("{lang}/contact")),
            base_url: &config.base_url,
        };
        warn!(path = %ctx.logical_path, "no route for path");
        return (StatusCode::NOT_FOUND, Html(pages::render_not_found(&ctx))).into_response();
    };

    let mut form = ContactForm::with_fields(fields);
    let delivery = SimulatedDelivery::new(Duration::from_millis(config.submission_delay_ms));
    form.submit(&delivery).await;

    let ctx = PageContext {
        lang: language,
        logical_path: "/contact".to_string(),
        base_url: &config.base_url,
    };
    Html(pages::render_contact_result(&ctx, &form)).into_response()
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
