//! Integration tests for the site server.
//!
//! These tests drive the axum router in-process and verify the routing,
//! locale-resolution, SEO-tag, and contact-form behavior end to end.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;

use webbuilder_site::{config::Config, server};

// ==================== Test Helpers ====================

fn app() -> Router {
    let config = Config {
        port: 0,
        base_url: "https://webbuilder.bg".to_string(),
        // No reason to wait in tests
        submission_delay_ms: 0,
    };
    server::app(Arc::new(config))
}

async fn get(path: &str) -> Response<Body> {
    request(Request::get(path).body(Body::empty()).unwrap()).await
}

async fn request(req: Request<Body>) -> Response<Body> {
    app().oneshot(req).await.expect("request should not fail")
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry Location")
        .to_str()
        .unwrap()
}

// ==================== Root Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_to_default_language() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn test_root_redirect_honors_accept_language() {
    let req = Request::get("/")
        .header(header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9,bg;q=0.8")
        .body(Body::empty())
        .unwrap();
    let response = request(req).await;

    assert_eq!(location(&response), "/bg");
}

#[tokio::test]
async fn test_root_redirect_honors_stored_preference() {
    let req = Request::get("/")
        .header(header::COOKIE, "lang=ru")
        .header(header::ACCEPT_LANGUAGE, "en")
        .body(Body::empty())
        .unwrap();
    let response = request(req).await;

    assert_eq!(location(&response), "/ru");
}

// ==================== Page Routing Tests ====================

#[tokio::test]
async fn test_home_page_renders_in_each_language() {
    for (lang, title) in [("en", "Home"), ("bg", "Начало"), ("ru", "Главная")] {
        let response = get(&format!("/{lang}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(&format!("<html lang=\"{lang}\">")));
        assert!(body.contains(title), "missing nav label for {lang}");
    }
}

#[tokio::test]
async fn test_services_page_carries_alternate_links() {
    let response = get("/bg/services").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert_eq!(body.matches("rel=\"alternate\"").count(), 4);
    assert!(body.contains("hreflang=\"en\" href=\"https://webbuilder.bg/en/services\""));
    assert!(body.contains("hreflang=\"x-default\" href=\"https://webbuilder.bg/en/services\""));
}

#[tokio::test]
async fn test_service_detail_page() {
    let response = get("/en/services/web-design").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<title>Web Design - WebBuilder</title>"));
    assert!(body.contains("Custom design tailored to your brand"));
}

#[tokio::test]
async fn test_unknown_service_slug_is_not_found() {
    let response = get("/en/services/consulting").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unrecognized_top_level_path_is_not_found() {
    let response = get("/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_unsupported_language_prefix_is_not_found() {
    // "fr" is not a language prefix, so the whole path is an unknown page
    let response = get("/fr/services").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_not_found_renders_in_resolved_language() {
    let req = Request::get("/about")
        .header(header::COOKIE, "lang=bg")
        .body(Body::empty())
        .unwrap();
    let response = request(req).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Страницата не е намерена"));
}

// ==================== Preference Persistence Tests ====================

#[tokio::test]
async fn test_path_language_is_persisted_as_cookie() {
    let response = get("/bg/services").await;

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("path win should set the lang cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("lang=bg"));
}

#[tokio::test]
async fn test_cookie_not_reset_when_already_stored() {
    let req = Request::get("/bg/services")
        .header(header::COOKIE, "lang=bg")
        .body(Body::empty())
        .unwrap();
    let response = request(req).await;

    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

// ==================== Contact Form Tests ====================

async fn post_contact(lang: &str, form_body: &str) -> Response<Body> {
    let req = Request::post(format!("/{lang}/contact"))
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(form_body.to_string()))
        .unwrap();
    request(req).await
}

#[tokio::test]
async fn test_contact_submit_valid_form_succeeds() {
    let response = post_contact(
        "en",
        "name=Jo&phone=&email=a%40b.co&subject=webDesign&message=hi",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Thank you! Your message has been sent."));
    assert!(body.contains("Send another message"));
}

#[tokio::test]
async fn test_contact_submit_invalid_form_reports_errors() {
    let response = post_contact(
        "en",
        "name=&phone=&email=bad&subject=webDesign&message=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Please enter your name"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please enter a message"));
    // Submitted values stay in place for correction
    assert!(body.contains("value=\"bad\""));
}

#[tokio::test]
async fn test_contact_errors_are_localized() {
    let response = post_contact(
        "ru",
        "name=&phone=abc&email=a%40b.co&subject=other&message=hi",
    )
    .await;

    let body = body_string(response).await;
    assert!(body.contains("Пожалуйста, введите ваше имя"));
    assert!(body.contains("Пожалуйста, введите корректный номер телефона"));
}

#[tokio::test]
async fn test_contact_optional_phone_not_required() {
    let response = post_contact(
        "en",
        "name=Jo&phone=&email=a%40b.co&subject=seo&message=hello",
    )
    .await;

    let body = body_string(response).await;
    assert!(!body.contains("Please enter a valid phone number"));
}

#[tokio::test]
async fn test_contact_submit_unsupported_language_prefix_is_not_found() {
    // Same routing miss as on the GET side, no delivery runs
    let response = post_contact(
        "fr",
        "name=Jo&phone=&email=a%40b.co&subject=webDesign&message=hi",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Page not found"));
    assert!(!body.contains("Thank you! Your message has been sent."));
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health_endpoint() {
    let response = get("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "ok");
}
