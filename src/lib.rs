//! Multi-language marketing website server.
//!
//! A server-side-rendered site in English, Bulgarian and Russian. Every
//! page lives under a language-prefixed URL (`/{lang}/{page}`); the core of
//! the crate is the machinery keeping the URL, the active locale, and the
//! SEO head tags in sync, plus the contact form's validation and submission
//! state machine.

pub mod config;
pub mod contact;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod seo;
pub mod server;
