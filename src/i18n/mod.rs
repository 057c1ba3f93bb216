//! Internationalization (i18n) module for the multi-language site.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, per-request locale resolution,
//! and the translation dictionaries.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages and metadata
//! - `language`: type-safe `Language` validated against the registry
//! - `resolver`: path > stored preference > Accept-Language > default chain
//! - `translations`: dotted-key dictionaries with English fallback

mod language;
mod registry;
mod resolver;
pub mod translations;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{parse_accept_language, resolve, ResolutionSource, ResolvedLocale};
