//! Internationalization (i18n) module for the Czech/English site.
//!
//! All language-related logic lives here: the closed language set, the
//! per-request resolver, the preference cookie and the text selection used
//! while rendering.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` validated against the registry
//! - `resolver`: Query > cookie > `Accept-Language` > default precedence
//! - `cookie`: Reading and writing the `lang` preference cookie
//! - `text`: `Translator::t(cs, en)` and `Bilingual` content values
//! - `link`: Same-page language switch URLs
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{resolve, LanguageRequest, Translator};
//!
//! let resolution = resolve(&LanguageRequest { selection: Some("en"), ..Default::default() }, Utc::now());
//! let tr = Translator::new(resolution.language);
//! assert_eq!(tr.t("Ahoj", "Hi"), "Hi");
//! ```

mod cookie;
mod language;
mod link;
mod registry;
mod resolver;
mod text;

pub use cookie::{find_preference, PreferenceCookie, COOKIE_NAME, MAX_AGE_SECS};
pub use language::Language;
pub use link::{switch_url, QUERY_PARAM};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve, LanguageRequest, Resolution, ResolutionSource};
pub use text::{Bilingual, Translator};
