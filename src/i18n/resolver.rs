//! Per-request language resolution.
//!
//! Precedence, first match wins:
//! 1. `?lang=` exactly `cs`/`en` (also persists the choice)
//! 2. `lang` cookie exactly `cs`/`en`
//! 3. `Accept-Language` starting with `en` after lower-casing
//! 4. `cs`
//!
//! Nothing here fails. Unknown or malformed values fall through to the next
//! rule.

use crate::i18n::{Language, PreferenceCookie};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The signals one request carries, already pulled out of the HTTP layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageRequest<'a> {
    /// Value of the `lang` query parameter
    pub selection: Option<&'a str>,

    /// Value of the `lang` cookie
    pub persisted: Option<&'a str>,

    /// Raw `Accept-Language` header
    pub accept_language: Option<&'a str>,

    /// Whether the request arrived over TLS
    pub encrypted: bool,
}

/// Which rule produced the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Query,
    Cookie,
    AcceptLanguage,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub language: Language,
    pub source: ResolutionSource,
    /// Set only when the request made an explicit, valid selection
    pub persist: Option<PreferenceCookie>,
}

/// Resolve the display language for one request.
///
/// # Arguments
/// * `request` - The language signals extracted from the request
/// * `now` - Anchors the cookie expiry; pass `Utc::now()` outside tests
///
/// # Returns
/// The resolved language, the rule that matched, and a `PreferenceCookie`
/// only when the query carried a valid selection.
pub fn resolve(request: &LanguageRequest<'_>, now: DateTime<Utc>) -> Resolution {
    let resolution = if let Some(language) = request.selection.and_then(Language::from_code) {
        Resolution {
            language,
            source: ResolutionSource::Query,
            persist: Some(PreferenceCookie::new(language, now, request.encrypted)),
        }
    } else if let Some(language) = request.persisted.and_then(Language::from_code) {
        Resolution {
            language,
            source: ResolutionSource::Cookie,
            persist: None,
        }
    } else if request
        .accept_language
        .is_some_and(|hint| hint.to_lowercase().starts_with("en"))
    {
        Resolution {
            language: Language::ENGLISH,
            source: ResolutionSource::AcceptLanguage,
            persist: None,
        }
    } else {
        Resolution {
            language: Language::default_language(),
            source: ResolutionSource::Default,
            persist: None,
        }
    };

    debug!(
        "Resolved language '{}' from {:?}",
        resolution.language, resolution.source
    );
    resolution
}
