//! Language type: validated member of the registry's closed set.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use std::fmt;

/// A validated display language.
///
/// Only codes present in the registry can be turned into a `Language`, so
/// holding one is proof the value is `cs` or `en`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 code (e.g., "cs", "en")
    code: &'static str,
}

impl Language {
    pub const CZECH: Language = Language { code: "cs" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from an exact code.
    ///
    /// Returns `None` for anything outside the closed set, including case
    /// variants and region-tagged codes. Callers fall through to the next
    /// signal instead of treating this as an error.
    pub fn from_code(code: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
    }

    /// The fallback language used when nothing else matches.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// Every supported language in switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn switch_label(&self) -> &'static str {
        self.config().switch_label
    }

    pub fn is_english(&self) -> bool {
        *self == Language::ENGLISH
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
