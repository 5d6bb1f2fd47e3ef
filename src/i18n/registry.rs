//! Language registry: Single source of truth for the languages the site speaks.
//!
//! The set is closed (`cs`, `en`) and initialised once behind a `OnceLock`.
//! Nothing here is mutable after start-up, so the registry can be shared by
//! every request without locking.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code as it appears in `?lang=` and the cookie
    pub code: &'static str,

    /// English name of the language (e.g., "Czech", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "Čeština", "English")
    pub native_name: &'static str,

    /// Label shown on the navbar switcher button
    pub switch_label: &'static str,

    /// Whether this is the fallback language when no signal matches
    /// (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    ///
    /// Matching is case-sensitive and does not trim: `"EN"` and `" en"` are
    /// not languages.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default (fallback) language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are flagged as default. That is a
    /// programming error in `default_languages`.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// The site is written in Czech first; English is the alternative.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "cs",
            name: "Czech",
            native_name: "Čeština",
            switch_label: "CZ",
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            switch_label: "EN",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_czech() {
        let config = LanguageRegistry::get()
            .get_by_code("cs")
            .expect("cs should exist");

        assert_eq!(config.name, "Czech");
        assert_eq!(config.native_name, "Čeština");
        assert_eq!(config.switch_label, "CZ");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("en should exist");

        assert_eq!(config.name, "English");
        assert_eq!(config.switch_label, "EN");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code(" en").is_none());
        assert!(registry.get_by_code("en-US").is_none());
        assert!(registry.get_by_code("fr").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_is_switcher_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["cs", "en"]);
    }

    #[test]
    fn test_default_language_is_czech() {
        assert_eq!(LanguageRegistry::get().default_language().code, "cs");
    }
}
