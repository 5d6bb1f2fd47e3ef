//! Text selection for bilingual content.

use crate::i18n::Language;

/// A piece of copy available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub cs: &'static str,
    pub en: &'static str,
}

impl Bilingual {
    pub const fn new(cs: &'static str, en: &'static str) -> Self {
        Self { cs, en }
    }

    /// Same text in both languages (brand names, tech labels)
    pub const fn same(text: &'static str) -> Self {
        Self { cs: text, en: text }
    }
}

/// Picks the Czech or English variant for one request.
///
/// Built once from the resolved language and passed down the render chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// English iff the resolved language is `en`, Czech otherwise.
    pub fn t<'a>(&self, cs: &'a str, en: &'a str) -> &'a str {
        if self.language.is_english() {
            en
        } else {
            cs
        }
    }

    pub fn pick(&self, text: &Bilingual) -> &'static str {
        self.t(text.cs, text.en)
    }
}
