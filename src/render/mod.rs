//! Server-side page assembly.
//!
//! The page is a single HTML document. Its text is chosen by the
//! `Translator` inside `PageContext`; markup does not depend on the language
//! except for the `lang` attribute and the active switcher button.

mod escape;
mod sections;

pub use escape::{escape_html, rawurlencode};

use crate::i18n::{Bilingual, Language, Translator};
use chrono::NaiveDate;

/// Everything one render needs, built per request.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub translator: Translator,
    /// Request URI as received (path and optional query), used for switch links
    pub request_uri: &'a str,
    /// Date the page is rendered for (footer year, age)
    pub today: NaiveDate,
    /// Deployed build identifier shown in the footer
    pub version: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    pub fn new(language: Language, request_uri: &'a str, today: NaiveDate) -> Self {
        Self {
            translator: Translator::new(language),
            request_uri,
            today,
            version: None,
        }
    }

    pub fn with_version(mut self, version: Option<&'a str>) -> Self {
        self.version = version;
        self
    }

    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Shorthand for `translator.t`, escaped for HTML
    pub(crate) fn t(&self, cs: &str, en: &str) -> String {
        escape_html(self.translator.t(cs, en))
    }

    /// Pick a `Bilingual` value and escape it for HTML
    pub(crate) fn pick(&self, text: &Bilingual) -> String {
        escape_html(self.translator.pick(text))
    }
}

/// Render the full page for one request.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<!doctype html>
<html lang="{lang}">
{head}
<body>
{nav}
{hero}
{about}
{projects}
{skills}
{gallery}
{contact}
{footer}
{modal}
{scripts}
</body>
</html>
"#,
        lang = ctx.language().code(),
        head = sections::head(ctx),
        nav = sections::nav(ctx),
        hero = sections::hero(ctx),
        about = sections::about(ctx),
        projects = sections::projects(ctx),
        skills = sections::skills(ctx),
        gallery = sections::gallery(ctx),
        contact = sections::contact(ctx),
        footer = sections::footer(ctx),
        modal = sections::modal(ctx),
        scripts = sections::scripts(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn render(language: Language) -> String {
        render_page(&PageContext::new(language, "/?lang=xx", today()))
    }

    // ==================== Language Attribute Tests ====================

    #[test]
    fn test_html_lang_attribute() {
        assert!(render(Language::CZECH).contains(r#"<html lang="cs">"#));
        assert!(render(Language::ENGLISH).contains(r#"<html lang="en">"#));
    }

    // ==================== Text Selection Tests ====================

    #[test]
    fn test_english_page_has_no_czech_headings() {
        let page = render(Language::ENGLISH);
        assert!(page.contains("Quick overview"));
        assert!(page.contains("Projects &amp; work"));
        assert!(!page.contains("Rychlý přehled"));
        assert!(!page.contains("Projekty a reference"));
    }

    #[test]
    fn test_czech_page_has_no_english_headings() {
        let page = render(Language::CZECH);
        assert!(page.contains("Rychlý přehled"));
        assert!(page.contains("Dovednosti"));
        assert!(!page.contains("Quick overview"));
        assert!(!page.contains("How collaboration works"));
    }

    // ==================== Switcher Tests ====================

    #[test]
    fn test_switch_links_drop_query() {
        let page = render(Language::CZECH);
        assert!(page.contains(r#"href="/?lang=cs""#));
        assert!(page.contains(r#"href="/?lang=en""#));
        assert!(!page.contains("lang=xx"));
    }

    #[test]
    fn test_active_switch_button_follows_language() {
        let czech = render(Language::CZECH);
        assert!(czech.contains(r#"btn-outline-light active" href="/?lang=cs">CZ</a>"#));
        assert!(czech.contains(r#"btn-outline-light" href="/?lang=en">EN</a>"#));

        let english = render(Language::ENGLISH);
        assert!(english.contains(r#"btn-outline-light" href="/?lang=cs">CZ</a>"#));
        assert!(english.contains(r#"btn-outline-light active" href="/?lang=en">EN</a>"#));
    }

    #[test]
    fn test_switch_links_escape_path() {
        let page = render_page(&PageContext::new(Language::CZECH, "/a\"b", today()));
        assert!(page.contains(r#"href="/a&quot;b?lang=en""#));
    }

    // ==================== Footer Tests ====================

    #[test]
    fn test_footer_year_range() {
        assert!(render(Language::CZECH).contains("© 2025-2026 DjDevs.eu"));
    }

    #[test]
    fn test_age_rendered_server_side() {
        assert!(render(Language::ENGLISH).contains(r#"<span id="age">20</span>"#));
    }

    #[test]
    fn test_footer_version_present() {
        let ctx = PageContext::new(Language::CZECH, "/", today()).with_version(Some("v1.2.3 <beta>"));
        let page = render_page(&ctx);
        assert!(page.contains("v1.2.3 &lt;beta&gt;"));
    }

    #[test]
    fn test_footer_version_absent() {
        let page = render(Language::ENGLISH);
        assert!(!page.contains(r#"class="site-version""#));
    }

    // ==================== Document Shape Tests ====================

    #[test]
    fn test_all_sections_present() {
        let page = render(Language::ENGLISH);
        for id in ["top", "about", "projects", "skills", "gallery", "contact", "imgModal"] {
            assert!(page.contains(&format!(r#"id="{}""#, id)), "missing section {}", id);
        }
    }

    #[test]
    fn test_modal_handler_follows_modal_markup() {
        let page = render(Language::CZECH);
        let modal = page.find(r#"id="imgModal""#).expect("modal rendered");
        let handler = page.find("show.bs.modal").expect("handler rendered");
        assert!(handler > modal);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(Language::ENGLISH), render(Language::ENGLISH));
    }
}
