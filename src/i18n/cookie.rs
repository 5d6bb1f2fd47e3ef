//! The `lang` preference cookie: reading it from requests and building the
//! `Set-Cookie` value that persists an explicit choice.

use crate::i18n::Language;
use chrono::{DateTime, Duration, Utc};

/// Name of the cookie holding the last explicitly chosen language
pub const COOKIE_NAME: &str = "lang";

/// One year, in seconds
pub const MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Instruction to persist a language choice on the client.
///
/// Scoped to the whole site, readable from scripts, sent only on same-site
/// requests and top-level navigations (`SameSite=Lax`). `Secure` is set only
/// when the request that produced it arrived over an encrypted transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCookie {
    pub language: Language,
    pub expires: DateTime<Utc>,
    pub secure: bool,
}

impl PreferenceCookie {
    /// Create a cookie that expires one year after `now`.
    ///
    /// # Arguments
    /// * `language` - The language to persist
    /// * `now` - Current time; `Expires` is `now + MAX_AGE_SECS`
    /// * `secure` - Whether the request arrived over an encrypted transport
    pub fn new(language: Language, now: DateTime<Utc>, secure: bool) -> Self {
        Self {
            language,
            expires: now + Duration::seconds(MAX_AGE_SECS),
            secure,
        }
    }

    /// Render as a `Set-Cookie` header value.
    ///
    /// # Returns
    /// `lang=<code>; Expires=<GMT date>; Max-Age=31536000; Path=/`, then
    /// `; Secure` if applicable, then `; SameSite=Lax`. Never `HttpOnly`.
    pub fn to_header_value(&self) -> String {
        let mut value = format!(
            "{}={}; Expires={}; Max-Age={}; Path=/",
            COOKIE_NAME,
            self.language.code(),
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT"),
            MAX_AGE_SECS
        );
        if self.secure {
            value.push_str("; Secure");
        }
        value.push_str("; SameSite=Lax");
        value
    }
}

/// Find the first `lang` value across one or more `Cookie` header values.
///
/// Pairs are split at the byte level, so other cookies carrying non-ASCII or
/// non-UTF-8 bytes do not hide the preference. Pairs without `=` are skipped.
///
/// # Arguments
/// * `cookie_headers` - Raw `Cookie` header values, in request order
///
/// # Returns
/// The value of the first `lang` pair, trimmed and unvalidated (checking it
/// against the language set is the resolver's job), or `None` if there is no
/// such pair or its value is not UTF-8.
pub fn find_preference<'a, I, T>(cookie_headers: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a T>,
    T: AsRef<[u8]> + ?Sized + 'a,
{
    cookie_headers
        .into_iter()
        .flat_map(|header| header.as_ref().split(|&b| b == b';'))
        .filter_map(|pair| {
            let eq = pair.iter().position(|&b| b == b'=')?;
            Some((&pair[..eq], &pair[eq + 1..]))
        })
        .find(|(name, _)| trim_ascii(name) == COOKIE_NAME.as_bytes())
        .and_then(|(_, value)| std::str::from_utf8(trim_ascii(value)).ok())
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap()
    }

    // ==================== Set-Cookie Tests ====================

    #[test]
    fn test_expires_one_year_later() {
        let cookie = PreferenceCookie::new(Language::ENGLISH, fixed_now(), false);
        assert_eq!(
            cookie.expires,
            Utc.with_ymd_and_hms(2027, 10, 18, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_header_value_plain_transport() {
        let cookie = PreferenceCookie::new(Language::ENGLISH, fixed_now(), false);
        assert_eq!(
            cookie.to_header_value(),
            "lang=en; Expires=Mon, 18 Oct 2027 12:30:00 GMT; Max-Age=31536000; Path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_header_value_encrypted_transport() {
        let cookie = PreferenceCookie::new(Language::CZECH, fixed_now(), true);
        let value = cookie.to_header_value();
        assert!(value.starts_with("lang=cs; "));
        assert!(value.contains("; Secure"));
        assert!(value.ends_with("; SameSite=Lax"));
    }

    #[test]
    fn test_header_value_is_script_accessible() {
        let cookie = PreferenceCookie::new(Language::ENGLISH, fixed_now(), true);
        assert!(!cookie.to_header_value().contains("HttpOnly"));
    }

    // ==================== Cookie Parsing Tests ====================

    #[test]
    fn test_find_preference_single() {
        assert_eq!(find_preference(["lang=en"]), Some("en"));
    }

    #[test]
    fn test_find_preference_among_others() {
        assert_eq!(
            find_preference(["session=abc; lang=cs; theme=dark"]),
            Some("cs")
        );
    }

    #[test]
    fn test_find_preference_first_wins() {
        assert_eq!(find_preference(["lang=en; lang=cs"]), Some("en"));
        assert_eq!(find_preference(["a=1", "lang=cs", "lang=en"]), Some("cs"));
    }

    #[test]
    fn test_find_preference_missing() {
        assert_eq!(find_preference(["session=abc"]), None);
        assert_eq!(find_preference(std::iter::empty::<&str>()), None);
    }

    #[test]
    fn test_find_preference_ignores_malformed_pairs() {
        assert_eq!(find_preference(["garbage; ; lang=en"]), Some("en"));
        assert_eq!(find_preference(["language=en"]), None);
    }

    #[test]
    fn test_find_preference_beside_utf8_cookie() {
        assert_eq!(find_preference(["name=Jiří; lang=en"]), Some("en"));
    }

    #[test]
    fn test_find_preference_beside_non_utf8_cookie() {
        let header: &[u8] = b"theme=\xff\xfe; lang=cs";
        assert_eq!(find_preference([header]), Some("cs"));
    }

    #[test]
    fn test_find_preference_non_utf8_value_is_none() {
        let header: &[u8] = b"lang=e\xffn; lang=en";
        assert_eq!(find_preference([header]), None);
    }

    #[test]
    fn test_trim_ascii() {
        assert_eq!(trim_ascii(b"  lang \t"), b"lang");
        assert_eq!(trim_ascii(b"   "), b"");
        assert_eq!(trim_ascii(b""), b"");
    }

    #[test]
    fn test_find_preference_returns_unvalidated_value() {
        assert_eq!(find_preference(["lang=fr"]), Some("fr"));
    }
}
