//! Same-page language switch links.

use crate::i18n::Language;
use crate::render::escape_html;

/// Query parameter carrying an explicit language choice
pub const QUERY_PARAM: &str = "lang";

/// Build the switcher href for `target`, escaped for an HTML attribute.
///
/// # Arguments
/// * `request_uri` - Path and optional query of the current request
/// * `target` - Language the link switches to
///
/// # Returns
/// The path with everything from the first `?` dropped (empty becomes `/`),
/// followed by `?lang=<code>`, HTML-escaped.
pub fn switch_url(request_uri: &str, target: Language) -> String {
    let path = request_uri
        .split_once('?')
        .map_or(request_uri, |(path, _)| path);
    let path = if path.is_empty() { "/" } else { path };

    escape_html(&format!("{}?{}={}", path, QUERY_PARAM, target.code()))
}
