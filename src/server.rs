//! HTTP server: page rendering, health check and static assets.

use crate::config::Config;
use crate::i18n::{find_preference, resolve, LanguageRequest, QUERY_PARAM};
use crate::render::{render_page, PageContext};
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, uri::Scheme, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, Utc};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state for all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub version: Option<String>,
}

impl AppState {
    /// Build state from config, reading the version file if one is configured.
    pub fn new(config: Config) -> Self {
        let version = config.version_file.as_deref().and_then(load_version);
        Self { config, version }
    }
}

/// Read the footer version string. Missing or empty files yield `None`.
pub fn load_version(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let version = contents.trim();
            if version.is_empty() {
                None
            } else {
                Some(version.to_string())
            }
        }
        Err(e) => {
            warn!("Could not read version file {}: {}", path.display(), e);
            None
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health))
        .nest_service("/assets", assets)
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until SIGINT/SIGTERM.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(config));

    info!("Assets directory: {}", state.config.assets_dir.display());
    if let Some(version) = &state.version {
        info!("Site version: {}", version);
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Whether the request reached us over TLS, directly or via a trusted proxy.
fn is_encrypted(uri: &Uri, headers: &HeaderMap, trust_forwarded_proto: bool) -> bool {
    if uri.scheme() == Some(&Scheme::HTTPS) {
        return true;
    }

    trust_forwarded_proto
        && headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

/// Longest valid UTF-8 prefix of a header value.
fn utf8_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}

/// Collect the language signals from one request.
///
/// The last `lang` query pair wins; the first `lang` cookie wins. Cookie
/// headers are scanned as bytes and `Accept-Language` is cut at its first
/// invalid UTF-8 byte, so stray non-ASCII bytes never hide a usable signal.
fn language_request<'a>(
    query_pairs: Option<&'a [(String, String)]>,
    headers: &'a HeaderMap,
    encrypted: bool,
) -> LanguageRequest<'a> {
    let selection = query_pairs.and_then(|pairs| {
        pairs
            .iter()
            .rev()
            .find(|(key, _)| key == QUERY_PARAM)
            .map(|(_, value)| value.as_str())
    });

    let persisted = find_preference(headers.get_all(header::COOKIE).iter());

    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .map(|v| utf8_prefix(v.as_bytes()));

    LanguageRequest {
        selection,
        persisted,
        accept_language,
        encrypted,
    }
}

async fn page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
        )
            .into_response();
    }

    let query_pairs = match &query {
        Ok(Query(pairs)) => Some(pairs.as_slice()),
        Err(e) => {
            warn!("Ignoring undecodable query string: {}", e);
            None
        }
    };

    let encrypted = is_encrypted(&uri, &headers, state.config.trust_forwarded_proto);
    let request = language_request(query_pairs, &headers, encrypted);
    let resolution = resolve(&request, Utc::now());

    let request_uri = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let ctx = PageContext::new(resolution.language, request_uri, Local::now().date_naive())
        .with_version(state.version.as_deref());

    let mut response = Html(render_page(&ctx)).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(
        header::VARY,
        HeaderValue::from_static("Cookie, Accept-Language"),
    );

    if let Some(cookie) = resolution.persist {
        match HeaderValue::from_str(&cookie.to_header_value()) {
            Ok(value) => {
                response_headers.append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode preference cookie: {}", e),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::default(),
            version: Some("build-42".to_string()),
        })
    }

    async fn get_page(request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = router(test_state())
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        (status, headers, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    fn request(uri: &str) -> axum::http::request::Builder {
        Request::builder().method(Method::GET).uri(uri)
    }

    // ==================== Transport Detection Tests ====================

    #[test]
    fn test_is_encrypted_plain() {
        let uri: Uri = "/".parse().unwrap();
        assert!(!is_encrypted(&uri, &HeaderMap::new(), true));
    }

    #[test]
    fn test_is_encrypted_absolute_https_uri() {
        let uri: Uri = "https://djdevs.eu/".parse().unwrap();
        assert!(is_encrypted(&uri, &HeaderMap::new(), false));
    }

    #[test]
    fn test_is_encrypted_forwarded_proto_trusted() {
        let uri: Uri = "/".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS, http"));
        assert!(is_encrypted(&uri, &headers, true));
    }

    #[test]
    fn test_is_encrypted_forwarded_proto_untrusted() {
        let uri: Uri = "/".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert!(!is_encrypted(&uri, &headers, false));
    }

    // ==================== Signal Extraction Tests ====================

    #[test]
    fn test_language_request_last_query_pair_wins() {
        let pairs = vec![
            ("lang".to_string(), "cs".to_string()),
            ("foo".to_string(), "1".to_string()),
            ("lang".to_string(), "en".to_string()),
        ];
        let headers = HeaderMap::new();
        let request = language_request(Some(&pairs), &headers, false);
        assert_eq!(request.selection, Some("en"));
    }

    #[test]
    fn test_language_request_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("lang=en"));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE"));

        let request = language_request(None, &headers, true);
        assert_eq!(request.selection, None);
        assert_eq!(request.persisted, Some("en"));
        assert_eq!(request.accept_language, Some("de-DE"));
        assert!(request.encrypted);
    }

    #[test]
    fn test_language_request_cookie_beside_utf8_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_bytes("name=Jiří; lang=en".as_bytes()).unwrap(),
        );
        let request = language_request(None, &headers, false);
        assert_eq!(request.persisted, Some("en"));
    }

    #[test]
    fn test_language_request_accept_language_with_stray_byte() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_bytes(b"EN-\xff").unwrap(),
        );
        let request = language_request(None, &headers, false);
        assert_eq!(request.accept_language, Some("EN-"));
    }

    #[test]
    fn test_utf8_prefix() {
        assert_eq!(utf8_prefix(b"en-US"), "en-US");
        assert_eq!(utf8_prefix("cs-CZ,čeština".as_bytes()), "cs-CZ,čeština");
        assert_eq!(utf8_prefix(b"en\xffde"), "en");
        assert_eq!(utf8_prefix(b"\xffen"), "");
    }

    // ==================== Version File Tests ====================

    #[test]
    fn test_load_version_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        std::fs::write(&path, "v2.1.0\n").unwrap();
        assert_eq!(load_version(&path), Some("v2.1.0".to_string()));
    }

    #[test]
    fn test_load_version_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_version(&dir.path().join("nope.txt")), None);
    }

    #[test]
    fn test_load_version_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(load_version(&path), None);
    }

    // ==================== Router Tests ====================

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get_page(request("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_query_selection_sets_cookie() {
        let (status, headers, body) =
            get_page(request("/?lang=en").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<html lang="en">"#));
        let cookie = headers
            .get(header::SET_COOKIE)
            .expect("cookie should be set")
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("lang=en; "));
        assert!(!cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_cookie_selection_sets_no_cookie() {
        let (_, headers, body) = get_page(
            request("/")
                .header(header::COOKIE, "lang=en")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert!(body.contains(r#"<html lang="en">"#));
        assert!(headers.get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_cookie_honoured_beside_utf8_cookie() {
        let (_, headers, body) = get_page(
            request("/")
                .header(
                    header::COOKIE,
                    HeaderValue::from_bytes("name=Jiří; lang=en".as_bytes()).unwrap(),
                )
                .header(header::ACCEPT_LANGUAGE, "cs-CZ")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert!(body.contains(r#"<html lang="en">"#));
        assert!(headers.get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_default_page_is_czech_html() {
        let (status, headers, body) = get_page(request("/").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(
            headers.get(header::VARY).unwrap(),
            "Cookie, Accept-Language"
        );
        assert!(body.contains(r#"<html lang="cs">"#));
        assert!(body.contains("build-42"));
    }

    #[tokio::test]
    async fn test_other_paths_render_page_with_own_switch_links() {
        let (status, _, body) =
            get_page(request("/portfolio?foo=1").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/portfolio?lang=en""#));
        assert!(!body.contains("foo=1"));
    }

    #[tokio::test]
    async fn test_forwarded_https_ignored_by_default() {
        let (_, headers, _) = get_page(
            request("/?lang=cs")
                .header("x-forwarded-proto", "https")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(!cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let (status, headers, _) = get_page(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers.get(header::ALLOW).unwrap(), "GET, HEAD");
    }
}
