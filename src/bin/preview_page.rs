//! Preview page binary - renders the portfolio page to stdout without starting a server
//!
//! Usage:
//!   cargo run --bin preview              # Czech page
//!   cargo run --bin preview -- en        # English page
//!   cargo run --bin preview -- en /cv    # English page as if requested at /cv
//!
//! Optional:
//! - VERSION_FILE (footer build identifier)

use anyhow::{bail, Result};
use chrono::Local;
use djdevs_portfolio::i18n::{Language, LanguageRegistry};
use djdevs_portfolio::render::{render_page, PageContext};
use djdevs_portfolio::server::load_version;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the page can be piped to a file
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("djdevs_portfolio=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);

    let language = match args.next() {
        Some(code) => match Language::from_code(&code) {
            Some(language) => language,
            None => {
                let supported: Vec<&str> = LanguageRegistry::get()
                    .list_all()
                    .iter()
                    .map(|l| l.code)
                    .collect();
                bail!(
                    "Unsupported language '{}', expected one of: {}",
                    code,
                    supported.join(", ")
                );
            }
        },
        None => Language::default_language(),
    };
    let request_uri = args.next().unwrap_or_else(|| "/".to_string());

    let version = std::env::var("VERSION_FILE")
        .ok()
        .map(PathBuf::from)
        .and_then(|path| load_version(&path));

    info!("Rendering {} page for {}", language.name(), request_uri);

    let ctx = PageContext::new(language, &request_uri, Local::now().date_naive())
        .with_version(version.as_deref());
    println!("{}", render_page(&ctx));

    Ok(())
}
