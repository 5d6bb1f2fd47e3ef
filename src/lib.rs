// Library exports for binaries and integration tests
pub mod config;
pub mod content;
pub mod i18n;
pub mod render;
pub mod server;
