use anyhow::{bail, Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: IpAddr,
    pub port: u16,

    // Static files served under /assets
    pub assets_dir: PathBuf,

    // Footer build identifier, read once at startup
    pub version_file: Option<PathBuf>,

    // Honour X-Forwarded-Proto when deciding whether the preference cookie is Secure
    pub trust_forwarded_proto: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            assets_dir: PathBuf::from("assets"),
            version_file: None,
            trust_forwarded_proto: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            bind_address: match std::env::var("BIND_ADDRESS") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("BIND_ADDRESS is not an IP address: {}", v))?,
                Err(_) => defaults.bind_address,
            },
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => defaults.port,
            },
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            version_file: std::env::var("VERSION_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            trust_forwarded_proto: match std::env::var("TRUST_FORWARDED_PROTO") {
                Ok(v) => parse_bool(&v).context("TRUST_FORWARDED_PROTO")?,
                Err(_) => defaults.trust_forwarded_proto,
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Invalid boolean value: '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "BIND_ADDRESS",
        "PORT",
        "ASSETS_DIR",
        "VERSION_FILE",
        "TRUST_FORWARDED_PROTO",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.version_file.is_none());
        assert!(!config.trust_forwarded_proto);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("BIND_ADDRESS", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("ASSETS_DIR", "/srv/site/assets");
        std::env::set_var("VERSION_FILE", "/version.txt");
        std::env::set_var("TRUST_FORWARDED_PROTO", "true");

        let config = Config::from_env().expect("should load");
        clear_env();

        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.assets_dir, PathBuf::from("/srv/site/assets"));
        assert_eq!(config.version_file, Some(PathBuf::from("/version.txt")));
        assert!(config.trust_forwarded_proto);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("PORT"), "{}", err);
    }

    #[test]
    #[serial]
    fn test_from_env_blank_version_file_is_none() {
        clear_env();
        std::env::set_var("VERSION_FILE", "  ");
        let config = Config::from_env().expect("should load");
        clear_env();

        assert!(config.version_file.is_none());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
