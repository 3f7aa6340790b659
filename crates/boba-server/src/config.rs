use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tracing::info;

pub struct Config {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
    /// `None` means permissive CORS.
    pub cors_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. A value that is present but
    /// does not parse is an error, never a silent fallback to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let host = var("BOBA_HOST", "0.0.0.0");
        let port: u16 = var("BOBA_PORT", "5000")
            .parse()
            .context("BOBA_PORT must be a port number")?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .context("BOBA_HOST must be an IP address")?;

        let max_body_bytes: usize = var("BOBA_MAX_BODY_BYTES", "65536")
            .parse()
            .context("BOBA_MAX_BODY_BYTES must be a byte count")?;

        let cors_origin = lookup("BOBA_CORS_ORIGIN")
            .filter(|v| !v.is_empty())
            .map(|v| HeaderValue::from_str(&v))
            .transpose()
            .context("BOBA_CORS_ORIGIN is not a valid header value")?;

        Ok(Self {
            addr,
            max_body_bytes,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.max_body_bytes, 65536);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("BOBA_HOST", "127.0.0.1"),
            ("BOBA_PORT", "8080"),
            ("BOBA_MAX_BODY_BYTES", "1024"),
            ("BOBA_CORS_ORIGIN", "http://localhost:5173"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.cors_origin.unwrap(), "http://localhost:5173");
    }

    #[test]
    fn empty_cors_origin_is_permissive() {
        let config = load(&[("BOBA_CORS_ORIGIN", "")]).unwrap();
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load(&[("BOBA_PORT", "seventy")]).is_err());
        assert!(load(&[("BOBA_PORT", "70000")]).is_err());
        assert!(load(&[("BOBA_HOST", "not a host")]).is_err());
        assert!(load(&[("BOBA_MAX_BODY_BYTES", "-1")]).is_err());
        assert!(load(&[("BOBA_CORS_ORIGIN", "bad\norigin")]).is_err());
    }
}
