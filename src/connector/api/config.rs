use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::connector::adapter::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid host:port socket address, got {value:?}")]
    InvalidSocketAddr { key: &'static str, value: String },
}

/// Process-wide settings, read once at startup and shared read-only.
///
/// | Variable          | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `GEMINI_API_KEY`  | unset (requests fail with a config error)   |
/// | `GEMINI_MODEL`    | `gemini-1.5-flash-latest`                   |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
/// | `ALLOWED_ORIGINS` | empty, meaning any origin                   |
/// | `PROXY_BIND_ADDR` | `127.0.0.1:3000`                            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub allowed_origins: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build from an explicit key/value map. Blank values count as unset.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match non_empty(vars, "PROXY_BIND_ADDR") {
            None => defaults.bind_addr,
            Some(value) => {
                value
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidSocketAddr {
                        key: "PROXY_BIND_ADDR",
                        value: value.to_string(),
                    })?
            }
        };

        let allowed_origins = non_empty(vars, "ALLOWED_ORIGINS")
            .map(parse_origins)
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            api_key: non_empty(vars, "GEMINI_API_KEY").map(str::to_string),
            model: non_empty(vars, "GEMINI_MODEL")
                .map(str::to_string)
                .unwrap_or(defaults.model),
            base_url: non_empty(vars, "GEMINI_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            allowed_origins,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Listen on every interface instead of the configured host.
    pub fn public(mut self) -> Self {
        self.bind_addr.set_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        self
    }
}

fn non_empty<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
