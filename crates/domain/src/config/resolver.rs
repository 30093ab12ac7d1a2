use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Tried in order; the next one is used only when a transport fails.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Retry truncated UDP answers over TCP.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            query_timeout_ms: default_query_timeout_ms(),
            tcp_fallback: true,
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Parses `ip:port` or bare `ip` (port 53) entries.
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.nameservers
            .iter()
            .map(|entry| parse_nameserver(entry))
            .collect()
    }
}

pub fn parse_nameserver(entry: &str) -> Result<SocketAddr, ConfigError> {
    let entry = entry.trim();
    if let Ok(addr) = entry.parse::<SocketAddr>() {
        return Ok(addr);
    }
    entry
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address '{}'", entry)))
}

fn default_nameservers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}
