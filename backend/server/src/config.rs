use std::{
    env,
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 1111;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::load_with(|key| env::var(key).ok())
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: try_load(&lookup, "RUST_HOST", defaults.host),
            port: try_load(&lookup, "RUST_PORT", defaults.port),
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_with(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.address().to_string(), "0.0.0.0:1111");
    }

    #[test]
    fn test_overrides() {
        let config = Config::load_with(lookup(&[("RUST_PORT", "8080"), ("RUST_HOST", "127.0.0.1")]));
        assert_eq!(config.address().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = Config::load_with(lookup(&[("RUST_PORT", "pizza"), ("RUST_HOST", "nowhere")]));
        assert_eq!(config, Config::default());
    }
}
