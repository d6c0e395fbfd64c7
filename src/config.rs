use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

pub const DEFAULT_API_BASE: &str = "maps.googleapis.com";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;
pub const DEFAULT_MAX_CONCURRENT_QUERIES: usize = 16;
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
    pub addr: SocketAddr,
    pub search: SearchSettings,
}

/// Knobs for the route-adjacent place search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSettings {
    /// Every n-th point of the route polyline is queried.
    pub sample_stride: usize,
    pub max_concurrent_queries: usize,
    pub query_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            max_concurrent_queries: DEFAULT_MAX_CONCURRENT_QUERIES,
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY")
            .ok_or_else(|| config_error("GOOGLE_MAPS_API_KEY is not set"))?;
        let google_maps_api_base =
            lookup("GOOGLE_MAPS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into());

        let default_addr = DEFAULT_ADDR.parse::<SocketAddr>().map_err(config_error)?;
        let addr = parse_or(&lookup, "TRIPMATE_ADDR", default_addr)?;
        let sample_stride = parse_or(&lookup, "TRIPMATE_SAMPLE_STRIDE", DEFAULT_SAMPLE_STRIDE)?;
        let max_concurrent_queries = parse_or(
            &lookup,
            "TRIPMATE_MAX_CONCURRENT_QUERIES",
            DEFAULT_MAX_CONCURRENT_QUERIES,
        )?;
        let query_timeout_secs =
            parse_or(&lookup, "TRIPMATE_QUERY_TIMEOUT_SECS", DEFAULT_QUERY_TIMEOUT_SECS)?;

        if sample_stride == 0 {
            return Err(config_error("TRIPMATE_SAMPLE_STRIDE must be positive"));
        }
        if max_concurrent_queries == 0 {
            return Err(config_error("TRIPMATE_MAX_CONCURRENT_QUERIES must be positive"));
        }

        Ok(Self {
            google_maps_api_base,
            google_maps_api_key,
            addr,
            search: SearchSettings {
                sample_stride,
                max_concurrent_queries,
                query_timeout: Duration::from_secs(query_timeout_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| config_error(format!("{}: {:?}", key, err))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("GOOGLE_MAPS_API_KEY", "secret")]).unwrap();

        assert_eq!(config.google_maps_api_base, "maps.googleapis.com");
        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.search, SearchSettings::default());
        assert_eq!(config.search.sample_stride, 10);
    }

    #[test]
    fn api_key_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err.code, 6);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("GOOGLE_MAPS_API_KEY", "secret"),
            ("TRIPMATE_ADDR", "0.0.0.0:8080"),
            ("TRIPMATE_SAMPLE_STRIDE", "5"),
            ("TRIPMATE_MAX_CONCURRENT_QUERIES", "4"),
            ("TRIPMATE_QUERY_TIMEOUT_SECS", "2"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.search.sample_stride, 5);
        assert_eq!(config.search.max_concurrent_queries, 4);
        assert_eq!(config.search.query_timeout, Duration::from_secs(2));
    }

    #[test]
    fn zero_stride_is_rejected() {
        assert!(config_from(&[
            ("GOOGLE_MAPS_API_KEY", "secret"),
            ("TRIPMATE_SAMPLE_STRIDE", "0"),
        ])
        .is_err());

        assert!(config_from(&[
            ("GOOGLE_MAPS_API_KEY", "secret"),
            ("TRIPMATE_SAMPLE_STRIDE", "ten"),
        ])
        .is_err());
    }
}
