use crate::error::{DdnsError, Result};
use reqwest::header::HeaderValue;
use std::time::Duration;

const DEFAULT_SERVER_ID: &str = "localhost";
const DEFAULT_ZONE: &str = "example.net";
const DEFAULT_RECORD: &str = "dyn";
const DEFAULT_TTL: u32 = 60;
const DEFAULT_IP_LOOKUP_URL: &str = "https://api4.ipify.org?format=json";

/// Upper bounds for each outbound call of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub lookup: Duration,
    pub zone_fetch: Duration,
    pub record_write: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            lookup: Duration::from_secs(5),
            zone_fetch: Duration::from_secs(10),
            record_write: Duration::from_secs(10),
        }
    }
}

/// Settings for a single run, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    /// Already validated as a header value and marked sensitive.
    pub api_key: HeaderValue,
    pub server_id: String,
    /// Zone name without a trailing dot.
    pub zone: String,
    /// Record label relative to the zone, without surrounding dots.
    pub record: String,
    pub ttl: u32,
    pub ip_lookup_url: String,
    pub timeouts: Timeouts,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("server_id", &self.server_id)
            .field("zone", &self.zone)
            .field("record", &self.record)
            .field("ttl", &self.ttl)
            .field("ip_lookup_url", &self.ip_lookup_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (api_url, api_key) = match (get("PDNS_API_URL"), get("PDNS_API_KEY")) {
            (Some(url), Some(key)) => (url, key),
            _ => {
                return Err(DdnsError::Configuration(
                    "PDNS_API_URL and PDNS_API_KEY must be set.".to_string(),
                ))
            }
        };

        let api_key = api_key.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| {
            DdnsError::Configuration(
                "PDNS_API_KEY contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        api_key.set_sensitive(true);

        let ttl = match get("PDNS_TTL") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(ttl) if ttl > 0 => ttl,
                _ => {
                    return Err(DdnsError::Configuration(format!(
                        "PDNS_TTL must be a positive integer, got {:?}",
                        raw
                    )))
                }
            },
            None => DEFAULT_TTL,
        };

        let zone = get("PDNS_ZONE")
            .unwrap_or_else(|| DEFAULT_ZONE.to_string())
            .trim_end_matches('.')
            .to_string();
        let record = get("PDNS_RECORD")
            .unwrap_or_else(|| DEFAULT_RECORD.to_string())
            .trim_matches('.')
            .to_string();
        if zone.is_empty() || record.is_empty() {
            return Err(DdnsError::Configuration(
                "PDNS_ZONE and PDNS_RECORD must not consist of dots only".to_string(),
            ));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            server_id: get("PDNS_SERVER_ID").unwrap_or_else(|| DEFAULT_SERVER_ID.to_string()),
            zone,
            record,
            ttl,
            ip_lookup_url: get("PDNS_IP_LOOKUP_URL")
                .unwrap_or_else(|| DEFAULT_IP_LOOKUP_URL.to_string()),
            timeouts: Timeouts::default(),
        })
    }

    pub fn record_fqdn(&self) -> String {
        format!("{}.{}.", self.record, self.zone).to_lowercase()
    }
}
