use crate::api::{models::Zone, DnsApiClient, PowerDnsClient};
use crate::config::Config;
use crate::error::{DdnsError, Result};
use crate::ip::IpResolver;
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::net::Ipv4Addr;

const RECORD_TYPE: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    NoopMatch,
    NeedsUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Unchanged { ip: Ipv4Addr },
    Updated { ip: Ipv4Addr, previous: Vec<String> },
}

/// Contents of the enabled records in the (name, type) set, in server order.
/// An absent set and a fully disabled one both yield an empty list.
pub fn active_contents(zone: &Zone, name: &str, rtype: &str) -> Vec<String> {
    zone.rrsets
        .iter()
        .find(|rrset| {
            rrset.name.eq_ignore_ascii_case(name) && rrset.r#type.eq_ignore_ascii_case(rtype)
        })
        .map(|rrset| {
            rrset
                .records
                .iter()
                .filter(|record| !record.disabled)
                .map(|record| record.content.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Only an exact single-value match counts as up to date.
pub fn reconcile(desired: Ipv4Addr, current: &[String]) -> Decision {
    match current {
        [only] if *only == desired.to_string() => Decision::NoopMatch,
        _ => Decision::NeedsUpdate,
    }
}

/// One reconciliation run against a PowerDNS zone.
pub struct Ddns<C = PowerDnsClient> {
    config: Config,
    resolver: IpResolver,
    api: C,
}

impl Ddns<PowerDnsClient> {
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client()?;
        let api = PowerDnsClient::new(
            client.clone(),
            config.api_url.clone(),
            config.api_key.clone(),
            config.timeouts.zone_fetch,
            config.timeouts.record_write,
        );
        Ok(Self::with_client(config, client, api))
    }
}

impl<C: DnsApiClient + Send + Sync> Ddns<C> {
    pub fn with_client(config: Config, http: reqwest::Client, api: C) -> Self {
        let resolver = IpResolver::new(http, config.ip_lookup_url.clone(), config.timeouts.lookup);
        Self {
            config,
            resolver,
            api,
        }
    }

    pub async fn run_once(&self) -> Result<RunOutcome> {
        let fqdn = self.config.record_fqdn();

        let ip = self.resolver.resolve().await?;
        let zone = self
            .api
            .fetch_zone(&self.config.server_id, &self.config.zone)
            .await?;
        let current = active_contents(&zone, &fqdn, RECORD_TYPE);

        match reconcile(ip, &current) {
            Decision::NoopMatch => {
                info!("No change for {} {}: {}", RECORD_TYPE, fqdn, ip);
                Ok(RunOutcome::Unchanged { ip })
            }
            Decision::NeedsUpdate => {
                let was = if current.is_empty() {
                    "absent".to_string()
                } else {
                    format!("{:?}", current)
                };
                info!("Updating {} {} -> {} (was: {})", RECORD_TYPE, fqdn, ip, was);
                self.api
                    .replace_record(
                        &self.config.server_id,
                        &self.config.zone,
                        &fqdn,
                        RECORD_TYPE,
                        &[ip.to_string()],
                        self.config.ttl,
                    )
                    .await?;
                info!("DNS updated.");
                Ok(RunOutcome::Updated {
                    ip,
                    previous: current,
                })
            }
        }
    }
}

/// The session shared by every call of a run.
pub fn build_http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| DdnsError::HttpClient(e.to_string()))
}
