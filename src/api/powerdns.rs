use super::{client::DnsApiClient, models::*};
use crate::error::{describe_http_error, DdnsError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderValue;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the PowerDNS authoritative server's HTTP API.
pub struct PowerDnsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: HeaderValue,
    zone_timeout: Duration,
    write_timeout: Duration,
}

#[async_trait]
impl DnsApiClient for PowerDnsClient {
    async fn fetch_zone(&self, server_id: &str, zone: &str) -> Result<Zone> {
        let url = self.zone_url(server_id, zone);
        debug!("GET {}", url);

        let fail = |err: reqwest::Error| DdnsError::ZoneFetch {
            zone: canonical(zone),
            message: describe_http_error(&err, self.zone_timeout),
        };

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .timeout(self.zone_timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fail)?;
        debug!("zone fetch returned {}", response.status());

        let text = response.text().await.map_err(fail)?;
        serde_json::from_str::<Zone>(&text).map_err(|e| DdnsError::ZoneFetch {
            zone: canonical(zone),
            message: format!("invalid response body: {}", e),
        })
    }

    async fn replace_record(
        &self,
        server_id: &str,
        zone: &str,
        name: &str,
        rtype: &str,
        contents: &[String],
        ttl: u32,
    ) -> Result<()> {
        let url = self.zone_url(server_id, zone);
        debug!("PATCH {}", url);

        let response = self
            .client
            .patch(&url)
            .header(API_KEY_HEADER, self.api_key.clone())
            .timeout(self.write_timeout)
            .json(&ZonePatch::replace(name, rtype, contents, ttl))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| DdnsError::RecordWrite {
                name: name.to_string(),
                rtype: rtype.to_string(),
                message: describe_http_error(&err, self.write_timeout),
            })?;
        debug!("zone patch returned {}", response.status());

        Ok(())
    }
}

impl PowerDnsClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: HeaderValue,
        zone_timeout: Duration,
        write_timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
            zone_timeout,
            write_timeout,
        }
    }

    fn zone_url(&self, server_id: &str, zone: &str) -> String {
        format!(
            "{}/servers/{}/zones/{}",
            self.base_url,
            server_id,
            canonical(zone)
        )
    }
}

/// Appends exactly one trailing dot, whatever the input carries.
fn canonical(zone: &str) -> String {
    format!("{}.", zone.trim_end_matches('.'))
}
