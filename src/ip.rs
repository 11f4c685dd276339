use crate::api::models::IpResponse;
use crate::error::{describe_http_error, DdnsError, Result};
use log::debug;
use std::{net::Ipv4Addr, str::FromStr, time::Duration};

/// Looks up the caller's public IPv4 address from a JSON echo service
/// answering `{"ip": "..."}`.
pub struct IpResolver {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl IpResolver {
    pub fn new(client: reqwest::Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    pub async fn resolve(&self) -> Result<Ipv4Addr> {
        debug!("GET {}", self.url);
        let fail = |err: reqwest::Error| DdnsError::Lookup(describe_http_error(&err, self.timeout));

        // No X-API-Key here: the PowerDNS credential stays off third-party lookups.
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fail)?
            .json::<IpResponse>()
            .await
            .map_err(fail)?;

        Ipv4Addr::from_str(response.ip.trim()).map_err(|e| {
            DdnsError::Lookup(format!("invalid IPv4 address {:?}: {}", response.ip, e))
        })
    }
}
