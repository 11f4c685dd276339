use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    async fn fetch_zone(&self, server_id: &str, zone: &str) -> Result<Zone>;

    /// Replaces the whole (name, type) set with `contents`. Nothing is merged.
    async fn replace_record(
        &self,
        server_id: &str,
        zone: &str,
        name: &str,
        rtype: &str,
        contents: &[String],
        ttl: u32,
    ) -> Result<()>;
}
