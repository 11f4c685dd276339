
use crate::config::Config;
use std::collections::HashMap;
use wiremock::MockServer;

pub(crate) const ZONE_PATH: &str = "/api/v1/servers/localhost/zones/example.net.";

/// A config whose API and IP lookup both point at the mock server.
pub(crate) fn test_config(server: &MockServer) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("PDNS_API_URL", format!("{}/api/v1", server.uri())),
        ("PDNS_API_KEY", "s3cr3t".to_string()),
        ("PDNS_IP_LOOKUP_URL", format!("{}/ip", server.uri())),
    ]);
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}
