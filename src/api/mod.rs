pub mod client;
pub mod models;
pub mod powerdns;

pub use client::DnsApiClient;
pub use powerdns::PowerDnsClient;
