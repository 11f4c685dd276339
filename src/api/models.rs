use serde::{Deserialize, Serialize};

/// Snapshot of a zone as returned by `GET /servers/{id}/zones/{zone}`.
/// Only the fields this tool reads are modelled.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Zone {
    #[serde(default)]
    pub rrsets: Vec<RRSet>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RRSet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
}

#[derive(Debug, Serialize)]
pub struct RRSetChange {
    pub name: String,
    pub r#type: String,
    pub ttl: u32,
    pub changetype: ChangeType,
    pub records: Vec<Record>,
}

/// Body of `PATCH /servers/{id}/zones/{zone}`.
#[derive(Debug, Serialize)]
pub struct ZonePatch {
    pub rrsets: Vec<RRSetChange>,
}

impl ZonePatch {
    /// A patch whose only change replaces the (name, type) set with `contents`, all enabled.
    pub fn replace(name: &str, rtype: &str, contents: &[String], ttl: u32) -> Self {
        Self {
            rrsets: vec![RRSetChange {
                name: name.to_string(),
                r#type: rtype.to_string(),
                ttl,
                changetype: ChangeType::Replace,
                records: contents
                    .iter()
                    .map(|content| Record {
                        content: content.clone(),
                        disabled: false,
                    })
                    .collect(),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IpResponse {
    pub ip: String,
}
