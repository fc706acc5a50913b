use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and audit fields shared by every API resource.
///
/// Flattened into the owning resource's JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Set once the server has marked the resource for deletion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<DateTime<Utc>>,
    /// Related API URLs keyed by relation name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub kind: Option<String>,
}

impl Metadata {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }
}
