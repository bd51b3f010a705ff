use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A customer organization
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Organization {
    /// Server-assigned id
    pub id: i64,
    /// API URL of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<SmolStr>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<SmolStr>,
    /// Id in an external system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub external_id: Option<SmolStr>,
    /// Email domains whose users join this organization automatically
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub domain_names: Vec<SmolStr>,
    /// Free-text details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub details: Option<SmolStr>,
    /// Internal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub notes: Option<SmolStr>,
    /// Default group for new tickets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    /// Whether end users in this organization can see each other's tickets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_tickets: Option<bool>,
    /// Whether end users in this organization can comment on each other's tickets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_comments: Option<bool>,
    /// Tags applied to this record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<SmolStr>,
    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
