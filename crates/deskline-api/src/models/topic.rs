use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A community forum topic
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Topic {
    /// Server-assigned id
    pub id: i64,
    /// API URL of the topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<SmolStr>,
    /// Public web URL of the topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub html_url: Option<SmolStr>,
    /// Topic title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub name: Option<SmolStr>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<SmolStr>,
    /// Sort position among topics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Number of users following the topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<i64>,
    /// Which users can manage the topic, e.g. `staff` or `managers`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub manageable_by: Option<SmolStr>,
    /// Segment of users who can see the topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_segment_id: Option<i64>,
    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
