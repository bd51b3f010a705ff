use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An end user, agent or admin
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct User {
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
    /// Primary email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<SmolStr>,
    /// Primary phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<SmolStr>,
    /// `end-user`, `agent` or `admin`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub role: Option<SmolStr>,
    /// Locale, e.g. `en-US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub locale: Option<SmolStr>,
    /// Time zone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub time_zone: Option<SmolStr>,
    /// Organization the user belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// False once the user is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Whether an identity has been verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Whether the user is suspended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
    /// Whether the user is shared from a different account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    /// Tags applied to this record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<SmolStr>,
    /// Internal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub notes: Option<SmolStr>,
    /// Free-text details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub details: Option<SmolStr>,
    /// Id in an external system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub external_id: Option<SmolStr>,
    /// Last sign-in time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
