use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A support ticket
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Ticket {
    /// Server-assigned id
    pub id: i64,
    /// API URL of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<SmolStr>,
    /// Id in an external system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub external_id: Option<SmolStr>,
    /// `problem`, `incident`, `question` or `task`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ticket_type: Option<SmolStr>,
    /// Subject line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub subject: Option<SmolStr>,
    /// Subject before dynamic content placeholders were rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub raw_subject: Option<SmolStr>,
    /// First comment on the ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,
    /// `urgent`, `high`, `normal` or `low`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub priority: Option<SmolStr>,
    /// `new`, `open`, `pending`, `hold`, `solved` or `closed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status: Option<SmolStr>,
    /// Address the ticket was originally sent to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub recipient: Option<SmolStr>,
    /// User who requested the ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,
    /// User who submitted the ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_id: Option<i64>,
    /// Agent the ticket is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    /// Requester's organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Group the ticket is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    /// Users copied on the ticket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub collaborator_ids: Vec<i64>,
    /// Agents following the ticket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub follower_ids: Vec<i64>,
    /// The problem this incident is linked to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i64>,
    /// Whether incidents are linked to this problem ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_incidents: Option<bool>,
    /// Whether any comment is public
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Due date of a `task` ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    /// Tags applied to this record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tags: Vec<SmolStr>,
    /// Values of account-defined fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub custom_fields: Vec<CustomFieldValue>,
    /// Brand the ticket belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Value of a custom ticket field. The value's type depends on the field definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomFieldValue {
    /// Field id
    pub id: i64,
    /// Field value, in whatever shape the field type uses
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Ticket {
    /// Look up a custom field value by field id.
    pub fn custom_field(&self, id: i64) -> Option<&serde_json::Value> {
        self.custom_fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| &f.value)
    }
}
