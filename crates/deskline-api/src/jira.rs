/// `POST /jira/links`
pub mod create_link;
/// `DELETE /jira/links/{id}`
pub mod delete_link;
/// `GET /jira/links/{id}`
pub mod get_link;

pub use create_link::{CreateLink, CreateLinkResponse};
pub use delete_link::{DeleteLink, DeleteLinkResponse};
pub use get_link::{GetLink, GetLinkResponse};

use chrono::{DateTime, Utc};
use deskline_common::error::DecodeError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A link between a ticket and an issue-tracker issue.
///
/// Every field is optional so the same type works as create input (where the
/// server assigns `id`, `url` and the timestamps) and as server output.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct Link {
    /// Link id, assigned by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Numeric id of the issue in the issue tracker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_id: Option<i64>,
    /// Issue key, e.g. `PROJ-123`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub issue_key: Option<SmolStr>,
    /// Ticket on the support side of the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
    /// API URL of this link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<SmolStr>,
    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `{"link": {...}}`
#[derive(Deserialize)]
struct LinkEnvelope {
    link: Link,
}

fn decode_link(body: &[u8]) -> Result<Link, DecodeError> {
    let envelope: LinkEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.link)
}

fn link_path(id: i64) -> String {
    format!("/jira/links/{id}")
}
