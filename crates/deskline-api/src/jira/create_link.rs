use deskline_common::error::{DecodeError, EncodeError};
use deskline_common::request::{ApiMethod, ApiRequest, ApiResp};
use serde::Serialize;

use super::Link;

/// `POST /jira/links`
///
/// Serializes as the `{"link": {...}}` body the endpoint expects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateLink {
    /// The link to create
    pub link: Link,
}

impl From<Link> for CreateLink {
    fn from(link: Link) -> Self {
        Self { link }
    }
}

/// Response marker for [`CreateLink`]
pub struct CreateLinkResponse;

impl ApiResp for CreateLinkResponse {
    type Output = Link;

    fn decode_output(body: &[u8]) -> Result<Link, DecodeError> {
        super::decode_link(body)
    }
}

impl ApiRequest for CreateLink {
    const ENDPOINT: &'static str = "jira.links.create";
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Response = CreateLinkResponse;

    fn path(&self) -> String {
        "/jira/links".into()
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_wraps_link_and_skips_unset_fields() {
        let req = CreateLink::from(
            Link::new()
                .issue_id(10234)
                .issue_key("TEST-234")
                .ticket_id(2)
                .build(),
        );
        let body: serde_json::Value = serde_json::from_slice(&req.encode_body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"link": {"issue_id": 10234, "issue_key": "TEST-234", "ticket_id": 2}})
        );
    }
}
