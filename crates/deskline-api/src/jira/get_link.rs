use deskline_common::error::DecodeError;
use deskline_common::request::{ApiMethod, ApiRequest, ApiResp};

use super::Link;

/// `GET /jira/links/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetLink {
    /// Link to fetch
    pub id: i64,
}

/// Response marker for [`GetLink`]
pub struct GetLinkResponse;

impl ApiResp for GetLinkResponse {
    type Output = Link;

    fn decode_output(body: &[u8]) -> Result<Link, DecodeError> {
        super::decode_link(body)
    }
}

impl ApiRequest for GetLink {
    const ENDPOINT: &'static str = "jira.links.get";
    const METHOD: ApiMethod = ApiMethod::Get;
    type Response = GetLinkResponse;

    fn path(&self) -> String {
        super::link_path(self.id)
    }
}
