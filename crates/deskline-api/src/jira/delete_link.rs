use deskline_common::error::DecodeError;
use deskline_common::request::{ApiMethod, ApiRequest, ApiResp};

/// `DELETE /jira/links/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteLink {
    /// Link to delete
    pub id: i64,
}

/// Response marker for [`DeleteLink`]. Any success status counts; the body is ignored.
pub struct DeleteLinkResponse;

impl ApiResp for DeleteLinkResponse {
    type Output = ();

    fn decode_output(_body: &[u8]) -> Result<(), DecodeError> {
        Ok(())
    }
}

impl ApiRequest for DeleteLink {
    const ENDPOINT: &'static str = "jira.links.delete";
    const METHOD: ApiMethod = ApiMethod::Delete;
    type Response = DeleteLinkResponse;

    fn path(&self) -> String {
        super::link_path(self.id)
    }
}
