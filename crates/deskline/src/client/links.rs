use deskline_api::jira::{CreateLink, DeleteLink, GetLink, Link};
use deskline_common::error::ClientResult;
use deskline_common::http_client::HttpClient;

use super::Client;

/// Ticket to issue-tracker links under `/jira/links`
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait LinkApi {
    /// Fetch a link by id.
    async fn get_link(&self, id: i64) -> ClientResult<Link>;

    /// Create a link and return it as stored by the server.
    async fn create_link(&self, link: Link) -> ClientResult<Link>;

    /// Delete a link. Any success status counts.
    async fn delete_link(&self, id: i64) -> ClientResult<()>;
}

impl<C: HttpClient + Sync> LinkApi for Client<C> {
    async fn get_link(&self, id: i64) -> ClientResult<Link> {
        Ok(self.send(&GetLink { id }).await?.into_output()?)
    }

    async fn create_link(&self, link: Link) -> ClientResult<Link> {
        Ok(self.send(&CreateLink::from(link)).await?.into_output()?)
    }

    async fn delete_link(&self, id: i64) -> ClientResult<()> {
        self.send(&DeleteLink { id }).await?;
        Ok(())
    }
}
