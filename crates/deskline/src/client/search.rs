use deskline_api::search::{SearchExport, SearchExportMeta, SearchExportOptions, SearchExportResults};
use deskline_common::error::ClientResult;
use deskline_common::http_client::HttpClient;

use super::Client;

/// Bulk search export
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait SearchExportApi {
    /// Fetch one page of `GET /search/export`.
    ///
    /// `opts` must be present: `None` fails with
    /// [`EncodeError::MissingOptions`](deskline_common::error::EncodeError::MissingOptions)
    /// without contacting the server. Results come back in server order,
    /// paired with the page's metadata. Nothing is retried and no further
    /// pages are fetched; pass the metadata to
    /// [`SearchExportOptions::next_page`] to continue.
    async fn search_export(
        &self,
        opts: Option<&SearchExportOptions>,
    ) -> ClientResult<(SearchExportResults, SearchExportMeta)>;
}

impl<C: HttpClient + Sync> SearchExportApi for Client<C> {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(endpoint = %self.endpoint())))]
    async fn search_export(
        &self,
        opts: Option<&SearchExportOptions>,
    ) -> ClientResult<(SearchExportResults, SearchExportMeta)> {
        let page = self
            .send(&SearchExport { options: opts })
            .await?
            .into_output()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            results = page.results.len(),
            has_more = page.meta.has_more,
            "fetched search export page"
        );

        Ok(page.into_parts())
    }
}
