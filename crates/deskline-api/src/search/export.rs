//! `GET /search/export`: cursor-paginated bulk search.
//!
//! Unlike the regular search endpoint, export has no result cap and pages
//! only forward, by cursor. Each page is an envelope:
//!
//! ```json
//! {
//!   "results": [{"result_type": "ticket", "id": 1, ...}, ...],
//!   "meta": {"has_more": true, "after_cursor": "...", "before_cursor": "..."}
//! }
//! ```
//!
//! Fetching the next page is up to the caller; see [`SearchExportOptions::next_page`].

use deskline_common::error::{DecodeError, EncodeError};
use deskline_common::request::{ApiMethod, ApiRequest, ApiResp};
use deskline_common::types::cursor::{Continuation, CursorState, PageCursor};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use smol_str::SmolStr;

use super::SearchExportResults;

/// Caller-facing options for a search export call.
///
/// These are never sent as-is: encoding maps them onto the endpoint's
/// bracketed parameter names and leaves the options themselves untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct SearchExportOptions {
    /// Where to resume. Sent as `page[after]` or `start_time`.
    #[serde(flatten)]
    #[builder(default)]
    pub cursor: CursorState,
    /// Results per page, sent as `page[size]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Restrict results to one kind, e.g. `ticket`. Sent as `filter[type]`.
    ///
    /// Left out, or empty, the server returns every kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub filter_type: Option<SmolStr>,
    /// Search query, in the platform's search syntax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub query: Option<SmolStr>,
}

/// Wire-named parameters for one export request
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchExportParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(rename = "filter[type]", skip_serializing_if = "Option::is_none")]
    filter_type: Option<&'a str>,
    #[serde(rename = "page[size]", skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(rename = "page[after]", skip_serializing_if = "Option::is_none")]
    page_after: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<i64>,
}

impl SearchExportOptions {
    /// Map the public options onto wire parameter names.
    ///
    /// At most one continuation parameter is produced; a cursor takes
    /// precedence over `start_time`.
    pub(crate) fn wire_params(&self) -> SearchExportParams<'_> {
        let (page_after, start_time) = match self.cursor.continuation() {
            Some(Continuation::Cursor(cursor)) => (Some(cursor), None),
            Some(Continuation::StartTime(start_time)) => (None, Some(start_time)),
            None => (None, None),
        };
        SearchExportParams {
            query: self.query.as_deref(),
            filter_type: self.filter_type.as_deref().filter(|t| !t.is_empty()),
            page_size: self.page_size,
            page_after,
            start_time,
        }
    }

    /// Options for the page after `meta`, or `None` when `meta` carries no cursor.
    ///
    /// Everything but the cursor is carried over unchanged.
    pub fn next_page(&self, meta: &SearchExportMeta) -> Result<Option<Self>, DecodeError> {
        Ok(meta.continuation()?.map(|cursor| Self {
            cursor,
            ..self.clone()
        }))
    }
}

/// Pagination metadata of one export page
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchExportMeta {
    /// Whether the server has more results after this page
    #[serde(default)]
    pub has_more: bool,
    /// Cursors the server returned with this page
    #[serde(flatten)]
    pub cursor: PageCursor,
}

impl SearchExportMeta {
    /// The continuation for the next page, or `None` if this was the last one.
    ///
    /// The `after_cursor` decides: a page with one continues even when
    /// `has_more` is false, and a page without one ends the export. A page
    /// that claims more results without an `after_cursor` cannot be
    /// continued and yields [`DecodeError::MissingCursor`].
    pub fn continuation(&self) -> Result<Option<CursorState>, DecodeError> {
        match self.cursor.next() {
            Some(cursor) => Ok(Some(cursor)),
            None if self.has_more => Err(DecodeError::MissingCursor),
            None => Ok(None),
        }
    }
}

/// Request for one page of `GET /search/export`.
///
/// Options are mandatory: sending this without them fails with
/// [`EncodeError::MissingOptions`] before anything goes over the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchExport<'a> {
    /// Options to encode; `None` fails at encode time
    pub options: Option<&'a SearchExportOptions>,
}

impl<'a> SearchExport<'a> {
    /// Request a page with `options`.
    pub fn new(options: &'a SearchExportOptions) -> Self {
        Self {
            options: Some(options),
        }
    }
}

impl<'a> From<&'a SearchExportOptions> for SearchExport<'a> {
    fn from(options: &'a SearchExportOptions) -> Self {
        Self::new(options)
    }
}

/// Response marker for [`SearchExport`]
pub struct SearchExportResponse;

/// Decoded export page
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SearchExportOutput {
    /// Results in server order
    pub results: SearchExportResults,
    /// Pagination metadata
    pub meta: SearchExportMeta,
}

impl SearchExportOutput {
    /// Split into results and metadata.
    pub fn into_parts(self) -> (SearchExportResults, SearchExportMeta) {
        (self.results, self.meta)
    }
}

#[derive(Deserialize)]
struct RawEnvelope<'a> {
    #[serde(borrow)]
    results: Vec<&'a RawValue>,
    meta: SearchExportMeta,
}

impl ApiResp for SearchExportResponse {
    type Output = SearchExportOutput;

    fn decode_output(body: &[u8]) -> Result<SearchExportOutput, DecodeError> {
        let envelope: RawEnvelope<'_> =
            serde_json::from_slice(body).map_err(DecodeError::MalformedEnvelope)?;
        Ok(SearchExportOutput {
            results: SearchExportResults::decode(&envelope.results)?,
            meta: envelope.meta,
        })
    }
}

impl ApiRequest for SearchExport<'_> {
    const ENDPOINT: &'static str = "search.export";
    const METHOD: ApiMethod = ApiMethod::Get;
    type Response = SearchExportResponse;

    fn path(&self) -> String {
        "/search/export".into()
    }

    fn encode_query(&self) -> Result<Option<String>, EncodeError> {
        let options = self.options.ok_or(EncodeError::MissingOptions {
            endpoint: Self::ENDPOINT,
        })?;
        Ok(Some(serde_html_form::to_string(&options.wire_params())?))
    }
}
