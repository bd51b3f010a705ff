//! # Stateless request/response mapping
//!
//! Mapping overview:
//! - Requests are typed values implementing [`ApiRequest`]; the request knows
//!   its path, method, query string and body.
//! - Success (2xx): the body is kept in a [`Response`] and decoded on demand
//!   into the endpoint's typed output.
//! - Anything else becomes [`ClientError::Http`] carrying the status and the
//!   raw body; [`HttpError::api_error`](crate::error::HttpError::api_error)
//!   decodes the platform's error shape.

use std::marker::PhantomData;

use bytes::Bytes;
use http::{
    HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use url::Url;

use crate::error::{ClientError, ClientResult, DecodeError, EncodeError, HttpError, TransportError};
use crate::http_client::HttpClient;

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    /// HTTP GET
    Get,
    /// HTTP POST with the given body encoding
    Post(&'static str),
    /// HTTP DELETE
    Delete,
}

impl ApiMethod {
    /// Get the HTTP method string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post(_) => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Get the body encoding type for this method (POST only)
    pub const fn body_encoding(&self) -> Option<&'static str> {
        match self {
            Self::Post(enc) => Some(*enc),
            Self::Get | Self::Delete => None,
        }
    }
}

impl From<ApiMethod> for http::Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => http::Method::GET,
            ApiMethod::Post(_) => http::Method::POST,
            ApiMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Trait for API request types
///
/// Implemented on the request value itself. The associated [`ApiResp`] marker
/// carries the output type and how to decode it.
pub trait ApiRequest {
    /// Short endpoint name, used in errors and tracing spans
    const ENDPOINT: &'static str;

    /// HTTP method
    const METHOD: ApiMethod;

    /// Response marker for this request
    type Response: ApiResp;

    /// Path below the API base URL, starting with `/`
    fn path(&self) -> String;

    /// Encode the query string, if the endpoint takes one.
    fn encode_query(&self) -> Result<Option<String>, EncodeError> {
        Ok(None)
    }

    /// Encode the request body. Only consulted for [`ApiMethod::Post`].
    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(Vec::new())
    }
}

/// Trait for API response markers
pub trait ApiResp {
    /// Output encoding (MIME type), sent as `Accept`
    const ENCODING: &'static str = "application/json";

    /// Decoded output type
    type Output;

    /// Decode a successful response body.
    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError>;
}

/// Per-request options.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Extra headers to attach to every request (authorization, user agent, ...).
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

impl CallOptions {
    /// Set a header, replacing any earlier value for the same name.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.extra_headers.retain(|(n, _)| *n != name);
        self.extra_headers.push((name, value));
    }
}

/// Extension for stateless calls on any `HttpClient`.
///
/// Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use deskline_common::request::ApiExt;
///
/// let http = reqwest::Client::new();
/// let base = url::Url::parse("https://acme.zendesk.com/api/v2")?;
/// // let resp = http.api(base).send(&request).await?;
/// # Ok(())
/// # }
/// ```
pub trait ApiExt: HttpClient {
    /// Start building a call against the given base URL.
    fn api<'a>(&'a self, base: Url) -> ApiCall<'a, Self>
    where
        Self: Sized,
    {
        ApiCall {
            client: self,
            base,
            opts: CallOptions::default(),
        }
    }
}

impl<T: HttpClient> ApiExt for T {}

/// Stateless call builder.
pub struct ApiCall<'a, C: HttpClient> {
    pub(crate) client: &'a C,
    pub(crate) base: Url,
    pub(crate) opts: CallOptions,
}

impl<'a, C: HttpClient> ApiCall<'a, C> {
    /// Add an extra header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.extra_headers.push((name, value));
        self
    }

    /// Replace the builder's options entirely.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Send the given typed request and return a response wrapper.
    ///
    /// Request encoding runs first, so a request that cannot be encoded never
    /// reaches the transport.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(endpoint = R::ENDPOINT)))]
    pub async fn send<R>(self, request: &R) -> ClientResult<Response<R::Response>>
    where
        R: ApiRequest,
    {
        let http_request = build_http_request(&self.base, request, &self.opts)?;

        let http_response = self
            .client
            .send_http(http_request)
            .await
            .map_err(TransportError::from_client_error)?;

        process_response(http_response)
    }
}

/// Build the full URL for a request: base path, endpoint path, query.
pub fn request_url<R: ApiRequest>(base: &Url, req: &R) -> Result<Url, EncodeError> {
    let mut url = base.clone();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push_str(&req.path());
    url.set_path(&path);

    match req.encode_query()? {
        Some(qs) if !qs.is_empty() => url.set_query(Some(&qs)),
        _ => url.set_query(None),
    }
    Ok(url)
}

/// Build an HTTP request for a call given base URL and options
pub fn build_http_request<R>(
    base: &Url,
    req: &R,
    opts: &CallOptions,
) -> ClientResult<Request<Vec<u8>>>
where
    R: ApiRequest,
{
    let url = request_url(base, req)?;

    let mut builder = Request::builder()
        .method(http::Method::from(R::METHOD))
        .uri(url.as_str())
        .header(ACCEPT, <R::Response as ApiResp>::ENCODING);

    if let Some(encoding) = R::METHOD.body_encoding() {
        builder = builder.header(CONTENT_TYPE, encoding);
    }
    for (name, value) in &opts.extra_headers {
        builder = builder.header(name, value);
    }

    let body = match R::METHOD {
        ApiMethod::Post(_) => req.encode_body()?,
        ApiMethod::Get | ApiMethod::Delete => Vec::new(),
    };

    builder
        .body(body)
        .map_err(|e| TransportError::InvalidRequest(e.to_string()).into())
}

/// Process the HTTP response from the server statelessly.
///
/// Exposed to make things more easily pluggable
#[inline]
pub fn process_response<Resp>(http_response: http::Response<Vec<u8>>) -> ClientResult<Response<Resp>>
where
    Resp: ApiResp,
{
    let status = http_response.status();
    let buffer = Bytes::from(http_response.into_body());

    if !status.is_success() {
        return Err(ClientError::Http(HttpError {
            status,
            body: (!buffer.is_empty()).then_some(buffer),
        }));
    }

    Ok(Response::new(buffer, status))
}

/// Successful response wrapper that owns the response buffer
///
/// Generic over the response marker type, not the request.
pub struct Response<Resp: ApiResp> {
    _marker: PhantomData<fn() -> Resp>,
    buffer: Bytes,
    status: StatusCode,
}

impl<R: ApiResp> std::fmt::Debug for Response<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("len", &self.buffer.len())
            .finish()
    }
}

impl<R: ApiResp> Response<R> {
    /// Create a new response from a buffer and status code
    pub fn new(buffer: Bytes, status: StatusCode) -> Self {
        Self {
            buffer,
            status,
            _marker: PhantomData,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the raw buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Decode the output without consuming the response
    pub fn output(&self) -> Result<R::Output, DecodeError> {
        R::decode_output(&self.buffer)
    }

    /// Decode the output, consuming the response
    pub fn into_output(self) -> Result<R::Output, DecodeError> {
        R::decode_output(&self.buffer)
    }
}
