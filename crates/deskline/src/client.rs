//! Stateful API client.
//!
//! [`Client`] pairs a transport with an API endpoint and default headers.
//! High-level operations live on extension traits ([`SearchExportApi`],
//! [`LinkApi`]) implemented for every `Client`; lower-level access to any
//! endpoint is available through [`Client::send`].

mod links;
mod search;

use std::sync::LazyLock;

use deskline_common::error::ClientResult;
use deskline_common::http_client::HttpClient;
use deskline_common::request::{ApiExt, ApiRequest, CallOptions, Response};
use http::header::USER_AGENT;
use http::{HeaderName, HeaderValue};
use regex::Regex;
use url::Url;

pub use links::LinkApi;
pub use search::SearchExportApi;

/// User agent sent unless the caller overrides it
pub const DEFAULT_USER_AGENT: &str = concat!("deskline/", env!("CARGO_PKG_VERSION"));

static SUBDOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").unwrap());

/// Errors constructing a [`Client`]
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// Subdomain is not a valid account name
    #[error("invalid subdomain `{0}`")]
    #[diagnostic(
        code(deskline::config::subdomain),
        help("use the account name only, e.g. `acme` for acme.zendesk.com")
    )]
    InvalidSubdomain(String),

    /// Endpoint is not a usable base URL
    #[error("invalid endpoint URL `{url}`: {source}")]
    #[diagnostic(code(deskline::config::endpoint))]
    InvalidEndpoint {
        /// The rejected input
        url: String,
        /// Why it was rejected
        #[source]
        source: url::ParseError,
    },
}

/// API client bound to one account endpoint.
///
/// Stateless between calls: every request is built from the endpoint and
/// header options held here, so a `Client` can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct Client<C: HttpClient> {
    http: C,
    endpoint: Url,
    opts: CallOptions,
}

impl<C: HttpClient> Client<C> {
    /// Create a client for an explicit API base URL, e.g. `https://acme.zendesk.com/api/v2`.
    pub fn new(http: C, endpoint: Url) -> Self {
        let mut opts = CallOptions::default();
        opts.set_header(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        Self {
            http,
            endpoint,
            opts,
        }
    }

    /// Create a client for a hosted account, e.g. `acme` for `https://acme.zendesk.com/api/v2`.
    pub fn for_subdomain(http: C, subdomain: &str) -> Result<Self, ConfigError> {
        if !SUBDOMAIN_RE.is_match(subdomain) {
            return Err(ConfigError::InvalidSubdomain(subdomain.to_owned()));
        }
        Self::with_endpoint_url(http, &format!("https://{subdomain}.zendesk.com/api/v2"))
    }

    /// Create a client from a base URL string.
    pub fn with_endpoint_url(http: C, endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: endpoint.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEndpoint {
                url: endpoint.to_owned(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }
        Ok(Self::new(http, url))
    }

    /// The API base URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Point the client at a different base URL.
    pub fn set_endpoint(&mut self, endpoint: Url) {
        self.endpoint = endpoint;
    }

    /// Send a header with every request, replacing any earlier value.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.opts.set_header(name, value);
    }

    /// Replace the per-request options wholesale.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Current per-request options
    pub fn options(&self) -> &CallOptions {
        &self.opts
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Send any typed request against this client's endpoint.
    pub async fn send<R>(&self, request: &R) -> ClientResult<Response<R::Response>>
    where
        R: ApiRequest,
    {
        self.http
            .api(self.endpoint.clone())
            .with_options(self.opts.clone())
            .send(request)
            .await
    }
}
