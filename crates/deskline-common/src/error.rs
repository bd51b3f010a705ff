//! Error types for API client operations

use bytes::Bytes;
use serde::Deserialize;
use smol_str::SmolStr;

/// Client error type wrapping all possible error conditions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP transport error: {0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// Request serialization failed, or the request was incomplete
    #[error("{0}")]
    Encode(
        #[from]
        #[diagnostic_source]
        EncodeError,
    ),

    /// Response deserialization failed
    #[error("{0}")]
    Decode(
        #[from]
        #[diagnostic_source]
        DecodeError,
    ),

    /// HTTP error response
    #[error("{0}")]
    Http(
        #[from]
        #[diagnostic_source]
        HttpError,
    ),
}

impl ClientError {
    /// True when the request never reached the transport because options were absent.
    pub fn is_missing_options(&self) -> bool {
        matches!(self, Self::Encode(EncodeError::MissingOptions { .. }))
    }
}

/// Transport-level errors that occur during HTTP communication
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish connection to server
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Classify an error raised by an [`HttpClient`](crate::http_client::HttpClient).
    ///
    /// reqwest errors map onto the specific variants; anything else lands in
    /// [`TransportError::Other`].
    pub fn from_client_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        #[cfg(feature = "reqwest-client")]
        let boxed = match boxed.downcast::<reqwest::Error>() {
            Ok(e) => return Self::from(*e),
            Err(other) => other,
        };
        Self::Other(boxed)
    }
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}

/// Error type for encoding API requests
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// The endpoint requires options and none were supplied
    #[error("{endpoint}: request options are required")]
    #[diagnostic(
        code(deskline_common::encode::missing_options),
        help("pass explicit options; an unfiltered export is never sent implicitly")
    )]
    MissingOptions {
        /// Endpoint that rejected the call
        endpoint: &'static str,
    },
    /// Failed to serialize query parameters
    #[error("Failed to serialize query: {0}")]
    Query(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),
    /// Failed to serialize JSON body
    #[error("Failed to serialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// Response deserialization errors
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    /// JSON deserialization failed
    #[error("Failed to deserialize JSON: {0}")]
    #[diagnostic(code(deskline_common::decode::json))]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),

    /// The response body was not the expected `{results, meta}` envelope
    #[error("Malformed response envelope: {0}")]
    #[diagnostic(code(deskline_common::decode::envelope))]
    MalformedEnvelope(#[source] serde_json::Error),

    /// An element's discriminator was absent, not a string, or not a known variant
    #[error("{}", unknown_discriminator_message(.index, .field, .tag))]
    #[diagnostic(
        code(deskline_common::decode::unknown_discriminator),
        help("the server may be returning a result kind this client does not know about")
    )]
    UnknownDiscriminator {
        /// Position of the element in the source array
        index: usize,
        /// Name of the discriminator field
        field: &'static str,
        /// The discriminator value, when it was present and a string
        tag: Option<SmolStr>,
        /// The raw JSON of the offending element
        fragment: String,
    },

    /// The discriminator resolved but the element did not match that variant's shape
    #[error("element {index} is not a valid `{kind}`: {source}")]
    #[diagnostic(code(deskline_common::decode::element))]
    ElementDecode {
        /// Position of the element in the source array
        index: usize,
        /// The variant the element was decoded as
        kind: SmolStr,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Server reported more results without a cursor to continue from
    #[error("server reported more results but returned no continuation cursor")]
    #[diagnostic(code(deskline_common::decode::missing_cursor))]
    MissingCursor,
}

fn unknown_discriminator_message(index: &usize, field: &str, tag: &Option<SmolStr>) -> String {
    match tag {
        Some(tag) => format!("element {index} has unsupported {field} `{tag}`"),
        None => format!("element {index} has a missing or non-string {field}"),
    }
}

/// HTTP error response (non-2xx status codes)
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub struct HttpError {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body if available
    pub body: Option<Bytes>,
}

impl HttpError {
    /// Decode the platform's error body, if the response carried one.
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        self.body
            .as_ref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(body) = &self.body {
            if let Ok(s) = std::str::from_utf8(body) {
                if !s.is_empty() {
                    write!(f, ":\n{}", s)?;
                }
            }
        }
        Ok(())
    }
}

/// Error body returned by the platform alongside non-2xx statuses
///
/// Comes in two shapes: `{"error": "RecordNotFound", "description": "Not found"}`
/// and `{"error": {"title": "Forbidden", "message": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Error code or structured error
    pub error: ApiErrorCode,
    /// Optional human-readable description
    #[serde(default)]
    pub description: Option<SmolStr>,
}

/// The `error` member of an [`ApiErrorBody`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorCode {
    /// Plain error code, e.g. `RecordNotFound`
    Code(SmolStr),
    /// Title plus optional message
    Detailed {
        /// Short title
        title: SmolStr,
        /// Longer message
        #[serde(default)]
        message: Option<SmolStr>,
    },
}

impl ApiErrorCode {
    /// The error code or title
    pub fn as_str(&self) -> &str {
        match self {
            Self::Code(code) => code,
            Self::Detailed { title, .. } => title,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;
