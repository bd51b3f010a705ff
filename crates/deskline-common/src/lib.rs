//! Common types for the deskline ticketing API client

#![warn(missing_docs)]
pub use smol_str;
pub use url;

pub mod error;
/// HTTP client abstraction used by deskline crates.
pub mod http_client;
pub mod request;
/// Pagination and tagged-union building blocks shared by endpoint definitions.
pub mod types;

pub use error::{ClientError, ClientResult};
pub use types::cursor::{CursorState, PageCursor};
pub use types::union::TaggedUnion;
