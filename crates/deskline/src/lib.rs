//! # Deskline
//!
//! Typed client for a ticketing platform's REST API
//! (`https://{subdomain}.zendesk.com/api/v2`).
//!
//! The centerpiece is [search export](client::SearchExportApi): a
//! cursor-paginated bulk search whose pages mix several entity kinds
//! (tickets, users, groups, organizations, topics) in one array. Each page
//! decodes into an ordered [`SearchExportResults`](api::search::SearchExportResults)
//! plus the [`SearchExportMeta`](api::search::SearchExportMeta) needed to ask
//! for the next one. The client never pages on its own.
//!
//! ## Example
//!
//! ```no_run
//! use deskline::client::{Client, SearchExportApi};
//! use deskline::api::search::SearchExportOptions;
//!
//! # #[tokio::main]
//! # async fn main() -> miette::Result<()> {
//! let client = Client::for_subdomain(reqwest::Client::new(), "acme")?;
//!
//! let mut opts = SearchExportOptions::new()
//!     .query("status:open")
//!     .filter_type("ticket")
//!     .page_size(100)
//!     .build();
//!
//! loop {
//!     let (results, meta) = client.search_export(Some(&opts)).await?;
//!     for result in &results {
//!         println!("{} {}", result.kind(), result.id());
//!     }
//!     match opts.next_page(&meta)? {
//!         Some(next) => opts = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Authentication is left to the caller: attach whatever `Authorization`
//! header the account uses with [`Client::set_header`](client::Client::set_header),
//! or hand the client an [`HttpClient`](http_client::HttpClient) that signs
//! requests itself.

#![warn(missing_docs)]

/// Stateful client and high-level operations
pub mod client;

pub use client::{Client, ConfigError, LinkApi, SearchExportApi};
pub use deskline_api as api;
pub use deskline_common::*;
