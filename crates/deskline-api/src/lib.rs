//! Endpoint and entity definitions for the ticketing platform's REST API.
//!
//! Each endpoint is a request value implementing
//! [`ApiRequest`](deskline_common::request::ApiRequest) plus a response marker
//! implementing [`ApiResp`](deskline_common::request::ApiResp). Send them with
//! any [`HttpClient`](deskline_common::http_client::HttpClient), either through
//! the stateless [`ApiExt`](deskline_common::request::ApiExt) builder or the
//! stateful client in the `deskline` crate.

#![warn(missing_docs)]

/// Links between tickets and issue-tracker issues
pub mod jira;
/// Entity schemas that appear as search results
pub mod models;
/// Search endpoints and their polymorphic results
pub mod search;
