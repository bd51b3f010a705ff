use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Continuation state a caller hands to a paginated request.
///
/// Two styles of paging exist: the legacy time-based one (`start_time`) and
/// the cursor-based one (`cursor`). Only one of them drives a given request;
/// see [`CursorState::continuation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    /// Unix timestamp (seconds) to resume from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Opaque token from a previous response, echoed back verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<SmolStr>,
}

/// The parameter that drives a paginated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation<'a> {
    /// Resume after this cursor
    Cursor(&'a str),
    /// Resume from this timestamp
    StartTime(i64),
}

impl CursorState {
    /// Continue after the given cursor token.
    pub fn after(cursor: impl Into<SmolStr>) -> Self {
        Self {
            start_time: None,
            cursor: Some(cursor.into()),
        }
    }

    /// Start from the given unix timestamp.
    pub fn since(start_time: i64) -> Self {
        Self {
            start_time: Some(start_time),
            cursor: None,
        }
    }

    /// No continuation: request the first page.
    pub fn is_empty(&self) -> bool {
        self.continuation().is_none()
    }

    /// The single parameter that drives the next request.
    ///
    /// A non-empty cursor takes precedence over `start_time`.
    pub fn continuation(&self) -> Option<Continuation<'_>> {
        match (self.cursor.as_deref(), self.start_time) {
            (Some(cursor), _) if !cursor.is_empty() => Some(Continuation::Cursor(cursor)),
            (_, Some(start_time)) => Some(Continuation::StartTime(start_time)),
            _ => None,
        }
    }
}

/// Server-populated cursor returned in paginated response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Token for the page after this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_cursor: Option<SmolStr>,
    /// Ready-made URL for the page after this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_url: Option<SmolStr>,
    /// Token for the page before this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_cursor: Option<SmolStr>,
    /// Ready-made URL for the page before this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_url: Option<SmolStr>,
}

impl PageCursor {
    /// The request-side state that continues after this page, if the server gave a token.
    pub fn next(&self) -> Option<CursorState> {
        self.after_cursor
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| CursorState::after(c.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wins_over_start_time() {
        let state = CursorState {
            start_time: Some(1_700_000_000),
            cursor: Some("abc".into()),
        };
        assert_eq!(state.continuation(), Some(Continuation::Cursor("abc")));
    }

    #[test]
    fn empty_cursor_falls_back_to_start_time() {
        let state = CursorState {
            start_time: Some(42),
            cursor: Some("".into()),
        };
        assert_eq!(state.continuation(), Some(Continuation::StartTime(42)));
        assert!(CursorState::default().is_empty());
    }

    #[test]
    fn page_cursor_decodes_nulls() {
        let cursor: PageCursor = serde_json::from_str(
            r#"{"after_cursor":"xyz","before_cursor":null,"after_url":"https://acme.zendesk.com/api/v2/search/export?page%5Bafter%5D=xyz"}"#,
        )
        .unwrap();
        assert_eq!(cursor.after_cursor.as_deref(), Some("xyz"));
        assert!(cursor.before_cursor.is_none());
        assert_eq!(cursor.next(), Some(CursorState::after("xyz")));
    }

    #[test]
    fn page_cursor_without_token_has_no_next() {
        let cursor = PageCursor {
            after_cursor: Some("".into()),
            ..Default::default()
        };
        assert_eq!(cursor.next(), None);
    }
}
