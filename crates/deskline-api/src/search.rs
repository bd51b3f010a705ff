//! Search result types.
//!
//! The export endpoint returns a single array mixing several unrelated entity
//! shapes. Each element carries a `result_type` discriminator naming its shape,
//! and the set of shapes is closed: [`ResultKind`] lists every one this client
//! understands. An element with any other tag fails the decode of the whole
//! page instead of being skipped.

pub mod export;

pub use export::{
    SearchExport, SearchExportMeta, SearchExportOptions, SearchExportOutput, SearchExportResponse,
};

use std::fmt;
use std::ops::Deref;

use deskline_common::error::DecodeError;
use deskline_common::types::union::{TaggedUnion, decode_fragments, peek_discriminator};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::models::{Group, Organization, Ticket, Topic, User};

/// Name of the discriminator field on search results
pub const RESULT_TYPE: &str = "result_type";

const RESULT_TYPES: &[&str] = &["group", "ticket", "user", "organization", "topic"];

/// The entity shapes a search result can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// `group`
    Group,
    /// `ticket`
    Ticket,
    /// `user`
    User,
    /// `organization`
    Organization,
    /// `topic`
    Topic,
}

impl ResultKind {
    /// Every supported kind, in registry order.
    pub const ALL: [ResultKind; 5] = [
        ResultKind::Group,
        ResultKind::Ticket,
        ResultKind::User,
        ResultKind::Organization,
        ResultKind::Topic,
    ];

    /// The wire tag for this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Ticket => "ticket",
            Self::User => "user",
            Self::Organization => "organization",
            Self::Topic => "topic",
        }
    }

    /// Look up the kind for a discriminator value.
    ///
    /// Matching is exact and case-sensitive.
    pub fn resolve(tag: &str) -> Option<Self> {
        match tag {
            "group" => Some(Self::Group),
            "ticket" => Some(Self::Ticket),
            "user" => Some(Self::User),
            "organization" => Some(Self::Organization),
            "topic" => Some(Self::Topic),
            _ => None,
        }
    }

    /// Decode a raw result object as this kind.
    pub fn decode(self, fragment: &RawValue) -> Result<SearchExportResult, serde_json::Error> {
        let json = fragment.get();
        Ok(match self {
            Self::Group => SearchExportResult::Group(serde_json::from_str(json)?),
            Self::Ticket => SearchExportResult::Ticket(serde_json::from_str(json)?),
            Self::User => SearchExportResult::User(serde_json::from_str(json)?),
            Self::Organization => SearchExportResult::Organization(serde_json::from_str(json)?),
            Self::Topic => SearchExportResult::Topic(serde_json::from_str(json)?),
        })
    }
}

impl AsRef<str> for ResultKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search result, exactly one of the supported entity shapes.
///
/// Serializes as the entity's own fields plus the `result_type` tag.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "result_type", rename_all = "snake_case")]
pub enum SearchExportResult {
    /// An agent group
    Group(Group),
    /// A support ticket
    Ticket(Ticket),
    /// An end user or agent
    User(User),
    /// A customer organization
    Organization(Organization),
    /// A community topic
    Topic(Topic),
}

impl SearchExportResult {
    /// Which shape this result has
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Group(_) => ResultKind::Group,
            Self::Ticket(_) => ResultKind::Ticket,
            Self::User(_) => ResultKind::User,
            Self::Organization(_) => ResultKind::Organization,
            Self::Topic(_) => ResultKind::Topic,
        }
    }

    /// Id of the underlying entity. Ids are only unique within a kind.
    pub fn id(&self) -> i64 {
        match self {
            Self::Group(g) => g.id,
            Self::Ticket(t) => t.id,
            Self::User(u) => u.id,
            Self::Organization(o) => o.id,
            Self::Topic(t) => t.id,
        }
    }

    /// The group, if this result is one
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    /// The ticket, if this result is one
    pub fn as_ticket(&self) -> Option<&Ticket> {
        match self {
            Self::Ticket(t) => Some(t),
            _ => None,
        }
    }

    /// The user, if this result is one
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(u) => Some(u),
            _ => None,
        }
    }

    /// The organization, if this result is one
    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Self::Organization(o) => Some(o),
            _ => None,
        }
    }

    /// The topic, if this result is one
    pub fn as_topic(&self) -> Option<&Topic> {
        match self {
            Self::Topic(t) => Some(t),
            _ => None,
        }
    }
}

impl TaggedUnion for SearchExportResult {
    const DISCRIMINATOR: &'static str = RESULT_TYPE;
    type Kind = ResultKind;

    fn resolve(tag: &str) -> Option<ResultKind> {
        ResultKind::resolve(tag)
    }

    fn decode_kind(kind: ResultKind, fragment: &RawValue) -> Result<Self, serde_json::Error> {
        kind.decode(fragment)
    }
}

/// Decodes one standalone result object.
///
/// Errors here know nothing of the element's position. Decode whole pages
/// through [`SearchExportResults`] to get indexed [`DecodeError`]s.
impl<'de> Deserialize<'de> for SearchExportResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fragment = Box::<RawValue>::deserialize(deserializer)?;
        let tag = peek_discriminator(&fragment, RESULT_TYPE)
            .ok_or_else(|| D::Error::custom("missing or non-string `result_type`"))?;
        let kind =
            ResultKind::resolve(&tag).ok_or_else(|| D::Error::unknown_variant(&tag, RESULT_TYPES))?;
        kind.decode(&fragment)
            .map_err(|e| D::Error::custom(format!("invalid `{kind}` result: {e}")))
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for SearchExportResult {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_entity!(Group, Ticket, User, Organization, Topic);

/// Ordered results of one export page.
///
/// Order matches the server's array exactly.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct SearchExportResults(Vec<SearchExportResult>);

impl SearchExportResults {
    /// Wrap results that are already in page order.
    pub fn new(results: Vec<SearchExportResult>) -> Self {
        Self(results)
    }

    /// Decode raw result fragments in order. The first bad element fails the whole page.
    pub fn decode(fragments: &[&RawValue]) -> Result<Self, DecodeError> {
        decode_fragments(fragments.iter().copied()).map(Self)
    }

    /// Borrow the results
    pub fn as_slice(&self) -> &[SearchExportResult] {
        &self.0
    }

    /// Unwrap into the underlying vector
    pub fn into_vec(self) -> Vec<SearchExportResult> {
        self.0
    }

    /// Results of one kind, in page order.
    pub fn of_kind(&self, kind: ResultKind) -> impl Iterator<Item = &SearchExportResult> {
        self.0.iter().filter(move |r| r.kind() == kind)
    }
}

impl Deref for SearchExportResults {
    type Target = [SearchExportResult];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<SearchExportResult>> for SearchExportResults {
    fn from(results: Vec<SearchExportResult>) -> Self {
        Self(results)
    }
}

impl FromIterator<SearchExportResult> for SearchExportResults {
    fn from_iter<I: IntoIterator<Item = SearchExportResult>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SearchExportResults {
    type Item = SearchExportResult;
    type IntoIter = std::vec::IntoIter<SearchExportResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchExportResults {
    type Item = &'a SearchExportResult;
    type IntoIter = std::slice::Iter<'a, SearchExportResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for SearchExportResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fragments = Vec::<Box<RawValue>>::deserialize(deserializer)?;
        decode_fragments(fragments)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SearchExportResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{} {}", result.kind(), result.id())?;
        }
        Ok(())
    }
}
