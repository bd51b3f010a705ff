//! Two-phase decoding of closed tagged unions.
//!
//! Endpoints such as search export return arrays whose elements are unrelated
//! object shapes, told apart by a discriminator field. Decoding happens per
//! element in two explicit steps over the same raw fragment:
//!
//! 1. [`peek_discriminator`] parses the fragment shallowly (keys plus still-raw
//!    values) and reads the discriminator string.
//! 2. [`TaggedUnion::decode_kind`] decodes the whole fragment into the concrete
//!    shape selected by [`TaggedUnion::resolve`].
//!
//! Each fragment is therefore parsed twice. Decoding is all-or-nothing: the
//! first element that cannot be resolved or decoded fails the whole array.

use std::borrow::Borrow;
use std::collections::HashMap;

use serde_json::value::RawValue;
use smol_str::SmolStr;

use crate::error::DecodeError;

/// A closed set of shapes selected by a string discriminator.
///
/// Implementors are expected to be enums whose `resolve` and `decode_kind` are
/// exhaustive matches, so adding a variant without a decode rule fails to compile.
pub trait TaggedUnion: Sized {
    /// Name of the discriminator field, e.g. `result_type`
    const DISCRIMINATOR: &'static str;

    /// The variant identity, independent of any payload
    type Kind: Copy + AsRef<str>;

    /// Map a discriminator value to a variant, or `None` if it is not part of the set.
    fn resolve(tag: &str) -> Option<Self::Kind>;

    /// Fully decode a raw fragment as the given variant.
    fn decode_kind(kind: Self::Kind, fragment: &RawValue) -> Result<Self, serde_json::Error>;
}

/// Read a string discriminator from a raw JSON object without decoding its other members.
///
/// Returns `None` when the fragment is not an object, the field is absent, or
/// its value is not a string.
pub fn peek_discriminator(fragment: &RawValue, field: &str) -> Option<SmolStr> {
    let shallow: HashMap<SmolStr, &RawValue> = serde_json::from_str(fragment.get()).ok()?;
    let value = shallow.get(field)?;
    serde_json::from_str::<SmolStr>(value.get()).ok()
}

/// Resolve and decode a single element of a tagged array.
pub fn decode_element<U: TaggedUnion>(index: usize, fragment: &RawValue) -> Result<U, DecodeError> {
    let unresolved = |tag: Option<SmolStr>| DecodeError::UnknownDiscriminator {
        index,
        field: U::DISCRIMINATOR,
        tag,
        fragment: fragment.get().to_owned(),
    };

    let Some(tag) = peek_discriminator(fragment, U::DISCRIMINATOR) else {
        return Err(unresolved(None));
    };
    let Some(kind) = U::resolve(&tag) else {
        return Err(unresolved(Some(tag)));
    };

    U::decode_kind(kind, fragment).map_err(|source| DecodeError::ElementDecode {
        index,
        kind: SmolStr::new(kind.as_ref()),
        source,
    })
}

/// Decode already-split fragments in order. The first failure aborts the decode.
pub fn decode_fragments<U, I, F>(fragments: I) -> Result<Vec<U>, DecodeError>
where
    U: TaggedUnion,
    I: IntoIterator<Item = F>,
    F: Borrow<RawValue>,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("decode_tagged_union", discriminator = U::DISCRIMINATOR)
        .entered();

    let decoded = fragments
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| decode_element(index, fragment.borrow()))
        .collect::<Result<Vec<U>, _>>();

    #[cfg(feature = "tracing")]
    {
        match &decoded {
            Ok(values) => tracing::debug!(count = values.len(), "decoded tagged array"),
            Err(e) => tracing::warn!(error = %e, "tagged array decode failed"),
        }
    }

    decoded
}

/// Decode a JSON array of tagged objects.
pub fn decode_tagged_array<U: TaggedUnion>(json: &[u8]) -> Result<Vec<U>, DecodeError> {
    let fragments: Vec<&RawValue> = serde_json::from_slice(json)?;
    decode_fragments(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Circle {
        radius: u32,
    }

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Square {
        side: u32,
    }

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(Circle),
        Square(Square),
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ShapeKind {
        Circle,
        Square,
    }

    impl AsRef<str> for ShapeKind {
        fn as_ref(&self) -> &str {
            match self {
                Self::Circle => "circle",
                Self::Square => "square",
            }
        }
    }

    impl TaggedUnion for Shape {
        const DISCRIMINATOR: &'static str = "kind";
        type Kind = ShapeKind;

        fn resolve(tag: &str) -> Option<ShapeKind> {
            match tag {
                "circle" => Some(ShapeKind::Circle),
                "square" => Some(ShapeKind::Square),
                _ => None,
            }
        }

        fn decode_kind(kind: ShapeKind, fragment: &RawValue) -> Result<Self, serde_json::Error> {
            Ok(match kind {
                ShapeKind::Circle => Shape::Circle(serde_json::from_str(fragment.get())?),
                ShapeKind::Square => Shape::Square(serde_json::from_str(fragment.get())?),
            })
        }
    }

    #[test]
    fn peek_reads_only_string_tags() {
        let raw = |s: &str| RawValue::from_string(s.to_owned()).unwrap();
        assert_eq!(
            peek_discriminator(&raw(r#"{"kind":"circle","radius":{"deep":[1,2]}}"#), "kind")
                .as_deref(),
            Some("circle")
        );
        assert_eq!(peek_discriminator(&raw(r#"{"kind":7}"#), "kind"), None);
        assert_eq!(peek_discriminator(&raw(r#"{"radius":1}"#), "kind"), None);
        assert_eq!(peek_discriminator(&raw(r#"["kind"]"#), "kind"), None);
        assert_eq!(
            peek_discriminator(&raw(r#"{"kind":"square"}"#), "kind").as_deref(),
            Some("square")
        );
    }

    #[test]
    fn decodes_in_order() {
        let json = br#"[{"kind":"square","side":2},{"kind":"circle","radius":1},{"kind":"square","side":3}]"#;
        let shapes: Vec<Shape> = decode_tagged_array(json).unwrap();
        assert_eq!(
            shapes,
            vec![
                Shape::Square(Square { side: 2 }),
                Shape::Circle(Circle { radius: 1 }),
                Shape::Square(Square { side: 3 }),
            ]
        );
    }

    #[test]
    fn unknown_tag_aborts_everything() {
        let json = br#"[{"kind":"circle","radius":1},{"kind":"hexagon","sides":6}]"#;
        match decode_tagged_array::<Shape>(json).unwrap_err() {
            DecodeError::UnknownDiscriminator {
                index,
                field,
                tag,
                fragment,
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, "kind");
                assert_eq!(tag.as_deref(), Some("hexagon"));
                assert_eq!(fragment, r#"{"kind":"hexagon","sides":6}"#);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn shape_mismatch_reports_kind() {
        let json = br#"[{"kind":"circle","side":1}]"#;
        match decode_tagged_array::<Shape>(json).unwrap_err() {
            DecodeError::ElementDecode { index, kind, .. } => {
                assert_eq!(index, 0);
                assert_eq!(kind, "circle");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_array_is_plain_json_error() {
        let err = decode_tagged_array::<Shape>(br#"{"kind":"circle","radius":1}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
