//! SnapshotCodec - text encoding of the task snapshot.
//!
//! # Contract
//! - `decode` returns `Err(DecodeError)` on any malformed input; callers
//!   substitute an empty snapshot (`decode_or_empty`) or abandon the write.
//! - `encode` is total and round-trips every field `decode` can produce,
//!   including the provenance flag and unknown fields.
//! - Records are written back exactly as they were read; keys of records
//!   created here are written as integers.

use crate::domain::{DecodeError, TaskSnapshot};

/// Literal stored for an empty snapshot.
pub const EMPTY_SNAPSHOT: &str = "[]";

pub struct SnapshotCodec;

impl SnapshotCodec {
    pub fn decode(raw: &str) -> Result<TaskSnapshot, DecodeError> {
        if raw.trim().is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode, treating missing or malformed input as an empty snapshot.
    pub fn decode_or_empty(raw: Option<&str>) -> TaskSnapshot {
        match raw.map(Self::decode) {
            Some(Ok(snapshot)) => snapshot,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "snapshot unreadable, using empty list");
                TaskSnapshot::empty()
            }
            None => TaskSnapshot::empty(),
        }
    }

    pub fn encode(snapshot: &TaskSnapshot) -> String {
        // A Vec of records with string keys and json values cannot fail to serialize.
        serde_json::to_string(snapshot).unwrap_or_else(|_| EMPTY_SNAPSHOT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskKey, TaskRecord};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("[")]
    #[case("not json")]
    #[case("{\"key\": 1}")]
    #[case("[1, 2, 3]")]
    #[case("null")]
    fn malformed_input_is_an_error(#[case] raw: &str) {
        assert!(SnapshotCodec::decode(raw).is_err());
        assert!(SnapshotCodec::decode_or_empty(Some(raw)).is_empty());
    }

    #[test]
    fn empty_array_and_missing_value_decode_to_empty() {
        assert!(SnapshotCodec::decode(EMPTY_SNAPSHOT).unwrap().is_empty());
        assert!(SnapshotCodec::decode_or_empty(None).is_empty());
    }

    #[test]
    fn roundtrip_keeps_every_field() {
        let mut done = TaskRecord::new(TaskKey::new(2), "Call mom");
        done.complete_from_widget();
        let extra =
            TaskRecord::new(TaskKey::new(3), "Water plants").with_field("category", json!("home"));
        let original = TaskSnapshot::new(vec![
            TaskRecord::new(TaskKey::new(1), "Buy milk"),
            done,
            extra,
        ]);

        let decoded = SnapshotCodec::decode(&SnapshotCodec::encode(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn keys_are_encoded_as_integers() {
        let snapshot = TaskSnapshot::new(vec![TaskRecord::new(TaskKey::new(4), "t")]);
        let encoded = SnapshotCodec::encode(&snapshot);
        assert!(encoded.contains("\"key\":4,"));

        let decoded = SnapshotCodec::decode(&encoded).unwrap();
        assert_eq!(decoded.records()[0].key(), TaskKey::new(4));
    }

    #[test]
    fn foreign_float_key_is_kept_verbatim_and_still_addressable() {
        let raw = r#"[{"key":4.0,"title":"t"}]"#;
        let snapshot = SnapshotCodec::decode(raw).unwrap();
        assert_eq!(snapshot.records()[0].key(), TaskKey::new(4));
        assert_eq!(SnapshotCodec::encode(&snapshot), raw);
    }

    #[test]
    fn encode_empty_is_empty_array() {
        assert_eq!(SnapshotCodec::encode(&TaskSnapshot::empty()), EMPTY_SNAPSHOT);
    }
}
