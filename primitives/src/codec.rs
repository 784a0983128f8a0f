//! JSON serialization for records and invocation payloads.
//!
//! Records are stored in world state as a JSON object:
//!
//! ```text
//! {"key":"<key>","value":"<value>","owner":"<owner>","timestamp":"<timestamp>"}
//! ```
//!
//! Field order and names match what earlier contract versions wrote, so
//! existing ledger entries stay readable.

use crate::error::{ContractError, ContractResult};
use crate::types::Record;

/// Encode a record into its world-state bytes.
pub fn encode_record(record: &Record) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| ContractError::Serialization(e.to_string()))
}

/// Decode world-state bytes into a record.
///
/// Returns `ContractError::Deserialization` if the bytes are neither a JSON
/// object with string (or null) fields nor `null`.
pub fn decode_record(bytes: &[u8]) -> ContractResult<Record> {
    serde_json::from_slice(bytes).map_err(|e| ContractError::Deserialization(e.to_string()))
}

/// Encode an existence check result as a JSON boolean payload.
pub fn encode_bool(value: bool) -> Vec<u8> {
    if value {
        b"true".to_vec()
    } else {
        b"false".to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("a", "1", "alice", "2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_encode_field_names_and_order() {
        let bytes = encode_record(&sample()).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"key":"a","value":"1","owner":"alice","timestamp":"2024-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let record = Record::new("msg/42", "{\"status\":\"sent\"}", "x509::CN=bob", "ts");
        let decoded = decode_record(&encode_record(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let bytes = br#"{"key":"a","value":"1","owner":"o","timestamp":"t","version":3}"#;
        let record = decode_record(bytes).unwrap();
        assert_eq!(record, Record::new("a", "1", "o", "t"));
    }

    #[test]
    fn test_decode_missing_fields_are_empty() {
        let record = decode_record(br#"{"key":"a"}"#).unwrap();
        assert_eq!(record.key, "a");
        assert!(record.value.is_empty());
        assert!(record.owner.is_empty());
        assert!(record.timestamp.is_empty());
    }

    #[test]
    fn test_decode_matches_field_names_ignoring_case() {
        let bytes = br#"{"Key":"a","VALUE":"1","Owner":"o","timeStamp":"t"}"#;
        assert_eq!(decode_record(bytes).unwrap(), Record::new("a", "1", "o", "t"));
    }

    #[test]
    fn test_decode_repeated_field_keeps_last() {
        let bytes = br#"{"key":"a","value":"1","value":"2","Value":"3"}"#;
        let record = decode_record(bytes).unwrap();
        assert_eq!(record.key, "a");
        assert_eq!(record.value, "3");
    }

    #[test]
    fn test_decode_null() {
        assert_eq!(decode_record(b"null").unwrap(), Record::default());

        let record = decode_record(br#"{"key":"a","owner":null,"value":"1"}"#).unwrap();
        assert_eq!(record, Record::new("a", "1", "", ""));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_record(b"\x00\x01not json").unwrap_err();
        assert!(matches!(err, ContractError::Deserialization(_)));
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        assert!(matches!(
            decode_record(b"42"),
            Err(ContractError::Deserialization(_))
        ));
        assert!(matches!(
            decode_record(br#"{"key":7}"#),
            Err(ContractError::Deserialization(_))
        ));
        assert!(matches!(
            decode_record(br#"["a","1","o","t"]"#),
            Err(ContractError::Deserialization(_))
        ));
    }

    #[test]
    fn test_encode_bool() {
        assert_eq!(encode_bool(true), b"true");
        assert_eq!(encode_bool(false), b"false");
    }
}
