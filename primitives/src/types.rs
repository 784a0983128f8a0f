//! Core record type and storage constants.
//!
//! A [`Record`] is the only entity the contract stores. Its serialized form
//! is a JSON object with the fields `key`, `value`, `owner`, `timestamp`,
//! in that order. Field names are part of the ledger format and must not
//! change between versions.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Serialize;

/// Maximum key length accepted by hosts, in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum serialized value length accepted by hosts, in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// A value stored under a key together with its submitter and write time.
///
/// `owner` and `timestamp` are captured from the transaction that wrote the
/// record. Every Store and Update recomputes both.
///
/// Decoding is lenient so that every entry the ledger already holds still
/// loads:
/// - field names match regardless of ASCII case (`"Key"` fills `key`)
/// - unknown fields are ignored and missing ones stay empty
/// - a repeated field keeps its last value
/// - `null`, either for the whole record or for one field, leaves it empty
///
/// Anything else (arrays, numbers, non-string field values) is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    /// Caller-chosen identifier, unique within the world state.
    pub key: String,
    /// Arbitrary string payload.
    pub value: String,
    /// Identity of the caller that last wrote this record.
    pub owner: String,
    /// Host-supplied transaction time of the last write.
    pub timestamp: String,
}

impl Record {
    /// Build a record from its four fields.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        owner: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            owner: owner.into(),
            timestamp: timestamp.into(),
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        if name.eq_ignore_ascii_case("key") {
            Some(&mut self.key)
        } else if name.eq_ignore_ascii_case("value") {
            Some(&mut self.value)
        } else if name.eq_ignore_ascii_case("owner") {
            Some(&mut self.owner)
        } else if name.eq_ignore_ascii_case("timestamp") {
            Some(&mut self.timestamp)
        } else {
            None
        }
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a record object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Record, E> {
        Ok(Record::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut record = Record::default();
        while let Some(name) = map.next_key::<String>()? {
            match record.field_mut(&name) {
                Some(slot) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(record)
    }
}
