//! The `[LongTermKey]` record.

use std::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::error::FormatError;
use crate::keys::octets::{normalize_octets, reversed_octet_value};

/// Section header of the record in a BlueZ `info` file.
pub const SECTION: &str = "[LongTermKey]";

/// A transformed long-term key, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRecord {
    /// LTK octets, input order.
    #[serde(rename = "Key")]
    pub key: String,

    /// ERand octets reversed and read as an integer.
    #[serde(rename = "Rand", serialize_with = "serialize_decimal")]
    pub rand: BigUint,

    /// EDiv octets, input order.
    #[serde(rename = "EDiv")]
    pub ediv: String,
}

// JSON numbers cannot hold every Rand, so it goes out as a decimal string
fn serialize_decimal<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Build a record from the three raw octet lists.
pub fn build_record(ltk: &str, erand: &str, ediv: &str) -> Result<KeyRecord, FormatError> {
    Ok(KeyRecord {
        key: normalize_octets(ltk)?,
        rand: reversed_octet_value(erand)?,
        ediv: normalize_octets(ediv)?,
    })
}

/// Render a record as the text block pasted into the `info` file.
pub fn render(record: &KeyRecord) -> String {
    format!(
        "{}\nKey = {}\nRand = {}\nEDiv = {}\n",
        SECTION, record.key, record.rand, record.ediv
    )
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
