//! Bluetooth LE long-term-key transformation.
//!
//! Converts the comma-separated octet lists shown by other operating systems
//! for a pairing into the `[LongTermKey]` block of a BlueZ device `info` file.
//! `Key` and `EDiv` keep their byte order; `Rand` is stored little-endian and
//! gets its octets reversed before being parsed.

pub mod octets;
pub mod record;

pub use octets::{normalize_octets, octets, reversed_octet_value};
pub use record::{build_record, render, KeyRecord};
