//! Octet list parsing.

use num_bigint::BigUint;

use crate::error::FormatError;

/// Split a raw octet list into uppercase two-digit octets, in input order.
///
/// Commas and whitespace both separate tokens. A token longer than two digits
/// is read as a run of octets, so already-normalized output parses again.
pub fn octets(raw: &str) -> Result<Vec<String>, FormatError> {
    let mut out = Vec::new();

    for token in raw
        .trim()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidOctet {
                token: token.to_string(),
            });
        }

        if token.len() % 2 != 0 {
            return Err(FormatError::OddLength {
                token: token.to_string(),
            });
        }

        // ASCII only past the check above, so byte offsets are char offsets
        for start in (0..token.len()).step_by(2) {
            out.push(token[start..start + 2].to_ascii_uppercase());
        }
    }

    Ok(out)
}

/// Join an octet list into one uppercase hex string without separators.
///
/// Empty input gives an empty string.
pub fn normalize_octets(raw: &str) -> Result<String, FormatError> {
    Ok(octets(raw)?.concat())
}

/// Reverse the octet order of a list and read it as a base-16 integer.
///
/// The value is unbounded; any number of octets is accepted.
pub fn reversed_octet_value(raw: &str) -> Result<BigUint, FormatError> {
    let octets = octets(raw)?;

    if octets.is_empty() {
        return Err(FormatError::Empty { field: "Rand" });
    }

    let reversed: String = octets.iter().rev().map(String::as_str).collect();
    let value = BigUint::parse_bytes(reversed.as_bytes(), 16)
        .ok_or(FormatError::InvalidOctet { token: reversed })?;

    tracing::debug!("Reversed {} octets into {:#x}", octets.len(), value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_commas() {
        assert_eq!(normalize_octets("a1,b2,c3").unwrap(), "A1B2C3");
    }

    #[test]
    fn test_normalize_mixed_separators() {
        assert_eq!(normalize_octets("A1, B2 C3").unwrap(), "A1B2C3");
        assert_eq!(normalize_octets("  a1,\tb2\n,c3  ").unwrap(), "A1B2C3");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_octets("1f, 2e,3D").unwrap();
        assert_eq!(normalize_octets(&once).unwrap(), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_octets("").unwrap(), "");
        assert_eq!(normalize_octets(" , ").unwrap(), "");
    }

    #[test]
    fn test_normalize_invalid() {
        assert_eq!(
            normalize_octets("G1,H2"),
            Err(FormatError::InvalidOctet {
                token: "G1".to_string()
            })
        );
        assert_eq!(
            normalize_octets("A1,B"),
            Err(FormatError::OddLength {
                token: "B".to_string()
            })
        );
        assert!(normalize_octets("A1;B2").is_err());
        assert!(normalize_octets("é1").is_err());
    }

    #[test]
    fn test_octets_splits_long_tokens() {
        assert_eq!(octets("a1b2, c3").unwrap(), vec!["A1", "B2", "C3"]);
    }

    #[test]
    fn test_reversed_value() {
        let value = reversed_octet_value("63,02,84,B8,5D,40,44,DF").unwrap();
        assert_eq!(value, BigUint::from(0xDF44405DB8840263u64));
        assert_eq!(value.to_string(), "16088054540146049635");
    }

    #[test]
    fn test_reversed_value_short() {
        assert_eq!(reversed_octet_value("01,02").unwrap(), BigUint::from(0x0201u32));
        assert_eq!(reversed_octet_value("ff").unwrap(), BigUint::from(255u32));
        assert_eq!(reversed_octet_value("00,00").unwrap().to_string(), "0");
    }

    #[test]
    fn test_reversed_value_long_list() {
        let value =
            reversed_octet_value("a1,b2,c3,d4,e5,f6,01,02,03,04,05,06,07,08,09,1a").unwrap();
        assert_eq!(value.to_string(), "34606821377871566590346488155031712417");

        let nine = reversed_octet_value("01,02,03,04,05,06,07,08,09").unwrap();
        assert_eq!(nine.to_str_radix(16), "90807060504030201");
    }

    #[test]
    fn test_reversed_value_recovers_order() {
        let raw = "00,63,02,84,b8,5d,40,44,df,10,20,30,40,50,60,70,80,90";
        let normalized = normalize_octets(raw).unwrap();
        let value = reversed_octet_value(raw).unwrap();

        // Big-endian display of the value is the reversed pair sequence
        let display = format!(
            "{:0>width$}",
            value.to_str_radix(16).to_uppercase(),
            width = normalized.len()
        );
        let mut pairs: Vec<&str> = (0..display.len())
            .step_by(2)
            .map(|i| &display[i..i + 2])
            .collect();
        pairs.reverse();
        assert_eq!(pairs.concat(), normalized);

        // The normalized string still parses as a single token
        assert_eq!(reversed_octet_value(&normalized).unwrap(), value);
    }

    #[test]
    fn test_reversed_value_errors() {
        assert!(matches!(
            reversed_octet_value("G1,H2"),
            Err(FormatError::InvalidOctet { .. })
        ));
        assert_eq!(
            reversed_octet_value("  "),
            Err(FormatError::Empty { field: "Rand" })
        );
        assert!(matches!(
            reversed_octet_value("01,0"),
            Err(FormatError::OddLength { .. })
        ));
    }
}
