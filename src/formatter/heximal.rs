use std::fmt::Write;

use crate::result::{Result, TypeError, type_error};
use crate::validator::{self, MAX_SAFE_INTEGER};

/// The significant digits of a validated heximal, `"0"` for zero.
pub(crate) fn significant_heximal(value: &str) -> &str {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    match digits.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    }
}

/// Checks that a validated heximal fits in `bits` bits by looking at its width only.
pub(crate) fn fits_heximal(value: &str, bits: u32) -> bool {
    let (count, first) = validator::inspect_heximal(value);
    let nibbles = bits.div_ceil(4) as usize;
    let top_bits = bits % 4;

    count < nibbles
        || (count == nibbles && (top_bits == 0 || first.is_some_and(|n| n < (1 << top_bits))))
}

fn decode_heximal(digits: &str) -> Option<Vec<u8>> {
    let (head, rest) = digits.as_bytes().split_at(digits.len() % 2);
    let mut buffer = Vec::with_capacity(digits.len().div_ceil(2));

    // An odd count is read as if padded with a leading zero.
    if let [ch] = head {
        buffer.push(validator::nibble(*ch)?);
    }
    for pair in rest.chunks_exact(2) {
        buffer.push((validator::nibble(pair[0])? << 4) | validator::nibble(pair[1])?);
    }
    Some(buffer)
}

/// Parses a heximal into an integer no greater than `2^53 - 1`.
///
/// # Examples
/// ```
/// # use minitype::formatter::heximal_to_uint;
/// assert_eq!(heximal_to_uint("0x1fffffffffffff"), Ok(9007199254740991));
/// assert!(heximal_to_uint("0x20000000000000").is_err());
/// ```
pub fn heximal_to_uint(value: &str) -> Result<u64> {
    validator::validate_heximal(value)?;
    if !fits_heximal(value, 53) {
        return type_error("overflow heximal 53 bits");
    }
    match u64::from_str_radix(significant_heximal(value), 16) {
        Ok(number) if number <= MAX_SAFE_INTEGER => Ok(number),
        _ => type_error("overflow heximal 53 bits"),
    }
}

/// Decodes a heximal into big-endian bytes. An odd number of digits is padded on the left, so
/// `"0x123"` is `[0x01, 0x23]`, and `"0x"` is an empty buffer.
pub fn heximal_to_buffer(value: &str) -> Result<Vec<u8>> {
    validator::heximal_digits(value)
        .and_then(decode_heximal)
        .ok_or_else(|| TypeError::new("expect HeximalByteArray").into())
}

/// Decodes a heximal into exactly `size` bytes.
///
/// # Examples
/// ```
/// # use minitype::formatter::heximal_to_fixed_buffer;
/// assert_eq!(heximal_to_fixed_buffer("0x0102", 2), Ok(vec![1, 2]));
/// assert!(heximal_to_fixed_buffer("0x0102", 4).is_err());
/// ```
pub fn heximal_to_fixed_buffer(value: &str, size: usize) -> Result<Vec<u8>> {
    validator::validate_heximal(value)?;
    match heximal_to_buffer(value) {
        Ok(buffer) if buffer.len() == size => Ok(buffer),
        _ => type_error(format!("expect a heximal {} bytes", size)),
    }
}

/// Encodes bytes as a lowercase heximal, two digits per byte.
pub fn buffer_to_heximal(value: &[u8]) -> String {
    let mut heximal = String::with_capacity(2 + value.len() * 2);
    heximal.push_str("0x");
    for byte in value {
        // Writing to a String never fails.
        let _ = write!(heximal, "{:02x}", byte);
    }
    heximal
}
