use crate::result::{Result, type_error};

#[derive(Debug, Clone, Copy)]
enum Scan {
    Start,
    Zero,
    Prefix,
    Digits,
}

/// Returns the digits following the `0x` prefix, or None if `value` isn't of the form
/// `^0x[0-9a-fA-F]*$`.
pub(crate) fn heximal_digits(value: &str) -> Option<&str> {
    let mut last_scan = Scan::Start;

    for ch in value.bytes() {
        last_scan = match (ch, last_scan) {
            (b'0', Scan::Start)                       => Scan::Zero,
            (b'x', Scan::Zero)                        => Scan::Prefix,
            (_, Scan::Prefix | Scan::Digits) if ch.is_ascii_hexdigit() => Scan::Digits,
            _                                         => None?,
        };
    }

    match last_scan {
        Scan::Prefix | Scan::Digits => Some(&value[2..]),
        Scan::Start | Scan::Zero    => None,
    }
}

pub(crate) const fn nibble(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|ch| ch.is_ascii_digit())
}

/// Checks that `value` matches `^0x[0-9a-fA-F]+$`.
///
/// # Examples
/// ```
/// # use minitype::validator::validate_heximal;
/// assert!(validate_heximal("0xffb").is_ok());
/// assert!(validate_heximal("0x").is_err());
/// assert!(validate_heximal("1ffb").is_err());
/// ```
pub fn validate_heximal(value: &str) -> Result<()> {
    match heximal_digits(value) {
        Some(digits) if !digits.is_empty() => Ok(()),
        _ => type_error("expect Heximal"),
    }
}

/// Checks that `value` matches `^0x[0-9a-fA-F]*$`, where `0x` alone is an empty byte sequence.
pub fn validate_heximal_byte_array(value: &str) -> Result<()> {
    match heximal_digits(value) {
        Some(_) => Ok(()),
        None => type_error("expect HeximalByteArray"),
    }
}

/// Checks that `value` matches `^[0-9]+$`. Leading zeros are allowed.
pub fn validate_uint_decimal(value: &str) -> Result<()> {
    match is_decimal(value) {
        true => Ok(()),
        false => type_error("expect a unsigned integer decimal"),
    }
}

/// Checks that `value` matches `^[1-9][0-9]*$`, which also rules out zero and leading zeros.
pub fn validate_pint_decimal(value: &str) -> Result<()> {
    match value.as_bytes() {
        [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => Ok(()),
        _ => type_error("expect a positive integer decimal"),
    }
}

/// Returns the count of significant digits in a heximal along with the value of the first one,
/// skipping the `0x` prefix and any leading zeros. A heximal of value zero inspects as `(0, None)`.
///
/// The input isn't validated, this is meant to bound the width of an already validated heximal
/// without parsing it.
///
/// # Examples
/// ```
/// # use minitype::validator::inspect_heximal;
/// assert_eq!(inspect_heximal("0x001f"), (2, Some(1)));
/// assert_eq!(inspect_heximal("0x000"), (0, None));
/// ```
pub fn inspect_heximal(value: &str) -> (usize, Option<u8>) {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    let significant = digits.trim_start_matches('0');
    (significant.len(), significant.bytes().next().and_then(nibble))
}
