use crate::result::{Result, type_error};
use crate::validator::{self, MAX_SAFE_INTEGER};

const MAX_SAFE_DECIMAL: &str = "9007199254740991";

/// Strips the leading zeros of a decimal, keeping a single `"0"` for zero. None if `value` isn't a
/// decimal.
pub(crate) fn tidy_decimal(value: &str) -> Option<&str> {
    if !validator::is_decimal(value) {
        return None;
    }
    match value.trim_start_matches('0') {
        "" => Some("0"),
        tidy => Some(tidy),
    }
}

/// Normalises an unsigned decimal by removing its leading zeros.
///
/// # Examples
/// ```
/// # use minitype::formatter::to_tidy_uint_decimal;
/// assert_eq!(to_tidy_uint_decimal("00012"), Ok("12"));
/// assert_eq!(to_tidy_uint_decimal("000"), Ok("0"));
/// assert!(to_tidy_uint_decimal("1e3").is_err());
/// ```
pub fn to_tidy_uint_decimal(value: &str) -> Result<&str> {
    match tidy_decimal(value) {
        Some(tidy) => Ok(tidy),
        None => type_error("expect a unsigned integer from decimal"),
    }
}

/// Normalises a positive decimal by removing its leading zeros. A decimal of zero, however it's
/// padded, is rejected.
pub fn to_tidy_pint_decimal(value: &str) -> Result<&str> {
    match tidy_decimal(value) {
        None => type_error("expect a positive integer from decimal"),
        Some("0") => type_error("expect a decimal of positive integer"),
        Some(tidy) => Ok(tidy),
    }
}

fn safe_decimal_to_integer(tidy: &str, overflow: &'static str) -> Result<u64> {
    if is_decimal_greater(tidy, MAX_SAFE_DECIMAL) {
        return type_error(overflow);
    }
    match tidy.parse::<u64>() {
        Ok(number) if number <= MAX_SAFE_INTEGER => Ok(number),
        _ => type_error(overflow),
    }
}

/// Parses a decimal into an integer no greater than `2^53 - 1`.
///
/// # Examples
/// ```
/// # use minitype::formatter::decimal_to_uint;
/// assert_eq!(decimal_to_uint("0009007199254740991"), Ok(9007199254740991));
/// assert!(decimal_to_uint("9007199254740992").is_err());
/// ```
pub fn decimal_to_uint(value: &str) -> Result<u64> {
    validator::validate_uint_decimal(value)?;
    match tidy_decimal(value) {
        Some(tidy) => safe_decimal_to_integer(tidy, "overflow unsigned integer decimal 53 bits"),
        None => type_error("expect a unsigned integer decimal"),
    }
}

/// Parses a decimal into an integer in `[1, 2^53 - 1]`. Leading zeros are tolerated.
pub fn decimal_to_pint(value: &str) -> Result<u64> {
    match tidy_decimal(value) {
        Some("0") | None => type_error("expect a positive integer decimal"),
        Some(tidy) => safe_decimal_to_integer(tidy, "overflow positive integer decimal 53 bits"),
    }
}

/// Compares two tidy decimals by value without parsing them. The result is meaningless if either
/// has leading zeros.
///
/// # Examples
/// ```
/// # use minitype::formatter::is_decimal_greater;
/// assert!(is_decimal_greater("100", "99"));
/// assert!(!is_decimal_greater("99", "99"));
/// ```
pub fn is_decimal_greater(a: &str, b: &str) -> bool {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b)).is_gt()
}
