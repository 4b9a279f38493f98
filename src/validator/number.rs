use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::result::{Result, type_error};

/// The largest integer a 64-bit float represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Converts a native number to a float if it holds a finite, integral value.
fn integral<N: ToPrimitive>(value: N) -> Option<f64> {
    value.to_f64().filter(|v| v.is_finite() && v.fract() == 0.0)
}

pub(crate) fn check_integer<N: ToPrimitive>(
    value: N,
    min: u64,
    max: u64,
    invalid: &'static str,
    overflow: &'static str,
) -> Result<u64> {
    let number = match integral(value) {
        Some(number) if number >= min as f64 => number,
        _ => return type_error(invalid),
    };
    if number > max as f64 {
        return type_error(overflow);
    }
    // Integral and within [min, max], where max never exceeds MAX_SAFE_INTEGER.
    Ok(number as u64)
}

pub(crate) fn check_big_integer(
    value: &BigInt,
    positive: bool,
    max: &BigUint,
    invalid: &'static str,
    overflow: &'static str,
) -> Result<BigUint> {
    let magnitude = match value.to_biguint() {
        Some(magnitude) if !(positive && magnitude.is_zero()) => magnitude,
        _ => return type_error(invalid),
    };
    if &magnitude > max {
        return type_error(overflow);
    }
    Ok(magnitude)
}

/// Checks that `value` is an integer in `[0, 2^53 - 1]`. Floats with a fractional part, NaN and
/// infinities are rejected.
///
/// # Examples
/// ```
/// # use minitype::validator::validate_uint;
/// assert_eq!(validate_uint(0), Ok(0));
/// assert_eq!(validate_uint(12.0), Ok(12));
/// assert!(validate_uint(-1).is_err());
/// assert!(validate_uint(1.5).is_err());
/// ```
pub fn validate_uint<N: ToPrimitive>(value: N) -> Result<u64> {
    check_integer(
        value,
        0,
        MAX_SAFE_INTEGER,
        "expect a unsigned integer",
        "overflow unsigned integer 53 bits",
    )
}

/// Checks that `value` is an integer in `[1, 2^53 - 1]`.
pub fn validate_pint<N: ToPrimitive>(value: N) -> Result<u64> {
    check_integer(
        value,
        1,
        MAX_SAFE_INTEGER,
        "expect a positive integer",
        "overflow positive integer 53 bits",
    )
}

/// Checks that a big integer is not negative, handing back its magnitude.
pub fn validate_big_uint(value: &BigInt) -> Result<BigUint> {
    match value.to_biguint() {
        Some(magnitude) => Ok(magnitude),
        None => type_error("expect unsigned big integer"),
    }
}
