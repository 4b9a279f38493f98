//! Millisecond precision points in time and durations.
//!
//! Both types store a count of milliseconds no greater than `2^53 - 1`, which is far enough in the
//! future (or long enough) for any practical purpose while still surviving a round trip through a
//! native float.

mod timespan;
mod timestamp;

pub use timespan::*;
pub use timestamp::*;


use num_traits::ToPrimitive;

use crate::result::{Result, error};
use crate::validator::{self, MAX_SAFE_INTEGER};

const INVALID: &str = "expect unsigned integer";
const OVERFLOW: &str = "overflow native unsigned integer 53 bits";

/// Validates a count of `unit` milliseconds and converts it to milliseconds.
fn to_milliseconds<N: ToPrimitive>(value: N, unit: u64) -> Result<u64> {
    let count = match validator::check_integer(value, 0, MAX_SAFE_INTEGER, INVALID, OVERFLOW) {
        Ok(count) => count,
        Err(e) => return error(e.message().to_owned()),
    };
    match count.checked_mul(unit) {
        Some(milliseconds) if milliseconds <= MAX_SAFE_INTEGER => Ok(milliseconds),
        _ => error(OVERFLOW),
    }
}
