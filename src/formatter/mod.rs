//! Conversions between heximal, decimal, byte and grouped-digit text.
//!
//! These are the text-level helpers behind the numeric types, exposed for callers who only deal in
//! strings. Heximals are always written with a lowercase `0x` prefix and decimals are plain runs of
//! ASCII digits.

mod decimal;
mod grouping;
mod heximal;

pub use decimal::*;
pub use grouping::*;
pub use heximal::*;

mod tests;
