//! Pure check functions shared by the numeric core and the peripheral types.
//!
//! Every validator returns a [`Result`](crate::result::Result) with an exact message on failure.
//! Where a check naturally produces the validated value (such as the integer behind a native
//! number), the ok side carries it so that callers don't have to convert twice.

mod number;
mod string;
mod structure;

pub use number::*;
pub use string::*;
pub use structure::*;

mod tests;
