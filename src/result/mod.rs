//! The fallible-return convention shared by every factory in this crate.
//!
//! A [`Result`] is Rust's own sum type, so "both set" and "neither set" are unrepresentable. The
//! helpers [`ok`], [`error`] and [`type_error`] build one, and [`Open::open`] is the fail-fast
//! boundary that turns an error into a panic carrying the error's message.
//!
//! Factories never panic. Panics are reserved for programmer errors on values that were already
//! validated, such as arithmetic overflow between two instances.

mod error;
mod result;

pub use error::*;
pub use result::*;
