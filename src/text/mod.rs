//! Normalised, non-empty strings.

mod tidy_string;

pub use tidy_string::*;

mod tests;
