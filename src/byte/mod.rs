//! Arbitrary byte sequences.

mod byte_data;

pub use byte_data::*;
