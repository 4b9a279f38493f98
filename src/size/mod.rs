//! Amounts of data, in bytes.

mod data_size;

pub use data_size::*;
