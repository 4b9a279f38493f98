//! Field by field conversion of keyed records and lists, where each failure is reported with the
//! key or index it happened at.

mod array;
mod object;

pub use array::*;
pub use object::*;
