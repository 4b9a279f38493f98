//! Validated numeric wrappers.
//!
//! Every integer type here is an alias of [`Int`], a single generic wrapper parameterised by a
//! [`Bounds`] marker that fixes the storage type, the width, the floor (zero for unsigned types,
//! one for positive types) and the exact message of each failure. Instances are only built through
//! the named factories (`from_number`, `from_big_int`, `from_decimal`, `from_heximal` and, for
//! byte aligned widths, `from_buffer`), which return a [`Result`](crate::result::Result) instead of
//! panicking. Arithmetic on valid instances, on the other hand, panics when the result leaves the
//! range of the type.
//!
//! [`Float64`] and [`UFloat64`] are the two floating point wrappers.

mod bounds;
mod float;
mod int;
mod magnitude;
mod uint64;

pub use bounds::*;
pub use float::*;
pub use int::*;
pub use magnitude::*;
