use num_traits::ToPrimitive;

use crate::num::{PInt64, UInt64};
use crate::result::Open;
use crate::validator;

impl UInt64 {
    /// Adds a native number.
    ///
    /// # Panics
    /// Panics if `addend` isn't an unsigned integer no greater than `2^53 - 1`, or if the sum
    /// overflows 64 bits.
    pub fn add_number<N: ToPrimitive>(&self, addend: N) -> UInt64 {
        let addend = validator::validate_uint(addend).open();
        self.add(&UInt64::new_unchecked(addend))
    }

    /// Subtracts a native number.
    ///
    /// # Panics
    /// Panics if `subtrahend` isn't an unsigned integer no greater than `2^53 - 1`, or if the
    /// difference is negative.
    pub fn sub_number<N: ToPrimitive>(&self, subtrahend: N) -> UInt64 {
        let subtrahend = validator::validate_uint(subtrahend).open();
        self.sub(&UInt64::new_unchecked(subtrahend))
    }

    /// # Panics
    /// Panics if the sum overflows 64 bits.
    pub fn add_pint64(&self, addend: &PInt64) -> UInt64 {
        self.add(&UInt64::new_unchecked(*addend.value()))
    }
}
