use std::fmt::{Debug, Display, LowerHex};
use std::hash::Hash;

use num_bigint::BigUint;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, ToPrimitive, Unsigned,
};

/// The unsigned storage behind an [`Int`](super::Int).
///
/// This is implemented for the native unsigned integers that back the narrow types and for
/// [`BigUint`], which backs the 256-bit types.
pub trait Magnitude:
    Clone
    + Ord
    + Hash
    + Debug
    + Display
    + LowerHex
    + Num
    + Unsigned
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + CheckedDiv
    + FromPrimitive
    + ToPrimitive
    + Send
    + Sync
    + 'static
{
    /// Narrows a big integer, or returns None if it doesn't fit.
    fn from_big_uint(value: &BigUint) -> Option<Self>;

    fn to_big_uint(&self) -> BigUint;
}

macro_rules! impl_magnitude_for {
    ($t:ty) => {
        impl Magnitude for $t {
            #[inline(always)]
            fn from_big_uint(value: &BigUint) -> Option<$t> {
                <$t>::try_from(value).ok()
            }

            #[inline(always)]
            fn to_big_uint(&self) -> BigUint {
                BigUint::from(*self)
            }
        }
    };
}

impl_magnitude_for!(u8);
impl_magnitude_for!(u16);
impl_magnitude_for!(u32);
impl_magnitude_for!(u64);

impl Magnitude for BigUint {
    fn from_big_uint(value: &BigUint) -> Option<BigUint> {
        Some(value.clone())
    }

    fn to_big_uint(&self) -> BigUint {
        self.clone()
    }
}
