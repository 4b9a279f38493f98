use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use num_bigint::{BigInt, BigUint};
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, One, ToPrimitive, Zero,
};

use crate::formatter::{self, GroupFormat};
use crate::num::{Bounds, ByteAligned, Magnitude, ZeroMessages};
use crate::result::{Open, Result, type_error};
use crate::validator::{self, Instance, MAX_SAFE_INTEGER};

/// An integer that is guaranteed to lie within the range described by `B`.
///
/// Use one of the aliases, such as [`UInt64`](super::UInt64) or [`PInt256`](super::PInt256),
/// rather than naming the bounds directly. Two aliases are distinct types, so mixing them in
/// arithmetic or comparisons doesn't compile.
///
/// # Examples
/// ```
/// # use minitype::num::{PInt, UInt8};
/// # use minitype::result::Open;
/// let a = UInt8::from_heximal("0xf0").open();
/// let b = UInt8::from_decimal("15").open();
/// assert_eq!((&a + &b).to_decimal(), "255");
///
/// assert_eq!(
///     PInt::from_number(0).unwrap_err().message(),
///     "expect a positive integer"
/// );
/// ```
pub struct Int<B: Bounds> {
    value: B::Magnitude,
    _bounds: PhantomData<fn() -> B>,
}

impl<B: Bounds> Int<B> {
    /// Wraps `value` without checking it against the bounds. Every other method assumes that `value`
    /// is within the range of `B`, so only use this with values that have already been checked.
    pub const fn new_unchecked(value: B::Magnitude) -> Int<B> {
        Int {
            value,
            _bounds: PhantomData,
        }
    }

    pub const fn value(&self) -> &B::Magnitude {
        &self.value
    }

    pub fn into_value(self) -> B::Magnitude {
        self.value
    }

    fn floor() -> B::Magnitude {
        match B::ZERO {
            Some(_) => B::Magnitude::one(),
            None => B::Magnitude::zero(),
        }
    }

    fn from_magnitude(value: &BigUint, overflow: &'static str) -> Result<Int<B>> {
        match B::Magnitude::from_big_uint(value) {
            Some(magnitude) if magnitude <= B::max() => Ok(Int::new_unchecked(magnitude)),
            _ => type_error(overflow),
        }
    }

    fn reject_zero(self, message: fn(&ZeroMessages) -> &'static str) -> Result<Int<B>> {
        match &B::ZERO {
            Some(zero) if self.value.is_zero() => type_error(message(zero)),
            _ => Ok(self),
        }
    }

    /// Creates an instance from a native number, which must be integral.
    ///
    /// Native numbers are only trusted up to `2^53 - 1`, even for wider types, use
    /// [`from_decimal`](Int::from_decimal) or [`from_big_int`](Int::from_big_int) beyond that.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::{UInt16, UInt64};
    /// assert!(UInt16::from_number(65535).is_ok());
    /// assert_eq!(
    ///     UInt16::from_number(65536).unwrap_err().message(),
    ///     "overflow unsigned integer 16 bits"
    /// );
    /// assert_eq!(
    ///     UInt64::from_number(2.5).unwrap_err().message(),
    ///     "expect a unsigned integer"
    /// );
    /// ```
    pub fn from_number<N: ToPrimitive>(value: N) -> Result<Int<B>> {
        let messages = &B::MESSAGES;
        let floor = match B::ZERO {
            Some(_) => 1,
            None => 0,
        };
        let number = validator::check_integer(
            value,
            floor,
            B::NUMBER_MAX,
            messages.number_invalid,
            messages.number_overflow,
        )?;

        match B::Magnitude::from_u64(number) {
            Some(magnitude) => Ok(Int::new_unchecked(magnitude)),
            None => type_error(messages.number_overflow),
        }
    }

    /// Creates an instance from a big integer of any sign.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::UInt64;
    /// # use num_bigint::BigInt;
    /// assert!(UInt64::from_big_int(u64::MAX).is_ok());
    /// assert_eq!(
    ///     UInt64::from_big_int(BigInt::from(u64::MAX) + 1).unwrap_err().message(),
    ///     "overflow unsigned integer 64 bits"
    /// );
    /// ```
    pub fn from_big_int(value: impl Into<BigInt>) -> Result<Int<B>> {
        let messages = &B::MESSAGES;
        let magnitude = validator::check_big_integer(
            &value.into(),
            B::ZERO.is_some(),
            &B::max().to_big_uint(),
            messages.big_int_invalid,
            messages.big_int_overflow,
        )?;
        Self::from_magnitude(&magnitude, messages.big_int_overflow)
    }

    /// Creates an instance from a decimal, leading zeros allowed.
    pub fn from_decimal(value: &str) -> Result<Int<B>> {
        let messages = &B::MESSAGES;
        let Some(decimal) = formatter::tidy_decimal(value) else {
            return type_error(messages.decimal_invalid);
        };
        if let (Some(zero), "0") = (&B::ZERO, decimal) {
            return type_error(zero.decimal);
        }
        if formatter::is_decimal_greater(decimal, B::MAX_DECIMAL) {
            return type_error(messages.decimal_overflow);
        }

        match B::Magnitude::from_str_radix(decimal, 10) {
            Ok(magnitude) if magnitude <= B::max() => Ok(Int::new_unchecked(magnitude)),
            _ => type_error(messages.decimal_overflow),
        }
    }

    /// Creates an instance from a heximal. The width is checked before parsing, so an absurdly
    /// long heximal is rejected without allocating for it.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::{PInt256, UInt};
    /// assert_eq!(*UInt::from_heximal("0x1fffffffffffff").unwrap().value(), 9007199254740991);
    /// assert_eq!(
    ///     UInt::from_heximal("0x20000000000000").unwrap_err().message(),
    ///     "overflow heximal 53 bits"
    /// );
    /// assert_eq!(
    ///     PInt256::from_heximal("0x00").unwrap_err().message(),
    ///     "expect a positive integer from heximal"
    /// );
    /// ```
    pub fn from_heximal(value: &str) -> Result<Int<B>> {
        let messages = &B::MESSAGES;
        validator::validate_heximal(value)?;
        if !formatter::fits_heximal(value, B::BITS) {
            return type_error(messages.heximal_overflow);
        }

        let int = match B::Magnitude::from_str_radix(formatter::significant_heximal(value), 16) {
            Ok(magnitude) if magnitude <= B::max() => Int::new_unchecked(magnitude),
            _ => return type_error(messages.heximal_overflow),
        };
        int.reject_zero(|zero| zero.heximal)
    }

    fn assert_math_result(value: Option<B::Magnitude>, exhausted: &'static str) -> Int<B> {
        let messages = &B::MESSAGES;
        let Some(value) = value else {
            panic!("{}", exhausted)
        };
        if value > B::max() {
            panic!("{}", messages.overflow)
        }
        if value < Self::floor() {
            panic!("{}", messages.underflow)
        }
        Int::new_unchecked(value)
    }

    /// # Panics
    /// Panics if the sum exceeds the maximum of the type.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, addend: &Int<B>) -> Int<B> {
        let sum = CheckedAdd::checked_add(&self.value, &addend.value);
        Self::assert_math_result(sum, B::MESSAGES.overflow)
    }

    /// # Panics
    /// Panics if the difference is below the floor of the type, zero for unsigned types and one
    /// for positive types.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, subtrahend: &Int<B>) -> Int<B> {
        let difference = CheckedSub::checked_sub(&self.value, &subtrahend.value);
        Self::assert_math_result(difference, B::MESSAGES.underflow)
    }

    /// # Panics
    /// Panics if the product exceeds the maximum of the type, or is zero for a positive type.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, multiplier: &Int<B>) -> Int<B> {
        let product = CheckedMul::checked_mul(&self.value, &multiplier.value);
        Self::assert_math_result(product, B::MESSAGES.overflow)
    }

    /// Divides, truncating the quotient.
    ///
    /// # Panics
    /// Panics if `divisor` is zero, or if the quotient is zero for a positive type.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, divisor: &Int<B>) -> Int<B> {
        if divisor.value.is_zero() {
            panic!("divide by zero")
        }
        let quotient = CheckedDiv::checked_div(&self.value, &divisor.value);
        Self::assert_math_result(quotient, "divide by zero")
    }

    pub fn lte(&self, other: &Int<B>) -> bool {
        self <= other
    }

    pub fn gte(&self, other: &Int<B>) -> bool {
        self >= other
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns the least of `values`, the first one if there are several.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn min_of(values: &[Int<B>]) -> &Int<B> {
        validator::validate_array(values, Some(1), None).open();
        values[1..]
            .iter()
            .fold(&values[0], |least, value| if value < least { value } else { least })
    }

    /// Renders the value as a lowercase heximal without leading zeros.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::UInt32;
    /// # use minitype::result::Open;
    /// assert_eq!(UInt32::from_decimal("00255").open().to_heximal(), "0xff");
    /// assert_eq!(UInt32::from_number(0).open().to_heximal(), "0x0");
    /// ```
    pub fn to_heximal(&self) -> String {
        format!("0x{:x}", self.value)
    }

    pub fn to_decimal(&self) -> String {
        self.value.to_string()
    }

    /// Converts to a native integer, if the value is no greater than `2^53 - 1`.
    pub fn to_number(&self) -> Result<u64> {
        match self.value.to_u64() {
            Some(number) if number <= MAX_SAFE_INTEGER => Ok(number),
            _ => type_error("overflow unsigned integer 53 bits"),
        }
    }

    pub fn to_big_uint(&self) -> BigUint {
        self.value.to_big_uint()
    }

    /// Renders the value with its digits grouped by thousands.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::UInt64;
    /// # use minitype::result::Open;
    /// let n = UInt64::from_decimal("18446744073709551615").open();
    /// assert_eq!(n.format(), "18,446,744,073,709,551,615");
    /// assert_eq!(UInt64::from_number(1).open().format4(), "0,001");
    /// ```
    pub fn format(&self) -> String {
        self.format_with(&GroupFormat::default())
    }

    /// Renders the value with its digits grouped and zero padded to at least `min_digits`.
    pub fn format_min(&self, min_digits: usize) -> String {
        self.format_with(&GroupFormat::with_min_digits(min_digits))
    }

    pub fn format_with(&self, format: &GroupFormat) -> String {
        formatter::group_digits(&self.to_decimal(), format)
    }
}

macro_rules! format_n {
    ($($name:ident => $digits:literal),* $(,)?) => {
        impl<B: Bounds> Int<B> {
            $(
                #[doc = concat!("Shorthand for [`format_min(", $digits, ")`](Int::format_min).")]
                pub fn $name(&self) -> String {
                    self.format_min($digits)
                }
            )*
        }
    };
}

format_n! {
    format2 => 2,
    format3 => 3,
    format4 => 4,
    format5 => 5,
    format6 => 6,
    format7 => 7,
    format8 => 8,
    format9 => 9,
}

impl<B: ByteAligned> Int<B> {
    fn from_be_bytes(value: &[u8]) -> Result<Int<B>> {
        let magnitude = BigUint::from_bytes_be(value);
        Self::from_magnitude(&magnitude, B::MESSAGES.heximal_overflow)?
            .reject_zero(|zero| zero.buffer)
    }

    /// Creates an instance from between one and `B::BYTES` big-endian bytes.
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::UInt32;
    /// assert_eq!(*UInt32::from_buffer(&[1, 0]).unwrap().value(), 256);
    /// assert_eq!(
    ///     UInt32::from_buffer(&[0; 5]).unwrap_err().message(),
    ///     "expect buffer 1-4 bytes"
    /// );
    /// ```
    pub fn from_buffer(value: &[u8]) -> Result<Int<B>> {
        if value.is_empty() || value.len() > B::BYTES {
            return type_error(format!("expect buffer 1-{} bytes", B::BYTES));
        }
        Self::from_be_bytes(value)
    }

    /// Creates an instance from exactly `B::BYTES` big-endian bytes.
    pub fn from_fixed_buffer(value: &[u8]) -> Result<Int<B>> {
        if value.len() != B::BYTES {
            return type_error(format!("expect buffer {} bytes", B::BYTES));
        }
        Self::from_be_bytes(value)
    }

    /// Renders the value as exactly `B::BYTES` big-endian bytes.
    pub fn to_fixed_buffer(&self) -> Vec<u8> {
        let bytes = self.value.to_big_uint().to_bytes_be();
        let mut buffer = vec![0; B::BYTES.saturating_sub(bytes.len())];
        buffer.extend(bytes);
        buffer
    }
}

impl<B: Bounds> Instance for Int<B> {
    const NAME: &'static str = B::NAME;
}

impl<B: Bounds> Clone for Int<B> {
    fn clone(&self) -> Self {
        Int::new_unchecked(self.value.clone())
    }
}

impl<B: Bounds> Copy for Int<B> where B::Magnitude: Copy {}

impl<B: Bounds> PartialEq for Int<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B: Bounds> Eq for Int<B> {}

impl<B: Bounds> PartialOrd for Int<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Bounds> Ord for Int<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<B: Bounds> Hash for Int<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B: Bounds> Debug for Int<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple(B::NAME).field(&self.value).finish()
    }
}

impl<B: Bounds> Display for Int<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

macro_rules! impl_op_for {
    ($trait:ident, $method:ident) => {
        impl<B: Bounds> $trait<&Int<B>> for &Int<B> {
            type Output = Int<B>;

            fn $method(self, rhs: &Int<B>) -> Int<B> {
                Int::$method(self, rhs)
            }
        }

        impl<B: Bounds> $trait for Int<B> {
            type Output = Int<B>;

            fn $method(self, rhs: Int<B>) -> Int<B> {
                Int::$method(&self, &rhs)
            }
        }
    };
}

impl_op_for!(Add, add);
impl_op_for!(Sub, sub);
impl_op_for!(Mul, mul);
impl_op_for!(Div, div);
