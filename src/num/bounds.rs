use num_bigint::BigUint;

use crate::num::{Int, Magnitude};
use crate::validator::MAX_SAFE_INTEGER;

/// The failure messages of an [`Int`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub number_invalid: &'static str,
    pub number_overflow: &'static str,
    pub big_int_invalid: &'static str,
    pub big_int_overflow: &'static str,
    pub decimal_invalid: &'static str,
    pub decimal_overflow: &'static str,
    pub heximal_overflow: &'static str,
    /// Arithmetic result above the maximum.
    pub overflow: &'static str,
    /// Arithmetic result below the floor.
    pub underflow: &'static str,
}

/// The messages used to reject zero, present only for positive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroMessages {
    pub decimal: &'static str,
    pub heximal: &'static str,
    pub buffer: &'static str,
}

/// Compile-time configuration of an [`Int`]. Implemented by uninhabited marker types only.
pub trait Bounds: 'static {
    type Magnitude: Magnitude;

    /// Used in `"expect {NAME}"` messages.
    const NAME: &'static str;
    const BITS: u32;
    /// The greatest value accepted from a native number, never more than `2^53 - 1`.
    const NUMBER_MAX: u64;
    /// The maximum, as a tidy decimal.
    const MAX_DECIMAL: &'static str;
    /// Some for positive types, which have a floor of one rather than zero.
    const ZERO: Option<ZeroMessages>;
    const MESSAGES: Messages;

    fn max() -> Self::Magnitude;
}

/// A [`Bounds`] with a whole number of bytes, which allows construction from a buffer.
pub trait ByteAligned: Bounds {
    const BYTES: usize = Self::BITS as usize / 8;
}

macro_rules! bounds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $bounds:ident: $magnitude:ty {
            name: $name:literal,
            bits: $bits:literal,
            max: $max:expr,
            number_max: $number_max:expr,
            max_decimal: $max_decimal:literal,
            zero: $zero:expr,
            messages: $messages:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $bounds {}

        impl Bounds for $bounds {
            type Magnitude = $magnitude;

            const NAME: &'static str = $name;
            const BITS: u32 = $bits;
            const NUMBER_MAX: u64 = $number_max;
            const MAX_DECIMAL: &'static str = $max_decimal;
            const ZERO: Option<ZeroMessages> = $zero;
            const MESSAGES: Messages = $messages;

            fn max() -> $magnitude {
                $max
            }
        }
    };
}

bounds! {
    /// Bounds of [`UInt8`].
    pub enum UInt8Bounds: u8 {
        name: "UInt8",
        bits: 8,
        max: u8::MAX,
        number_max: 0xff,
        max_decimal: "255",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 8 bits",
            big_int_invalid: "expect unsigned big integer",
            big_int_overflow: "overflow unsigned integer 8 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal unsigned integer 8 bits",
            heximal_overflow: "overflow heximal 8 bits",
            overflow: "overflow unsigned integer 8 bits",
            underflow: "negative result",
        },
    }
}

bounds! {
    /// Bounds of [`UInt16`].
    pub enum UInt16Bounds: u16 {
        name: "UInt16",
        bits: 16,
        max: u16::MAX,
        number_max: 0xffff,
        max_decimal: "65535",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 16 bits",
            big_int_invalid: "expect unsigned big integer",
            big_int_overflow: "overflow unsigned integer 16 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal unsigned integer 16 bits",
            heximal_overflow: "overflow heximal 16 bits",
            overflow: "overflow unsigned integer 16 bits",
            underflow: "negative result",
        },
    }
}

bounds! {
    /// Bounds of [`UInt32`].
    pub enum UInt32Bounds: u32 {
        name: "UInt32",
        bits: 32,
        max: u32::MAX,
        number_max: 0xffff_ffff,
        max_decimal: "4294967295",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 32 bits",
            big_int_invalid: "expect unsigned big integer",
            big_int_overflow: "overflow unsigned integer 32 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal unsigned integer 32 bits",
            heximal_overflow: "overflow heximal 32 bits",
            overflow: "overflow unsigned integer 32 bits",
            underflow: "negative result",
        },
    }
}

bounds! {
    /// Bounds of [`UInt`], limited to the integers a native float represents exactly.
    pub enum UIntBounds: u64 {
        name: "UInt",
        bits: 53,
        max: MAX_SAFE_INTEGER,
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "9007199254740991",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 53 bits",
            big_int_invalid: "expect unsigned big integer",
            big_int_overflow: "overflow unsigned integer 53 bits",
            decimal_invalid: "expect a unsigned integer decimal",
            decimal_overflow: "overflow unsigned integer decimal 53 bits",
            heximal_overflow: "overflow heximal 53 bits",
            overflow: "overflow unsigned integer 53 bits",
            underflow: "negative result",
        },
    }
}

bounds! {
    /// Bounds of [`UInt64`].
    pub enum UInt64Bounds: u64 {
        name: "UInt64",
        bits: 64,
        max: u64::MAX,
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "18446744073709551615",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 53 bits",
            big_int_invalid: "expect unsigned big integer",
            big_int_overflow: "overflow unsigned integer 64 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal unsigned integer 64 bits",
            heximal_overflow: "overflow heximal 64 bits",
            overflow: "overflow unsigned integer 64 bits",
            underflow: "negative result",
        },
    }
}

bounds! {
    /// Bounds of [`UInt256`].
    pub enum UInt256Bounds: BigUint {
        name: "UInt256",
        bits: 256,
        max: BigUint::from_bytes_be(&[0xff; 32]),
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        zero: None,
        messages: Messages {
            number_invalid: "expect a unsigned integer",
            number_overflow: "overflow unsigned integer 53 bits",
            big_int_invalid: "expect big unsigned integer",
            big_int_overflow: "overflow unsigned integer 256 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal unsigned integer 256 bits",
            heximal_overflow: "overflow heximal 256 bits",
            overflow: "overflow result",
            underflow: "expect unsigned result",
        },
    }
}

bounds! {
    /// Bounds of [`PInt`], limited to the integers a native float represents exactly.
    pub enum PIntBounds: u64 {
        name: "PInt",
        bits: 53,
        max: MAX_SAFE_INTEGER,
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "9007199254740991",
        zero: Some(ZeroMessages {
            decimal: "expect a decimal of positive integer",
            heximal: "expect a positive integer from heximal",
            buffer: "expect a positive integer from buffer",
        }),
        messages: Messages {
            number_invalid: "expect a positive integer",
            number_overflow: "overflow positive integer 53 bits",
            big_int_invalid: "expect a big positive integer",
            big_int_overflow: "overflow positive integer 53 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal positive integer 53 bits",
            heximal_overflow: "overflow heximal 53 bits",
            overflow: "overflow positive integer 53 bits",
            underflow: "non-positive result",
        },
    }
}

bounds! {
    /// Bounds of [`PInt64`].
    pub enum PInt64Bounds: u64 {
        name: "PInt64",
        bits: 64,
        max: u64::MAX,
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "18446744073709551615",
        zero: Some(ZeroMessages {
            decimal: "expect a decimal, positive integer 64 bits",
            heximal: "expect a positive integer from heximal",
            buffer: "expect a positive integer from buffer",
        }),
        messages: Messages {
            number_invalid: "expect a positive integer",
            number_overflow: "overflow unsigned integer 53 bits",
            big_int_invalid: "expect a big positive integer",
            big_int_overflow: "overflow positive integer 64 bits",
            decimal_invalid: "expect a unsigned integer from decimal",
            decimal_overflow: "overflow decimal, positive integer 64 bits",
            heximal_overflow: "overflow heximal 64 bits",
            overflow: "overflow positive integer 64 bits",
            underflow: "non-positive result",
        },
    }
}

bounds! {
    /// Bounds of [`PInt256`].
    pub enum PInt256Bounds: BigUint {
        name: "PInt256",
        bits: 256,
        max: BigUint::from_bytes_be(&[0xff; 32]),
        number_max: MAX_SAFE_INTEGER,
        max_decimal: "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        zero: Some(ZeroMessages {
            decimal: "expect a positive integer from decimal",
            heximal: "expect a positive integer from heximal",
            buffer: "expect a positive integer from buffer",
        }),
        messages: Messages {
            number_invalid: "expect a positive integer",
            number_overflow: "overflow positive integer 53 bits",
            big_int_invalid: "expect big positive integer",
            big_int_overflow: "overflow positive integer 256 bits",
            decimal_invalid: "expect a positive integer from decimal",
            decimal_overflow: "overflow decimal positive integer 256 bits",
            heximal_overflow: "overflow heximal 256 bits",
            overflow: "overflow positive integer 256 bits",
            underflow: "non-positive result",
        },
    }
}

impl ByteAligned for UInt8Bounds {}
impl ByteAligned for UInt16Bounds {}
impl ByteAligned for UInt32Bounds {}
impl ByteAligned for UInt64Bounds {}
impl ByteAligned for UInt256Bounds {}
impl ByteAligned for PInt64Bounds {}
impl ByteAligned for PInt256Bounds {}

/// An unsigned integer of 8 bits.
pub type UInt8 = Int<UInt8Bounds>;
/// An unsigned integer of 16 bits.
pub type UInt16 = Int<UInt16Bounds>;
/// An unsigned integer of 32 bits.
pub type UInt32 = Int<UInt32Bounds>;
/// An unsigned integer of at most `2^53 - 1`, which survives a round trip through a native float.
pub type UInt = Int<UIntBounds>;
/// An unsigned integer of 64 bits.
pub type UInt64 = Int<UInt64Bounds>;
/// An unsigned integer of 256 bits.
pub type UInt256 = Int<UInt256Bounds>;
/// A positive integer of at most `2^53 - 1`.
pub type PInt = Int<PIntBounds>;
/// A positive integer of 64 bits.
pub type PInt64 = Int<PInt64Bounds>;
/// A positive integer of 256 bits.
pub type PInt256 = Int<PInt256Bounds>;
