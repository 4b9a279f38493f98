use std::fmt::{self, Display, Formatter};

use num_traits::ToPrimitive;

use crate::result::{Result, type_error};
use crate::validator::Instance;

/// A finite 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Float64 {
    value: f64,
}

impl Float64 {
    /// # Examples
    /// ```
    /// # use minitype::num::Float64;
    /// assert!(Float64::from_number(-0.25).is_ok());
    /// assert_eq!(Float64::from_number(f64::NAN).unwrap_err().message(), "expect a number");
    /// assert_eq!(
    ///     Float64::from_number(f64::INFINITY).unwrap_err().message(),
    ///     "overflow float number 64 bits"
    /// );
    /// ```
    pub fn from_number<N: ToPrimitive>(value: N) -> Result<Float64> {
        match value.to_f64() {
            Some(value) if value.is_finite() => Ok(Float64 { value }),
            Some(value) if value.is_infinite() => type_error("overflow float number 64 bits"),
            _ => type_error("expect a number"),
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// A finite 64-bit float that isn't negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UFloat64 {
    value: f64,
}

impl UFloat64 {
    /// # Examples
    /// ```
    /// # use minitype::num::UFloat64;
    /// assert!(UFloat64::from_number(0.5).is_ok());
    /// assert_eq!(UFloat64::from_number(-0.5).unwrap_err().message(), "expect a unsigned number");
    /// ```
    pub fn from_number<N: ToPrimitive>(value: N) -> Result<UFloat64> {
        match value.to_f64() {
            Some(value) if value.is_finite() && value >= 0.0 => Ok(UFloat64 { value }),
            Some(value) if value == f64::INFINITY => type_error("overflow float number 64 bits"),
            _ => type_error("expect a unsigned number"),
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Instance for Float64 {
    const NAME: &'static str = "Float64";
}

impl Instance for UFloat64 {
    const NAME: &'static str = "UFloat64";
}

impl Display for Float64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Display for UFloat64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}
