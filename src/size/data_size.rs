use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use regex::Regex;

use crate::result::{Result, type_error};
use crate::validator::{self, Instance, MAX_SAFE_INTEGER};

static DATA_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:\.([0-9]+))?(B|KB|MB|GB|TB|PB|EB|ZB|YB)?$")
        .expect("data size pattern should compile")
});

const KILOBYTE: u32 = 1024;
const MEGABYTE: u32 = 1024 * 1024;

/// A binary unit of data size, each 1024 times the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
    ZB,
    YB,
}

impl Unit {
    pub fn from_postfix(value: &str) -> Option<Unit> {
        Some(match value {
            "B" => Unit::B,
            "KB" => Unit::KB,
            "MB" => Unit::MB,
            "GB" => Unit::GB,
            "TB" => Unit::TB,
            "PB" => Unit::PB,
            "EB" => Unit::EB,
            "ZB" => Unit::ZB,
            "YB" => Unit::YB,
            _ => None?,
        })
    }

    /// The number of bytes in one of this unit.
    pub fn bytes(self) -> BigUint {
        BigUint::from(KILOBYTE).pow(self as u32)
    }
}

/// A non-negative, unbounded number of bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataSize {
    value: BigUint,
}

impl DataSize {
    pub fn from_bytes<N: ToPrimitive>(value: N) -> Result<DataSize> {
        Ok(DataSize {
            value: BigUint::from(validator::validate_uint(value)?),
        })
    }

    pub fn from_big_int(value: impl Into<BigInt>) -> Result<DataSize> {
        Ok(DataSize {
            value: validator::validate_big_uint(&value.into())?,
        })
    }

    pub fn from_megabytes<N: ToPrimitive>(value: N) -> Result<DataSize> {
        Ok(DataSize {
            value: BigUint::from(validator::validate_uint(value)?) * MEGABYTE,
        })
    }

    /// Parses a size such as `"512"`, `"64KB"` or `"1.5GB"`. Units are binary and the fractional
    /// part is truncated to a whole number of bytes.
    ///
    /// # Examples
    /// ```
    /// # use minitype::size::DataSize;
    /// assert_eq!(DataSize::from_string("3.1KB").unwrap().to_number(), Ok(3174));
    /// assert_eq!(DataSize::from_string("2MB").unwrap().to_number(), Ok(2097152));
    /// assert!(DataSize::from_string("2 MB").is_err());
    /// ```
    pub fn from_string(value: &str) -> Result<DataSize> {
        let Some(captures) = DATA_SIZE.captures(value) else {
            return type_error("expect data size string");
        };
        let unit = match captures.get(3) {
            Some(postfix) => Unit::from_postfix(postfix.as_str()),
            None => Some(Unit::B),
        };
        let (Some(integer), Some(unit)) = (digits(&captures[1]), unit) else {
            return type_error("expect data size string");
        };

        let bytes = unit.bytes();
        let mut value = integer * &bytes;
        if let Some(fraction) = captures.get(2) {
            let Some(numerator) = digits(fraction.as_str()) else {
                return type_error("expect data size string");
            };
            let denominator = BigUint::from(10_u8).pow(fraction.len() as u32);
            value += numerator * bytes / denominator;
        }
        Ok(DataSize { value })
    }

    pub const fn value(&self) -> &BigUint {
        &self.value
    }

    /// Converts to a native number of bytes, if there are no more than `2^53 - 1`.
    pub fn to_number(&self) -> Result<u64> {
        match self.value.to_u64() {
            Some(bytes) if bytes <= MAX_SAFE_INTEGER => Ok(bytes),
            _ => type_error("overflow unsigned integer 53 bits"),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Renders the size for humans: bytes below a kilobyte, whole kilobytes below a megabyte and
    /// megabytes with the remaining kilobytes after the point beyond that.
    ///
    /// # Examples
    /// ```
    /// # use minitype::size::DataSize;
    /// assert_eq!(DataSize::from_bytes(1023).unwrap().format(), "1023B");
    /// assert_eq!(DataSize::from_bytes(1024).unwrap().format(), "1KB");
    /// assert_eq!(DataSize::from_string("3.5MB").unwrap().format(), "3.512MB");
    /// ```
    pub fn format(&self) -> String {
        let value = &self.value;
        if *value < BigUint::from(KILOBYTE) {
            format!("{}B", value)
        } else if *value < BigUint::from(MEGABYTE) {
            format!("{}KB", value / KILOBYTE)
        } else {
            format!("{}.{}MB", value / MEGABYTE, value % MEGABYTE / KILOBYTE)
        }
    }
}

fn digits(value: &str) -> Option<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 10)
}

impl Display for DataSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Instance for DataSize {
    const NAME: &'static str = "DataSize";
}
