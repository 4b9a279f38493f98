use num_traits::ToPrimitive;

use crate::result::Result;
use crate::time::{OVERFLOW, Timespan, to_milliseconds};
use crate::validator::{Instance, MAX_SAFE_INTEGER};

/// A point in time, as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    value: u64,
}

impl Timestamp {
    /// Creates a timestamp from milliseconds.
    pub fn from_number<N: ToPrimitive>(value: N) -> Result<Timestamp> {
        Ok(Timestamp {
            value: to_milliseconds(value, 1)?,
        })
    }

    /// # Examples
    /// ```
    /// # use minitype::time::Timestamp;
    /// let t = Timestamp::from_seconds(1_700_000_000).unwrap();
    /// assert_eq!(t.value(), 1_700_000_000_000);
    /// assert_eq!(t.to_seconds(), 1_700_000_000);
    /// ```
    pub fn from_seconds<N: ToPrimitive>(value: N) -> Result<Timestamp> {
        Ok(Timestamp {
            value: to_milliseconds(value, 1000)?,
        })
    }

    /// Milliseconds since the Unix epoch.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Whole seconds since the Unix epoch, truncated.
    pub const fn to_seconds(&self) -> u64 {
        self.value / 1000
    }

    /// # Panics
    /// Panics if the result is beyond `2^53 - 1` milliseconds.
    pub fn add_timespan(&self, timespan: &Timespan) -> Timestamp {
        match self.value.checked_add(timespan.value()) {
            Some(value) if value <= MAX_SAFE_INTEGER => Timestamp { value },
            _ => panic!("{}", OVERFLOW),
        }
    }
}

impl Instance for Timestamp {
    const NAME: &'static str = "Timestamp";
}
