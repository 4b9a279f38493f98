use num_traits::ToPrimitive;

use crate::result::Result;
use crate::time::to_milliseconds;
use crate::validator::Instance;

/// A duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespan {
    value: u64,
}

impl Timespan {
    /// Creates a timespan from milliseconds.
    pub fn from_number<N: ToPrimitive>(value: N) -> Result<Timespan> {
        Ok(Timespan {
            value: to_milliseconds(value, 1)?,
        })
    }

    pub fn from_seconds<N: ToPrimitive>(value: N) -> Result<Timespan> {
        Ok(Timespan {
            value: to_milliseconds(value, 1000)?,
        })
    }

    pub fn from_minutes<N: ToPrimitive>(value: N) -> Result<Timespan> {
        Ok(Timespan {
            value: to_milliseconds(value, 60 * 1000)?,
        })
    }

    pub fn from_hours<N: ToPrimitive>(value: N) -> Result<Timespan> {
        Ok(Timespan {
            value: to_milliseconds(value, 60 * 60 * 1000)?,
        })
    }

    /// Milliseconds.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Whole seconds, truncated.
    pub const fn to_seconds(&self) -> u64 {
        self.value / 1000
    }

    /// Renders the timespan as `HH:MM:SS.mmm`. Hours take as many digits as they need, but at
    /// least two.
    ///
    /// # Examples
    /// ```
    /// # use minitype::time::Timespan;
    /// assert_eq!(Timespan::from_number(3_723_004).unwrap().format(), "01:02:03.004");
    /// assert_eq!(Timespan::from_hours(100).unwrap().format(), "100:00:00.000");
    /// ```
    pub fn format(&self) -> String {
        let milliseconds = self.value % 1000;
        let seconds = self.value / 1000 % 60;
        let minutes = self.value / (60 * 1000) % 60;
        let hours = self.value / (60 * 60 * 1000);
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
    }
}

impl Instance for Timespan {
    const NAME: &'static str = "Timespan";
}
