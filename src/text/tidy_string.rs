use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

use crate::result::{Result, type_error};
use crate::validator::Instance;

fn tidy(value: &str) -> Result<&str> {
    match value.trim() {
        "" => type_error("expect a non empty string"),
        tidy => Ok(tidy),
    }
}

/// A string with no leading or trailing whitespace that is never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TidyString {
    value: String,
}

impl TidyString {
    /// # Examples
    /// ```
    /// # use minitype::text::TidyString;
    /// assert_eq!(TidyString::from_string("  Hello ").unwrap().value(), "Hello");
    /// assert!(TidyString::from_string(" \t ").is_err());
    /// ```
    pub fn from_string(value: &str) -> Result<TidyString> {
        Ok(TidyString {
            value: tidy(value)?.to_owned(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A [`TidyString`] that is also lowercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LowerTidyString {
    value: String,
}

impl LowerTidyString {
    pub fn from_string(value: &str) -> Result<LowerTidyString> {
        Ok(LowerTidyString {
            value: tidy(value)?.to_lowercase(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

macro_rules! impl_str_for {
    ($t:ident) => {
        impl Deref for $t {
            type Target = str;

            fn deref(&self) -> &str {
                &self.value
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }

        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl Instance for $t {
            const NAME: &'static str = stringify!($t);
        }
    };
}

impl_str_for!(TidyString);
impl_str_for!(LowerTidyString);
