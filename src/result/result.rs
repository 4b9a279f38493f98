use std::borrow::Cow;

use crate::result::{Error, TypeError};

/// A success carrying `T` or a failure carrying `E`, [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns a succeeded result.
///
/// # Examples
/// ```
/// # use minitype::result::{self, Result};
/// let r: Result<u8> = result::ok(100);
/// assert_eq!(r, Ok(100));
/// ```
pub const fn ok<T>(data: T) -> Result<T> {
    Ok(data)
}

/// Returns a failed result. Plain strings are wrapped in an
/// [`OtherError`](crate::result::OtherError).
///
/// # Examples
/// ```
/// # use minitype::result::{self, Result};
/// let r: Result<u8> = result::error("bad thing happened");
/// assert_eq!(r.unwrap_err().message(), "bad thing happened");
/// ```
pub fn error<T>(error: impl Into<Error>) -> Result<T> {
    Err(error.into())
}

/// Returns a failed result with a [`TypeError`] holding `message`.
///
/// # Examples
/// ```
/// # use minitype::result::{self, Result};
/// let r: Result<u8> = result::type_error("expect a unsigned integer");
/// assert!(r.unwrap_err().is_type());
/// ```
pub fn type_error<T>(message: impl Into<Cow<'static, str>>) -> Result<T> {
    Err(TypeError::new(message).into())
}

pub trait Open<T> {
    /// Retrieves the data, or panics with the message of the error itself. This is where a caller
    /// that prefers fail-fast semantics leaves the [`Result`] convention.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use minitype::num::UInt32;
    /// # use minitype::result::Open;
    /// let n = UInt32::from_number(137).open();
    /// assert_eq!(*n.value(), 137);
    /// ```
    fn open(self) -> T;
}

impl<T, E: std::error::Error> Open<T> for Result<T, E> {
    fn open(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
