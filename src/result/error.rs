use std::borrow::Cow;

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The input does not have the expected shape or is out of range.
///
/// The message is part of the contract: every factory produces an exact, stable text for each
/// failure condition so that callers (and tests) can compare errors by equality.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, Hash)]
#[display("{message}")]
pub struct TypeError {
    message: Cow<'static, str>,
}

impl TypeError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> TypeError {
        TypeError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A generic error built from a plain message, for failures that aren't a type mismatch.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, Hash)]
#[display("{message}")]
pub struct OtherError {
    message: Cow<'static, str>,
}

impl OtherError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> OtherError {
        OtherError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The error side of every [`Result`](super::Result) in this crate.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, Hash, From, TryInto, IsVariant)]
pub enum Error {
    Type(TypeError),
    Other(OtherError),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Error::Type(e) => e.message(),
            Error::Other(e) => e.message(),
        }
    }

    /// Prefixes the message with `"{prefix}: "`, keeping the kind of error.
    pub fn context(self, prefix: impl std::fmt::Display) -> Error {
        match self {
            Error::Type(e) => TypeError::new(format!("{}: {}", prefix, e.message)).into(),
            Error::Other(e) => OtherError::new(format!("{}: {}", prefix, e.message)).into(),
        }
    }
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        OtherError::new(value).into()
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        OtherError::new(value).into()
    }
}
