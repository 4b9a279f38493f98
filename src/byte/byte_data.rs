use std::cmp::Ordering;
use std::ops::Deref;

use crate::formatter;
use crate::result::Result;
use crate::validator::Instance;

/// An owned byte sequence of any length, including zero.
///
/// Ordering compares lengths first and only then the bytes, so a shorter sequence always comes
/// first. This matches how the equivalent big-endian integers would be ordered if leading zeros
/// were significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByteData {
    value: Vec<u8>,
}

impl ByteData {
    pub fn from_buffer(value: impl Into<Vec<u8>>) -> Result<ByteData> {
        Ok(ByteData {
            value: value.into(),
        })
    }

    /// # Examples
    /// ```
    /// # use minitype::byte::ByteData;
    /// let data = ByteData::from_heximal("0x123").unwrap();
    /// assert_eq!(data.value(), &[0x01, 0x23]);
    /// assert_eq!(data.to_heximal(), "0x0123");
    /// ```
    pub fn from_heximal(value: &str) -> Result<ByteData> {
        formatter::heximal_to_buffer(value).map(|value| ByteData { value })
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    pub fn to_heximal(&self) -> String {
        formatter::buffer_to_heximal(&self.value)
    }
}

impl Deref for ByteData {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl AsRef<[u8]> for ByteData {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}

impl PartialOrd for ByteData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteData {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .len()
            .cmp(&other.value.len())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl Instance for ByteData {
    const NAME: &'static str = "ByteData";
}
