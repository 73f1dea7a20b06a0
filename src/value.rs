use crate::error::{TreeError, TreeResult};
use arrayvec::ArrayString;
use std::fmt;

/// Maximum length, in bytes, of a stored value
pub const VALUE_CAPACITY: usize = 128;

/// A short owned text value, stored inline in its tree node.
/// Values are always copied in, never borrowed from the caller
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value(ArrayString<[u8; VALUE_CAPACITY]>);

impl Value {
    /// Copy `text` into a new value. Text longer than `VALUE_CAPACITY` bytes is
    /// rejected instead of truncated
    pub fn new(text: &str) -> TreeResult<Self> {
        ArrayString::from(text)
            .map(Value)
            .map_err(|_| TreeError::ValueTooLong {
                len: text.len(),
                max: VALUE_CAPACITY,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the value bytes to the start of `buf` and return how many were written.
    /// A buffer shorter than the value is left untouched and `BufferTooSmall` is returned
    pub fn copy_to(&self, buf: &mut [u8]) -> TreeResult<usize> {
        let bytes = self.0.as_bytes();
        if buf.len() < bytes.len() {
            return Err(TreeError::BufferTooSmall {
                needed: bytes.len(),
                capacity: buf.len(),
            });
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
