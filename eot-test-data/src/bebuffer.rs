//! convenience types for assembling binary test data

use eot_types::{Scalar, ScalarLE};

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Consume the buffer, returning the bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// [`BeBuffer`]'s little-endian sibling, for assembling EOT header data.
#[derive(Debug, Clone, Default)]
pub struct LeBuffer {
    data: Vec<u8>,
}

impl LeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write any scalar to this buffer as little-endian bytes.
    pub fn push(mut self, item: impl ScalarLE) -> Self {
        self.data.extend(item.to_raw_le().as_ref());
        self
    }

    /// Write multiple scalars into the buffer as little-endian bytes.
    pub fn extend<T: ScalarLE>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw_le().as_ref());
        }
        self
    }

    /// Consume the buffer, returning the bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
