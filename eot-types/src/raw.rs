//! types for working with raw big- and little-endian bytes

/// A trait for types with a known, constant encoded size.
pub trait FixedSize {
    /// The encoded size of this type, in bytes.
    const RAW_BYTE_LEN: usize;
}

/// A trait for scalars, encoding and decoding big-endian bytes.
///
/// This is the encoding used throughout sfnt table data. The EOT header
/// is little-endian; see [`ScalarLE`] for that counterpart.
pub trait Scalar: FixedSize + Copy {
    /// The raw byte representation of this type.
    type Raw: Copy + AsRef<[u8]> + sealed::ByteArray;

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::ByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A trait for little-endian scalars.
///
/// The EOT header stores its fixed fields little-endian--see [`Scalar`]
/// for this trait's big-endian counterpart.
pub trait ScalarLE: Scalar {
    /// Create an instance of this type from raw little-endian bytes
    fn from_raw_le(raw: <Self as Scalar>::Raw) -> Self;

    /// Encode this type as raw little-endian bytes
    fn to_raw_le(self) -> <Self as Scalar>::Raw;

    /// Attempt to read a scalar from a slice of little-endian bytes.
    ///
    /// This will succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// return `None` otherwise.
    fn read_le(slice: &[u8]) -> Option<Self> {
        sealed::ByteArray::from_slice(slice).map(Self::from_raw_le)
    }
}

// a sealed trait. see <https://rust-lang.github.io/api-guidelines/future-proofing.html>
pub(crate) mod sealed {
    /// A fixed-size byte array that backs a scalar.
    pub trait ByteArray: Sized {
        /// Attempt to construct a new raw value from this slice.
        ///
        /// This will fail if `slice.len() != Self::RAW_BYTE_LEN`.
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> ByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::FixedSize for $ty {
            const RAW_BYTE_LEN: usize = std::mem::size_of::<$raw>();
        }

        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }

        impl crate::raw::ScalarLE for $ty {
            fn to_raw_le(self) -> $raw {
                self.to_le_bytes()
            }

            fn from_raw_le(raw: $raw) -> $ty {
                Self::from_le_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);
int_scalar!(u64, [u8; 8]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_eq!(u16::from_raw(0x504C_u16.to_raw()), 0x504C);
        assert_eq!(u32::from_raw_le(0x00020002_u32.to_raw_le()), 0x00020002);
        assert_eq!(i16::from_raw((-75_i16).to_raw()), -75);
        assert_eq!(u64::from_raw(u64::MAX.to_raw()), u64::MAX);
    }

    #[test]
    fn byte_orders_disagree() {
        assert_eq!(0x1234_u16.to_raw(), [0x12, 0x34]);
        assert_eq!(0x1234_u16.to_raw_le(), [0x34, 0x12]);
    }

    #[test]
    fn read_checks_len() {
        assert_eq!(u32::read(&[0, 2, 0, 1]), Some(0x00020001));
        assert_eq!(u32::read(&[0, 2, 0]), None);
        assert_eq!(u16::read_le(&[0x4C, 0x50]), Some(0x504C));
    }
}
