//! Scalar types used in EOT and sfnt data.
//!
//! This crate provides the encode/decode primitives shared by the
//! [`eot`](https://docs.rs/eot) codec: fixed-width integers in both byte
//! orders, and the 4-byte [`Tag`] type used by the sfnt table directory.
//!
//! sfnt tables store their fields big-endian; the EOT header stores its
//! fields little-endian. The [`Scalar`] and [`ScalarLE`] traits carry the
//! two encodings side by side so that a single cursor can read both.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod raw;
mod tag;

pub use raw::{FixedSize, Scalar, ScalarLE};
pub use tag::{InvalidTag, Tag};
