//! Reading and writing Embedded OpenType files.
//!
//! EOT is a wrapper container that carries a web font plus the metadata a
//! consumer needs before touching the font itself: identification names,
//! embedding permissions, character coverage, and the URL prefixes the
//! font is authorized for. This crate parses and serializes that
//! container, and extracts the required metadata from the `OS/2`, `name`
//! and `head` tables of a source OpenType/TrueType font.
//!
//! Two binaries build on the library: `eotinfo` prints the header of an
//! existing EOT file, and `mkeot` assembles one from a font.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! let eot_bytes = eot::convert::make_eot(&font_bytes, ["https://example.com/"])
//!     .expect("font refused embedding");
//! ```
//!
//! MicroType Express compression, subsetting, root-string obfuscation and
//! EUDC embedding are out of scope; the corresponding header fields are
//! carried as passthrough data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod convert;
mod font_data;
pub mod header;
pub mod info;
mod read;
pub mod sfnt;
pub mod tables;
mod write;

pub use font_data::{Cursor, FontData};
pub use read::{FontRead, ReadError};
pub use sfnt::{FontRef, TableProvider};
pub use write::{dump_header, EotWriter, WriteError};

/// Public re-export of the eot-types crate.
pub extern crate eot_types as types;
