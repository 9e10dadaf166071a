//! # Sidebar Serde
//! Byte-level reading & writing of the primitives scoreboard packets are
//! built from: variable-length integers, fixed-width integers and
//! length-prefixed UTF-8 strings.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_reader;
mod byte_writer;
mod error;
mod serde;
mod var_int;

pub use byte_reader::ByteReader;
pub use byte_writer::{ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use serde::{Serde, MAX_STRING_CHARS};
pub use var_int::{VarInt, MAX_VAR_INT_BYTES};
