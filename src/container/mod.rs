//! Reading and writing the layered-image container format.
//!
//! ## Module Map
//!
//! - `header` - Fixed header fields, color mode and compression tags
//! - `byte_stream` - Big-endian field access and section skipping
//! - `packbits` - Run-length coding of channel data
//! - `codec` - Whole-file decode/encode

pub mod byte_stream;
pub mod codec;
pub mod header;
pub mod packbits;

pub use codec::{decode, decode_bytes, decode_from, encode, encode_bytes, encode_to};
pub use header::{ColorMode, Compression, ContainerHeader};
