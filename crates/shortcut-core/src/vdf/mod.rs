//! Binary KeyValue ("binary VDF") codec.
//!
//! Steam stores `shortcuts.vdf` as a flat stream of typed entries:
//!
//! - `0x00` key `\0` ... `0x08` - nested object
//! - `0x01` key `\0` value `\0` - string
//! - `0x02` key `\0` u32 (little-endian) - integer
//! - `0x08` - end of the enclosing object
//!
//! The document is itself an object body, so a file always ends with the
//! `0x08` that closes the root. The codec knows nothing about shortcuts;
//! see [`crate::shortcut`] for the record layer on top of it.

mod decode;
mod encode;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use value::{VdfMap, VdfValue};

/// Deepest object nesting accepted by the decoder and produced by the encoder.
pub const MAX_DEPTH: usize = 32;

/// Type tags of the binary layout.
mod tag {
    pub const OBJECT: u8 = 0x00;
    pub const STRING: u8 = 0x01;
    pub const INT: u8 = 0x02;
    pub const END: u8 = 0x08;
}
