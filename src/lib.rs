//! Multi-radix binary-to-text codecs.
//!
//! Three block families (Base16, Kuon Base24, Base64) stream through
//! resumable contexts; the positional family (Base58 and any other radix
//! from 2 to 256) converts whole payloads and can append a double SHA-256
//! checksum.
//!
//! ```
//! use base_n::{Codec, Options};
//!
//! let text = Codec::base64().encode(b"Man", Options::NONE);
//! assert_eq!(text, "TWFu");
//! assert_eq!(Codec::base64().decode(&text, Options::NONE).unwrap(), b"Man");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::alphabet::{Alphabet, AlphabetBuilder};
pub use crate::core::codec::Codec;
pub use crate::core::config::{CodecConfig, CodecRegistry, Settings};
pub use crate::core::options::Options;
pub use crate::core::profile::{BlockLayout, Profile};
pub use crate::encoders::algorithms::{ConfigError, DecodeError, Error, ErrorKind, find_closest_codec};
pub use crate::encoders::streaming::{StreamingDecoder, StreamingEncoder};
pub use crate::encoders::{DecoderContext, EncoderContext, hex_fast};
pub use crate::features::checksum::{CHECKSUM_LEN, checksum};

/// Encodes `data` with `codec` and default options.
pub fn encode(data: &[u8], codec: &Codec) -> String {
    codec.encode(data, Options::NONE)
}

/// Decodes `encoded` with `codec` and default options.
pub fn decode(encoded: &str, codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded, Options::NONE)
}

#[cfg(test)]
mod tests;
