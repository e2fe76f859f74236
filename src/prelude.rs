//! Convenient re-exports for common usage.
//!
//! ```
//! use base_n::prelude::*;
//!
//! let registry = CodecRegistry::load_default().unwrap();
//! let codec = registry.codec("base24").unwrap();
//! assert_eq!(encode(&[0x88, 0x55, 0x33, 0x11], &codec), "5YEATXA");
//! ```

pub use crate::{
    Alphabet,
    Codec,
    CodecRegistry,
    DecodeError,
    // Incremental contexts
    DecoderContext,
    EncoderContext,
    Error,
    Options,
    Profile,
    StreamingDecoder,
    StreamingEncoder,
    // Whole-buffer shortcuts
    decode,
    encode,
};
