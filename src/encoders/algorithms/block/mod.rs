//! Block codec engine shared by the Base16, Base24 and Base64 families.
//!
//! Power-of-two radixes move bits with shifts; Base24 folds bytes into a
//! 32-bit integer and peels base-24 digits off it. Both directions keep their
//! partial block in the context between calls, so input can arrive in chunks
//! of any size.

mod decoder;
mod encoder;

pub use decoder::DecoderContext;
pub use encoder::EncoderContext;
