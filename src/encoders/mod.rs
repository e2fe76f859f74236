pub mod algorithms;
pub mod streaming;

pub use algorithms::block::{DecoderContext, EncoderContext};
pub use algorithms::hex_fast;
