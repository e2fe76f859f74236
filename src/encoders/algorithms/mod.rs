pub mod block;
pub mod capacity;
pub mod errors;
pub mod hex_fast;
pub mod padding;
pub mod positional;

// Re-export error types for public API
pub use errors::{ConfigError, DecodeError, Error, ErrorKind, find_closest_codec};
