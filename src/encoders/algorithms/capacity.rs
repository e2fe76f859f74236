//! Worst-case output sizes, for callers that pre-size buffers.
//!
//! Every estimate is an upper bound: the real output never exceeds it for any
//! input of the given length.

use crate::core::options::Options;
use crate::core::profile::{BlockLayout, Profile};
use crate::features::CHECKSUM_LEN;

/// Upper bound on the characters produced by encoding `byte_count` bytes.
pub fn max_char_count(profile: Profile, byte_count: usize, options: Options) -> usize {
    match profile.layout() {
        Some(layout) => block_chars(layout, byte_count, options),
        None => {
            let bytes = if options.contains(Options::CHECKSUM) {
                byte_count + CHECKSUM_LEN
            } else {
                byte_count
            };
            // efficiency = log(radix) / log(256); each byte needs at most 1/efficiency symbols
            let efficiency = (profile.radix() as f64).log2() / 8.0;
            (bytes as f64 / efficiency).ceil() as usize
        }
    }
}

/// Upper bound on the bytes produced by decoding `char_count` characters.
pub fn max_byte_count(profile: Profile, char_count: usize, options: Options) -> usize {
    match profile.layout() {
        Some(layout) => char_count.div_ceil(layout.symbols_per_block) * layout.bytes_per_block,
        // one radix <= 256 digit never carries more than one byte
        None if options.contains(Options::CHECKSUM) => char_count.saturating_sub(CHECKSUM_LEN),
        None => char_count,
    }
}

fn block_chars(layout: &BlockLayout, byte_count: usize, options: Options) -> usize {
    let blocks = byte_count.div_ceil(layout.bytes_per_block);
    let symbols = if layout.padding.is_some() && !options.contains(Options::UNPAD) {
        blocks * layout.symbols_per_block
    } else {
        (byte_count * layout.symbols_per_block).div_ceil(layout.bytes_per_block)
    };

    let indent = options.contains(Options::INDENT);
    let breaks = options.contains(Options::WRAP) || (indent && layout.indent_wraps);
    let spaces = indent && !layout.indent_wraps;

    let mut total = symbols;
    if breaks && symbols > 0 {
        total += (symbols - 1) / layout.line_width;
    }
    if spaces && blocks > 0 {
        total += blocks - 1;
    }
    total
}
