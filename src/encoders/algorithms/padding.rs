//! Normalising the padding of already-encoded text.

use crate::core::profile::BlockLayout;

/// Completes the final block of `text` with padding symbols.
///
/// Existing trailing padding is replaced, so applying this twice changes
/// nothing. Layouts without a padding symbol return the text unchanged.
pub fn pad(layout: &BlockLayout, text: &str) -> String {
    let Some(pad) = layout.padding else {
        return text.to_string();
    };

    let trimmed = text.trim_end_matches(pad);
    let symbols = trimmed.chars().filter(|c| !c.is_ascii_whitespace()).count();
    let missing = match symbols % layout.symbols_per_block {
        0 => 0,
        partial => layout.symbols_per_block - partial,
    };

    let mut out = String::with_capacity(trimmed.len() + missing);
    out.push_str(trimmed);
    out.extend(std::iter::repeat_n(pad, missing));
    out
}

/// Strips trailing padding symbols from `text`.
pub fn unpad(layout: &BlockLayout, text: &str) -> String {
    match layout.padding {
        Some(pad) => text.trim_end_matches(pad).to_string(),
        None => text.to_string(),
    }
}
