//! Unrolled hex decoder for input with no formatting at all.
//!
//! Accepts exactly `[0-9A-Fa-f]{2n}`. Anything else fails immediately; the
//! general block engine then decides whether the input is merely formatted
//! (whitespace, separators) or really malformed.

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::DecodeError;

const VALID: &str = "0123456789ABCDEFabcdef";

#[inline(always)]
fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

/// Whether [`decode`] agrees with a block decode over `alphabet`.
///
/// Holds when the alphabet accepts exactly `[0-9A-Fa-f]` with their usual
/// hex values and nothing else.
pub fn serves(alphabet: &Alphabet) -> bool {
    alphabet.len() == 16
        && alphabet.is_ascii_only()
        && (0u8..128).all(|b| alphabet.index_of(char::from(b)) == nibble(b).map(usize::from))
}

/// Decodes plain hex, two characters per byte.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let input = text.as_bytes();
    if input.len() % 2 != 0 {
        return Err(DecodeError::invalid_length(
            input.len(),
            "an even number of characters",
            "every byte takes two hex digits; the input has an odd character count",
        ));
    }

    let mut out = Vec::with_capacity(input.len() / 2);
    let mut groups = input.chunks_exact(8);
    for (group, quad) in groups.by_ref().enumerate() {
        let mut decoded = [0u8; 4];
        for (i, slot) in decoded.iter_mut().enumerate() {
            let hi = nibble(quad[2 * i]);
            let lo = nibble(quad[2 * i + 1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => *slot = (hi << 4) | lo,
                (None, _) => return Err(invalid_at(text, group * 8 + 2 * i)),
                (_, None) => return Err(invalid_at(text, group * 8 + 2 * i + 1)),
            }
        }
        out.extend_from_slice(&decoded);
    }

    let base = input.len() - groups.remainder().len();
    for (i, pair) in groups.remainder().chunks_exact(2).enumerate() {
        match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            (None, _) => return Err(invalid_at(text, base + 2 * i)),
            (_, None) => return Err(invalid_at(text, base + 2 * i + 1)),
        }
    }

    Ok(out)
}

/// Like [`decode`], reporting malformed input as `None`.
pub fn try_decode(text: &str) -> Option<Vec<u8>> {
    decode(text).ok()
}

fn invalid_at(text: &str, byte_offset: usize) -> DecodeError {
    // the offending byte may sit inside a multi-byte character
    let start = (0..=byte_offset)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let c = text[start..].chars().next().unwrap_or('\u{FFFD}');
    let position = text[..start].chars().count();
    DecodeError::invalid_character(c, position, text, position, VALID)
}
