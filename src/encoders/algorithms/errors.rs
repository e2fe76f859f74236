use std::fmt;
use std::io;

/// Errors raised while decoding malformed text.
///
/// These describe bad input, never misuse of the API. Output already written
/// to a sink for earlier blocks stays there; callers discard it on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character the codec does not accept
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        column: usize,
        valid_chars: String,
    },
    /// The symbol count cannot form a whole number of bytes
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// Padding is missing, misplaced or interleaved with data
    InvalidPadding { position: usize, reason: String },
    /// Bits below the last whole byte of a partial block are not zero
    InsignificantBits { position: usize },
    /// The payload is too short to carry a checksum
    ChecksumTooShort { actual: usize },
    /// The trailing checksum does not match the payload
    ChecksumMismatch { expected: [u8; 4], computed: [u8; 4] },
}

const EXCERPT_CHARS: usize = 60;

impl DecodeError {
    /// Create an InvalidCharacter error with a window of `chunk` around `offset`
    ///
    /// `position` is the absolute character index in the decoded stream,
    /// `offset` the character index of the culprit inside `chunk`.
    pub fn invalid_character(
        c: char,
        position: usize,
        chunk: &str,
        offset: usize,
        valid_chars: &str,
    ) -> Self {
        let start = offset.saturating_sub(EXCERPT_CHARS / 2);
        let mut input: String = chunk.chars().skip(start).take(EXCERPT_CHARS).collect();
        if chunk.chars().count() > start + EXCERPT_CHARS {
            input.push_str("...");
        }

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input,
            column: offset - start,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_padding(position: usize, reason: impl Into<String>) -> Self {
        DecodeError::InvalidPadding {
            position,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (error, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                column,
                valid_chars,
            } => {
                writeln!(
                    f,
                    "{} invalid character {:?} at position {}",
                    error, c, position
                )?;
                writeln!(f)?;

                // Show input with caret pointing at error position
                let visible: String = input
                    .chars()
                    .map(|ch| if ch.is_control() { ' ' } else { ch })
                    .collect();
                writeln!(f, "  {}", visible)?;
                write!(f, "  {}", " ".repeat(*column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                let hint_chars: String = if valid_chars.chars().count() > 80 {
                    let mut s: String = valid_chars.chars().take(80).collect();
                    s.push_str("...");
                    s
                } else {
                    valid_chars.clone()
                };
                write!(f, "{} valid characters: {}", hint, hint_chars)
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint: text,
            } => {
                writeln!(f, "{} invalid length for decode", error)?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                write!(f, "{} {}", hint, text)
            }
            DecodeError::InvalidPadding { position, reason } => {
                writeln!(f, "{} invalid padding at position {}", error, position)?;
                write!(f, "\n{} {}", hint, reason)
            }
            DecodeError::InsignificantBits { position } => {
                writeln!(
                    f,
                    "{} insignificant bits must be zero (block ending at position {})",
                    error, position
                )?;
                write!(
                    f,
                    "\n{} the last symbol carries bits beyond the final byte; decode with relax to ignore them",
                    hint
                )
            }
            DecodeError::ChecksumTooShort { actual } => {
                writeln!(
                    f,
                    "{} payload of {} bytes is too short to carry a 4-byte checksum",
                    error, actual
                )?;
                write!(f, "\n{} decode without checksum if none was appended", hint)
            }
            DecodeError::ChecksumMismatch { expected, computed } => {
                writeln!(
                    f,
                    "{} checksum mismatch: payload carries {}, computed {}",
                    error,
                    hex::encode(expected),
                    hex::encode(computed)
                )?;
                write!(f, "\n{} the text was likely mistyped or truncated", hint)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Programmer errors: a codec or alphabet that cannot work as configured.
///
/// These are never turned into an "absent" result by the non-failing decode
/// variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{profile} codec requires an alphabet of {expected} symbols, got {actual}")]
    AlphabetSize {
        profile: String,
        expected: usize,
        actual: usize,
    },

    #[error("alphabet cannot be empty")]
    EmptyAlphabet,

    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol { symbol: char },

    #[error("synonym {synonym:?} -> {target:?} is invalid: {reason}")]
    InvalidSynonym {
        synonym: char,
        target: char,
        reason: &'static str,
    },

    #[error("positional radix must be between 2 and 256, got {radix}")]
    InvalidRadix { radix: usize },

    #[error("{profile} codec cannot stream: positional conversion needs the whole input")]
    StreamingUnsupported { profile: String },

    #[error("alphabet does not support canonicalization")]
    CanonicalizationUnsupported,

    #[error("unknown codec profile '{name}' (expected base16, base24, base64 or positional)")]
    UnknownProfile { name: String },

    #[error("codec '{name}' not found{}", suggestion_hint(.suggestion))]
    UnknownCodec {
        name: String,
        suggestion: Option<String>,
    },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!("; did you mean '{}'?", s),
        None => String::new(),
    }
}

/// Coarse classification used by callers that only need to know who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Programmer error: bad alphabet, unsupported operation, bad registry
    Configuration,
    /// Bad input text
    Format,
    /// Failure of a caller-supplied reader or writer
    Io,
}

/// Any failure surfaced by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid codec registry: {0}")]
    Registry(#[from] toml::de::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) | Error::Registry(_) => ErrorKind::Configuration,
            Error::Decode(_) => ErrorKind::Format,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching codec name
pub fn find_closest_codec(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
