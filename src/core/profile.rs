use crate::encoders::algorithms::errors::ConfigError;
use std::fmt;

/// Fixed pairing of decoded bytes to encoded symbols for a block codec.
#[derive(Debug, PartialEq, Eq)]
pub struct BlockLayout {
    pub radix: usize,
    pub bytes_per_block: usize,
    pub symbols_per_block: usize,
    /// Bit width of one symbol for power-of-two radixes, `None` otherwise
    pub shift: Option<u32>,
    /// Symbols per line when wrapping
    pub line_width: usize,
    pub padding: Option<char>,
    /// Characters skipped on decode under `RELAX`
    pub separators: &'static [char],
    /// `INDENT` breaks lines exactly like `WRAP` instead of adding spaces
    pub indent_wraps: bool,
    /// Symbols emitted for a final block of `k` bytes, indexed by `k`
    pub partial_symbols: &'static [usize],
}

impl BlockLayout {
    /// Bytes carried by a final block of `symbols` symbols, and whether that
    /// count is one the encoder can produce.
    pub fn partial_bytes(&self, symbols: usize) -> (usize, bool) {
        match self.partial_symbols.iter().position(|&m| m == symbols) {
            Some(bytes) if bytes > 0 => (bytes, true),
            _ => {
                let bytes = self
                    .partial_symbols
                    .iter()
                    .rposition(|&m| m < symbols)
                    .unwrap_or(0);
                (bytes, false)
            }
        }
    }

    pub fn bits_per_symbol(&self) -> f64 {
        (self.radix as f64).log2()
    }
}

pub static BASE16_LAYOUT: BlockLayout = BlockLayout {
    radix: 16,
    bytes_per_block: 1,
    symbols_per_block: 2,
    shift: Some(4),
    line_width: 64,
    padding: None,
    separators: &['-', ':'],
    indent_wraps: false,
    partial_symbols: &[0],
};

/// Kuon Base24: 4 bytes as a 32-bit big-endian integer in 7 base-24 digits.
pub static BASE24_LAYOUT: BlockLayout = BlockLayout {
    radix: 24,
    bytes_per_block: 4,
    symbols_per_block: 7,
    shift: None,
    line_width: 70,
    padding: Some('='),
    separators: &['-'],
    indent_wraps: true,
    // smallest m with 24^m >= 256^k
    partial_symbols: &[0, 2, 4, 6],
};

pub static BASE64_LAYOUT: BlockLayout = BlockLayout {
    radix: 64,
    bytes_per_block: 3,
    symbols_per_block: 4,
    shift: Some(6),
    line_width: 76,
    padding: Some('='),
    separators: &[],
    indent_wraps: false,
    partial_symbols: &[0, 2, 3],
};

/// The codec families, described as data rather than as a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// 4 bits per symbol
    Base16,
    /// log2(24) bits per symbol, Kuon block layout
    Base24,
    /// 6 bits per symbol
    Base64,
    /// Whole payload as one big-endian integer in the given radix
    Positional { radix: u16 },
}

impl Profile {
    /// Builds a profile from its configuration name.
    ///
    /// `radix` is only consulted for `positional`.
    pub fn from_name(name: &str, radix: usize) -> Result<Profile, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "base16" | "hex" => Ok(Profile::Base16),
            "base24" | "kuon" => Ok(Profile::Base24),
            "base64" => Ok(Profile::Base64),
            "positional" | "radix" => Profile::positional(radix),
            _ => Err(ConfigError::UnknownProfile {
                name: name.to_string(),
            }),
        }
    }

    pub fn positional(radix: usize) -> Result<Profile, ConfigError> {
        if !(2..=256).contains(&radix) {
            return Err(ConfigError::InvalidRadix { radix });
        }
        Ok(Profile::Positional {
            radix: radix as u16,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Base16 => "base16",
            Profile::Base24 => "base24",
            Profile::Base64 => "base64",
            Profile::Positional { .. } => "positional",
        }
    }

    pub fn radix(&self) -> usize {
        match self {
            Profile::Positional { radix } => *radix as usize,
            other => other.layout().map_or(0, |layout| layout.radix),
        }
    }

    /// Block layout, or `None` for the positional family.
    pub fn layout(&self) -> Option<&'static BlockLayout> {
        match self {
            Profile::Base16 => Some(&BASE16_LAYOUT),
            Profile::Base24 => Some(&BASE24_LAYOUT),
            Profile::Base64 => Some(&BASE64_LAYOUT),
            Profile::Positional { .. } => None,
        }
    }

    pub fn supports_streaming(&self) -> bool {
        self.layout().is_some()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Positional { radix } => write!(f, "positional-{}", radix),
            other => f.write_str(other.name()),
        }
    }
}
