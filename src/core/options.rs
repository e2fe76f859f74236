use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

/// Independent formatting and validation toggles shared by every codec.
///
/// Flags combine with `|`. Some combinations are redundant in effect (for
/// example `PURE | RELAX`, where `PURE` wins for stray characters) but none are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options(u16);

impl Options {
    /// No flags: padded output, whitespace tolerated on decode.
    pub const NONE: Options = Options(0);
    /// Require padding to complete every partial block on decode.
    pub const PADDING: Options = Options(1 << 0);
    /// Omit padding symbols on encode.
    pub const UNPAD: Options = Options(1 << 1);
    /// Skip conventional separators and accept incomplete trailing blocks.
    pub const RELAX: Options = Options(1 << 2);
    /// Reject every character outside the alphabet, whitespace included.
    pub const PURE: Options = Options(1 << 3);
    /// Break encoded output into lines of the codec's line width.
    pub const WRAP: Options = Options(1 << 4);
    /// Separate encoded blocks with a space.
    pub const INDENT: Options = Options(1 << 5);
    /// Append/verify a 4-byte double SHA-256 checksum (positional codecs).
    pub const CHECKSUM: Options = Options(1 << 6);
    /// Advisory hint; never changes the encoded form.
    pub const COMPRESS: Options = Options(1 << 7);

    const ALL: [(Options, &'static str); 8] = [
        (Options::PADDING, "padding"),
        (Options::UNPAD, "unpad"),
        (Options::RELAX, "relax"),
        (Options::PURE, "pure"),
        (Options::WRAP, "wrap"),
        (Options::INDENT, "indent"),
        (Options::CHECKSUM, "checksum"),
        (Options::COMPRESS, "compress"),
    ];

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds options from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u16) -> Options {
        Options(bits & 0xFF)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Options) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: Options) -> Options {
        Options(self.0 | other.0)
    }

    pub const fn difference(self, other: Options) -> Options {
        Options(self.0 & !other.0)
    }

    pub fn insert(&mut self, other: Options) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Options) {
        self.0 &= !other.0;
    }

    /// Parses a flag name as used in configuration files and the CLI.
    pub fn from_name(name: &str) -> Option<Options> {
        let lowered = name.trim().to_ascii_lowercase();
        let lowered = match lowered.as_str() {
            "nopadding" | "no-padding" => "unpad",
            other => other,
        };
        Self::ALL
            .iter()
            .find(|(_, n)| *n == lowered)
            .map(|(flag, _)| *flag)
    }
}

impl BitOr for Options {
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options {
        self.union(rhs)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Options) {
        self.insert(rhs);
    }
}

impl BitAnd for Options {
    type Output = Options;

    fn bitand(self, rhs: Options) -> Options {
        Options(self.0 & rhs.0)
    }
}

impl Sub for Options {
    type Output = Options;

    fn sub(self, rhs: Options) -> Options {
        self.difference(rhs)
    }
}

impl Not for Options {
    type Output = Options;

    fn not(self) -> Options {
        Options::from_bits_truncate(!self.0)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (flag, name) in Self::ALL {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}
