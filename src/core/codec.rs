use crate::core::alphabet::Alphabet;
use crate::core::options::Options;
use crate::core::profile::{BlockLayout, Profile};
use crate::encoders::algorithms::block::{DecoderContext, EncoderContext};
use crate::encoders::algorithms::errors::{ConfigError, DecodeError};
use crate::encoders::algorithms::{capacity, hex_fast, padding, positional};
use std::sync::OnceLock;

pub const BASE16_UPPER: &str = "0123456789ABCDEF";
pub const BASE16_LOWER: &str = "0123456789abcdef";
pub const BASE24_KUON: &str = "ZAC2B3EF4GH5TK67P8RS9WXY";
pub const BASE64_STANDARD: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
pub const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";
pub const BASE58_RIPPLE: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// A codec family bound to an alphabet of matching size.
///
/// Codecs are immutable; one instance serves any number of concurrent
/// operations, each with its own context.
#[derive(Debug, Clone)]
pub struct Codec {
    profile: Profile,
    alphabet: Alphabet,
    fast_hex: bool,
}

impl Codec {
    /// Binds `alphabet` to `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlphabetSize`] if the alphabet does not have
    /// exactly as many symbols as the profile's radix.
    pub fn new(profile: Profile, alphabet: Alphabet) -> Result<Self, ConfigError> {
        if alphabet.len() != profile.radix() {
            return Err(ConfigError::AlphabetSize {
                profile: profile.to_string(),
                expected: profile.radix(),
                actual: alphabet.len(),
            });
        }
        let fast_hex = profile == Profile::Base16 && hex_fast::serves(&alphabet);
        Ok(Codec {
            profile,
            alphabet,
            fast_hex,
        })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes a whole buffer.
    pub fn encode(&self, data: &[u8], options: Options) -> String {
        match self.profile.layout() {
            Some(layout) => {
                let mut out = String::with_capacity(self.max_char_count(data.len(), options));
                let mut ctx = EncoderContext::new(&self.alphabet, layout, options);
                ctx.feed(data, &mut out);
                ctx.finish(&mut out);
                out
            }
            None => positional::encode(data, &self.alphabet, options),
        }
    }

    /// Decodes a whole buffer.
    pub fn decode(&self, text: &str, options: Options) -> Result<Vec<u8>, DecodeError> {
        let Some(layout) = self.profile.layout() else {
            return positional::decode(text, &self.alphabet, options);
        };

        if self.fast_hex && !options.intersects(Options::RELAX | Options::PADDING) {
            match hex_fast::decode(text) {
                Ok(bytes) => return Ok(bytes),
                Err(err) if options.contains(Options::PURE) => return Err(err),
                Err(_) => tracing::debug!("hex fast path declined input, using block engine"),
            }
        }

        let mut out = Vec::with_capacity(self.max_byte_count(text.len(), options));
        let mut ctx = DecoderContext::new(&self.alphabet, layout, options);
        ctx.feed(text, &mut out)?;
        ctx.finish(&mut out)?;
        Ok(out)
    }

    /// Decodes a whole buffer, reporting malformed input as `None`.
    pub fn try_decode(&self, text: &str, options: Options) -> Option<Vec<u8>> {
        self.decode(text, options).ok()
    }

    /// Starts an incremental encode.
    ///
    /// # Errors
    ///
    /// Positional codecs cannot stream and return
    /// [`ConfigError::StreamingUnsupported`].
    pub fn encoder(&self, options: Options) -> Result<EncoderContext<'_>, ConfigError> {
        let layout = self.streaming_layout()?;
        tracing::debug!(profile = %self.profile, %options, "creating encoder context");
        Ok(EncoderContext::new(&self.alphabet, layout, options))
    }

    /// Starts an incremental decode.
    ///
    /// # Errors
    ///
    /// Positional codecs cannot stream and return
    /// [`ConfigError::StreamingUnsupported`].
    pub fn decoder(&self, options: Options) -> Result<DecoderContext<'_>, ConfigError> {
        let layout = self.streaming_layout()?;
        tracing::debug!(profile = %self.profile, %options, "creating decoder context");
        Ok(DecoderContext::new(&self.alphabet, layout, options))
    }

    pub fn max_char_count(&self, byte_count: usize, options: Options) -> usize {
        capacity::max_char_count(self.profile, byte_count, options)
    }

    pub fn max_byte_count(&self, char_count: usize, options: Options) -> usize {
        capacity::max_byte_count(self.profile, char_count, options)
    }

    /// Completes the final block of encoded text with padding.
    pub fn pad(&self, text: &str) -> String {
        match self.profile.layout() {
            Some(layout) => padding::pad(layout, text),
            None => text.to_string(),
        }
    }

    /// Removes trailing padding from encoded text.
    pub fn unpad(&self, text: &str) -> String {
        match self.profile.layout() {
            Some(layout) => padding::unpad(layout, text),
            None => text.to_string(),
        }
    }

    fn streaming_layout(&self) -> Result<&'static BlockLayout, ConfigError> {
        self.profile
            .layout()
            .ok_or_else(|| ConfigError::StreamingUnsupported {
                profile: self.profile.to_string(),
            })
    }

    /// Uppercase hex, case-insensitive on decode.
    pub fn base16() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Base16, BASE16_UPPER, true))
    }

    /// Lowercase hex, case-insensitive on decode.
    pub fn base16_lower() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Base16, BASE16_LOWER, true))
    }

    /// Kuon Base24.
    pub fn base24() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Base24, BASE24_KUON, true))
    }

    /// RFC 4648 section 4.
    pub fn base64() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Base64, BASE64_STANDARD, false))
    }

    /// RFC 4648 section 5.
    pub fn base64_url() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Base64, BASE64_URL, false))
    }

    /// Bitcoin Base58.
    pub fn base58() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Positional { radix: 58 }, BASE58_BITCOIN, false))
    }

    pub fn base58_flickr() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Positional { radix: 58 }, BASE58_FLICKR, false))
    }

    pub fn base58_ripple() -> &'static Codec {
        static CODEC: OnceLock<Codec> = OnceLock::new();
        CODEC.get_or_init(|| builtin(Profile::Positional { radix: 58 }, BASE58_RIPPLE, false))
    }
}

fn builtin(profile: Profile, symbols: &str, case_insensitive: bool) -> Codec {
    let codec = Alphabet::builder()
        .symbols(symbols)
        .case_insensitive(case_insensitive)
        .canonical(case_insensitive)
        .build()
        .and_then(|alphabet| Codec::new(profile, alphabet));
    match codec {
        Ok(codec) => codec,
        Err(e) => unreachable!("built-in {} alphabet rejected: {}", profile, e),
    }
}
