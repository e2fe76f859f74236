use crate::encoders::algorithms::errors::ConfigError;
use std::collections::HashMap;

// values run 0..=255, so the marker sits outside u8
const ABSENT: u16 = u16::MAX;

/// An ordered, fixed-size set of symbols with O(1) lookups in both directions.
///
/// Lookups by symbol honour the alphabet's case sensitivity and any synonyms
/// (alternate spellings that decode to a canonical symbol). An alphabet is
/// immutable once built and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    ascii: [u16; 128],
    others: HashMap<char, u16>,
    case_insensitive: bool,
    canonical: bool,
}

impl Alphabet {
    /// Creates a case-sensitive alphabet without synonyms.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty, longer than 256 symbols or
    /// contains duplicates.
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        Self::builder().symbols(symbols).build()
    }

    /// Creates a builder for configuring an alphabet.
    pub fn builder() -> AlphabetBuilder {
        AlphabetBuilder::default()
    }

    /// Number of symbols, i.e. the radix this alphabet can serve.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn supports_canonicalization(&self) -> bool {
        self.canonical
    }

    /// Returns the symbol for `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value >= self.len()`. Codec arithmetic never produces such a
    /// value.
    #[inline]
    pub fn symbol_at(&self, value: usize) -> char {
        self.symbols[value]
    }

    /// Looks up the value of `symbol`, consulting case folding and synonyms.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        let found = if symbol.is_ascii() {
            self.ascii[symbol as usize]
        } else {
            *self.others.get(&symbol)?
        };
        (found != ABSENT).then_some(found as usize)
    }

    /// Rewrites `source` into canonical symbols, appending to `dest`.
    ///
    /// Symbols and synonyms are replaced by their canonical form; characters
    /// outside the alphabet are copied unchanged.
    pub fn canonicalize(&self, source: &str, dest: &mut String) -> Result<(), ConfigError> {
        if !self.canonical {
            return Err(ConfigError::CanonicalizationUnsupported);
        }
        dest.reserve(source.len());
        for c in source.chars() {
            match self.index_of(c) {
                Some(value) => dest.push(self.symbol_at(value)),
                None => dest.push(c),
            }
        }
        Ok(())
    }

    /// Human readable list of accepted symbols for diagnostics.
    pub fn describe(&self) -> String {
        if self.symbols.len() <= 64 {
            self.symbols.iter().collect()
        } else {
            format!("{} characters in alphabet", self.symbols.len())
        }
    }

    /// True when every accepted character is ASCII.
    pub(crate) fn is_ascii_only(&self) -> bool {
        self.others.is_empty()
    }

    fn insert(&mut self, key: char, value: u16) -> bool {
        if key.is_ascii() {
            let slot = &mut self.ascii[key as usize];
            if *slot != ABSENT {
                return false;
            }
            *slot = value;
            true
        } else {
            self.others.insert(key, value).is_none()
        }
    }
}

/// Builder for [`Alphabet`].
#[derive(Debug, Default, Clone)]
pub struct AlphabetBuilder {
    symbols: Vec<char>,
    case_insensitive: bool,
    canonical: bool,
    synonyms: Vec<(char, char)>,
}

impl AlphabetBuilder {
    pub fn symbols(mut self, symbols: &str) -> Self {
        self.symbols = symbols.chars().collect();
        self
    }

    /// Accept either case of every symbol on lookup.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Allow [`Alphabet::canonicalize`].
    pub fn canonical(mut self, yes: bool) -> Self {
        self.canonical = yes;
        self
    }

    /// Decode `synonym` as if it were `target`.
    pub fn synonym(mut self, synonym: char, target: char) -> Self {
        self.synonyms.push((synonym, target));
        self
    }

    pub fn synonyms(mut self, pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        self.synonyms.extend(pairs);
        self
    }

    pub fn build(self) -> Result<Alphabet, ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.symbols.len() > 256 {
            return Err(ConfigError::InvalidRadix {
                radix: self.symbols.len(),
            });
        }

        let mut alphabet = Alphabet {
            symbols: self.symbols,
            ascii: [ABSENT; 128],
            others: HashMap::new(),
            case_insensitive: self.case_insensitive,
            canonical: self.canonical,
        };

        let symbols = alphabet.symbols.clone();
        for (value, &symbol) in symbols.iter().enumerate() {
            if !alphabet.insert(symbol, value as u16) {
                return Err(ConfigError::DuplicateSymbol { symbol });
            }
        }

        if self.case_insensitive {
            for (value, &symbol) in symbols.iter().enumerate() {
                for variant in case_variants(symbol) {
                    match alphabet.index_of(variant) {
                        None => {
                            alphabet.insert(variant, value as u16);
                        }
                        Some(existing) if existing == value => {}
                        Some(_) => return Err(ConfigError::DuplicateSymbol { symbol: variant }),
                    }
                }
            }
        }

        for (synonym, target) in self.synonyms {
            let value = alphabet.index_of(target).ok_or(ConfigError::InvalidSynonym {
                synonym,
                target,
                reason: "target is not in the alphabet",
            })?;
            let mut keys = vec![synonym];
            if self.case_insensitive {
                keys.extend(case_variants(synonym));
            }
            for key in keys {
                match alphabet.index_of(key) {
                    None => {
                        alphabet.insert(key, value as u16);
                    }
                    Some(existing) if existing == value => {}
                    Some(_) => {
                        return Err(ConfigError::InvalidSynonym {
                            synonym,
                            target,
                            reason: "synonym already decodes to another symbol",
                        });
                    }
                }
            }
        }

        Ok(alphabet)
    }
}

/// Single-character upper and lower case forms of `c`, excluding `c` itself.
fn case_variants(c: char) -> Vec<char> {
    let mut variants = Vec::with_capacity(2);
    let mut lower = c.to_lowercase();
    if let (Some(l), None) = (lower.next(), lower.next()) {
        if l != c {
            variants.push(l);
        }
    }
    let mut upper = c.to_uppercase();
    if let (Some(u), None) = (upper.next(), upper.next()) {
        if u != c && !variants.contains(&u) {
            variants.push(u);
        }
    }
    variants
}
