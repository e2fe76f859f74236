use crate::core::alphabet::Alphabet;
use crate::core::codec::Codec;
use crate::core::profile::Profile;
use crate::encoders::algorithms::errors::{ConfigError, Error, find_closest_codec};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Configuration for a single codec loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct CodecConfig {
    /// Codec family: `base16`, `base24`, `base64` or `positional`
    pub profile: String,
    /// The symbols of the alphabet, in value order
    pub symbols: String,
    /// Whether decoding ignores letter case
    #[serde(default)]
    pub case_insensitive: bool,
    /// Whether text can be rewritten into canonical symbols
    #[serde(default)]
    pub canonical: bool,
    /// Alternate spellings, each mapping one character to an alphabet symbol
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    /// Free-form description shown by `base-n list`
    #[serde(default)]
    pub description: Option<String>,
}

impl CodecConfig {
    /// Builds the codec this entry describes.
    ///
    /// Positional codecs take their radix from the number of symbols.
    pub fn build(&self) -> Result<Codec, ConfigError> {
        let profile = Profile::from_name(&self.profile, self.symbols.chars().count())?;

        let mut synonyms = Vec::with_capacity(self.synonyms.len());
        for (synonym, target) in &self.synonyms {
            synonyms.push((single_char(synonym, target)?, single_char(target, synonym)?));
        }
        // HashMap order is arbitrary; keep conflict reporting stable
        synonyms.sort_unstable();

        let alphabet = Alphabet::builder()
            .symbols(&self.symbols)
            .case_insensitive(self.case_insensitive)
            .canonical(self.canonical)
            .synonyms(synonyms)
            .build()?;
        Codec::new(profile, alphabet)
    }
}

fn single_char(s: &str, other: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidSynonym {
            synonym: s.chars().next().unwrap_or('\u{FFFD}'),
            target: other.chars().next().unwrap_or('\u{FFFD}'),
            reason: "synonyms and targets must be single characters",
        }),
    }
}

/// Global settings for base-n.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Codec used when the command line does not name one
    #[serde(default)]
    pub default_codec: Option<String>,
}

/// Collection of codec configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    pub codecs: HashMap<String, CodecConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CodecRegistry {
    /// Parses codec configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the built-in codec configurations.
    pub fn load_default() -> Result<Self, Error> {
        let content = include_str!("../../codecs.toml");
        let registry = Self::from_toml(content)?;
        tracing::debug!(codecs = registry.codecs.len(), "loaded built-in codec registry");
        Ok(registry)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), codecs = registry.codecs.len(), "loaded codec registry");
        Ok(registry)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in codecs (from library)
    /// 2. `~/.config/base-n/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching codec names.
    /// Unreadable override files are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Error> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-n").join("codecs.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("codecs.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load codec overrides"),
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Codecs from `other` override codecs with the same name in `self`, and
    /// a default codec set in `other` replaces ours.
    pub fn merge(&mut self, other: CodecRegistry) {
        self.codecs.extend(other.codecs);
        if other.settings.default_codec.is_some() {
            self.settings.default_codec = other.settings.default_codec;
        }
    }

    /// Retrieves a codec configuration by name.
    pub fn get(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// Codec names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.codecs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the named codec.
    ///
    /// # Errors
    ///
    /// Unknown names yield [`ConfigError::UnknownCodec`] with the closest
    /// registered name as a suggestion; invalid entries yield the error
    /// that building their alphabet or codec produced.
    pub fn codec(&self, name: &str) -> Result<Codec, ConfigError> {
        match self.get(name) {
            Some(config) => config.build(),
            None => Err(ConfigError::UnknownCodec {
                name: name.to_string(),
                suggestion: find_closest_codec(name, &self.names()),
            }),
        }
    }
}
