use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_table_toml, TableConfig, TableConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Positional forms of one short vowel.
pub struct ShortVowel {
    /// Combining mark appended after the previous glyph in medial position.
    pub mark: String,
    /// Standalone letter emitted in final position.
    pub final_glyph: String,
}

/// Compiled glyph tables. Immutable after construction, safe to share across
/// threads by reference.
pub struct GlyphTable {
    base: HashMap<char, String>,
    vowels: HashMap<char, ShortVowel>,
    carrier: String,
}

impl GlyphTable {
    /// Set custom TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTable {
        static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_table_toml(toml_str).expect("glyph table TOML must be valid");
            GlyphTable::from_config(config)
        })
    }

    /// Compile a validated config. The medial and final vowel tables share a
    /// key set (enforced at parse time), so they merge into one map here.
    pub fn from_config(config: TableConfig) -> Self {
        let mut final_vowels = config.final_vowels;
        let vowels = config
            .medial_vowels
            .into_iter()
            .map(|(c, mark)| {
                let final_glyph = final_vowels.remove(&c).unwrap_or_default();
                (c, ShortVowel { mark, final_glyph })
            })
            .collect();

        GlyphTable {
            base: config.base.into_iter().collect(),
            vowels,
            carrier: config.carrier,
        }
    }

    /// Base glyph for a consonant or long vowel, position-independent.
    pub fn base(&self, c: char) -> Option<&str> {
        self.base.get(&c).map(String::as_str)
    }

    /// Positional forms for a short vowel.
    pub fn short_vowel(&self, c: char) -> Option<&ShortVowel> {
        self.vowels.get(&c)
    }

    /// Medial combining mark for a short vowel.
    pub fn medial_mark(&self, c: char) -> Option<&str> {
        self.vowels.get(&c).map(|v| v.mark.as_str())
    }

    /// Final standalone glyph for a short vowel.
    pub fn final_glyph(&self, c: char) -> Option<&str> {
        self.vowels.get(&c).map(|v| v.final_glyph.as_str())
    }

    /// Glyph that hosts a mark when a word starts with a short vowel.
    pub fn carrier(&self) -> &str {
        &self.carrier
    }
}
