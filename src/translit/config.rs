use std::collections::BTreeMap;

use serde::Deserialize;

use crate::script::fold_char;

#[derive(Deserialize)]
struct RawTableConfig {
    carrier: String,
    base: BTreeMap<String, String>,
    medial_vowels: BTreeMap<String, String>,
    final_vowels: BTreeMap<String, String>,
}

/// Validated glyph-table configuration with single-character keys.
#[derive(Debug)]
pub struct TableConfig {
    pub carrier: String,
    pub base: BTreeMap<char, String>,
    pub medial_vowels: BTreeMap<char, String>,
    pub final_vowels: BTreeMap<char, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[base] table is empty")]
    EmptyBase,
    #[error("key must be a single character: {0}")]
    MultiCharKey(String),
    #[error("key is not in folded (lowercase) form: {0}")]
    UnfoldedKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("carrier glyph is empty")]
    EmptyCarrier,
    #[error("[medial_vowels] and [final_vowels] must cover the same letters")]
    VowelSetMismatch,
    #[error("short vowel also present in [base]: {0}")]
    OverlappingKey(char),
    #[error("glyph table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated `TableConfig`.
pub fn parse_table_toml(toml_str: &str) -> Result<TableConfig, TableConfigError> {
    let raw: RawTableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if raw.carrier.is_empty() {
        return Err(TableConfigError::EmptyCarrier);
    }
    if raw.base.is_empty() {
        return Err(TableConfigError::EmptyBase);
    }

    let base = char_keyed(raw.base)?;
    let medial_vowels = char_keyed(raw.medial_vowels)?;
    let final_vowels = char_keyed(raw.final_vowels)?;

    // The two positional tables must agree on which letters are short vowels.
    if !medial_vowels.keys().eq(final_vowels.keys()) {
        return Err(TableConfigError::VowelSetMismatch);
    }

    // Short vowels are resolved positionally and may never shadow a base glyph.
    for vowel in medial_vowels.keys() {
        if base.contains_key(vowel) {
            return Err(TableConfigError::OverlappingKey(*vowel));
        }
    }

    Ok(TableConfig {
        carrier: raw.carrier,
        base,
        medial_vowels,
        final_vowels,
    })
}

fn char_keyed(
    raw: BTreeMap<String, String>,
) -> Result<BTreeMap<char, String>, TableConfigError> {
    let mut map = BTreeMap::new();
    for (key, value) in raw {
        let mut chars = key.chars();
        let (first, rest) = (chars.next(), chars.next());
        let Some(c) = first else {
            return Err(TableConfigError::MultiCharKey(key));
        };
        if rest.is_some() {
            return Err(TableConfigError::MultiCharKey(key));
        }
        if fold_char(c) != c {
            return Err(TableConfigError::UnfoldedKey(key));
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key));
        }
        map.insert(c, value);
    }
    Ok(map)
}
