//! Scenario and property tests for the transliteration engine.

mod properties;

use super::config::parse_table_toml;
use super::glyphs::GlyphTable;

/// A reduced table for tests that exercise table-parameterized conversion:
/// two consonants, one short vowel, a distinct carrier.
fn tiny_table() -> GlyphTable {
    let toml = r#"
carrier = "C"

[base]
b = "B"
t = "T"

[medial_vowels]
e = "^"

[final_vowels]
e = "E"
"#;
    GlyphTable::from_config(parse_table_toml(toml).unwrap())
}
