use tracing::debug_span;

use super::glyphs::GlyphTable;
use crate::script::fold_char;

/// Transliterate a single word against the global glyph tables.
///
/// The word is case-folded, then scanned left to right. Base letters map to
/// their glyph in any position; a short vowel becomes a standalone letter at
/// the end of the word and a combining mark elsewhere (hosted by the carrier
/// glyph when nothing has been emitted yet). Anything else passes through
/// unchanged, so the function is total: every input produces an output.
pub fn transliterate(word: &str) -> String {
    transliterate_with(GlyphTable::global(), word)
}

pub(crate) fn transliterate_with(table: &GlyphTable, word: &str) -> String {
    let chars: Vec<char> = word.chars().map(fold_char).collect();
    let mut out = String::with_capacity(word.len() * 2);

    for (i, &c) in chars.iter().enumerate() {
        // Finality is a property of the position alone, not of the neighbors.
        let is_last = i == chars.len() - 1;

        if let Some(glyph) = table.base(c) {
            out.push_str(glyph);
        } else if let Some(vowel) = table.short_vowel(c) {
            if is_last {
                out.push_str(&vowel.final_glyph);
            } else {
                if out.is_empty() {
                    // Word-initial mark needs a glyph to sit on.
                    out.push_str(table.carrier());
                }
                out.push_str(&vowel.mark);
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Transliterate whitespace-delimited text, one token at a time.
///
/// Tokens are independent of each other; runs of whitespace collapse to a
/// single space in the output.
pub fn transliterate_text(text: &str) -> String {
    let _span = debug_span!("transliterate_text", len = text.len()).entered();
    let words: Vec<String> = text.split_whitespace().map(transliterate).collect();
    words.join(" ")
}
