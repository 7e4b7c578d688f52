//! Character-level script classification and case folding.

/// Lowercase a single character when the mapping is one-to-one.
///
/// Characters whose Unicode lowercase expansion is longer than one character
/// (e.g. 'İ' U+0130 → "i\u{307}") are returned unchanged, so they fall
/// through the glyph tables untouched instead of being silently reshaped.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Check the Arabic Tashkil range (U+064B..U+065F) plus the superscript alef
/// (U+0670). This covers more marks than the three harakat the engine emits,
/// but the wider check is what output inspection actually wants.
pub fn is_harakat(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}'
}

/// Check for an Arabic base letter. Block-level check on U+0600..U+06FF minus
/// the leading punctuation/format range, the harakat, and Arabic-Indic digits.
/// A few symbols (tatweel, ۔) still pass, but none of those are ever emitted
/// by the glyph tables, so the simpler ranges are preferred over an exact
/// letter list.
pub fn is_arabic_letter(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
        && !is_harakat(c)
        && !('\u{0600}'..='\u{061F}').contains(&c)
        && !('\u{0660}'..='\u{0669}').contains(&c)
}

/// Check for a letter of the Azerbaijani Latin alphabet (folded form):
/// ASCII letters plus the seven extra letters.
pub fn is_azeri_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'ə' | 'ç' | 'ş' | 'ğ' | 'ö' | 'ü' | 'ı')
}
