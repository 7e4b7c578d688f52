use serde::Serialize;

use super::glyphs::GlyphTable;
use crate::script::fold_char;

/// How one emitted piece of output came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Consonant or long vowel, position-independent base glyph.
    Base,
    /// Short vowel in medial position, emitted as a combining mark.
    Mark,
    /// Synthetic host glyph for a word-initial mark.
    Carrier,
    /// Short vowel in final position, emitted as a standalone letter.
    Final,
    /// Character known to neither table, copied through verbatim.
    PassThrough,
}

/// One emitted glyph/mark with its provenance. A word-initial short vowel
/// produces two steps for the same input character: `Carrier`, then `Mark`.
#[derive(Debug, Serialize)]
pub struct Step {
    pub input: char,
    pub output: String,
    pub kind: StepKind,
}

/// Trace the transliteration of a single word step by step.
///
/// Concatenating the `output` fields yields exactly what
/// [`transliterate`](super::transliterate) returns for the same word.
pub fn explain(word: &str) -> Vec<Step> {
    explain_with(GlyphTable::global(), word)
}

pub(crate) fn explain_with(table: &GlyphTable, word: &str) -> Vec<Step> {
    let chars: Vec<char> = word.chars().map(fold_char).collect();
    let mut steps: Vec<Step> = Vec::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        let is_last = i == chars.len() - 1;

        if let Some(glyph) = table.base(c) {
            steps.push(Step {
                input: c,
                output: glyph.to_string(),
                kind: StepKind::Base,
            });
        } else if let Some(vowel) = table.short_vowel(c) {
            if is_last {
                steps.push(Step {
                    input: c,
                    output: vowel.final_glyph.clone(),
                    kind: StepKind::Final,
                });
            } else {
                if steps.is_empty() {
                    steps.push(Step {
                        input: c,
                        output: table.carrier().to_string(),
                        kind: StepKind::Carrier,
                    });
                }
                steps.push(Step {
                    input: c,
                    output: vowel.mark.clone(),
                    kind: StepKind::Mark,
                });
            }
        } else {
            steps.push(Step {
                input: c,
                output: c.to_string(),
                kind: StepKind::PassThrough,
            });
        }
    }

    steps
}

/// Format a step trace as human-readable text.
pub fn format_text(word: &str, steps: &[Step]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Trace for \"{}\" ({} steps) ===\n", word, steps.len()));
    for step in steps {
        let kind = match step.kind {
            StepKind::Base => "base",
            StepKind::Mark => "mark",
            StepKind::Carrier => "carrier",
            StepKind::Final => "final",
            StepKind::PassThrough => "pass-through",
        };
        // U+25CC gives combining marks something visible to attach to.
        let shown = if step.kind == StepKind::Mark {
            format!("\u{25CC}{}", step.output)
        } else {
            step.output.clone()
        };
        out.push_str(&format!("  {} -> {}  [{}]\n", step.input, shown, kind));
    }
    out
}
