//! Rule-based adjectival-modifier annotation
//!
//! Fills the `rel`/`head` fields for the configurations the rules can
//! resolve: an adjective directly before a noun, a short stacked-adjective
//! run before a noun, and a postposed adjective directly after a noun.
//! Everything else is left unannotated — absent dependency data is a
//! normal condition the collocation extractor falls back from, not an
//! error.

use crate::types::{PosTag, Token, REL_AMOD};

/// Maximum stacked adjectives between a modifier and its noun
/// («большой белый дом»: both attach to «дом»).
const MAX_ADJ_RUN: usize = 2;

/// Annotate adjectival modifiers in a single sentence, in place.
///
/// Heads are indices into `tokens`. Tokens that already carry a relation
/// (from an upstream parser) are never overwritten.
pub fn annotate_amod(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].pos != PosTag::Adjective || tokens[i].rel.is_some() {
            continue;
        }

        if let Some(head) = find_head(tokens, i) {
            tokens[i].rel = Some(REL_AMOD.to_string());
            tokens[i].head = Some(head);
        }
    }
}

/// Find the noun an adjective at `idx` modifies, if the positional rules
/// can resolve one.
fn find_head(tokens: &[Token], idx: usize) -> Option<usize> {
    // Forward: skip over a short run of further adjectives to the noun
    let mut j = idx + 1;
    let mut run = 0;
    while j < tokens.len() && run < MAX_ADJ_RUN {
        match tokens[j].pos {
            p if p.is_noun_like() => return Some(j),
            PosTag::Adjective => {
                run += 1;
                j += 1;
            }
            _ => break,
        }
    }

    // Backward: postposed adjective directly after its noun («дом старый»)
    if idx > 0 && tokens[idx - 1].pos.is_noun_like() {
        return Some(idx - 1);
    }

    None
}
