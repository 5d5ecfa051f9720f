//! Ranking comparators for search result buckets.
//!
//! Both orderings are total, so sorting is deterministic across runs.
//! The partial-match tie-break deliberately ends on the collated words and
//! only then on the uid: auto-assigned uids are random, so an ordering
//! that reached the uid any earlier would be reproducible but meaningless.

use crate::core::{Form, FormIx, Lexeme, LexemeIx};
use crate::unicode::order;
use std::cmp::Ordering;

/// Autocomplete ordering over forms, used by the form, gloss and
/// transliteration indexes.
///
/// Shorter words come first, then (among equal words) forms whose
/// lexeme's headword matches the keyword being sorted, then forms with
/// more references, more glosses, the preferred flag, and finally the
/// domain collation of the word, the collation of the lexeme's headword
/// and the ascending uid.
pub fn autocomplete_order(
    forms: &[Form],
    lexemes: &[Lexeme],
    keyword: &str,
    a: FormIx,
    b: FormIx,
) -> Ordering {
    let fa = &forms[a.index()];
    let fb = &forms[b.index()];

    let by_len = fa.word.len().cmp(&fb.word.len());
    if by_len != Ordering::Equal {
        return by_len;
    }

    if fa.word == fb.word {
        let a_hit = lexeme_matches(lexemes, fa, keyword);
        let b_hit = lexeme_matches(lexemes, fb, keyword);
        let by_hint = b_hit.cmp(&a_hit);
        if by_hint != Ordering::Equal {
            return by_hint;
        }
    }

    let by_references = fb.references.len().cmp(&fa.references.len());
    if by_references != Ordering::Equal {
        return by_references;
    }
    let by_glosses = fb.glosses.len().cmp(&fa.glosses.len());
    if by_glosses != Ordering::Equal {
        return by_glosses;
    }
    let by_preferred = fb.preferred().cmp(&fa.preferred());
    if by_preferred != Ordering::Equal {
        return by_preferred;
    }

    order(&fa.word, &fb.word)
        .then_with(|| order(lexeme_word(lexemes, fa), lexeme_word(lexemes, fb)))
        .then_with(|| fa.uid.cmp(&fb.uid))
}

/// Headword ordering for the lexeme index: collated word, then fewer
/// glosses first, then ascending uid.
pub fn lexeme_order(lexemes: &[Lexeme], a: LexemeIx, b: LexemeIx) -> Ordering {
    let la = &lexemes[a.index()];
    let lb = &lexemes[b.index()];
    order(&la.word, &lb.word)
        .then_with(|| la.glosses.len().cmp(&lb.glosses.len()))
        .then_with(|| la.uid.cmp(&lb.uid))
}

fn lexeme_word<'a>(lexemes: &'a [Lexeme], form: &Form) -> &'a str {
    form.lexeme
        .and_then(|ix| lexemes.get(ix.index()))
        .map(|lexeme| lexeme.word.as_str())
        .unwrap_or("")
}

fn lexeme_matches(lexemes: &[Lexeme], form: &Form, keyword: &str) -> bool {
    let word = lexeme_word(lexemes, form);
    !word.is_empty() && order(word, keyword) == Ordering::Equal
}
