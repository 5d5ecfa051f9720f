//! Normalization and keyword derivation for polytonic Greek words.
//!
//! Every word entering a search index passes through [`Normalizer`], which
//! derives two spellings and the autocomplete keywords:
//!
//! - the **accented** form: lowercased, at most one accent (the first one
//!   encountered; later accents are stripped), sentence-final grave restored
//!   to acute, word-final sigma folded to `ς`;
//! - the **unaccented** form: lowercased with accents and breathings
//!   stripped entirely;
//! - the **keywords**: every prefix of both forms between two and fifty
//!   characters, which is exactly the set of partial queries a user can
//!   type while autocompleting.

use crate::core::error::{KoineError, Result};
use crate::unicode::tables::{fix_grave, lowercase, remove_accent, unaccent};

/// Words at or above this many bytes are rejected
pub const MAX_WORD_BYTES: usize = 500;

/// Shortest prefix stored as a keyword, in characters
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Longest prefix stored as a keyword, in characters
pub const MAX_KEYWORD_CHARS: usize = 50;

/// The two normalized spellings of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalised<'a> {
    /// Lowercased spelling with a single surviving accent
    pub accented: &'a str,
    /// Lowercased spelling with accents and breathings stripped
    pub unaccented: &'a str,
}

/// Normalized spellings plus the autocomplete keyword prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords<'a> {
    /// Lowercased spelling with a single surviving accent
    pub accented: &'a str,
    /// Lowercased spelling with accents and breathings stripped
    pub unaccented: &'a str,
    /// Prefixes of both spellings, shortest first
    pub keywords: Vec<&'a str>,
}

/// Reusable normalization scratch.
///
/// A `Normalizer` owns the output buffers, so a caller looping over many
/// words pays for at most one allocation per buffer growth. The borrows
/// returned by [`normalise`](Normalizer::normalise) and
/// [`keywords`](Normalizer::keywords) are valid until the next call.
#[derive(Debug, Default)]
pub struct Normalizer {
    accented: String,
    unaccented: String,
}

impl Normalizer {
    /// Create a normalizer with empty scratch buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the accented and unaccented spellings of `word`.
    pub fn normalise(&mut self, word: &str) -> Result<Normalised<'_>> {
        self.run(word)?;
        Ok(Normalised {
            accented: &self.accented,
            unaccented: &self.unaccented,
        })
    }

    /// Derive the normalized spellings and every autocomplete prefix.
    ///
    /// Prefixes come from the accented spelling, and from the unaccented
    /// spelling where it diverges, between [`MIN_KEYWORD_CHARS`] and
    /// [`MAX_KEYWORD_CHARS`] characters.
    pub fn keywords(&mut self, word: &str) -> Result<Keywords<'_>> {
        self.run(word)?;
        let mut keywords = Vec::new();
        let accented_ends = prefix_ends(&self.accented);
        let unaccented_ends = prefix_ends(&self.unaccented);
        for (slot, &end) in accented_ends.iter().enumerate() {
            keywords.push(&self.accented[..end]);
            if let Some(&uend) = unaccented_ends.get(slot) {
                let unaccented = &self.unaccented[..uend];
                if unaccented != &self.accented[..end] {
                    keywords.push(unaccented);
                }
            }
        }
        Ok(Keywords {
            accented: &self.accented,
            unaccented: &self.unaccented,
            keywords,
        })
    }

    fn run(&mut self, word: &str) -> Result<()> {
        if word.len() >= MAX_WORD_BYTES {
            return Err(KoineError::WordTooLong(word.len()));
        }
        self.accented.clear();
        self.unaccented.clear();
        let mut saw_accent = false;
        for (i, c) in word.char_indices() {
            if c.is_whitespace() {
                saw_accent = false;
            }

            match unaccent(c) {
                Some(bare) => self.unaccented.push(bare),
                None => self.unaccented.push(lowercase(c).unwrap_or(c)),
            }

            if let Some(base) = remove_accent(c) {
                if saw_accent {
                    // Only the first accent of a word survives.
                    self.accented.push(base);
                } else {
                    saw_accent = true;
                    match fix_grave(c) {
                        Some(acute) => self.accented.push(acute),
                        None => self.accented.push(lowercase(c).unwrap_or(c)),
                    }
                }
            } else if matches!(c, 'σ' | 'Σ' | 'ς') && i + c.len_utf8() == word.len() {
                self.accented.push('ς');
            } else {
                self.accented.push(lowercase(c).unwrap_or(c));
            }
        }
        Ok(())
    }
}

/// Byte offsets ending each keyword-length prefix of `s`
fn prefix_ends(s: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut count = 0usize;
    for (i, c) in s.char_indices() {
        count += 1;
        if count > MAX_KEYWORD_CHARS {
            break;
        }
        if count >= MIN_KEYWORD_CHARS {
            ends.push(i + c.len_utf8());
        }
    }
    ends
}
