//! Dictionary headwords

use crate::core::gloss::Gloss;
use crate::core::types::{Article, FormIx, Lang, Uid};
use crate::morphology::Parsing;

/// Most tags a lexeme may carry
pub const MAX_TAGS: usize = 10;

/// A dictionary headword with its inflected forms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lexeme {
    /// Unique 24-bit id; zero until assignment
    pub uid: Uid,
    /// The headword as written in the source
    pub word: String,
    /// Language of the headword
    pub lang: Lang,
    /// Canonical article, when the lexeme takes one
    pub article: Article,
    /// Part of speech, stored as a parsing value
    pub pos: Parsing,
    /// Handles to the forms owned by this lexeme, in source order
    pub forms: Vec<FormIx>,
    /// Strong's concordance numbers
    pub strongs: Vec<u16>,
    /// Translations, at most one gloss per language
    pub glosses: Vec<Gloss>,
    /// Root word, when recorded
    pub root: String,
    /// Genitive suffix hint for display
    pub genitive_suffix: String,
    /// Adjective cross-reference, when recorded
    pub adjective: String,
    /// Free-text editorial note
    pub note: String,
    /// Small set of editorial tags
    pub tags: Vec<String>,
}

impl Lexeme {
    /// Create a bare lexeme
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Attach a gloss, replacing any existing gloss for the same language
    pub fn set_gloss(&mut self, gloss: Gloss) {
        match self.glosses.iter_mut().find(|g| g.lang == gloss.lang) {
            Some(existing) => *existing = gloss,
            None => self.glosses.push(gloss),
        }
    }

    /// The first form handle, when any form was loaded.
    ///
    /// The first form in source order is the primary spelling used when
    /// indexing the lexeme's own glosses.
    pub fn primary_form(&self) -> Option<FormIx> {
        self.forms.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_form_is_first_loaded() {
        let mut lexeme = Lexeme::new("δράκων");
        assert!(lexeme.primary_form().is_none());
        lexeme.forms.push(FormIx(7));
        lexeme.forms.push(FormIx(9));
        assert_eq!(lexeme.primary_form(), Some(FormIx(7)));
    }
}
