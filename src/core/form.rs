//! Inflected surface forms

use crate::core::gloss::Gloss;
use crate::core::types::{LexemeIx, Uid};
use crate::morphology::Parsing;
use crate::reference::Reference;
use bitflags::bitflags;

bitflags! {
    /// Per-form boolean flags, laid out as the binary format stores them
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormFlags: u8 {
        /// The preferred spelling among equal surface forms
        const PREFERRED = 0x01;
        /// A known-incorrect spelling kept for lookup purposes
        const INCORRECT = 0x10;
    }
}

/// An inflected surface word belonging to a lexeme
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    /// Unique 24-bit id; zero until assignment
    pub uid: Uid,
    /// The surface word, non-empty after load
    pub word: String,
    /// Packed morphosyntactic analysis
    pub parsing: Parsing,
    /// Preferred/incorrect flags
    pub flags: FormFlags,
    /// Translations, at most one gloss per language
    pub glosses: Vec<Gloss>,
    /// Scripture references attesting this form
    pub references: Vec<Reference>,
    /// Back-pointer to the owning lexeme; set during load
    pub lexeme: Option<LexemeIx>,
}

impl Form {
    /// Create a bare form with no analysis attached yet
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            uid: Uid::UNASSIGNED,
            word: word.into(),
            parsing: Parsing::default(),
            flags: FormFlags::empty(),
            glosses: Vec::new(),
            references: Vec::new(),
            lexeme: None,
        }
    }

    /// Whether this is the preferred spelling
    pub fn preferred(&self) -> bool {
        self.flags.contains(FormFlags::PREFERRED)
    }

    /// Whether this spelling is marked incorrect
    pub fn incorrect(&self) -> bool {
        self.flags.contains(FormFlags::INCORRECT)
    }

    /// Attach a gloss, replacing any existing gloss for the same language
    pub fn set_gloss(&mut self, gloss: Gloss) {
        match self.glosses.iter_mut().find(|g| g.lang == gloss.lang) {
            Some(existing) => *existing = gloss,
            None => self.glosses.push(gloss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Lang;

    #[test]
    fn flags_match_binary_layout() {
        assert_eq!(FormFlags::PREFERRED.bits(), 0x01);
        assert_eq!(FormFlags::INCORRECT.bits(), 0x10);
        let flags = FormFlags::PREFERRED | FormFlags::INCORRECT;
        assert_eq!(flags.bits(), 0x11);
    }

    #[test]
    fn one_gloss_per_language() {
        let mut form = Form::new("λόγος");
        form.set_gloss(Gloss {
            lang: Lang::English,
            entries: vec!["word".into()],
        });
        form.set_gloss(Gloss {
            lang: Lang::English,
            entries: vec!["saying".into()],
        });
        assert_eq!(form.glosses.len(), 1);
        assert_eq!(form.glosses[0].entries, vec!["saying"]);
    }
}
