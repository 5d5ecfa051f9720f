// Copyright 2025 Roberto Antunes
//
// Licensed under the Functional Source License, Version 1.1 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://github.com/RobAntunes/koine/blob/main/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The dictionary facade.
//!
//! A [`Dictionary`] owns the lexeme and form stores and the four search
//! indexes over them:
//!
//! - `by_lexeme`: headwords
//! - `by_form`: inflected surface forms
//! - `by_gloss`: English (and other) gloss tokens, plus romanized headwords
//! - `by_transliteration`: romanized spellings of every form
//!
//! Loading reads text or binary (detected from the magic bytes), assigns
//! missing uids, builds and sorts the indexes; after that the dictionary
//! is immutable and may be shared freely between readers.

use crate::core::error::{KoineError, Result};
use crate::core::{Form, FormIx, Lexeme, LexemeIx, Uid};
use crate::index::{autocomplete_order, is_stopword, lexeme_order, SearchIndex};
use crate::morphology::transliterate_word;
use crate::storage::binary::{put_u16, put_u32, ByteReader, FS, MAGIC};
use crate::storage::{binary, text};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info};

/// Smallest uid the generator will hand out; lower values are reserved
/// for hand-numbered entries
pub const MIN_GENERATED_UID: u32 = 100_000;

/// A loaded lexicon: entity stores plus the four search indexes
#[derive(Debug)]
pub struct Dictionary {
    lexemes: Vec<Lexeme>,
    forms: Vec<Form>,
    by_lexeme: SearchIndex<LexemeIx>,
    by_form: SearchIndex<FormIx>,
    by_gloss: SearchIndex<FormIx>,
    by_transliteration: SearchIndex<FormIx>,
    lexeme_uids: HashMap<Uid, LexemeIx>,
    form_uids: HashMap<Uid, FormIx>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self {
            lexemes: Vec::new(),
            forms: Vec::new(),
            by_lexeme: SearchIndex::new(),
            by_form: SearchIndex::new(),
            by_gloss: SearchIndex::new(),
            by_transliteration: SearchIndex::new(),
            lexeme_uids: HashMap::new(),
            form_uids: HashMap::new(),
        }
    }

    /// Load a dictionary file, detecting the format from its first two
    /// bytes: `[99, 1]` is binary, anything else is text.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { memmap2::Mmap::map(&file)? };
        let bytes: &[u8] = &mmap;
        debug!(path = %path.display(), bytes = bytes.len(), "loading dictionary file");
        if bytes.len() >= 2 && bytes[..2] == MAGIC {
            Self::load_binary(bytes)
        } else {
            let source = std::str::from_utf8(bytes).map_err(|_| KoineError::InvalidUtf8)?;
            Self::load_text(source)
        }
    }

    /// Load the text format
    pub fn load_text(source: &str) -> Result<Self> {
        let (lexemes, forms) = text::parse_text(source).map_err(|err| {
            error!(%err, "dictionary parse failed");
            err
        })?;
        let mut dictionary = Self::new();
        dictionary.lexemes = lexemes;
        dictionary.forms = forms;
        dictionary.assign_uids();
        dictionary.build_uid_maps()?;
        dictionary.build_indexes()?;
        dictionary.sort_indexes();
        info!(
            lexemes = dictionary.lexemes.len(),
            forms = dictionary.forms.len(),
            keywords = dictionary.by_form.len(),
            "text dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Load the binary format, embedded indexes included. Buckets come
    /// back exactly as they were written; nothing is re-sorted.
    pub fn load_binary(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);
        reader.expect(MAGIC[0])?;
        reader.expect(MAGIC[1])?;

        let mut dictionary = Self::new();
        let lexeme_count = reader.read_u32()?;
        dictionary.lexemes.reserve(lexeme_count as usize);
        for _ in 0..lexeme_count {
            let mut lexeme = binary::read_lexeme(&mut reader)?;
            let lexeme_ix = LexemeIx(dictionary.lexemes.len() as u32);
            let form_count = reader.read_u16()?;
            lexeme.forms.reserve(form_count as usize);
            for _ in 0..form_count {
                let mut form = binary::read_form(&mut reader)?;
                form.lexeme = Some(lexeme_ix);
                let form_ix = FormIx(dictionary.forms.len() as u32);
                lexeme.forms.push(form_ix);
                dictionary.forms.push(form);
            }
            dictionary.lexemes.push(lexeme);
        }
        dictionary.build_uid_maps()?;

        reader.expect(FS)?;
        let lexeme_uids = &dictionary.lexeme_uids;
        dictionary.by_lexeme =
            SearchIndex::read_binary(&mut reader, |uid| lexeme_uids.get(&uid).copied())?;
        reader.expect(FS)?;
        let form_uids = &dictionary.form_uids;
        dictionary.by_form =
            SearchIndex::read_binary(&mut reader, |uid| form_uids.get(&uid).copied())?;
        reader.expect(FS)?;
        dictionary.by_gloss =
            SearchIndex::read_binary(&mut reader, |uid| form_uids.get(&uid).copied())?;
        reader.expect(FS)?;
        dictionary.by_transliteration =
            SearchIndex::read_binary(&mut reader, |uid| form_uids.get(&uid).copied())?;
        reader.expect(FS)?;
        if !reader.at_end() {
            return Err(KoineError::InvalidDictionaryFile(
                "trailing bytes after final separator".to_string(),
            ));
        }

        info!(
            lexemes = dictionary.lexemes.len(),
            forms = dictionary.forms.len(),
            "binary dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Render the text format
    pub fn write_text(&self) -> String {
        text::write_text(&self.lexemes, &self.forms)
    }

    /// Save the text format to a file
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.write_text().as_bytes())?;
        Ok(())
    }

    /// Serialize the binary format. Output is byte-identical across runs
    /// for the same dictionary.
    pub fn write_binary(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.extend_from_slice(&MAGIC);
        put_u32(&mut out, self.lexemes.len() as u32);
        for lexeme in &self.lexemes {
            binary::put_lexeme(&mut out, lexeme)?;
            put_u16(&mut out, lexeme.forms.len() as u16);
            for form_ix in &lexeme.forms {
                binary::put_form(&mut out, &self.forms[form_ix.index()])?;
            }
        }
        out.push(FS);
        self.by_lexeme
            .write_binary(&mut out, |ix| self.lexemes[ix.index()].uid)?;
        out.push(FS);
        self.by_form
            .write_binary(&mut out, |ix| self.forms[ix.index()].uid)?;
        out.push(FS);
        self.by_gloss
            .write_binary(&mut out, |ix| self.forms[ix.index()].uid)?;
        out.push(FS);
        self.by_transliteration
            .write_binary(&mut out, |ix| self.forms[ix.index()].uid)?;
        out.push(FS);
        Ok(out)
    }

    /// Save the binary format to a file
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.write_binary()?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    /// The headword index
    pub fn by_lexeme(&self) -> &SearchIndex<LexemeIx> {
        &self.by_lexeme
    }

    /// The surface-form index
    pub fn by_form(&self) -> &SearchIndex<FormIx> {
        &self.by_form
    }

    /// The gloss-token index
    pub fn by_gloss(&self) -> &SearchIndex<FormIx> {
        &self.by_gloss
    }

    /// The romanized-spelling index
    pub fn by_transliteration(&self) -> &SearchIndex<FormIx> {
        &self.by_transliteration
    }

    /// All lexemes in load order
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// All forms in load order
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    /// Resolve a lexeme handle
    pub fn lexeme(&self, ix: LexemeIx) -> &Lexeme {
        &self.lexemes[ix.index()]
    }

    /// Resolve a form handle
    pub fn form(&self, ix: FormIx) -> &Form {
        &self.forms[ix.index()]
    }

    /// Find a lexeme by uid
    pub fn lexeme_by_uid(&self, uid: Uid) -> Option<&Lexeme> {
        self.lexeme_uids.get(&uid).map(|ix| self.lexeme(*ix))
    }

    /// Find a form by uid
    pub fn form_by_uid(&self, uid: Uid) -> Option<&Form> {
        self.form_uids.get(&uid).map(|ix| self.form(*ix))
    }

    /// Draw random uids for every entity still carrying uid zero,
    /// avoiding collisions with both uid namespaces.
    fn assign_uids(&mut self) {
        let mut taken: HashSet<Uid> = HashSet::new();
        for lexeme in &self.lexemes {
            if lexeme.uid.is_assigned() {
                taken.insert(lexeme.uid);
            }
        }
        for form in &self.forms {
            if form.uid.is_assigned() {
                taken.insert(form.uid);
            }
        }

        for lexeme in &mut self.lexemes {
            if !lexeme.uid.is_assigned() {
                lexeme.uid = generate_uid(&mut taken);
            }
        }
        for form in &mut self.forms {
            if !form.uid.is_assigned() {
                form.uid = generate_uid(&mut taken);
            }
        }
    }

    fn build_uid_maps(&mut self) -> Result<()> {
        self.lexeme_uids.clear();
        self.form_uids.clear();
        self.lexeme_uids.reserve(self.lexemes.len());
        self.form_uids.reserve(self.forms.len());
        for (i, lexeme) in self.lexemes.iter().enumerate() {
            if self
                .lexeme_uids
                .insert(lexeme.uid, LexemeIx(i as u32))
                .is_some()
                || self.form_uids.contains_key(&lexeme.uid)
            {
                return Err(KoineError::InvalidDictionaryFile(format!(
                    "duplicate uid {}",
                    lexeme.uid
                )));
            }
        }
        for (i, form) in self.forms.iter().enumerate() {
            if self.form_uids.insert(form.uid, FormIx(i as u32)).is_some()
                || self.lexeme_uids.contains_key(&form.uid)
            {
                return Err(KoineError::InvalidDictionaryFile(format!(
                    "duplicate uid {}",
                    form.uid
                )));
            }
        }
        Ok(())
    }

    fn build_indexes(&mut self) -> Result<()> {
        for (i, lexeme) in self.lexemes.iter().enumerate() {
            self.by_lexeme.add(&lexeme.word, LexemeIx(i as u32))?;
        }
        for (i, form) in self.forms.iter().enumerate() {
            self.by_form.add(&form.word, FormIx(i as u32))?;
        }
        self.build_gloss_index()?;
        for (i, form) in self.forms.iter().enumerate() {
            let romanized = transliterate_word(&form.word, false);
            if !romanized.is_empty() {
                self.by_transliteration.add(&romanized, FormIx(i as u32))?;
            }
        }
        Ok(())
    }

    /// Index gloss tokens. The lexeme's own glosses are credited to its
    /// primary (first) form; each further form carries its own glosses.
    /// Within one lexeme a token is indexed once, and the romanized
    /// headword joins the gloss keys so latin-letter queries can reach
    /// Greek entries.
    fn build_gloss_index(&mut self) -> Result<()> {
        for lexeme in &self.lexemes {
            let Some(primary) = lexeme.primary_form() else {
                continue;
            };
            let mut seen: HashSet<String> = HashSet::new();

            for gloss in &lexeme.glosses {
                for entry in &gloss.entries {
                    for token in gloss_tokens(entry) {
                        if seen.insert(token.clone()) {
                            self.by_gloss.add(&token, primary)?;
                        }
                    }
                }
            }

            let romanized = transliterate_word(&lexeme.word, false);
            if !romanized.is_empty() && !is_stopword(&romanized) && seen.insert(romanized.clone()) {
                self.by_gloss.add(&romanized, primary)?;
            }

            for form_ix in &lexeme.forms {
                let form = &self.forms[form_ix.index()];
                for gloss in &form.glosses {
                    for entry in &gloss.entries {
                        for token in gloss_tokens(entry) {
                            if seen.insert(token.clone()) {
                                self.by_gloss.add(&token, *form_ix)?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn sort_indexes(&mut self) {
        let lexemes = &self.lexemes;
        let forms = &self.forms;
        self.by_lexeme
            .sort_by(|_, a, b| lexeme_order(lexemes, a, b));
        self.by_form
            .sort_by(|keyword, a, b| autocomplete_order(forms, lexemes, keyword, a, b));
        self.by_gloss
            .sort_by(|keyword, a, b| autocomplete_order(forms, lexemes, keyword, a, b));
        self.by_transliteration
            .sort_by(|keyword, a, b| autocomplete_order(forms, lexemes, keyword, a, b));
    }
}

/// Lowercased alphanumeric tokens of a gloss entry, stopwords removed
fn gloss_tokens(entry: &str) -> Vec<String> {
    entry
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !is_stopword(t))
        .collect()
}

/// Process-wide xorshift state, seeded from the clock on first use and
/// never re-seeded.
static UID_RNG: OnceLock<Mutex<u64>> = OnceLock::new();

fn generate_uid(taken: &mut HashSet<Uid>) -> Uid {
    loop {
        let candidate = next_random_u24();
        if candidate < MIN_GENERATED_UID {
            continue;
        }
        let uid = Uid(candidate);
        if taken.insert(uid) {
            return uid;
        }
    }
}

fn next_random_u24() -> u32 {
    let cell = UID_RNG.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15)
            | 1;
        Mutex::new(seed)
    });
    let mut state = cell.lock().unwrap_or_else(|e| e.into_inner());
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    (x >> 16) as u32 & Uid::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_uids_respect_floor_and_width() {
        let mut taken = HashSet::new();
        for _ in 0..1000 {
            let uid = generate_uid(&mut taken);
            assert!(uid.0 >= MIN_GENERATED_UID);
            assert!(uid.0 <= Uid::MAX);
        }
        assert_eq!(taken.len(), 1000);
    }

    #[test]
    fn gloss_tokens_drop_stopwords_and_punctuation() {
        assert_eq!(gloss_tokens("the large serpent"), vec!["large", "serpent"]);
        assert_eq!(gloss_tokens("loose, untie"), vec!["loose", "untie"]);
        assert!(gloss_tokens("of the").is_empty());
    }
}
