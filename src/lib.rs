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

//! # Koine
//!
//! A lexical database for Koine Greek: dictionaries of lexemes and their
//! inflected forms, indexed for interactive prefix search by form, lemma,
//! gloss and transliteration, with full polytonic Unicode handling.
//!
//! ## Features
//!
//! - **Polytonic normalization**: accent-aware and accent-blind spellings,
//!   final-sigma folding, grave-to-acute restoration, prefix keywording
//! - **Four search axes**: headwords, surface forms, gloss tokens and
//!   romanized spellings, each with exact and partial match buckets
//! - **Packed parsings**: a 32-bit morphosyntactic analysis with four tag
//!   dialects (native Byzantine-style, CCAT, MorphGNT, CNTR)
//! - **Beta-Code conversion**: ASCII transliterations to polytonic Greek,
//!   Robinson-Pierpont and TLG dialects
//! - **Dual persistence**: a hand-editable text format and a compact,
//!   byte-reproducible binary format with embedded indexes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use koine::Dictionary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dictionary = Dictionary::load_file("greek.dict")?;
//!
//! if let Some(hit) = dictionary.by_form().lookup("λογος") {
//!     for form_ix in &hit.exact_unaccented {
//!         let form = dictionary.form(*form_ix);
//!         println!("{} {}", form.word, form.parsing);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`]: the entity model (lexemes, forms, glosses, uids) and errors
//! - [`unicode`]: codepoint tables, normalizer, collator, syllabifier
//! - [`morphology`]: the packed [`Parsing`] value and its tag dialects
//! - [`betacode`]: Beta-Code to Unicode conversion
//! - [`reference`]: scripture reference tables and parsing
//! - [`index`]: the keyword-to-results search index
//! - [`storage`]: text and binary codecs
//! - [`dictionary`]: the facade owning stores and indexes
//!
//! ## Concurrency
//!
//! Loading is single-threaded. Once loaded (and therefore sorted), a
//! [`Dictionary`] is immutable and can be shared freely among readers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod betacode;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod index;
pub mod logging;
pub mod morphology;
pub mod reference;
pub mod storage;
pub mod unicode;

pub use crate::core::error::{KoineError, Result};
pub use crate::core::{Form, FormIx, Gloss, Lang, Lexeme, LexemeIx, Uid};
pub use crate::dictionary::Dictionary;
pub use crate::index::{SearchIndex, SearchResult};
pub use crate::morphology::{transliterate_word, Parsing};
pub use crate::unicode::Normalizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
