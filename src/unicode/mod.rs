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

//! Polytonic Greek text processing.
//!
//! Three layers, bottom up:
//!
//! - [`tables`]: pure per-codepoint functions over the Greek and Coptic
//!   (U+0370–U+03FF) and Greek Extended (U+1F00–U+1FFF) blocks. These are
//!   the semantic ground truth for everything above them.
//! - [`Normalizer`]: turns a raw word into its accented-normalized and
//!   unaccented spellings plus the prefix keywords the search index stores.
//! - [`order`]: the domain collator, a case-, accent- and breathing-blind
//!   codepoint comparison used by every sort in the crate.
//!
//! [`syllables`] splits a word for display layers that hyphenate.

pub mod tables;

mod collate;
mod normalize;
mod syllable;

pub use collate::{order, order_total};
pub use normalize::{
    Keywords, Normalised, Normalizer, MAX_KEYWORD_CHARS, MAX_WORD_BYTES, MIN_KEYWORD_CHARS,
};
pub use syllable::syllables;
