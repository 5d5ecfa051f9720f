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

//! Core data structures for the koine lexicon.
//!
//! This module contains the entity model shared by the rest of the crate:
//!
//! - **Lexemes**: dictionary headwords with articles, glosses and tags
//! - **Forms**: inflected surface words with packed parsings and references
//! - **Glosses**: per-language ordered translation entries
//! - **Uids**: 24-bit identifiers unique across lexemes and forms
//! - **Errors**: error types and result definitions
//!
//! # Ownership
//!
//! Entities live in Vec-backed stores owned by a
//! [`Dictionary`](crate::Dictionary). Cross-references between entities
//! (a form's back-pointer to its lexeme, a lexeme's form list, every search
//! index bucket) are typed handles ([`LexemeIx`], [`FormIx`]) rather than
//! owning pointers, so the whole graph is freed at once when the dictionary
//! is dropped.

mod form;
mod gloss;
mod lexeme;
mod types;

pub use form::{Form, FormFlags};
pub use gloss::{format_gloss_list, parse_gloss_list, Gloss};
pub use lexeme::{Lexeme, MAX_TAGS};
pub use types::{Article, FormIx, Lang, LexemeIx, Uid};

/// Error types
pub mod error;
