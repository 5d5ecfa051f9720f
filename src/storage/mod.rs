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

//! Dual-format persistence for dictionaries.
//!
//! Two codecs over the same entity model:
//!
//! - [`text`]: line-oriented, pipe-separated UTF-8, the format editors
//!   touch by hand.
//! - [`binary`]: compact records framed with US/RS/FS separators and
//!   little-endian integers, with the search indexes embedded so a binary
//!   load needs no re-keywording. Output is byte-reproducible for the
//!   same input.
//!
//! A file is binary exactly when it opens with the two magic bytes
//! `[99, 1]`; everything else is read as text.

pub mod binary;
pub mod text;

pub use binary::{ByteReader, FS, MAGIC, RS, US};
