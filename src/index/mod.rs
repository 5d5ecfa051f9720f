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

//! Prefix search index.
//!
//! A [`SearchIndex`] maps normalized keywords to [`SearchResult`] buckets.
//! Adding a word stores the entity under its accented-normalized spelling
//! (exact bucket), under its unaccented spelling when that differs, and
//! under every typed prefix of both (partial bucket, stopwords excluded).
//! A lookup normalizes the query the same way and probes the accented key
//! first, then the unaccented one.
//!
//! The index owns its keyword strings and holds non-owning entity handles;
//! the dictionary that built it owns the entities themselves.

use crate::core::error::{KoineError, Result};
use crate::core::Uid;
use crate::index::result::MAX_BUCKET;
use crate::storage::binary::{put_str, put_u24, put_u32, ByteReader};
use crate::unicode::{order_total, Normalizer};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::warn;

mod rank;
mod result;
mod stopwords;

pub use rank::{autocomplete_order, lexeme_order};
pub use result::{SearchResult, MAX_BUCKET as MAX_RESULTS};
pub use stopwords::is_stopword;

/// Keyword-to-results map for one retrieval axis
#[derive(Debug)]
pub struct SearchIndex<Ix> {
    entries: HashMap<String, SearchResult<Ix>>,
    normalizer: Normalizer,
}

impl<Ix: Copy + Eq> SearchIndex<Ix> {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            normalizer: Normalizer::new(),
        }
    }

    /// Number of keywords in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no keywords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index `entity` under `word`: exact buckets for the two normalized
    /// spellings, partial buckets for every non-stopword prefix.
    pub fn add(&mut self, word: &str, entity: Ix) -> Result<()> {
        let keywords = self.normalizer.keywords(word)?;

        let accented = keywords.accented.to_string();
        let unaccented = keywords.unaccented.to_string();
        let prefixes: Vec<String> = keywords
            .keywords
            .iter()
            .filter(|kw| !is_stopword(kw))
            .map(|kw| kw.to_string())
            .collect();

        self.entries
            .entry(accented.clone())
            .or_insert_with(|| SearchResult::new(accented.clone()))
            .exact_accented
            .push(entity);
        if unaccented != accented {
            self.entries
                .entry(unaccented.clone())
                .or_insert_with(|| SearchResult::new(unaccented.clone()))
                .exact_unaccented
                .push(entity);
        }
        for prefix in prefixes {
            self.entries
                .entry(prefix.clone())
                .or_insert_with(|| SearchResult::new(prefix))
                .partial_match
                .push(entity);
        }
        Ok(())
    }

    /// Probe the index for a query: the accented-normalized key first,
    /// then the unaccented one. Queries that fail normalization (too
    /// long) have no matches.
    pub fn lookup(&self, query: &str) -> Option<&SearchResult<Ix>> {
        let mut normalizer = Normalizer::new();
        let normalised = normalizer.normalise(query).ok()?;
        if let Some(result) = self.entries.get(normalised.accented) {
            return Some(result);
        }
        self.entries.get(normalised.unaccented)
    }

    /// Fetch the bucket stored under an exact keyword
    pub fn get(&self, keyword: &str) -> Option<&SearchResult<Ix>> {
        self.entries.get(keyword)
    }

    /// Sort every bucket with the comparator, which receives the keyword
    /// the bucket is stored under, and cap each bucket at
    /// [`MAX_RESULTS`]. Buckets are frozen afterwards.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&str, Ix, Ix) -> Ordering,
    {
        for (keyword, result) in self.entries.iter_mut() {
            result.sort_and_truncate(|a, b| cmp(keyword, *a, *b));
        }
    }

    /// Keywords sorted by the domain collator with its byte fallback, the
    /// order the binary export uses
    pub fn sorted_keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keywords.sort_by(|a, b| order_total(a, b));
        keywords
    }

    /// Iterate the stored results in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &SearchResult<Ix>> {
        self.entries.values()
    }

    /// Serialize the index: a u32 entry count, then each entry in
    /// collation order as keyword bytes, US, and the three buckets as a
    /// u8 count plus that many 24-bit uids. Buckets beyond
    /// [`MAX_RESULTS`] entries are truncated; a bucket that has grown
    /// past 255 entries (possible only before sorting) fails with
    /// [`KoineError::IndexTooLarge`].
    pub fn write_binary<F>(&self, out: &mut Vec<u8>, uid_of: F) -> Result<()>
    where
        F: Fn(Ix) -> Uid,
    {
        put_u32(out, self.entries.len() as u32);
        for keyword in self.sorted_keywords() {
            let result = &self.entries[keyword];
            put_str(out, keyword);
            for bucket in [
                &result.exact_accented,
                &result.exact_unaccented,
                &result.partial_match,
            ] {
                if bucket.len() > u8::MAX as usize {
                    return Err(KoineError::IndexTooLarge {
                        keyword: keyword.to_string(),
                        count: bucket.len(),
                    });
                }
                let count = bucket.len().min(MAX_BUCKET);
                out.push(count as u8);
                for entity in &bucket[..count] {
                    put_u24(out, uid_of(*entity))?;
                }
            }
        }
        Ok(())
    }

    /// Deserialize an index written by [`write_binary`]. Entity uids
    /// resolve through `resolve`; a uid with no entity is logged and
    /// dropped, leaving the rest of the bucket intact.
    ///
    /// [`write_binary`]: SearchIndex::write_binary
    pub fn read_binary<F>(reader: &mut ByteReader<'_>, resolve: F) -> Result<Self>
    where
        F: Fn(Uid) -> Option<Ix>,
    {
        let count = reader.read_u32()?;
        let mut index = Self::new();
        index.entries.reserve(count as usize);
        for _ in 0..count {
            let keyword = reader.read_str()?;
            let mut result = SearchResult::new(keyword.clone());
            for bucket in [
                &mut result.exact_accented,
                &mut result.exact_unaccented,
                &mut result.partial_match,
            ] {
                let entries = reader.read_u8()?;
                bucket.reserve(entries as usize);
                for _ in 0..entries {
                    let uid = reader.read_u24()?;
                    match resolve(uid) {
                        Some(entity) => bucket.push(entity),
                        None => {
                            warn!(keyword = %keyword, uid = uid.0, "dropping unresolved index entry");
                        }
                    }
                }
            }
            index.entries.insert(keyword, result);
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormIx;

    fn sample_index() -> SearchIndex<FormIx> {
        let mut index = SearchIndex::new();
        index.add("δράκων", FormIx(0)).unwrap();
        index.add("δράκοντα", FormIx(1)).unwrap();
        index.add("λύω", FormIx(2)).unwrap();
        index
    }

    #[test]
    fn exact_and_partial_buckets() {
        let index = sample_index();
        let hit = index.lookup("δράκων").unwrap();
        assert_eq!(hit.exact_accented, vec![FormIx(0)]);

        // unaccented query falls back to the unaccented bucket
        let hit = index.lookup("δρακων").unwrap();
        assert_eq!(hit.exact_unaccented, vec![FormIx(0)]);

        // a typed prefix matches both dragon forms
        let hit = index.lookup("δρα").unwrap();
        assert_eq!(hit.partial_match.len(), 2);
    }

    #[test]
    fn missing_query_is_none() {
        let index = sample_index();
        assert!(index.lookup("ξένος").is_none());
        let long = "α".repeat(600);
        assert!(index.lookup(&long).is_none());
    }

    #[test]
    fn stopword_prefixes_not_indexed() {
        let mut index: SearchIndex<FormIx> = SearchIndex::new();
        index.add("theology", FormIx(0)).unwrap();
        // "the" is a prefix of "theology" but also a stopword
        assert!(index.get("the").is_none());
        assert!(index.get("theo").is_some());
    }

    #[test]
    fn sort_is_idempotent() {
        let mut index = sample_index();
        let cmp = |_: &str, a: FormIx, b: FormIx| a.0.cmp(&b.0);
        index.sort_by(cmp);
        let first: Vec<Vec<FormIx>> = index
            .sorted_keywords()
            .iter()
            .map(|kw| index.get(kw).unwrap().partial_match.clone())
            .collect();
        index.sort_by(cmp);
        let second: Vec<Vec<FormIx>> = index
            .sorted_keywords()
            .iter()
            .map(|kw| index.get(kw).unwrap().partial_match.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn binary_round_trip_preserves_buckets() {
        let mut index = sample_index();
        index.sort_by(|_, a, b| a.0.cmp(&b.0));

        let mut bytes = Vec::new();
        index
            .write_binary(&mut bytes, |ix| Uid(ix.0 + 1000))
            .unwrap();

        let mut reader = ByteReader::new(&bytes);
        let reloaded: SearchIndex<FormIx> =
            SearchIndex::read_binary(&mut reader, |uid| Some(FormIx(uid.0 - 1000))).unwrap();
        assert!(reader.at_end());
        assert_eq!(reloaded.len(), index.len());
        for keyword in index.sorted_keywords() {
            assert_eq!(reloaded.get(keyword), index.get(keyword), "{keyword}");
        }
    }

    #[test]
    fn binary_export_is_deterministic() {
        let mut index = sample_index();
        index.sort_by(|_, a, b| a.0.cmp(&b.0));
        let mut first = Vec::new();
        index.write_binary(&mut first, |ix| Uid(ix.0 + 1)).unwrap();
        let mut second = Vec::new();
        index.write_binary(&mut second, |ix| Uid(ix.0 + 1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn overfull_unsorted_bucket_fails_export() {
        let mut index: SearchIndex<FormIx> = SearchIndex::new();
        for i in 0..256 {
            index.add("δράκων", FormIx(i)).unwrap();
        }
        let mut bytes = Vec::new();
        assert!(matches!(
            index.write_binary(&mut bytes, |ix| Uid(ix.0 + 1)),
            Err(KoineError::IndexTooLarge { count: 256, .. })
        ));

        // sorting truncates the buckets, after which export succeeds
        index.sort_by(|_, a, b| a.0.cmp(&b.0));
        let mut bytes = Vec::new();
        index.write_binary(&mut bytes, |ix| Uid(ix.0 + 1)).unwrap();
    }

    #[test]
    fn unresolved_uid_dropped_not_fatal() {
        let mut index = sample_index();
        index.sort_by(|_, a, b| a.0.cmp(&b.0));
        let mut bytes = Vec::new();
        index.write_binary(&mut bytes, |ix| Uid(ix.0 + 1)).unwrap();

        let mut reader = ByteReader::new(&bytes);
        // resolve nothing: every bucket comes back empty, no error
        let reloaded: SearchIndex<FormIx> =
            SearchIndex::read_binary(&mut reader, |_| None).unwrap();
        assert_eq!(reloaded.len(), index.len());
        assert!(reloaded.iter().all(SearchResult::is_empty));
    }
}
