//! Ranked result buckets for one keyword.

use std::cmp::Ordering;

/// Most entries a bucket keeps after sorting, and the most the binary
/// format will serialize
pub const MAX_BUCKET: usize = 60;

/// The three match-quality buckets stored under one keyword.
///
/// Callers walk the buckets in declared order: a hit in `exact_accented`
/// outranks any hit in `exact_unaccented`, which outranks every
/// `partial_match`. The buckets are never mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<Ix> {
    /// The normalized keyword this result is stored under
    pub keyword: String,
    /// Entities whose accented-normalized spelling equals the keyword
    pub exact_accented: Vec<Ix>,
    /// Entities whose unaccented spelling equals the keyword
    pub exact_unaccented: Vec<Ix>,
    /// Entities for which the keyword is a typed prefix
    pub partial_match: Vec<Ix>,
}

impl<Ix> SearchResult<Ix> {
    /// Create empty buckets for a keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            exact_accented: Vec::new(),
            exact_unaccented: Vec::new(),
            partial_match: Vec::new(),
        }
    }

    /// Total entries across the three buckets
    pub fn len(&self) -> usize {
        self.exact_accented.len() + self.exact_unaccented.len() + self.partial_match.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sort every bucket with the comparator and drop entries beyond
    /// [`MAX_BUCKET`]. After this the buckets are frozen.
    pub fn sort_and_truncate<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Ix, &Ix) -> Ordering,
    {
        self.exact_accented.sort_by(&mut cmp);
        self.exact_unaccented.sort_by(&mut cmp);
        self.partial_match.sort_by(&mut cmp);
        self.exact_accented.truncate(MAX_BUCKET);
        self.exact_unaccented.truncate(MAX_BUCKET);
        self.partial_match.truncate(MAX_BUCKET);
    }
}
