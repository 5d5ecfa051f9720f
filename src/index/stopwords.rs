//! English stopwords excluded from gloss and partial-match indexing.

/// Words too common in glosses to be useful search keys
static STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had", "has",
    "have", "he", "her", "him", "his", "i", "in", "into", "is", "it", "its", "my", "no", "not",
    "of", "on", "one", "or", "our", "she", "so", "that", "the", "their", "them", "they", "this",
    "to", "unto", "upon", "was", "were", "which", "who", "will", "with", "you",
];

/// Whether a lowercased token is an English stopword
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        let mut sorted = STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOPWORDS);
    }

    #[test]
    fn common_words_are_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("of"));
        assert!(is_stopword("unto"));
        assert!(!is_stopword("dragon"));
        assert!(!is_stopword("serpent"));
    }
}
