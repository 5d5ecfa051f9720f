//! Domain collation for Greek and mixed-script strings.
//!
//! Every sort in the crate runs on [`order`], which compares codepoints
//! through the single-character collation key of
//! [`normalise_char`](crate::unicode::tables::normalise_char): case,
//! accents, breathings and the final-sigma distinction are all invisible
//! to it. Sorts that must be reproducible across runs use [`order_total`],
//! which breaks collation ties bytewise.

use crate::unicode::tables::normalise_char;
use std::cmp::Ordering;

/// Compare two strings by their collation keys.
///
/// Strings that differ only in case, accents or breathings compare
/// [`Ordering::Equal`]. A string that is a strict prefix of the other
/// (by key) comes first.
pub fn order(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(lc), Some(rc)) => {
                let lk = normalise_char(lc) as u32;
                let rk = normalise_char(rc) as u32;
                match lk.cmp(&rk) {
                    Ordering::Equal => continue,
                    different => return different,
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// [`order`] with a bytewise fallback so equal-keyed strings still sort
/// deterministically.
pub fn order_total(a: &str, b: &str) -> Ordering {
    order(a, b).then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_breathings() {
        assert_eq!(order("Ἀννα", "αννα"), Ordering::Equal);
        assert_eq!(order("Ἀννα", "Μᾶρκος"), Ordering::Less);
    }

    #[test]
    fn accent_only_difference_is_equal() {
        assert_eq!(order("ᾷβγ", "αβγ"), Ordering::Equal);
        assert_ne!(order_total("ᾷβγ", "αβγ"), Ordering::Equal);
    }

    #[test]
    fn shorter_prefix_first() {
        assert_eq!(order("λύ", "λύω"), Ordering::Less);
        assert_eq!(order("λύω", "λύ"), Ordering::Greater);
    }

    #[test]
    fn trichotomy() {
        let words = ["αβγ", "ᾷβγ", "βγ", "Ἀννα", "Μᾶρκος", "λύω", "λύ"];
        for a in words {
            for b in words {
                let ab = order_total(a, b);
                let ba = order_total(b, a);
                assert_eq!(ab, ba.reverse(), "{a} vs {b}");
                if a == b {
                    assert_eq!(ab, Ordering::Equal);
                }
            }
        }
    }

    #[test]
    fn final_sigma_sorts_with_medial() {
        assert_eq!(order("λόγος", "λογοσ"), Ordering::Equal);
    }
}
