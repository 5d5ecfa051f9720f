//! Romanized spellings for Greek and Hebrew words.

use crate::unicode::tables::{lowercase, unaccent};

/// Transliterate a Greek or Hebrew word into Latin letters.
///
/// Diacritics and whitespace are dropped. With `allow_unicode` the long
/// vowels keep their macrons (`η` → `ē`, `ω` → `ō`); without it they
/// collapse onto their short partners, which is what the search index
/// wants, since nobody types a macron into an autocomplete box.
pub fn transliterate_word(word: &str, allow_unicode: bool) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_whitespace() || is_dropped_mark(c) {
            continue;
        }
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        let capital = lowercase(c).is_some();
        if let Some(bare) = unaccent(c) {
            push_latin(&mut out, greek_letter(bare, allow_unicode), capital);
        } else if let Some(latin) = hebrew_letter(c) {
            push_latin(&mut out, latin, capital);
        }
        // Anything else has no romanization and is dropped.
    }
    out
}

fn push_latin(out: &mut String, latin: &str, capital: bool) {
    if capital {
        let mut chars = latin.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    } else {
        out.push_str(latin);
    }
}

fn greek_letter(bare: char, allow_unicode: bool) -> &'static str {
    match bare {
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => {
            if allow_unicode {
                "ē"
            } else {
                "e"
            }
        }
        'θ' => "th",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'ο' => "o",
        'π' => "p",
        'ρ' => "r",
        'σ' => "s",
        'τ' => "t",
        'υ' => "u",
        'φ' => "ph",
        'χ' => "ch",
        'ψ' => "ps",
        'ω' => {
            if allow_unicode {
                "ō"
            } else {
                "o"
            }
        }
        'ϝ' => "w",
        _ => "",
    }
}

fn hebrew_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'א' => "'",
        'ב' => "b",
        'ג' => "g",
        'ד' => "d",
        'ה' => "h",
        'ו' => "w",
        'ז' => "z",
        'ח' => "ch",
        'ט' => "t",
        'י' => "y",
        'כ' | 'ך' => "k",
        'ל' => "l",
        'מ' | 'ם' => "m",
        'נ' | 'ן' => "n",
        'ס' => "s",
        'ע' => "'",
        'פ' | 'ף' => "p",
        'צ' | 'ץ' => "ts",
        'ק' => "q",
        'ר' => "r",
        'ש' => "sh",
        'ת' => "t",
        _ => return None,
    })
}

/// Standalone diacritic and editorial codepoints with no romanization
fn is_dropped_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0384}'..='\u{0385}'
            | '\u{1FBD}'..='\u{1FC1}'
            | '\u{1FCD}'..='\u{1FCF}'
            | '\u{1FDD}'..='\u{1FDF}'
            | '\u{1FED}'..='\u{1FEF}'
            | '\u{1FFD}'..='\u{1FFE}'
            | '\u{00AF}'
            | '\u{02B9}'
            | '\u{2019}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_greek() {
        assert_eq!(transliterate_word("λόγος", false), "logos");
        assert_eq!(transliterate_word("δράκων", false), "drakon");
        assert_eq!(transliterate_word("ψυχή", false), "psuche");
    }

    #[test]
    fn long_vowels_follow_the_flag() {
        // Breathings are dropped along with the other diacritics.
        assert_eq!(transliterate_word("ὥρα", true), "ōra");
        assert_eq!(transliterate_word("ζωή", true), "zōē");
        assert_eq!(transliterate_word("ζωή", false), "zoe");
    }

    #[test]
    fn capitals_capitalize_digraphs() {
        assert_eq!(transliterate_word("Θεός", false), "Theos");
        assert_eq!(transliterate_word("Χριστός", false), "Christos");
    }

    #[test]
    fn hebrew_letters() {
        assert_eq!(transliterate_word("שלום", false), "shlwm");
        assert_eq!(transliterate_word("אב", false), "'b");
    }

    #[test]
    fn marks_and_whitespace_dropped() {
        assert_eq!(transliterate_word("ἀπ᾽ ἐμοῦ", false), "apemou");
    }
}
