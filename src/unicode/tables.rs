//! Codepoint tables for polytonic Greek.
//!
//! Unicode Greek ranges:
//! - [Greek and Coptic](https://www.unicode.org/charts/PDF/U0370.pdf)
//! - [Greek Extended](https://www.unicode.org/charts/PDF/U1F00.pdf)
//!
//! Every text-processing step in the crate bottoms out in these per-codepoint
//! functions. Codepoints that look alike on screen are not alike in the
//! charts: the oxia/varia series (U+1F70..U+1F7D and the matching capitals)
//! is written with `\u{..}` escapes so the tables stay unambiguous.

// Match statements usually try to benefit from some fast path.
#![allow(clippy::match_same_arms)]

/// Check if a character is in the _Greek and Coptic_ range.
pub const fn is_greek_and_coptic_char(ch: char) -> bool {
    ch >= '\u{0370}' && ch <= '\u{03FF}'
}

/// Check if a character is in the _Greek Extended_ range.
pub const fn is_greek_extended_char(ch: char) -> bool {
    ch >= '\u{1F00}' && ch <= '\u{1FFF}'
}

/// Check if a character is in either Greek range, punctuation included.
pub const fn is_greek_char(ch: char) -> bool {
    is_greek_and_coptic_char(ch) || is_greek_extended_char(ch)
}

/// Check if a character is a Greek letter, excluding the standalone
/// punctuation and diacritic codepoints both Greek blocks carry.
pub const fn is_greek_letter(ch: char) -> bool {
    match ch {
        '\u{375}' | '\u{37E}' | '\u{384}' | '\u{385}' | '\u{387}' | '\u{3F6}' | '\u{1FBD}'
        | '\u{1FBF}' | '\u{1FC0}' | '\u{1FC1}' | '\u{1FCD}' | '\u{1FCE}' | '\u{1FCF}'
        | '\u{1FDD}' | '\u{1FDE}' | '\u{1FDF}' | '\u{1FED}' | '\u{1FEE}' | '\u{1FEF}'
        | '\u{1FFD}' | '\u{1FFE}' => false,
        _ => is_greek_char(ch),
    }
}

/// Strip accents and breathings, returning the lowercase bare letter.
///
/// Defined for every Greek letter; `None` for anything else. Final sigma
/// and lunate sigma both fold to `σ`, dieresis is folded for ι/υ.
pub fn unaccent(c: char) -> Option<char> {
    match c {
        // alpha
        'α' | 'ά' | '\u{1F70}' | '\u{1F71}' | 'ᾶ' | 'ἀ' | 'ἁ' | 'ἂ' | 'ἃ' | 'ἄ' | 'ἅ' | 'ἆ'
        | 'ἇ' | 'ᾳ' | 'ᾲ' | 'ᾴ' | 'ᾷ' | 'ᾀ' | 'ᾁ' | 'ᾂ' | 'ᾃ' | 'ᾄ' | 'ᾅ' | 'ᾆ' | 'ᾇ' | 'ᾰ'
        | 'ᾱ' | 'Α' | 'Ά' | '\u{1FBA}' | '\u{1FBB}' | 'Ἀ' | 'Ἁ' | 'Ἂ' | 'Ἃ' | 'Ἄ' | 'Ἅ'
        | 'Ἆ' | 'Ἇ' | 'ᾼ' | 'ᾈ' | 'ᾉ' | 'ᾊ' | 'ᾋ' | 'ᾌ' | 'ᾍ' | 'ᾎ' | 'ᾏ' | 'Ᾰ' | 'Ᾱ' => {
            Some('α')
        }
        // epsilon
        'ε' | 'έ' | '\u{1F72}' | '\u{1F73}' | 'ἐ' | 'ἑ' | 'ἒ' | 'ἓ' | 'ἔ' | 'ἕ' | 'Ε' | 'Έ'
        | '\u{1FC8}' | '\u{1FC9}' | 'Ἐ' | 'Ἑ' | 'Ἒ' | 'Ἓ' | 'Ἔ' | 'Ἕ' => Some('ε'),
        // eta
        'η' | 'ή' | '\u{1F74}' | '\u{1F75}' | 'ῆ' | 'ἠ' | 'ἡ' | 'ἢ' | 'ἣ' | 'ἤ' | 'ἥ' | 'ἦ'
        | 'ἧ' | 'ῃ' | 'ῂ' | 'ῄ' | 'ῇ' | 'ᾐ' | 'ᾑ' | 'ᾒ' | 'ᾓ' | 'ᾔ' | 'ᾕ' | 'ᾖ' | 'ᾗ' | 'Η'
        | 'Ή' | '\u{1FCA}' | '\u{1FCB}' | 'Ἠ' | 'Ἡ' | 'Ἢ' | 'Ἣ' | 'Ἤ' | 'Ἥ' | 'Ἦ' | 'Ἧ'
        | 'ῌ' | 'ᾘ' | 'ᾙ' | 'ᾚ' | 'ᾛ' | 'ᾜ' | 'ᾝ' | 'ᾞ' | 'ᾟ' => Some('η'),
        // iota
        'ι' | 'ί' | '\u{1F76}' | '\u{1F77}' | 'ῖ' | 'ἰ' | 'ἱ' | 'ἲ' | 'ἳ' | 'ἴ' | 'ἵ' | 'ἶ'
        | 'ἷ' | 'ϊ' | 'ΐ' | '\u{1FD2}' | '\u{1FD3}' | 'ῗ' | 'ῐ' | 'ῑ' | 'Ι' | 'Ί'
        | '\u{1FDA}' | '\u{1FDB}' | 'Ἰ' | 'Ἱ' | 'Ἲ' | 'Ἳ' | 'Ἴ' | 'Ἵ' | 'Ἶ' | 'Ἷ' | 'Ϊ'
        | 'Ῐ' | 'Ῑ' => Some('ι'),
        // omicron
        'ο' | 'ό' | '\u{1F78}' | '\u{1F79}' | 'ὀ' | 'ὁ' | 'ὂ' | 'ὃ' | 'ὄ' | 'ὅ' | 'Ο' | 'Ό'
        | '\u{1FF8}' | '\u{1FF9}' | 'Ὀ' | 'Ὁ' | 'Ὂ' | 'Ὃ' | 'Ὄ' | 'Ὅ' => Some('ο'),
        // upsilon
        'υ' | 'ύ' | '\u{1F7A}' | '\u{1F7B}' | 'ῦ' | 'ὐ' | 'ὑ' | 'ὒ' | 'ὓ' | 'ὔ' | 'ὕ' | 'ὖ'
        | 'ὗ' | 'ϋ' | 'ΰ' | '\u{1FE2}' | '\u{1FE3}' | 'ῧ' | 'ῠ' | 'ῡ' | 'Υ' | 'Ύ'
        | '\u{1FEA}' | '\u{1FEB}' | 'Ὑ' | 'Ὓ' | 'Ὕ' | 'Ὗ' | 'Ϋ' | 'Ῠ' | 'Ῡ' => Some('υ'),
        // omega
        'ω' | 'ώ' | '\u{1F7C}' | '\u{1F7D}' | 'ῶ' | 'ὠ' | 'ὡ' | 'ὢ' | 'ὣ' | 'ὤ' | 'ὥ' | 'ὦ'
        | 'ὧ' | 'ῳ' | 'ῲ' | 'ῴ' | 'ῷ' | 'ᾠ' | 'ᾡ' | 'ᾢ' | 'ᾣ' | 'ᾤ' | 'ᾥ' | 'ᾦ' | 'ᾧ' | 'Ω'
        | 'Ώ' | '\u{1FFA}' | '\u{1FFB}' | 'Ὠ' | 'Ὡ' | 'Ὢ' | 'Ὣ' | 'Ὤ' | 'Ὥ' | 'Ὦ' | 'Ὧ'
        | 'ῼ' | 'ᾨ' | 'ᾩ' | 'ᾪ' | 'ᾫ' | 'ᾬ' | 'ᾭ' | 'ᾮ' | 'ᾯ' => Some('ω'),
        // rho
        'ρ' | 'ῤ' | 'ῥ' | 'Ρ' | 'Ῥ' => Some('ρ'),
        // consonants
        'β' | 'Β' => Some('β'),
        'γ' | 'Γ' => Some('γ'),
        'δ' | 'Δ' => Some('δ'),
        'ζ' | 'Ζ' => Some('ζ'),
        'θ' | 'Θ' => Some('θ'),
        'κ' | 'Κ' => Some('κ'),
        'λ' | 'Λ' => Some('λ'),
        'μ' | 'Μ' => Some('μ'),
        'ν' | 'Ν' => Some('ν'),
        'ξ' | 'Ξ' => Some('ξ'),
        'π' | 'Π' => Some('π'),
        'σ' | 'ς' | 'Σ' | 'ϲ' | 'Ϲ' => Some('σ'),
        'τ' | 'Τ' => Some('τ'),
        'φ' | 'Φ' => Some('φ'),
        'χ' | 'Χ' => Some('χ'),
        'ψ' | 'Ψ' => Some('ψ'),
        'ϝ' | 'Ϝ' => Some('ϝ'),
        _ => None,
    }
}

/// Lowercase Greek and ASCII, preserving breathings and accents.
///
/// Defined only where lowercasing changes the codepoint.
pub fn lowercase(c: char) -> Option<char> {
    if c.is_ascii_uppercase() {
        return Some(c.to_ascii_lowercase());
    }
    match c {
        // plain capitals
        'Α' => Some('α'),
        'Β' => Some('β'),
        'Γ' => Some('γ'),
        'Δ' => Some('δ'),
        'Ε' => Some('ε'),
        'Ζ' => Some('ζ'),
        'Η' => Some('η'),
        'Θ' => Some('θ'),
        'Ι' => Some('ι'),
        'Κ' => Some('κ'),
        'Λ' => Some('λ'),
        'Μ' => Some('μ'),
        'Ν' => Some('ν'),
        'Ξ' => Some('ξ'),
        'Ο' => Some('ο'),
        'Π' => Some('π'),
        'Ρ' => Some('ρ'),
        'Σ' => Some('σ'),
        'Τ' => Some('τ'),
        'Υ' => Some('υ'),
        'Φ' => Some('φ'),
        'Χ' => Some('χ'),
        'Ψ' => Some('ψ'),
        'Ω' => Some('ω'),
        'Ϊ' => Some('ϊ'),
        'Ϋ' => Some('ϋ'),
        'Ϲ' => Some('ϲ'),
        'Ϝ' => Some('ϝ'),
        // tonos capitals
        'Ά' => Some('ά'),
        'Έ' => Some('έ'),
        'Ή' => Some('ή'),
        'Ί' => Some('ί'),
        'Ό' => Some('ό'),
        'Ύ' => Some('ύ'),
        'Ώ' => Some('ώ'),
        // varia / oxia capitals
        '\u{1FBA}' => Some('\u{1F70}'),
        '\u{1FBB}' => Some('ά'),
        '\u{1FC8}' => Some('\u{1F72}'),
        '\u{1FC9}' => Some('έ'),
        '\u{1FCA}' => Some('\u{1F74}'),
        '\u{1FCB}' => Some('ή'),
        '\u{1FDA}' => Some('\u{1F76}'),
        '\u{1FDB}' => Some('ί'),
        '\u{1FF8}' => Some('\u{1F78}'),
        '\u{1FF9}' => Some('ό'),
        '\u{1FEA}' => Some('\u{1F7A}'),
        '\u{1FEB}' => Some('ύ'),
        '\u{1FFA}' => Some('\u{1F7C}'),
        '\u{1FFB}' => Some('ώ'),
        // capitals with breathings
        'Ἀ' => Some('ἀ'),
        'Ἁ' => Some('ἁ'),
        'Ἂ' => Some('ἂ'),
        'Ἃ' => Some('ἃ'),
        'Ἄ' => Some('ἄ'),
        'Ἅ' => Some('ἅ'),
        'Ἆ' => Some('ἆ'),
        'Ἇ' => Some('ἇ'),
        'Ἐ' => Some('ἐ'),
        'Ἑ' => Some('ἑ'),
        'Ἒ' => Some('ἒ'),
        'Ἓ' => Some('ἓ'),
        'Ἔ' => Some('ἔ'),
        'Ἕ' => Some('ἕ'),
        'Ἠ' => Some('ἠ'),
        'Ἡ' => Some('ἡ'),
        'Ἢ' => Some('ἢ'),
        'Ἣ' => Some('ἣ'),
        'Ἤ' => Some('ἤ'),
        'Ἥ' => Some('ἥ'),
        'Ἦ' => Some('ἦ'),
        'Ἧ' => Some('ἧ'),
        'Ἰ' => Some('ἰ'),
        'Ἱ' => Some('ἱ'),
        'Ἲ' => Some('ἲ'),
        'Ἳ' => Some('ἳ'),
        'Ἴ' => Some('ἴ'),
        'Ἵ' => Some('ἵ'),
        'Ἶ' => Some('ἶ'),
        'Ἷ' => Some('ἷ'),
        'Ὀ' => Some('ὀ'),
        'Ὁ' => Some('ὁ'),
        'Ὂ' => Some('ὂ'),
        'Ὃ' => Some('ὃ'),
        'Ὄ' => Some('ὄ'),
        'Ὅ' => Some('ὅ'),
        'Ὑ' => Some('ὑ'),
        'Ὓ' => Some('ὓ'),
        'Ὕ' => Some('ὕ'),
        'Ὗ' => Some('ὗ'),
        'Ὠ' => Some('ὠ'),
        'Ὡ' => Some('ὡ'),
        'Ὢ' => Some('ὢ'),
        'Ὣ' => Some('ὣ'),
        'Ὤ' => Some('ὤ'),
        'Ὥ' => Some('ὥ'),
        'Ὦ' => Some('ὦ'),
        'Ὧ' => Some('ὧ'),
        'Ῥ' => Some('ῥ'),
        // capitals with iota subscript
        'ᾼ' => Some('ᾳ'),
        'ῌ' => Some('ῃ'),
        'ῼ' => Some('ῳ'),
        'ᾈ' => Some('ᾀ'),
        'ᾉ' => Some('ᾁ'),
        'ᾊ' => Some('ᾂ'),
        'ᾋ' => Some('ᾃ'),
        'ᾌ' => Some('ᾄ'),
        'ᾍ' => Some('ᾅ'),
        'ᾎ' => Some('ᾆ'),
        'ᾏ' => Some('ᾇ'),
        'ᾘ' => Some('ᾐ'),
        'ᾙ' => Some('ᾑ'),
        'ᾚ' => Some('ᾒ'),
        'ᾛ' => Some('ᾓ'),
        'ᾜ' => Some('ᾔ'),
        'ᾝ' => Some('ᾕ'),
        'ᾞ' => Some('ᾖ'),
        'ᾟ' => Some('ᾗ'),
        'ᾨ' => Some('ᾠ'),
        'ᾩ' => Some('ᾡ'),
        'ᾪ' => Some('ᾢ'),
        'ᾫ' => Some('ᾣ'),
        'ᾬ' => Some('ᾤ'),
        'ᾭ' => Some('ᾥ'),
        'ᾮ' => Some('ᾦ'),
        'ᾯ' => Some('ᾧ'),
        // capitals with breve / macron
        'Ᾰ' => Some('ᾰ'),
        'Ᾱ' => Some('ᾱ'),
        'Ῐ' => Some('ῐ'),
        'Ῑ' => Some('ῑ'),
        'Ῠ' => Some('ῠ'),
        'Ῡ' => Some('ῡ'),
        _ => None,
    }
}

/// Strip only accents (acute, grave, circumflex, iota subscript), keeping
/// breathings and dieresis, lowercasing in the process.
///
/// Defined exactly for the codepoints that carry an accent; a letter with
/// only a breathing or a dieresis is not in this table.
pub fn remove_accent(c: char) -> Option<char> {
    match c {
        // alpha
        'ά' | '\u{1F70}' | '\u{1F71}' | 'ᾶ' | 'ᾳ' | 'ᾲ' | 'ᾴ' | 'ᾷ' | 'Ά' | '\u{1FBA}'
        | '\u{1FBB}' | 'ᾼ' => Some('α'),
        'ἂ' | 'ἄ' | 'ἆ' | 'ᾀ' | 'ᾂ' | 'ᾄ' | 'ᾆ' | 'Ἂ' | 'Ἄ' | 'Ἆ' | 'ᾈ' | 'ᾊ' | 'ᾌ' | 'ᾎ' => {
            Some('ἀ')
        }
        'ἃ' | 'ἅ' | 'ἇ' | 'ᾁ' | 'ᾃ' | 'ᾅ' | 'ᾇ' | 'Ἃ' | 'Ἅ' | 'Ἇ' | 'ᾉ' | 'ᾋ' | 'ᾍ' | 'ᾏ' => {
            Some('ἁ')
        }
        // epsilon
        'έ' | '\u{1F72}' | '\u{1F73}' | 'Έ' | '\u{1FC8}' | '\u{1FC9}' => Some('ε'),
        'ἒ' | 'ἔ' | 'Ἒ' | 'Ἔ' => Some('ἐ'),
        'ἓ' | 'ἕ' | 'Ἓ' | 'Ἕ' => Some('ἑ'),
        // eta
        'ή' | '\u{1F74}' | '\u{1F75}' | 'ῆ' | 'ῃ' | 'ῂ' | 'ῄ' | 'ῇ' | 'Ή' | '\u{1FCA}'
        | '\u{1FCB}' | 'ῌ' => Some('η'),
        'ἢ' | 'ἤ' | 'ἦ' | 'ᾐ' | 'ᾒ' | 'ᾔ' | 'ᾖ' | 'Ἢ' | 'Ἤ' | 'Ἦ' | 'ᾘ' | 'ᾚ' | 'ᾜ' | 'ᾞ' => {
            Some('ἠ')
        }
        'ἣ' | 'ἥ' | 'ἧ' | 'ᾑ' | 'ᾓ' | 'ᾕ' | 'ᾗ' | 'Ἣ' | 'Ἥ' | 'Ἧ' | 'ᾙ' | 'ᾛ' | 'ᾝ' | 'ᾟ' => {
            Some('ἡ')
        }
        // iota
        'ί' | '\u{1F76}' | '\u{1F77}' | 'ῖ' | 'Ί' | '\u{1FDA}' | '\u{1FDB}' => Some('ι'),
        'ἲ' | 'ἴ' | 'ἶ' | 'Ἲ' | 'Ἴ' | 'Ἶ' => Some('ἰ'),
        'ἳ' | 'ἵ' | 'ἷ' | 'Ἳ' | 'Ἵ' | 'Ἷ' => Some('ἱ'),
        'ΐ' | '\u{1FD2}' | '\u{1FD3}' | 'ῗ' => Some('ϊ'),
        // omicron
        'ό' | '\u{1F78}' | '\u{1F79}' | 'Ό' | '\u{1FF8}' | '\u{1FF9}' => Some('ο'),
        'ὂ' | 'ὄ' | 'Ὂ' | 'Ὄ' => Some('ὀ'),
        'ὃ' | 'ὅ' | 'Ὃ' | 'Ὅ' => Some('ὁ'),
        // upsilon
        'ύ' | '\u{1F7A}' | '\u{1F7B}' | 'ῦ' | 'Ύ' | '\u{1FEA}' | '\u{1FEB}' => Some('υ'),
        'ὒ' | 'ὔ' | 'ὖ' => Some('ὐ'),
        'ὓ' | 'ὕ' | 'ὗ' | 'Ὓ' | 'Ὕ' | 'Ὗ' => Some('ὑ'),
        'ΰ' | '\u{1FE2}' | '\u{1FE3}' | 'ῧ' => Some('ϋ'),
        // omega
        'ώ' | '\u{1F7C}' | '\u{1F7D}' | 'ῶ' | 'ῳ' | 'ῲ' | 'ῴ' | 'ῷ' | 'Ώ' | '\u{1FFA}'
        | '\u{1FFB}' | 'ῼ' => Some('ω'),
        'ὢ' | 'ὤ' | 'ὦ' | 'ᾠ' | 'ᾢ' | 'ᾤ' | 'ᾦ' | 'Ὢ' | 'Ὤ' | 'Ὦ' | 'ᾨ' | 'ᾪ' | 'ᾬ' | 'ᾮ' => {
            Some('ὠ')
        }
        'ὣ' | 'ὥ' | 'ὧ' | 'ᾡ' | 'ᾣ' | 'ᾥ' | 'ᾧ' | 'Ὣ' | 'Ὥ' | 'Ὧ' | 'ᾩ' | 'ᾫ' | 'ᾭ' | 'ᾯ' => {
            Some('ὡ')
        }
        _ => None,
    }
}

/// Map a grave-accented vowel to its acute equivalent, lowercased.
///
/// A sentence-final grave restores to acute when the word stands alone.
pub fn fix_grave(c: char) -> Option<char> {
    match c {
        '\u{1F70}' | '\u{1FBA}' => Some('ά'),
        '\u{1F72}' | '\u{1FC8}' => Some('έ'),
        '\u{1F74}' | '\u{1FCA}' => Some('ή'),
        '\u{1F76}' | '\u{1FDA}' => Some('ί'),
        '\u{1F78}' | '\u{1FF8}' => Some('ό'),
        '\u{1F7A}' | '\u{1FEA}' => Some('ύ'),
        '\u{1F7C}' | '\u{1FFA}' => Some('ώ'),
        'ἂ' | 'Ἂ' => Some('ἄ'),
        'ἃ' | 'Ἃ' => Some('ἅ'),
        'ἒ' | 'Ἒ' => Some('ἔ'),
        'ἓ' | 'Ἓ' => Some('ἕ'),
        'ἢ' | 'Ἢ' => Some('ἤ'),
        'ἣ' | 'Ἣ' => Some('ἥ'),
        'ἲ' | 'Ἲ' => Some('ἴ'),
        'ἳ' | 'Ἳ' => Some('ἵ'),
        'ὂ' | 'Ὂ' => Some('ὄ'),
        'ὃ' | 'Ὃ' => Some('ὅ'),
        'ὒ' => Some('ὔ'),
        'ὓ' | 'Ὓ' => Some('ὕ'),
        'ὢ' | 'Ὢ' => Some('ὤ'),
        'ὣ' | 'Ὣ' => Some('ὥ'),
        '\u{1FD2}' => Some('ΐ'),
        '\u{1FE2}' => Some('ΰ'),
        'ᾲ' => Some('ᾴ'),
        'ῂ' => Some('ῄ'),
        'ῲ' => Some('ῴ'),
        'ᾂ' | 'ᾊ' => Some('ᾄ'),
        'ᾃ' | 'ᾋ' => Some('ᾅ'),
        'ᾒ' | 'ᾚ' => Some('ᾔ'),
        'ᾓ' | 'ᾛ' => Some('ᾕ'),
        'ᾢ' | 'ᾪ' => Some('ᾤ'),
        'ᾣ' | 'ᾫ' => Some('ᾥ'),
        _ => None,
    }
}

/// Single-codepoint collation key: lowercased, unaccented, final sigma
/// folded to `σ`, dieresis folded for ι/υ, ASCII A-Z lowercased.
pub fn normalise_char(c: char) -> char {
    if c.is_ascii_uppercase() {
        return c.to_ascii_lowercase();
    }
    unaccent(c).unwrap_or(c)
}

/// Whether the bare letter under `c` is a Greek vowel
pub fn is_greek_vowel(c: char) -> bool {
    matches!(
        unaccent(c),
        Some('α') | Some('ε') | Some('η') | Some('ι') | Some('ο') | Some('υ') | Some('ω')
    )
}

/// Whether `c` carries a dieresis
pub fn has_diaeresis(c: char) -> bool {
    matches!(
        c,
        'ϊ' | 'ϋ' | 'ΐ' | 'ΰ' | '\u{1FD2}' | '\u{1FD3}' | '\u{1FE2}' | '\u{1FE3}' | 'ῗ' | 'ῧ'
            | 'Ϊ' | 'Ϋ'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaccent_strips_everything() {
        assert_eq!(unaccent('ἄ'), Some('α'));
        assert_eq!(unaccent('ᾷ'), Some('α'));
        assert_eq!(unaccent('Ἇ'), Some('α'));
        assert_eq!(unaccent('ῷ'), Some('ω'));
        assert_eq!(unaccent('ς'), Some('σ'));
        assert_eq!(unaccent('Σ'), Some('σ'));
        assert_eq!(unaccent('ΐ'), Some('ι'));
        assert_eq!(unaccent('q'), None);
        assert_eq!(unaccent('·'), None);
    }

    #[test]
    fn lowercase_keeps_diacritics() {
        assert_eq!(lowercase('Ἄ'), Some('ἄ'));
        assert_eq!(lowercase('Ῥ'), Some('ῥ'));
        assert_eq!(lowercase('Σ'), Some('σ'));
        assert_eq!(lowercase('A'), Some('a'));
        assert_eq!(lowercase('α'), None);
        assert_eq!(lowercase('ἄ'), None);
    }

    #[test]
    fn remove_accent_keeps_breathings() {
        assert_eq!(remove_accent('ἄ'), Some('ἀ'));
        assert_eq!(remove_accent('ἅ'), Some('ἁ'));
        assert_eq!(remove_accent('ᾷ'), Some('α'));
        assert_eq!(remove_accent('ῷ'), Some('ω'));
        assert_eq!(remove_accent('ΐ'), Some('ϊ'));
        // breathing alone is not an accent
        assert_eq!(remove_accent('ἀ'), None);
        assert_eq!(remove_accent('ϊ'), None);
        assert_eq!(remove_accent('α'), None);
    }

    #[test]
    fn fix_grave_restores_acute() {
        assert_eq!(fix_grave('\u{1F70}'), Some('ά'));
        assert_eq!(fix_grave('ἣ'), Some('ἥ'));
        assert_eq!(fix_grave('ῲ'), Some('ῴ'));
        assert_eq!(fix_grave('ά'), None);
        assert_eq!(fix_grave('α'), None);
    }

    #[test]
    fn collation_key_folds_case_accent_and_sigma() {
        assert_eq!(normalise_char('Ἄ'), 'α');
        assert_eq!(normalise_char('ς'), 'σ');
        assert_eq!(normalise_char('Ϊ'), 'ι');
        assert_eq!(normalise_char('Z'), 'z');
        assert_eq!(normalise_char('δ'), 'δ');
        assert_eq!(normalise_char('!'), '!');
    }

    #[test]
    fn greek_ranges() {
        assert!(is_greek_letter('α'));
        assert!(is_greek_letter('ᾷ'));
        assert!(!is_greek_letter('\u{1FBD}'));
        assert!(!is_greek_letter('a'));
        assert!(is_greek_char('\u{0387}'));
    }

    #[test]
    fn vowels_and_diaeresis() {
        assert!(is_greek_vowel('ῷ'));
        assert!(is_greek_vowel('Ἄ'));
        assert!(!is_greek_vowel('ῥ'));
        assert!(has_diaeresis('ϊ'));
        assert!(!has_diaeresis('ι'));
    }
}
