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

//! Beta-Code to polytonic Unicode conversion.
//!
//! Beta-Code spells Greek in ASCII, with accents and breathings as symbols
//! after the letter they modify (`qeo/v` → θεός). Two dialects are
//! supported:
//!
//! - [`Mode::Default`]: Robinson-Pierpont style. Letter case in the input
//!   carries through (`Q` → Θ), `c` means χ and `v`/`j` spell sigma.
//! - [`Mode::Tlg`]: TLG style. Input case is ignored; `*` uppercases the
//!   following letter, `c` means ξ, `x` means χ and `v` is digamma.
//!
//! Accents accumulate into a pending mask and are applied when the letter
//! is complete; a symbol before the first letter attaches to that first
//! letter, which is how TLG spells capitals with breathings (`*)A` → Ἀ).
//! A bare final sigma comes out as `ς`, and a trailing apostrophe marks
//! elision (`a)p'` → ἀπ᾽).

use crate::core::error::{KoineError, Result};

/// Which Beta-Code dialect to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Robinson-Pierpont style Beta-Code
    #[default]
    Default,
    /// TLG Beta-Code with asterisk-signalled case
    Tlg,
}

// Pending accent symbols waiting for their letter to complete, one bit
// per symbol so combinations form by or-ing.
const ACUTE: u16 = 0x1;
const GRAVE: u16 = 0x2;
const CIRCUMFLEX: u16 = 0x4;
const DIAERESIS: u16 = 0x8;
const ROUGH: u16 = 0x10;
const SMOOTH: u16 = 0x20;
const IOTA: u16 = 0x40;
const SIGMA1: u16 = 0x80;
const SIGMA2: u16 = 0x100;
const SIGMA3: u16 = 0x200;

const SMOOTH_ACUTE: u16 = SMOOTH | ACUTE;
const SMOOTH_GRAVE: u16 = SMOOTH | GRAVE;
const ROUGH_ACUTE: u16 = ROUGH | ACUTE;
const ROUGH_GRAVE: u16 = ROUGH | GRAVE;
const CIRCUMFLEX_SMOOTH: u16 = CIRCUMFLEX | SMOOTH;
const CIRCUMFLEX_ROUGH: u16 = CIRCUMFLEX | ROUGH;
const DIAERESIS_ACUTE: u16 = DIAERESIS | ACUTE;
const DIAERESIS_GRAVE: u16 = DIAERESIS | GRAVE;

/// Convert one Beta-Code word into polytonic Greek.
///
/// Leading and trailing whitespace is ignored; anything else outside the
/// word is an error. An empty or all-whitespace input converts to an
/// empty string.
pub fn to_greek(input: &str, mode: Mode) -> Result<String> {
    let text = input.as_bytes();
    let mut word = String::new();

    let mut i = 0usize;
    let mut size = text.len();
    while i < size && text[i].is_ascii_whitespace() {
        i += 1;
    }
    while size > i && text[size - 1].is_ascii_whitespace() {
        size -= 1;
    }
    if i == size {
        return Ok(word);
    }

    let mut carry: Option<char> = None;
    let mut carry_index = 0usize;
    let mut accents: u16 = 0;
    let mut uppercase_next = false;

    while i < size {
        let c = text[i];
        if c > 127 {
            // Unicode sequences should not appear in ascii betacode.
            return Err(KoineError::UnexpectedCharacter(c as char, i));
        }
        if c == b'*' {
            match mode {
                Mode::Tlg => {
                    uppercase_next = true;
                    i += 1;
                    continue;
                }
                Mode::Default => return Err(KoineError::UnexpectedCharacter('*', i)),
            }
        }
        if let Some(letter) = lookup_letter(c, mode, uppercase_next) {
            if let Some(prev) = carry {
                word.push(flush(prev, accents, carry_index)?);
                accents = 0;
            }
            carry = Some(letter);
            carry_index = i;
            uppercase_next = false;
            i += 1;
            continue;
        }
        if c.is_ascii_whitespace() {
            break;
        }
        let symbol = lookup_symbol(c);
        if symbol != 0 {
            accents |= symbol;
            i += 1;
            continue;
        }
        // Not a letter, not a symbol: the word ends here.
        break;
    }

    match carry {
        Some(letter) => {
            if accents == 0 && letter == 'σ' {
                word.push('ς');
            } else {
                word.push(flush(letter, accents, carry_index)?);
            }
        }
        None => {
            if accents != 0 {
                return Err(KoineError::UnexpectedCharacter(
                    text[i.min(size - 1)] as char,
                    i,
                ));
            }
        }
    }

    if i < size && text[i] == b'\'' {
        word.push('\u{1FBD}');
        i += 1;
    }

    while i < size {
        if text[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        return Err(KoineError::UnexpectedCharacter(text[i] as char, i));
    }

    Ok(word)
}

fn flush(letter: char, accents: u16, index: usize) -> Result<char> {
    apply_accents(letter, accents).ok_or(KoineError::UnexpectedAccent(letter, index))
}

// See https://stephanus.tlg.uci.edu/encoding/BCM.pdf
fn lookup_symbol(c: u8) -> u16 {
    match c {
        b'/' => ACUTE,
        b'\\' => GRAVE,
        b'=' | b'^' => CIRCUMFLEX,
        b'+' => DIAERESIS,
        b'(' => ROUGH,
        b')' => SMOOTH,
        b'|' => IOTA,
        b'1' => SIGMA1,
        b'2' => SIGMA2,
        b'3' => SIGMA3,
        _ => 0,
    }
}

fn lookup_letter(c: u8, mode: Mode, uppercase_next: bool) -> Option<char> {
    match mode {
        Mode::Default => lookup_default(c),
        Mode::Tlg => {
            let lower = lookup_tlg(c.to_ascii_lowercase())?;
            if uppercase_next {
                Some(to_upper(lower))
            } else {
                Some(lower)
            }
        }
    }
}

fn lookup_default(c: u8) -> Option<char> {
    Some(match c {
        b'a' => 'α',
        b'b' => 'β',
        b'g' => 'γ',
        b'd' => 'δ',
        b'e' => 'ε',
        b'z' => 'ζ',
        b'h' => 'η',
        b'q' => 'θ',
        b'i' => 'ι',
        b'k' => 'κ',
        b'l' => 'λ',
        b'm' => 'μ',
        b'n' => 'ν',
        b'c' => 'χ',
        b'o' => 'ο',
        b'p' => 'π',
        b'r' => 'ρ',
        b's' => 'σ',
        b'v' => 'σ',
        b'j' => 'ς',
        b't' => 'τ',
        b'u' => 'υ',
        b'f' => 'φ',
        b'y' => 'ψ',
        b'w' => 'ω',
        b'A' => 'Α',
        b'B' => 'Β',
        b'G' => 'Γ',
        b'D' => 'Δ',
        b'E' => 'Ε',
        b'Z' => 'Ζ',
        b'H' => 'Η',
        b'Q' => 'Θ',
        b'I' => 'Ι',
        b'K' => 'Κ',
        b'L' => 'Λ',
        b'M' => 'Μ',
        b'N' => 'Ν',
        b'C' => 'Χ',
        b'O' => 'Ο',
        b'P' => 'Π',
        b'R' => 'Ρ',
        b'S' => 'Σ',
        b'V' => 'Σ',
        b'J' => 'Σ',
        b'T' => 'Τ',
        b'U' => 'Υ',
        b'F' => 'Φ',
        b'Y' => 'Ψ',
        b'W' => 'Ω',
        _ => return None,
    })
}

fn lookup_tlg(c: u8) -> Option<char> {
    Some(match c {
        b'a' => 'α',
        b'b' => 'β',
        b'g' => 'γ',
        b'd' => 'δ',
        b'e' => 'ε',
        b'z' => 'ζ',
        b'h' => 'η',
        b'q' => 'θ',
        b'i' => 'ι',
        b'k' => 'κ',
        b'l' => 'λ',
        b'm' => 'μ',
        b'n' => 'ν',
        b'c' => 'ξ',
        b'o' => 'ο',
        b'p' => 'π',
        b'r' => 'ρ',
        b's' => 'σ',
        b't' => 'τ',
        b'u' => 'υ',
        b'f' => 'φ',
        b'x' => 'χ',
        b'y' => 'ψ',
        b'w' => 'ω',
        b'v' => 'ϝ',
        _ => return None,
    })
}

fn to_upper(c: char) -> char {
    match c {
        'α' => 'Α',
        'β' => 'Β',
        'γ' => 'Γ',
        'δ' => 'Δ',
        'ε' => 'Ε',
        'ζ' => 'Ζ',
        'η' => 'Η',
        'θ' => 'Θ',
        'ι' => 'Ι',
        'κ' => 'Κ',
        'λ' => 'Λ',
        'μ' => 'Μ',
        'ν' => 'Ν',
        'ξ' => 'Ξ',
        'ο' => 'Ο',
        'π' => 'Π',
        'ρ' => 'Ρ',
        'σ' => 'Σ',
        'τ' => 'Τ',
        'υ' => 'Υ',
        'φ' => 'Φ',
        'χ' => 'Χ',
        'ψ' => 'Ψ',
        'ω' => 'Ω',
        'ϝ' => 'Ϝ',
        other => other,
    }
}

/// Compose a base letter with its accumulated accents.
///
/// Total over the grammatically meaningful pairs; anything else is `None`
/// and surfaces as an accent error.
fn apply_accents(c: char, accents: u16) -> Option<char> {
    if accents == 0 {
        return Some(c);
    }

    let out = match accents {
        SMOOTH => match c {
            'α' => 'ἀ',
            'ε' => 'ἐ',
            'η' => 'ἠ',
            'ι' => 'ἰ',
            'ο' => 'ὀ',
            'υ' => 'ὐ',
            'ω' => 'ὠ',
            'ρ' => 'ῤ',
            'Α' => 'Ἀ',
            'Ε' => 'Ἐ',
            'Η' => 'Ἠ',
            'Ι' => 'Ἰ',
            'Ο' => 'Ὀ',
            'Ω' => 'Ὠ',
            _ => return None,
        },
        ROUGH => match c {
            'α' => 'ἁ',
            'ε' => 'ἑ',
            'η' => 'ἡ',
            'ι' => 'ἱ',
            'ο' => 'ὁ',
            'υ' => 'ὑ',
            'ω' => 'ὡ',
            'ρ' => 'ῥ',
            'Α' => 'Ἁ',
            'Ε' => 'Ἑ',
            'Η' => 'Ἡ',
            'Ι' => 'Ἱ',
            'Ο' => 'Ὁ',
            'Υ' => 'Ὑ',
            'Ω' => 'Ὡ',
            'Ρ' => 'Ῥ',
            _ => return None,
        },
        ACUTE => match c {
            'α' => 'ά',
            'ε' => 'έ',
            'η' => 'ή',
            'ι' => 'ί',
            'ο' => 'ό',
            'υ' => 'ύ',
            'ω' => 'ώ',
            'Α' => 'Ά',
            'Ε' => 'Έ',
            'Η' => 'Ή',
            'Ι' => 'Ί',
            'Ο' => 'Ό',
            'Υ' => 'Ύ',
            'Ω' => 'Ώ',
            _ => return None,
        },
        GRAVE => match c {
            'α' => '\u{1F70}',
            'ε' => '\u{1F72}',
            'η' => '\u{1F74}',
            'ι' => '\u{1F76}',
            'ο' => '\u{1F78}',
            'υ' => '\u{1F7A}',
            'ω' => '\u{1F7C}',
            'Α' => '\u{1FBA}',
            'Ε' => '\u{1FC8}',
            'Η' => '\u{1FCA}',
            'Ι' => '\u{1FDA}',
            'Ο' => '\u{1FF8}',
            'Υ' => '\u{1FEA}',
            'Ω' => '\u{1FFA}',
            _ => return None,
        },
        CIRCUMFLEX => match c {
            'α' => 'ᾶ',
            'η' => 'ῆ',
            'ι' => 'ῖ',
            'υ' => 'ῦ',
            'ω' => 'ῶ',
            _ => return None,
        },
        IOTA => match c {
            'α' => 'ᾳ',
            'η' => 'ῃ',
            'ω' => 'ῳ',
            'Α' => 'ᾼ',
            'Η' => 'ῌ',
            'Ω' => 'ῼ',
            _ => return None,
        },
        DIAERESIS => match c {
            'ι' => 'ϊ',
            'υ' => 'ϋ',
            'Ι' => 'Ϊ',
            'Υ' => 'Ϋ',
            _ => return None,
        },
        SMOOTH_ACUTE => match c {
            'α' => 'ἄ',
            'ε' => 'ἔ',
            'η' => 'ἤ',
            'ι' => 'ἴ',
            'ο' => 'ὄ',
            'υ' => 'ὔ',
            'ω' => 'ὤ',
            'Α' => 'Ἄ',
            'Ε' => 'Ἔ',
            'Η' => 'Ἤ',
            'Ι' => 'Ἴ',
            'Ο' => 'Ὄ',
            'Ω' => 'Ὤ',
            _ => return None,
        },
        SMOOTH_GRAVE => match c {
            'α' => 'ἂ',
            'ε' => 'ἒ',
            'η' => 'ἢ',
            'ι' => 'ἲ',
            'ο' => 'ὂ',
            'υ' => 'ὒ',
            'ω' => 'ὢ',
            'Α' => 'Ἂ',
            'Ε' => 'Ἒ',
            'Η' => 'Ἢ',
            'Ι' => 'Ἲ',
            'Ο' => 'Ὂ',
            'Ω' => 'Ὢ',
            _ => return None,
        },
        ROUGH_ACUTE => match c {
            'α' => 'ἅ',
            'ε' => 'ἕ',
            'η' => 'ἥ',
            'ι' => 'ἵ',
            'ο' => 'ὅ',
            'υ' => 'ὕ',
            'ω' => 'ὥ',
            'Α' => 'Ἅ',
            'Ε' => 'Ἕ',
            'Η' => 'Ἥ',
            'Ι' => 'Ἵ',
            'Ο' => 'Ὅ',
            'Υ' => 'Ὕ',
            'Ω' => 'Ὥ',
            _ => return None,
        },
        ROUGH_GRAVE => match c {
            'α' => 'ἃ',
            'ε' => 'ἓ',
            'η' => 'ἣ',
            'ι' => 'ἳ',
            'ο' => 'ὃ',
            'υ' => 'ὓ',
            'ω' => 'ὣ',
            'Α' => 'Ἃ',
            'Ε' => 'Ἓ',
            'Η' => 'Ἣ',
            'Ι' => 'Ἳ',
            'Ο' => 'Ὃ',
            'Υ' => 'Ὓ',
            'Ω' => 'Ὣ',
            _ => return None,
        },
        CIRCUMFLEX_SMOOTH => match c {
            'α' => 'ἆ',
            'η' => 'ἦ',
            'ι' => 'ἶ',
            'υ' => 'ὖ',
            'ω' => 'ὦ',
            'Α' => 'Ἆ',
            'Η' => 'Ἦ',
            'Ι' => 'Ἶ',
            'Ω' => 'Ὦ',
            _ => return None,
        },
        CIRCUMFLEX_ROUGH => match c {
            'α' => 'ἇ',
            'η' => 'ἧ',
            'ι' => 'ἷ',
            'υ' => 'ὗ',
            'ω' => 'ὧ',
            'Α' => 'Ἇ',
            'Η' => 'Ἧ',
            'Ι' => 'Ἷ',
            'Υ' => 'Ὗ',
            'Ω' => 'Ὧ',
            _ => return None,
        },
        DIAERESIS_ACUTE => match c {
            'ι' => 'ΐ',
            'υ' => 'ΰ',
            _ => return None,
        },
        DIAERESIS_GRAVE => match c {
            'ι' => '\u{1FD2}',
            'υ' => '\u{1FE2}',
            _ => return None,
        },
        SIGMA1 => match c {
            'σ' => 'σ',
            'Σ' => 'Σ',
            _ => return None,
        },
        SIGMA2 => match c {
            'σ' => 'ς',
            'Σ' => 'Σ',
            _ => return None,
        },
        SIGMA3 => match c {
            'σ' => 'ϲ',
            'Σ' => 'Ϲ',
            _ => return None,
        },
        _ => return None,
    };
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_default_encoding() {
        assert_eq!(to_greek("", Mode::Default).unwrap(), "");
        assert_eq!(to_greek("  ", Mode::Default).unwrap(), "");
        assert_eq!(to_greek("a", Mode::Default).unwrap(), "α");
        assert_eq!(to_greek("a)", Mode::Default).unwrap(), "ἀ");
        assert_eq!(to_greek("s", Mode::Default).unwrap(), "ς");
        assert_eq!(to_greek("es", Mode::Default).unwrap(), "ες");
        assert_eq!(to_greek("es1", Mode::Default).unwrap(), "εσ");
        assert_eq!(to_greek("es2", Mode::Default).unwrap(), "ες");
        assert_eq!(to_greek("es3", Mode::Default).unwrap(), "εϲ");
        assert_eq!(to_greek("sos", Mode::Default).unwrap(), "σος");
        assert_eq!(to_greek("a)bba", Mode::Default).unwrap(), "ἀββα");
        assert_eq!(to_greek("a)p'", Mode::Default).unwrap(), "ἀπ᾽");
        assert_eq!(to_greek(" d' ", Mode::Default).unwrap(), "δ᾽");
        assert_eq!(to_greek(" a(ll", Mode::Default).unwrap(), "ἁλλ");
        assert_eq!(to_greek("kai\\ ", Mode::Default).unwrap(), "κα\u{1F76}");
        assert_eq!(to_greek("cri", Mode::Default).unwrap(), "χρι");
        assert_eq!(to_greek("criv", Mode::Default).unwrap(), "χρις");
        assert_eq!(to_greek("Qeo/v", Mode::Default).unwrap(), "Θεός");
        assert_eq!(to_greek("u(mw^n", Mode::Default).unwrap(), "ὑμῶν");
        assert_eq!(to_greek("qeo/s3", Mode::Default).unwrap(), "θεόϲ");
    }

    #[test]
    fn leading_accent_attaches_to_first_letter() {
        assert_eq!(to_greek(")a", Mode::Default).unwrap(), "ἀ");
        assert_eq!(to_greek("(a", Mode::Default).unwrap(), "ἁ");
        assert_eq!(to_greek("*)A", Mode::Tlg).unwrap(), "Ἀ");
    }

    #[test]
    fn invalid_default_encoding() {
        assert!(to_greek("dε", Mode::Default).is_err());
        assert!(to_greek("dε ", Mode::Default).is_err());
        assert!(to_greek(" dε", Mode::Default).is_err());
        assert!(to_greek("xri", Mode::Default).is_err());
        assert!(to_greek("*qeo/s", Mode::Default).is_err());
        // circumflex on epsilon does not exist
        assert!(matches!(
            to_greek("e=", Mode::Default),
            Err(KoineError::UnexpectedAccent('ε', 0))
        ));
    }

    #[test]
    fn valid_tlg_encoding() {
        assert_eq!(to_greek("qeo/s", Mode::Tlg).unwrap(), "θεός");
        assert_eq!(to_greek("*QEO/S", Mode::Tlg).unwrap(), "Θεός");
        assert_eq!(to_greek("xri", Mode::Tlg).unwrap(), "χρι");
        assert_eq!(to_greek("qeo/s1", Mode::Tlg).unwrap(), "θεόσ");
        assert_eq!(to_greek("qeo/s2", Mode::Tlg).unwrap(), "θεός");
        assert_eq!(to_greek("qeo/s3", Mode::Tlg).unwrap(), "θεόϲ");
        assert_eq!(to_greek("vau", Mode::Tlg).unwrap(), "ϝαυ");
    }

    #[test]
    fn invalid_tlg_encoding() {
        assert!(to_greek("dε", Mode::Tlg).is_err());
        assert!(to_greek("j", Mode::Tlg).is_err());
    }
}
