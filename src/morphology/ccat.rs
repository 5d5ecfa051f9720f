//! The CCAT/CATSS tag dialect.
//!
//! Two space-separated fields: a part-of-speech code and a positional
//! morphology field. The pos code may carry declension subtype characters
//! after its base letters (`N1T`, `A1A`); they are accepted and ignored.
//! Verbs use the seven-column morphology `MTVPCGN`, nominals a three-column
//! `CNG`; `.` and `-` mean unknown and trailing unknowns may be omitted:
//!
//! ```text
//! V IAA3..S     indicative aorist active, third person singular
//! N1T NSM       noun (first declension subtype), nominative singular masculine
//! RP 1NS        personal pronoun, first person nominative, referent singular
//! C             conjunction
//! ```

use crate::core::error::{KoineError, Result};
use crate::morphology::codes;
use crate::morphology::{Parsing, PartOfSpeech, TenseForm};

/// Parse a CCAT tag.
pub fn parse(input: &str) -> Result<Parsing> {
    let mut fields = input.split_whitespace();
    let pos_code = fields
        .next()
        .ok_or_else(|| KoineError::InvalidParsing(input.to_string()))?;
    let morph = fields.next().unwrap_or("");
    if fields.next().is_some() {
        return Err(KoineError::InvalidParsing(input.to_string()));
    }

    let (pos, indefinite, interrogative, subtype) = split_pos_code(pos_code)?;
    if !subtype.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(KoineError::InvalidParsing(pos_code.to_string()));
    }

    let mut parsing = Parsing::of_pos(pos);
    parsing.set_indefinite(indefinite);
    parsing.set_interrogative(interrogative);

    match pos {
        PartOfSpeech::Verb => parse_verb_morph(morph, &mut parsing)?,
        PartOfSpeech::PersonalPronoun => parse_personal_morph(morph, &mut parsing)?,
        pos if pos.is_nominal() => parse_cng_morph(morph, &mut parsing)?,
        _ => {
            if !morph.is_empty() {
                return Err(KoineError::InvalidParsing(input.to_string()));
            }
        }
    }
    Ok(parsing)
}

/// Format a parsing as a CCAT tag.
pub fn format(parsing: Parsing) -> Result<String> {
    let pos_code = pos_code(parsing)?;
    let morph = match parsing.pos() {
        PartOfSpeech::Verb => {
            let cols = [
                codes::mood_to(parsing.mood(), '.'),
                codes::tense_to(parsing.tense(), '.'),
                codes::voice_to(parsing.voice(), '.'),
                codes::person_to(parsing.person(), '.'),
                codes::case_to(parsing.case(), '.'),
                codes::gender_to(parsing.gender(), '.'),
                codes::number_to(parsing.number(), '.'),
            ];
            trim_placeholders(&cols)
        }
        PartOfSpeech::PersonalPronoun => {
            let refnum = match parsing.tense() {
                TenseForm::RefSingular => 'S',
                TenseForm::RefPlural => 'P',
                _ => '.',
            };
            let cols = [
                codes::person_to(parsing.person(), '.'),
                codes::case_to(parsing.case(), '.'),
                refnum,
            ];
            trim_placeholders(&cols)
        }
        pos if pos.is_nominal() => {
            let cols = [
                codes::case_to(parsing.case(), '.'),
                codes::number_to(parsing.number(), '.'),
                codes::gender_to(parsing.gender(), '.'),
            ];
            trim_placeholders(&cols)
        }
        _ => String::new(),
    };

    if morph.is_empty() {
        Ok(pos_code.to_string())
    } else {
        Ok(format!("{pos_code} {morph}"))
    }
}

/// Base pos, (indefinite, interrogative) flags and the ignored subtype
fn split_pos_code(code: &str) -> Result<(PartOfSpeech, bool, bool, &str)> {
    if let Some(rest) = code.strip_prefix('R') {
        let (pos, indefinite, interrogative) = match rest.chars().next() {
            Some('A') => (PartOfSpeech::Article, false, false),
            Some('P') => (PartOfSpeech::PersonalPronoun, false, false),
            Some('R') => (PartOfSpeech::RelativePronoun, false, false),
            Some('D') => (PartOfSpeech::DemonstrativePronoun, false, false),
            Some('X') => (PartOfSpeech::Pronoun, true, false),
            Some('I') => (PartOfSpeech::Pronoun, false, true),
            _ => return Err(KoineError::InvalidParsing(code.to_string())),
        };
        return Ok((pos, indefinite, interrogative, &rest[1..]));
    }
    let pos = match code.chars().next() {
        Some('N') => PartOfSpeech::Noun,
        Some('A') => PartOfSpeech::Adjective,
        Some('V') => PartOfSpeech::Verb,
        Some('D') => PartOfSpeech::Adverb,
        Some('C') => PartOfSpeech::Conjunction,
        Some('P') => PartOfSpeech::Preposition,
        Some('I') => PartOfSpeech::Interjection,
        Some('M') => PartOfSpeech::Numeral,
        Some('X') => PartOfSpeech::Particle,
        _ => return Err(KoineError::InvalidParsing(code.to_string())),
    };
    Ok((pos, false, false, &code[1..]))
}

fn pos_code(parsing: Parsing) -> Result<&'static str> {
    Ok(match parsing.pos().base() {
        PartOfSpeech::Noun | PartOfSpeech::ProperNoun => "N",
        PartOfSpeech::Adjective => "A",
        PartOfSpeech::Verb => "V",
        PartOfSpeech::Adverb => "D",
        PartOfSpeech::Conjunction | PartOfSpeech::Conditional => "C",
        PartOfSpeech::Preposition => "P",
        PartOfSpeech::Interjection => "I",
        PartOfSpeech::Numeral => "M",
        PartOfSpeech::Particle => "X",
        PartOfSpeech::Article => "RA",
        PartOfSpeech::PersonalPronoun => "RP",
        PartOfSpeech::RelativePronoun => "RR",
        PartOfSpeech::DemonstrativePronoun => "RD",
        PartOfSpeech::Pronoun if parsing.interrogative() => "RI",
        PartOfSpeech::Pronoun if parsing.indefinite() => "RX",
        other => {
            return Err(KoineError::InvalidParsing(format!(
                "{other:?} has no CCAT code"
            )))
        }
    })
}

fn parse_verb_morph(morph: &str, parsing: &mut Parsing) -> Result<()> {
    let cols = columns::<7>(morph)?;
    parsing.set_mood(codes::mood_from(cols[0])?);
    parsing.set_tense(codes::tense_from(cols[1])?);
    parsing.set_voice(codes::voice_from(cols[2])?);
    parsing.set_person(codes::person_from(cols[3])?);
    parsing.set_case(codes::case_from(cols[4])?);
    parsing.set_gender(codes::gender_from(cols[5])?);
    parsing.set_number(codes::number_from(cols[6])?);
    Ok(())
}

fn parse_personal_morph(morph: &str, parsing: &mut Parsing) -> Result<()> {
    let cols = columns::<3>(morph)?;
    parsing.set_person(codes::person_from(cols[0])?);
    parsing.set_case(codes::case_from(cols[1])?);
    match cols[2] {
        'S' => parsing.set_tense(TenseForm::RefSingular),
        'P' => parsing.set_tense(TenseForm::RefPlural),
        c if codes::is_placeholder(c) => {}
        other => return Err(KoineError::InvalidParsing(format!("referent {other}"))),
    }
    Ok(())
}

fn parse_cng_morph(morph: &str, parsing: &mut Parsing) -> Result<()> {
    let cols = columns::<3>(morph)?;
    parsing.set_case(codes::case_from(cols[0])?);
    parsing.set_number(codes::number_from(cols[1])?);
    parsing.set_gender(codes::gender_from(cols[2])?);
    Ok(())
}

/// Pad a positional field to `N` columns with placeholders
fn columns<const N: usize>(morph: &str) -> Result<[char; N]> {
    let mut cols = ['.'; N];
    for (slot, c) in morph.chars().enumerate() {
        if slot >= N {
            return Err(KoineError::InvalidParsing(morph.to_string()));
        }
        cols[slot] = c;
    }
    Ok(cols)
}

fn trim_placeholders(cols: &[char]) -> String {
    let keep = cols
        .iter()
        .rposition(|&c| c != '.')
        .map(|p| p + 1)
        .unwrap_or(0);
    cols[..keep].iter().collect()
}
