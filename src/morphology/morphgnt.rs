//! The MorphGNT tag dialect.
//!
//! Ten fixed columns: a two-character part-of-speech code, then person,
//! tense, voice, mood, case, number, gender and degree, with `-` for an
//! empty column:
//!
//! ```text
//! V-3PAI-S--    λέγει
//! N-----NSM-    nominative singular masculine noun
//! RP1---NS--    first person pronoun, nominative, referent singular
//! A-----NSMS    superlative adjective
//! ```

use crate::core::error::{KoineError, Result};
use crate::morphology::codes;
use crate::morphology::{Degree, Parsing, PartOfSpeech, TenseForm};

const COLUMNS: usize = 10;

/// Parse a MorphGNT tag.
pub fn parse(input: &str) -> Result<Parsing> {
    let tag = input.trim();
    if tag.chars().count() != COLUMNS {
        return Err(KoineError::InvalidParsing(tag.to_string()));
    }
    let cols: Vec<char> = tag.chars().collect();
    let pos_code: String = cols[..2].iter().collect();
    let (pos, indefinite, interrogative) = pos_from_code(&pos_code)?;

    let mut parsing = Parsing::of_pos(pos);
    parsing.set_indefinite(indefinite);
    parsing.set_interrogative(interrogative);
    parsing.set_person(codes::person_from(cols[2])?);
    parsing.set_tense(codes::tense_from(cols[3])?);
    parsing.set_voice(codes::voice_from(cols[4])?);
    parsing.set_mood(codes::mood_from(cols[5])?);
    parsing.set_case(codes::case_from(cols[6])?);
    if pos == PartOfSpeech::PersonalPronoun {
        match cols[7] {
            'S' => parsing.set_tense(TenseForm::RefSingular),
            'P' => parsing.set_tense(TenseForm::RefPlural),
            c if codes::is_placeholder(c) => {}
            other => return Err(KoineError::InvalidParsing(format!("referent {other}"))),
        }
    } else {
        parsing.set_number(codes::number_from(cols[7])?);
    }
    parsing.set_gender(codes::gender_from(cols[8])?);
    match cols[9] {
        'C' => parsing.set_pos(parsing.pos().with_degree(Degree::Comparative)?),
        'S' => parsing.set_pos(parsing.pos().with_degree(Degree::Superlative)?),
        c if codes::is_placeholder(c) => {}
        other => return Err(KoineError::InvalidParsing(format!("degree {other}"))),
    }
    Ok(parsing)
}

/// Format a parsing as a MorphGNT tag.
pub fn format(parsing: Parsing) -> Result<String> {
    let mut out = String::with_capacity(COLUMNS);
    out.push_str(pos_to_code(parsing)?);
    out.push(codes::person_to(parsing.person(), '-'));
    if parsing.pos() == PartOfSpeech::PersonalPronoun {
        out.push('-');
        out.push('-');
        out.push('-');
        out.push(codes::case_to(parsing.case(), '-'));
        out.push(match parsing.tense() {
            TenseForm::RefSingular => 'S',
            TenseForm::RefPlural => 'P',
            _ => '-',
        });
    } else {
        out.push(codes::tense_to(parsing.tense(), '-'));
        out.push(codes::voice_to(parsing.voice(), '-'));
        out.push(codes::mood_to(parsing.mood(), '-'));
        out.push(codes::case_to(parsing.case(), '-'));
        out.push(codes::number_to(parsing.number(), '-'));
    }
    out.push(codes::gender_to(parsing.gender(), '-'));
    out.push(match parsing.pos().degree() {
        Some(Degree::Comparative) => 'C',
        Some(Degree::Superlative) => 'S',
        None => '-',
    });
    Ok(out)
}

fn pos_from_code(code: &str) -> Result<(PartOfSpeech, bool, bool)> {
    Ok(match code {
        "N-" => (PartOfSpeech::Noun, false, false),
        "V-" => (PartOfSpeech::Verb, false, false),
        "A-" => (PartOfSpeech::Adjective, false, false),
        "D-" => (PartOfSpeech::Adverb, false, false),
        "C-" => (PartOfSpeech::Conjunction, false, false),
        "P-" => (PartOfSpeech::Preposition, false, false),
        "I-" => (PartOfSpeech::Interjection, false, false),
        "X-" => (PartOfSpeech::Particle, false, false),
        "M-" => (PartOfSpeech::Numeral, false, false),
        "RA" => (PartOfSpeech::Article, false, false),
        "RP" => (PartOfSpeech::PersonalPronoun, false, false),
        "RR" => (PartOfSpeech::RelativePronoun, false, false),
        "RD" => (PartOfSpeech::DemonstrativePronoun, false, false),
        "RS" => (PartOfSpeech::PossessivePronoun, false, false),
        "RC" => (PartOfSpeech::ReciprocalPronoun, false, false),
        "RF" => (PartOfSpeech::ReflexivePronoun, false, false),
        "RX" => (PartOfSpeech::Pronoun, true, false),
        "RI" => (PartOfSpeech::Pronoun, false, true),
        other => return Err(KoineError::InvalidParsing(other.to_string())),
    })
}

fn pos_to_code(parsing: Parsing) -> Result<&'static str> {
    Ok(match parsing.pos().base() {
        PartOfSpeech::Noun | PartOfSpeech::ProperNoun => "N-",
        PartOfSpeech::Verb => "V-",
        PartOfSpeech::Adjective => "A-",
        PartOfSpeech::Adverb => "D-",
        PartOfSpeech::Conjunction | PartOfSpeech::Conditional => "C-",
        PartOfSpeech::Preposition => "P-",
        PartOfSpeech::Interjection => "I-",
        PartOfSpeech::Particle => "X-",
        PartOfSpeech::Numeral => "M-",
        PartOfSpeech::Article => "RA",
        PartOfSpeech::PersonalPronoun => "RP",
        PartOfSpeech::RelativePronoun => "RR",
        PartOfSpeech::DemonstrativePronoun => "RD",
        PartOfSpeech::PossessivePronoun => "RS",
        PartOfSpeech::ReciprocalPronoun => "RC",
        PartOfSpeech::ReflexivePronoun => "RF",
        PartOfSpeech::Pronoun if parsing.interrogative() => "RI",
        PartOfSpeech::Pronoun if parsing.indefinite() => "RX",
        other => {
            return Err(KoineError::InvalidParsing(format!(
                "{other:?} has no MorphGNT code"
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{Case, Gender, Mood, Number, Person, Voice};

    #[test]
    fn finite_verb() {
        let parsing = parse("V-3PAI-S--").unwrap();
        assert_eq!(parsing.pos(), PartOfSpeech::Verb);
        assert_eq!(parsing.person(), Person::Third);
        assert_eq!(parsing.tense(), TenseForm::Present);
        assert_eq!(parsing.voice(), Voice::Active);
        assert_eq!(parsing.mood(), Mood::Indicative);
        assert_eq!(parsing.number(), Number::Singular);
    }

    #[test]
    fn wrong_width_rejected() {
        assert!(parse("V-3PAI-S-").is_err());
        assert!(parse("V-3PAI-S---").is_err());
    }

    #[test]
    fn corpus_round_trip() {
        let corpus = [
            "V-3PAI-S--",
            "V--PAPNSM-",
            "V-2AAM-P--",
            "N-----NSM-",
            "N-----GPF-",
            "A-----ASN-",
            "A-----NSMS",
            "D---------",
            "C---------",
            "RA----DSN-",
            "RP1---NS--",
            "RD----GPF-",
            "RF3---ASM-",
        ];
        for tag in corpus {
            match parse(tag) {
                Ok(parsing) => {
                    assert_eq!(format(parsing).unwrap(), tag, "round trip of {tag}")
                }
                Err(err) => panic!("{tag}: {err}"),
            }
        }
    }

    #[test]
    fn participle_carries_cng() {
        let parsing = parse("V--PAPNSM-").unwrap();
        assert_eq!(parsing.mood(), Mood::Participle);
        assert_eq!(parsing.case(), Case::Nominative);
        assert_eq!(parsing.gender(), Gender::Masculine);
    }
}
