//! The CNTR tag dialect.
//!
//! One coarse part-of-speech letter followed by a seven-character
//! morphology string in the order mood, tense, voice, person, case,
//! gender, number, with `.` for an empty column:
//!
//! ```text
//! VIPA3..S    indicative present active, third singular
//! N....NMS    nominative masculine singular noun
//! W...1N.S    first person pronoun, nominative, referent singular
//! ```

use crate::core::error::{KoineError, Result};
use crate::morphology::codes;
use crate::morphology::{Parsing, PartOfSpeech, TenseForm};

const COLUMNS: usize = 8;

/// Parse a CNTR tag.
pub fn parse(input: &str) -> Result<Parsing> {
    let tag = input.trim();
    if tag.chars().count() != COLUMNS {
        return Err(KoineError::InvalidParsing(tag.to_string()));
    }
    let cols: Vec<char> = tag.chars().collect();
    let pos = pos_from_letter(cols[0])?;

    let mut parsing = Parsing::of_pos(pos);
    parsing.set_mood(codes::mood_from(cols[1])?);
    parsing.set_tense(codes::tense_from(cols[2])?);
    parsing.set_voice(codes::voice_from(cols[3])?);
    parsing.set_person(codes::person_from(cols[4])?);
    parsing.set_case(codes::case_from(cols[5])?);
    parsing.set_gender(codes::gender_from(cols[6])?);
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
    Ok(parsing)
}

/// Format a parsing as a CNTR tag.
pub fn format(parsing: Parsing) -> Result<String> {
    let mut out = String::with_capacity(COLUMNS);
    out.push(pos_to_letter(parsing.pos())?);
    out.push(codes::mood_to(parsing.mood(), '.'));
    out.push(codes::tense_to(parsing.tense(), '.'));
    out.push(codes::voice_to(parsing.voice(), '.'));
    out.push(codes::person_to(parsing.person(), '.'));
    out.push(codes::case_to(parsing.case(), '.'));
    out.push(codes::gender_to(parsing.gender(), '.'));
    if parsing.pos() == PartOfSpeech::PersonalPronoun {
        out.push(match parsing.tense() {
            TenseForm::RefSingular => 'S',
            TenseForm::RefPlural => 'P',
            _ => '.',
        });
    } else {
        out.push(codes::number_to(parsing.number(), '.'));
    }
    Ok(out)
}

fn pos_from_letter(c: char) -> Result<PartOfSpeech> {
    Ok(match c {
        'N' => PartOfSpeech::Noun,
        'U' => PartOfSpeech::ProperNoun,
        'V' => PartOfSpeech::Verb,
        'J' => PartOfSpeech::Adjective,
        'B' => PartOfSpeech::Adverb,
        'C' => PartOfSpeech::Conjunction,
        'O' => PartOfSpeech::Conditional,
        'P' => PartOfSpeech::Preposition,
        'I' => PartOfSpeech::Interjection,
        'T' => PartOfSpeech::Particle,
        'E' => PartOfSpeech::Article,
        'W' => PartOfSpeech::PersonalPronoun,
        'S' => PartOfSpeech::PossessivePronoun,
        'R' => PartOfSpeech::RelativePronoun,
        'D' => PartOfSpeech::DemonstrativePronoun,
        'K' => PartOfSpeech::ReciprocalPronoun,
        'F' => PartOfSpeech::ReflexivePronoun,
        'X' => PartOfSpeech::Pronoun,
        'L' => PartOfSpeech::Letter,
        'M' => PartOfSpeech::Numeral,
        'H' => PartOfSpeech::HebrewTransliteration,
        'A' => PartOfSpeech::AramaicTransliteration,
        'Z' => PartOfSpeech::Transliteration,
        other => return Err(KoineError::InvalidParsing(format!("pos {other}"))),
    })
}

fn pos_to_letter(pos: PartOfSpeech) -> Result<char> {
    Ok(match pos.base() {
        PartOfSpeech::Noun => 'N',
        PartOfSpeech::ProperNoun => 'U',
        PartOfSpeech::Verb => 'V',
        PartOfSpeech::Adjective => 'J',
        PartOfSpeech::Adverb => 'B',
        PartOfSpeech::Conjunction => 'C',
        PartOfSpeech::Conditional => 'O',
        PartOfSpeech::Preposition => 'P',
        PartOfSpeech::Interjection => 'I',
        PartOfSpeech::Particle => 'T',
        PartOfSpeech::Article => 'E',
        PartOfSpeech::PersonalPronoun => 'W',
        PartOfSpeech::PossessivePronoun => 'S',
        PartOfSpeech::RelativePronoun => 'R',
        PartOfSpeech::DemonstrativePronoun => 'D',
        PartOfSpeech::ReciprocalPronoun => 'K',
        PartOfSpeech::ReflexivePronoun => 'F',
        PartOfSpeech::Pronoun => 'X',
        PartOfSpeech::Letter => 'L',
        PartOfSpeech::Numeral => 'M',
        PartOfSpeech::HebrewTransliteration => 'H',
        PartOfSpeech::AramaicTransliteration => 'A',
        PartOfSpeech::Transliteration => 'Z',
        PartOfSpeech::Unknown => {
            return Err(KoineError::InvalidParsing("pos unknown".to_string()))
        }
        _ => unreachable!("base() strips degree"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{Case, Gender, Mood, Number, Person, Voice};

    #[test]
    fn finite_verb() {
        let parsing = parse("VIPA3..S").unwrap();
        assert_eq!(parsing.pos(), PartOfSpeech::Verb);
        assert_eq!(parsing.mood(), Mood::Indicative);
        assert_eq!(parsing.tense(), TenseForm::Present);
        assert_eq!(parsing.voice(), Voice::Active);
        assert_eq!(parsing.person(), Person::Third);
        assert_eq!(parsing.number(), Number::Singular);
    }

    #[test]
    fn noun_with_gender_before_number() {
        let parsing = parse("N....NMS").unwrap();
        assert_eq!(parsing.case(), Case::Nominative);
        assert_eq!(parsing.gender(), Gender::Masculine);
        assert_eq!(parsing.number(), Number::Singular);
    }

    #[test]
    fn corpus_round_trip() {
        let corpus = [
            "VIPA3..S",
            "VPPA.NMS",
            "VNPA....",
            "N....NMS",
            "N....GFP",
            "J....ANS",
            "E....DNS",
            "W...1N.S",
            "R....NNS",
            "D....GFP",
            "C.......",
            "B.......",
            "T.......",
            "U....NMS",
        ];
        for tag in corpus {
            let parsing = parse(tag).unwrap();
            assert_eq!(format(parsing).unwrap(), tag, "round trip of {tag}");
        }
    }

    #[test]
    fn wrong_width_rejected() {
        assert!(parse("VIPA3.S").is_err());
        assert!(parse("VIPA3...S").is_err());
    }
}
