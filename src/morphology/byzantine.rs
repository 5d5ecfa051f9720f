//! The native Byzantine-style tag dialect.
//!
//! Tags are dash-separated: a part-of-speech token, then the morpheme
//! cluster the part of speech calls for, then optional degree and flag
//! groups:
//!
//! ```text
//! N-NSM       noun, nominative singular masculine
//! V-PAI-1P    verb, present active indicative, first plural
//! V-2AAI-3S   verb, second aorist active indicative, third singular
//! V-PAP-NSM   participle with its case/number/gender cluster
//! P-1NS       personal pronoun, first person, nominative, referent singular
//! A-NSM-S     superlative adjective
//! PRT-N       negative particle
//! ```
//!
//! Bracketing characters (`[]`, `()`, `{}`, `.`, quotes, whitespace)
//! terminate a tag, so `[N-NSM]` parses the same as `N-NSM`. A morpheme
//! letter glued onto a cluster (`N-NSMK`) is an error.

use crate::core::error::{KoineError, Result};
use crate::morphology::{
    Case, Degree, Gender, Mood, Number, Parsing, PartOfSpeech, Person, TenseForm, Voice,
};

/// Characters that end a tag wherever it is embedded
fn is_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '[' | ']' | '(' | ')' | '{' | '}' | '.' | '"' | '\'')
}

/// Parse a native tag, ignoring any bracketing around it.
pub fn parse(input: &str) -> Result<Parsing> {
    let trimmed = input.trim_start_matches(is_terminator);
    let body = match trimmed.find(is_terminator) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    if body.is_empty() {
        return Err(KoineError::InvalidParsing(input.to_string()));
    }

    let mut groups = body.split('-');
    let pos_token = groups.next().unwrap_or_default();
    let pos = parse_pos_token(pos_token)
        .ok_or_else(|| KoineError::InvalidParsing(body.to_string()))?;

    let mut parsing = Parsing::of_pos(pos);
    let rest: Vec<&str> = groups.collect();
    let mut cursor = 0usize;

    match pos {
        PartOfSpeech::Verb => {
            let cluster = rest.get(cursor).copied().ok_or(KoineError::Incomplete)?;
            parse_verb_cluster(cluster, &mut parsing)?;
            cursor += 1;
            match parsing.mood() {
                Mood::Infinitive => {}
                Mood::Participle => {
                    let cng = rest.get(cursor).copied().ok_or(KoineError::Incomplete)?;
                    parse_cng(cng, &mut parsing)?;
                    cursor += 1;
                }
                _ => {
                    let pn = rest.get(cursor).copied().ok_or(KoineError::Incomplete)?;
                    parse_person_number(pn, &mut parsing)?;
                    cursor += 1;
                }
            }
        }
        PartOfSpeech::PersonalPronoun => {
            let cluster = rest.get(cursor).copied().ok_or(KoineError::Incomplete)?;
            parse_personal_cluster(cluster, &mut parsing)?;
            cursor += 1;
        }
        PartOfSpeech::PossessivePronoun | PartOfSpeech::ReflexivePronoun => {
            let cluster = rest.get(cursor).copied().ok_or(KoineError::Incomplete)?;
            parse_person_cng(cluster, &mut parsing)?;
            cursor += 1;
        }
        pos if pos.is_nominal() => {
            // An indeclinable nominal may omit its cluster entirely.
            if let Some(&group) = rest.get(cursor) {
                if !is_flag_or_degree_group(group) {
                    parse_cng(group, &mut parsing)?;
                    cursor += 1;
                }
            }
        }
        _ => {}
    }

    // Degree group, adjectives/adverbs/nouns only.
    if let Some(&group) = rest.get(cursor) {
        let degree = match group {
            "C" => Some(Degree::Comparative),
            "S" => Some(Degree::Superlative),
            _ => None,
        };
        if let Some(degree) = degree {
            parsing.set_pos(parsing.pos().with_degree(degree)?);
            cursor += 1;
        }
    }

    // Flag groups, in canonical order.
    for &group in &rest[cursor..] {
        match group {
            "I" => parsing.set_interrogative(true),
            "N" => parsing.set_negative(true),
            "K" => parsing.set_crasis(true),
            "COR" => parsing.set_correlative(true),
            "IDF" => parsing.set_indefinite(true),
            "IDC" => parsing.set_indeclinable(true),
            other => return Err(KoineError::InvalidParsing(other.to_string())),
        }
    }

    Ok(parsing)
}

/// Format a parsing as a native tag.
///
/// Fails with [`KoineError::Incomplete`] when the part of speech demands
/// fields the value does not carry, e.g. a participle without its
/// case/number/gender.
pub fn format(parsing: Parsing) -> Result<String> {
    let pos = parsing.pos();
    let mut out = String::from(pos_token(pos).ok_or(KoineError::Incomplete)?);

    match pos {
        PartOfSpeech::Verb => {
            out.push('-');
            out.push_str(&format_verb_cluster(parsing)?);
            match parsing.mood() {
                Mood::Infinitive => {}
                Mood::Participle => {
                    out.push('-');
                    out.push_str(&format_cng(parsing)?);
                }
                Mood::Unknown => return Err(KoineError::Incomplete),
                _ => {
                    out.push('-');
                    out.push_str(&format_person_number(parsing)?);
                }
            }
        }
        PartOfSpeech::PersonalPronoun => {
            out.push('-');
            out.push(person_code(parsing.person()).ok_or(KoineError::Incomplete)?);
            out.push(case_code(parsing.case()).ok_or(KoineError::Incomplete)?);
            out.push(match parsing.tense() {
                TenseForm::RefSingular => 'S',
                TenseForm::RefPlural => 'P',
                _ => return Err(KoineError::Incomplete),
            });
        }
        PartOfSpeech::PossessivePronoun | PartOfSpeech::ReflexivePronoun => {
            out.push('-');
            out.push(person_code(parsing.person()).ok_or(KoineError::Incomplete)?);
            out.push_str(&format_cng(parsing)?);
        }
        pos if pos.is_nominal() => {
            let bare = parsing.case() == Case::Unknown
                && parsing.number() == Number::Unknown
                && parsing.gender() == Gender::Unknown;
            if bare {
                if !parsing.indeclinable() {
                    return Err(KoineError::Incomplete);
                }
            } else {
                out.push('-');
                out.push_str(&format_cng(parsing)?);
            }
        }
        _ => {}
    }

    match pos.degree() {
        Some(Degree::Comparative) => out.push_str("-C"),
        Some(Degree::Superlative) => out.push_str("-S"),
        None => {}
    }
    if parsing.interrogative() {
        out.push_str("-I");
    }
    if parsing.negative() {
        out.push_str("-N");
    }
    if parsing.crasis() {
        out.push_str("-K");
    }
    if parsing.correlative() {
        out.push_str("-COR");
    }
    if parsing.indefinite() {
        out.push_str("-IDF");
    }
    if parsing.indeclinable() {
        out.push_str("-IDC");
    }

    Ok(out)
}

fn parse_pos_token(token: &str) -> Option<PartOfSpeech> {
    Some(match token {
        "N" => PartOfSpeech::Noun,
        "NP" => PartOfSpeech::ProperNoun,
        "V" => PartOfSpeech::Verb,
        "A" => PartOfSpeech::Adjective,
        "T" => PartOfSpeech::Article,
        "P" => PartOfSpeech::PersonalPronoun,
        "S" => PartOfSpeech::PossessivePronoun,
        "R" => PartOfSpeech::RelativePronoun,
        "D" => PartOfSpeech::DemonstrativePronoun,
        "C" => PartOfSpeech::ReciprocalPronoun,
        "F" => PartOfSpeech::ReflexivePronoun,
        "X" => PartOfSpeech::Pronoun,
        "ADV" => PartOfSpeech::Adverb,
        "CONJ" => PartOfSpeech::Conjunction,
        "COND" => PartOfSpeech::Conditional,
        "PRT" => PartOfSpeech::Particle,
        "PREP" => PartOfSpeech::Preposition,
        "INJ" => PartOfSpeech::Interjection,
        "ARAM" => PartOfSpeech::AramaicTransliteration,
        "HEB" => PartOfSpeech::HebrewTransliteration,
        "TL" => PartOfSpeech::Transliteration,
        "LET" => PartOfSpeech::Letter,
        "NUM" => PartOfSpeech::Numeral,
        _ => return None,
    })
}

fn pos_token(pos: PartOfSpeech) -> Option<&'static str> {
    Some(match pos.base() {
        PartOfSpeech::Noun => "N",
        PartOfSpeech::ProperNoun => "NP",
        PartOfSpeech::Verb => "V",
        PartOfSpeech::Adjective => "A",
        PartOfSpeech::Article => "T",
        PartOfSpeech::PersonalPronoun => "P",
        PartOfSpeech::PossessivePronoun => "S",
        PartOfSpeech::RelativePronoun => "R",
        PartOfSpeech::DemonstrativePronoun => "D",
        PartOfSpeech::ReciprocalPronoun => "C",
        PartOfSpeech::ReflexivePronoun => "F",
        PartOfSpeech::Pronoun => "X",
        PartOfSpeech::Adverb => "ADV",
        PartOfSpeech::Conjunction => "CONJ",
        PartOfSpeech::Conditional => "COND",
        PartOfSpeech::Particle => "PRT",
        PartOfSpeech::Preposition => "PREP",
        PartOfSpeech::Interjection => "INJ",
        PartOfSpeech::AramaicTransliteration => "ARAM",
        PartOfSpeech::HebrewTransliteration => "HEB",
        PartOfSpeech::Transliteration => "TL",
        PartOfSpeech::Letter => "LET",
        PartOfSpeech::Numeral => "NUM",
        _ => return None,
    })
}

fn is_flag_or_degree_group(group: &str) -> bool {
    matches!(group, "C" | "S" | "I" | "N" | "K" | "COR" | "IDF" | "IDC")
}

fn parse_verb_cluster(cluster: &str, parsing: &mut Parsing) -> Result<()> {
    let mut chars = cluster.chars().peekable();
    let second = chars.peek() == Some(&'2');
    if second {
        chars.next();
    }
    let tense = match (chars.next(), second) {
        (Some('P'), false) => TenseForm::Present,
        (Some('F'), false) => TenseForm::Future,
        (Some('A'), false) => TenseForm::Aorist,
        (Some('I'), false) => TenseForm::Imperfect,
        (Some('R'), false) => TenseForm::Perfect,
        (Some('L'), false) => TenseForm::Pluperfect,
        (Some('F'), true) => TenseForm::SecondFuture,
        (Some('A'), true) => TenseForm::SecondAorist,
        (Some('R'), true) => TenseForm::SecondPerfect,
        (Some('L'), true) => TenseForm::SecondPluperfect,
        _ => return Err(KoineError::InvalidParsing(cluster.to_string())),
    };
    let voice = match chars.next() {
        Some('A') => Voice::Active,
        Some('M') => Voice::Middle,
        Some('P') => Voice::Passive,
        Some('E') => Voice::MiddleOrPassive,
        Some('D') => Voice::MiddleDeponent,
        Some('O') => Voice::PassiveDeponent,
        Some('N') => Voice::MiddleOrPassiveDeponent,
        None => return Err(KoineError::Incomplete),
        _ => return Err(KoineError::InvalidParsing(cluster.to_string())),
    };
    let mood = match chars.next() {
        Some('I') => Mood::Indicative,
        Some('S') => Mood::Subjunctive,
        Some('O') => Mood::Optative,
        Some('M') => Mood::Imperative,
        Some('N') => Mood::Infinitive,
        Some('P') => Mood::Participle,
        None => return Err(KoineError::Incomplete),
        _ => return Err(KoineError::InvalidParsing(cluster.to_string())),
    };
    if chars.next().is_some() {
        return Err(KoineError::InvalidParsing(cluster.to_string()));
    }
    parsing.set_tense(tense);
    parsing.set_voice(voice);
    parsing.set_mood(mood);
    Ok(())
}

fn format_verb_cluster(parsing: Parsing) -> Result<String> {
    let mut out = String::new();
    match parsing.tense() {
        TenseForm::Present => out.push('P'),
        TenseForm::Future => out.push('F'),
        TenseForm::Aorist => out.push('A'),
        TenseForm::Imperfect => out.push('I'),
        TenseForm::Perfect => out.push('R'),
        TenseForm::Pluperfect => out.push('L'),
        TenseForm::SecondFuture => out.push_str("2F"),
        TenseForm::SecondAorist => out.push_str("2A"),
        TenseForm::SecondPerfect => out.push_str("2R"),
        TenseForm::SecondPluperfect => out.push_str("2L"),
        _ => return Err(KoineError::Incomplete),
    }
    out.push(match parsing.voice() {
        Voice::Active => 'A',
        Voice::Middle => 'M',
        Voice::Passive => 'P',
        Voice::MiddleOrPassive => 'E',
        Voice::MiddleDeponent => 'D',
        Voice::PassiveDeponent => 'O',
        Voice::MiddleOrPassiveDeponent => 'N',
        Voice::Unknown => return Err(KoineError::Incomplete),
    });
    out.push(match parsing.mood() {
        Mood::Indicative => 'I',
        Mood::Subjunctive => 'S',
        Mood::Optative => 'O',
        Mood::Imperative => 'M',
        Mood::Infinitive => 'N',
        Mood::Participle => 'P',
        Mood::Unknown => return Err(KoineError::Incomplete),
    });
    Ok(out)
}

fn parse_cng(cluster: &str, parsing: &mut Parsing) -> Result<()> {
    let mut chars = cluster.chars();
    let case = parse_case(chars.next(), cluster)?;
    let number = parse_number(chars.next(), cluster)?;
    let gender = match chars.next() {
        Some(c) => parse_gender(c)?,
        // A case and number with no gender is a truncated cluster.
        None => return Err(KoineError::Incomplete),
    };
    if chars.next().is_some() {
        return Err(KoineError::InvalidParsing(cluster.to_string()));
    }
    parsing.set_case(case);
    parsing.set_number(number);
    parsing.set_gender(gender);
    Ok(())
}

fn format_cng(parsing: Parsing) -> Result<String> {
    let mut out = String::new();
    out.push(case_code(parsing.case()).ok_or(KoineError::Incomplete)?);
    out.push(number_code(parsing.number()).ok_or(KoineError::Incomplete)?);
    out.push(gender_code(parsing.gender()).ok_or(KoineError::Incomplete)?);
    Ok(out)
}

fn parse_person_number(cluster: &str, parsing: &mut Parsing) -> Result<()> {
    let mut chars = chars_exactly(cluster, 2)?;
    parsing.set_person(parse_person(chars.next(), cluster)?);
    parsing.set_number(parse_number(chars.next(), cluster)?);
    Ok(())
}

fn format_person_number(parsing: Parsing) -> Result<String> {
    let mut out = String::new();
    out.push(person_code(parsing.person()).ok_or(KoineError::Incomplete)?);
    out.push(number_code(parsing.number()).ok_or(KoineError::Incomplete)?);
    Ok(out)
}

fn parse_personal_cluster(cluster: &str, parsing: &mut Parsing) -> Result<()> {
    let mut chars = chars_exactly(cluster, 3)?;
    parsing.set_person(parse_person(chars.next(), cluster)?);
    parsing.set_case(parse_case(chars.next(), cluster)?);
    match chars.next() {
        Some('S') => parsing.set_tense(TenseForm::RefSingular),
        Some('P') => parsing.set_tense(TenseForm::RefPlural),
        _ => return Err(KoineError::InvalidParsing(cluster.to_string())),
    }
    Ok(())
}

fn parse_person_cng(cluster: &str, parsing: &mut Parsing) -> Result<()> {
    let mut chars = chars_exactly(cluster, 4)?;
    parsing.set_person(parse_person(chars.next(), cluster)?);
    parsing.set_case(parse_case(chars.next(), cluster)?);
    parsing.set_number(parse_number(chars.next(), cluster)?);
    parsing.set_gender(parse_gender(chars.next().unwrap_or('?'))?);
    Ok(())
}

fn chars_exactly(cluster: &str, expected: usize) -> Result<std::str::Chars<'_>> {
    let count = cluster.chars().count();
    if count < expected {
        return Err(KoineError::Incomplete);
    }
    if count > expected {
        return Err(KoineError::InvalidParsing(cluster.to_string()));
    }
    Ok(cluster.chars())
}

fn parse_person(c: Option<char>, cluster: &str) -> Result<Person> {
    match c {
        Some('1') => Ok(Person::First),
        Some('2') => Ok(Person::Second),
        Some('3') => Ok(Person::Third),
        None => Err(KoineError::Incomplete),
        _ => Err(KoineError::InvalidParsing(cluster.to_string())),
    }
}

fn parse_case(c: Option<char>, cluster: &str) -> Result<Case> {
    match c {
        Some('N') => Ok(Case::Nominative),
        Some('A') => Ok(Case::Accusative),
        Some('G') => Ok(Case::Genitive),
        Some('D') => Ok(Case::Dative),
        Some('V') => Ok(Case::Vocative),
        None => Err(KoineError::Incomplete),
        _ => Err(KoineError::InvalidParsing(cluster.to_string())),
    }
}

fn parse_number(c: Option<char>, cluster: &str) -> Result<Number> {
    match c {
        Some('S') => Ok(Number::Singular),
        Some('P') => Ok(Number::Plural),
        Some('D') => Ok(Number::Dual),
        None => Err(KoineError::Incomplete),
        _ => Err(KoineError::InvalidParsing(cluster.to_string())),
    }
}

fn parse_gender(c: char) -> Result<Gender> {
    match c {
        'M' => Ok(Gender::Masculine),
        'F' => Ok(Gender::Feminine),
        'N' => Ok(Gender::Neuter),
        'B' => Ok(Gender::MasculineFeminine),
        'C' => Ok(Gender::MasculineNeuter),
        'E' => Ok(Gender::MasculineFeminineNeuter),
        other => Err(KoineError::InvalidGender(other.to_string())),
    }
}

fn person_code(person: Person) -> Option<char> {
    match person {
        Person::First => Some('1'),
        Person::Second => Some('2'),
        Person::Third => Some('3'),
        Person::Unknown => None,
    }
}

fn case_code(case: Case) -> Option<char> {
    match case {
        Case::Nominative => Some('N'),
        Case::Accusative => Some('A'),
        Case::Genitive => Some('G'),
        Case::Dative => Some('D'),
        Case::Vocative => Some('V'),
        Case::Unknown => None,
    }
}

fn number_code(number: Number) -> Option<char> {
    match number {
        Number::Singular => Some('S'),
        Number::Plural => Some('P'),
        Number::Dual => Some('D'),
        Number::Unknown => None,
    }
}

fn gender_code(gender: Gender) -> Option<char> {
    match gender {
        Gender::Masculine => Some('M'),
        Gender::Feminine => Some('F'),
        Gender::Neuter => Some('N'),
        Gender::MasculineFeminine => Some('B'),
        Gender::MasculineNeuter => Some('C'),
        Gender::MasculineFeminineNeuter => Some('E'),
        Gender::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_tag() {
        let parsing = parse("N-NSM").unwrap();
        assert_eq!(parsing.pos(), PartOfSpeech::Noun);
        assert_eq!(parsing.case(), Case::Nominative);
        assert_eq!(parsing.number(), Number::Singular);
        assert_eq!(parsing.gender(), Gender::Masculine);
    }

    #[test]
    fn finite_verb_tag() {
        let parsing = parse("V-PAI-2P").unwrap();
        assert_eq!(parsing.pos(), PartOfSpeech::Verb);
        assert_eq!(parsing.tense(), TenseForm::Present);
        assert_eq!(parsing.voice(), Voice::Active);
        assert_eq!(parsing.mood(), Mood::Indicative);
        assert_eq!(parsing.person(), Person::Second);
        assert_eq!(parsing.number(), Number::Plural);
        assert_eq!(format(parsing).unwrap(), "V-PAI-2P");
    }

    #[test]
    fn personal_pronoun_tag() {
        let parsing = parse("P-1NS").unwrap();
        assert_eq!(parsing.pos(), PartOfSpeech::PersonalPronoun);
        assert_eq!(parsing.person(), Person::First);
        assert_eq!(parsing.case(), Case::Nominative);
        assert_eq!(parsing.tense(), TenseForm::RefSingular);
    }

    #[test]
    fn brackets_are_stripped() {
        assert_eq!(parse("[N-NSM]").unwrap(), parse("N-NSM").unwrap());
        assert_eq!(parse("{V-PAN}").unwrap(), parse("V-PAN").unwrap());
        assert_eq!(parse("(P-1NS)").unwrap(), parse("P-1NS").unwrap());
    }

    #[test]
    fn stray_morpheme_letter_rejected() {
        assert!(matches!(
            parse("N-NSMK"),
            Err(KoineError::InvalidParsing(_))
        ));
    }

    #[test]
    fn truncated_cluster_is_incomplete() {
        assert!(matches!(parse("A-GS"), Err(KoineError::Incomplete)));
    }

    #[test]
    fn corpus_round_trip() {
        let corpus = [
            "N-NSM",
            "N-GSF",
            "N-APN",
            "NP-GSM",
            "A-NSM",
            "A-NPB",
            "A-NSM-S",
            "A-GSF-C",
            "ADV",
            "ADV-S",
            "ADV-I",
            "T-DSN",
            "V-PAI-1P",
            "V-PAI-2P",
            "V-2AAI-3S",
            "V-PAN",
            "V-PAP-NSM",
            "V-RPP-GPE",
            "V-AOM-2S",
            "P-1NS",
            "P-2GP",
            "S-1NSM",
            "F-3ASM",
            "R-NSN",
            "R-NSN-COR",
            "D-GPF",
            "X-NSM-IDF",
            "N-IDC",
            "CONJ",
            "CONJ-N",
            "PRT-I",
            "PRT-N",
            "PREP",
            "COND",
            "COND-K",
            "INJ",
            "HEB",
            "ARAM",
            "NUM-NPM",
            "LET-NSN",
        ];
        for tag in corpus {
            let parsing = parse(tag).unwrap();
            assert_eq!(format(parsing).unwrap(), tag, "round trip of {tag}");
        }
    }

    #[test]
    fn display_uses_native_dialect() {
        let parsing = parse("V-PAI-3S").unwrap();
        assert_eq!(parsing.to_string(), "V-PAI-3S");
    }
}
