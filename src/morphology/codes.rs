//! Shared single-letter field codes for the positional tag dialects.
//!
//! CCAT, MorphGNT and CNTR all spell morphology one letter per field, with
//! `.` or `-` standing for an unknown field. The letter tables below are
//! common to the three of them; the native dialect keeps its own tables
//! because its clusters reject unknowns instead of spelling them.

use crate::core::error::{KoineError, Result};
use crate::morphology::{Case, Gender, Mood, Number, Person, TenseForm, Voice};

/// Whether a positional column holds "unknown"
pub(crate) fn is_placeholder(c: char) -> bool {
    matches!(c, '.' | '-' | ' ')
}

pub(crate) fn mood_from(c: char) -> Result<Mood> {
    match c {
        'I' => Ok(Mood::Indicative),
        'S' => Ok(Mood::Subjunctive),
        'O' => Ok(Mood::Optative),
        'M' => Ok(Mood::Imperative),
        'N' => Ok(Mood::Infinitive),
        'P' => Ok(Mood::Participle),
        c if is_placeholder(c) => Ok(Mood::Unknown),
        other => Err(KoineError::InvalidParsing(format!("mood {other}"))),
    }
}

pub(crate) fn mood_to(mood: Mood, placeholder: char) -> char {
    match mood {
        Mood::Indicative => 'I',
        Mood::Subjunctive => 'S',
        Mood::Optative => 'O',
        Mood::Imperative => 'M',
        Mood::Infinitive => 'N',
        Mood::Participle => 'P',
        Mood::Unknown => placeholder,
    }
}

pub(crate) fn tense_from(c: char) -> Result<TenseForm> {
    match c {
        'P' => Ok(TenseForm::Present),
        'I' => Ok(TenseForm::Imperfect),
        'F' => Ok(TenseForm::Future),
        'A' => Ok(TenseForm::Aorist),
        'X' => Ok(TenseForm::Perfect),
        'Y' => Ok(TenseForm::Pluperfect),
        c if is_placeholder(c) => Ok(TenseForm::Unknown),
        other => Err(KoineError::InvalidParsing(format!("tense {other}"))),
    }
}

/// Second tense forms fold onto their plain letter; the positional
/// dialects have no column for the distinction.
pub(crate) fn tense_to(tense: TenseForm, placeholder: char) -> char {
    match tense {
        TenseForm::Present => 'P',
        TenseForm::Imperfect => 'I',
        TenseForm::Future | TenseForm::SecondFuture => 'F',
        TenseForm::Aorist | TenseForm::SecondAorist => 'A',
        TenseForm::Perfect | TenseForm::SecondPerfect => 'X',
        TenseForm::Pluperfect | TenseForm::SecondPluperfect => 'Y',
        TenseForm::Unknown | TenseForm::RefSingular | TenseForm::RefPlural => placeholder,
    }
}

pub(crate) fn voice_from(c: char) -> Result<Voice> {
    match c {
        'A' => Ok(Voice::Active),
        'M' => Ok(Voice::Middle),
        'P' => Ok(Voice::Passive),
        'E' => Ok(Voice::MiddleOrPassive),
        'D' => Ok(Voice::MiddleDeponent),
        'O' => Ok(Voice::PassiveDeponent),
        'N' => Ok(Voice::MiddleOrPassiveDeponent),
        c if is_placeholder(c) => Ok(Voice::Unknown),
        other => Err(KoineError::InvalidParsing(format!("voice {other}"))),
    }
}

pub(crate) fn voice_to(voice: Voice, placeholder: char) -> char {
    match voice {
        Voice::Active => 'A',
        Voice::Middle => 'M',
        Voice::Passive => 'P',
        Voice::MiddleOrPassive => 'E',
        Voice::MiddleDeponent => 'D',
        Voice::PassiveDeponent => 'O',
        Voice::MiddleOrPassiveDeponent => 'N',
        Voice::Unknown => placeholder,
    }
}

pub(crate) fn person_from(c: char) -> Result<Person> {
    match c {
        '1' => Ok(Person::First),
        '2' => Ok(Person::Second),
        '3' => Ok(Person::Third),
        c if is_placeholder(c) => Ok(Person::Unknown),
        other => Err(KoineError::InvalidParsing(format!("person {other}"))),
    }
}

pub(crate) fn person_to(person: Person, placeholder: char) -> char {
    match person {
        Person::First => '1',
        Person::Second => '2',
        Person::Third => '3',
        Person::Unknown => placeholder,
    }
}

pub(crate) fn case_from(c: char) -> Result<Case> {
    match c {
        'N' => Ok(Case::Nominative),
        'A' => Ok(Case::Accusative),
        'G' => Ok(Case::Genitive),
        'D' => Ok(Case::Dative),
        'V' => Ok(Case::Vocative),
        c if is_placeholder(c) => Ok(Case::Unknown),
        other => Err(KoineError::InvalidParsing(format!("case {other}"))),
    }
}

pub(crate) fn case_to(case: Case, placeholder: char) -> char {
    match case {
        Case::Nominative => 'N',
        Case::Accusative => 'A',
        Case::Genitive => 'G',
        Case::Dative => 'D',
        Case::Vocative => 'V',
        Case::Unknown => placeholder,
    }
}

pub(crate) fn number_from(c: char) -> Result<Number> {
    match c {
        'S' => Ok(Number::Singular),
        'P' => Ok(Number::Plural),
        'D' => Ok(Number::Dual),
        c if is_placeholder(c) => Ok(Number::Unknown),
        other => Err(KoineError::InvalidParsing(format!("number {other}"))),
    }
}

pub(crate) fn number_to(number: Number, placeholder: char) -> char {
    match number {
        Number::Singular => 'S',
        Number::Plural => 'P',
        Number::Dual => 'D',
        Number::Unknown => placeholder,
    }
}

pub(crate) fn gender_from(c: char) -> Result<Gender> {
    match c {
        'M' => Ok(Gender::Masculine),
        'F' => Ok(Gender::Feminine),
        'N' => Ok(Gender::Neuter),
        'B' => Ok(Gender::MasculineFeminine),
        'C' => Ok(Gender::MasculineNeuter),
        'E' => Ok(Gender::MasculineFeminineNeuter),
        c if is_placeholder(c) => Ok(Gender::Unknown),
        other => Err(KoineError::InvalidGender(other.to_string())),
    }
}

pub(crate) fn gender_to(gender: Gender, placeholder: char) -> char {
    match gender {
        Gender::Masculine => 'M',
        Gender::Feminine => 'F',
        Gender::Neuter => 'N',
        Gender::MasculineFeminine => 'B',
        Gender::MasculineNeuter => 'C',
        Gender::MasculineFeminineNeuter => 'E',
        Gender::Unknown => placeholder,
    }
}
