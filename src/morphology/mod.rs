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

//! Morphosyntactic parsings and their tag dialects.
//!
//! A [`Parsing`] packs a complete morphosyntactic analysis into 32 bits.
//! The packed representation is the one stored in binary dictionaries, so
//! its bit layout is frozen:
//!
//! ```text
//! bits  0..5   part of speech      bits 18..21  case
//! bits  5..9   tense form          bits 21..23  person
//! bits  9..12  mood                bits 23..25  number
//! bits 12..15  gender              bits 25..31  flags
//! bits 15..18  voice               bit  31      unused, always zero
//! ```
//!
//! Four textual tag dialects read and write this value:
//!
//! - [`byzantine`]: the native dash-separated codes (`N-NSM`, `V-PAI-1P`)
//! - [`ccat`]: space-separated CCAT/CATSS fields (`V IAA3..S`, `N1T NSM`)
//! - [`morphgnt`]: ten fixed MorphGNT columns (`V-3PAI-S--`)
//! - [`cntr`]: one pos letter plus a seven-character morphology string
//!
//! Each dialect emits exactly the strings its parser accepts, so any tag
//! taken from a corpus survives a parse/format round trip unchanged.

use crate::core::error::{KoineError, Result};
use std::fmt;

pub mod byzantine;
pub mod ccat;
pub mod cntr;
pub mod morphgnt;

mod codes;
mod translit;

pub use translit::transliterate_word;

/// Part of speech, including the pronoun subclasses and the degree
/// variants of adjectives, adverbs and nouns
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum PartOfSpeech {
    #[default]
    Unknown = 0,
    Particle = 1,
    Verb = 2,
    Noun = 3,
    Adjective = 4,
    Adverb = 5,
    Conjunction = 6,
    ProperNoun = 7,
    Preposition = 8,
    Conditional = 9,
    Article = 10,
    Interjection = 11,
    Pronoun = 12,
    PersonalPronoun = 13,
    PossessivePronoun = 14,
    RelativePronoun = 15,
    DemonstrativePronoun = 16,
    ReciprocalPronoun = 17,
    ReflexivePronoun = 18,
    Transliteration = 19,
    HebrewTransliteration = 20,
    AramaicTransliteration = 21,
    Letter = 22,
    Numeral = 23,
    SuperlativeAdjective = 24,
    SuperlativeAdverb = 25,
    SuperlativeNoun = 26,
    ComparativeAdjective = 27,
    ComparativeAdverb = 28,
    ComparativeNoun = 29,
}

impl PartOfSpeech {
    const VARIANTS: [PartOfSpeech; 30] = [
        PartOfSpeech::Unknown,
        PartOfSpeech::Particle,
        PartOfSpeech::Verb,
        PartOfSpeech::Noun,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Conjunction,
        PartOfSpeech::ProperNoun,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conditional,
        PartOfSpeech::Article,
        PartOfSpeech::Interjection,
        PartOfSpeech::Pronoun,
        PartOfSpeech::PersonalPronoun,
        PartOfSpeech::PossessivePronoun,
        PartOfSpeech::RelativePronoun,
        PartOfSpeech::DemonstrativePronoun,
        PartOfSpeech::ReciprocalPronoun,
        PartOfSpeech::ReflexivePronoun,
        PartOfSpeech::Transliteration,
        PartOfSpeech::HebrewTransliteration,
        PartOfSpeech::AramaicTransliteration,
        PartOfSpeech::Letter,
        PartOfSpeech::Numeral,
        PartOfSpeech::SuperlativeAdjective,
        PartOfSpeech::SuperlativeAdverb,
        PartOfSpeech::SuperlativeNoun,
        PartOfSpeech::ComparativeAdjective,
        PartOfSpeech::ComparativeAdverb,
        PartOfSpeech::ComparativeNoun,
    ];

    fn from_bits(bits: u32) -> Result<Self> {
        Self::VARIANTS
            .get(bits as usize)
            .copied()
            .ok_or_else(|| KoineError::InvalidU32(format!("part of speech {bits}")))
    }

    /// Whether this part of speech declines for case, number and gender
    pub fn is_nominal(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::ProperNoun
                | PartOfSpeech::Adjective
                | PartOfSpeech::Article
                | PartOfSpeech::Pronoun
                | PartOfSpeech::RelativePronoun
                | PartOfSpeech::DemonstrativePronoun
                | PartOfSpeech::ReciprocalPronoun
                | PartOfSpeech::Numeral
                | PartOfSpeech::Letter
                | PartOfSpeech::SuperlativeAdjective
                | PartOfSpeech::SuperlativeNoun
                | PartOfSpeech::ComparativeAdjective
                | PartOfSpeech::ComparativeNoun
        )
    }

    /// The base part of speech with any degree stripped
    pub fn base(self) -> Self {
        match self {
            PartOfSpeech::SuperlativeAdjective | PartOfSpeech::ComparativeAdjective => {
                PartOfSpeech::Adjective
            }
            PartOfSpeech::SuperlativeAdverb | PartOfSpeech::ComparativeAdverb => {
                PartOfSpeech::Adverb
            }
            PartOfSpeech::SuperlativeNoun | PartOfSpeech::ComparativeNoun => PartOfSpeech::Noun,
            other => other,
        }
    }

    /// The degree this part of speech carries, if any
    pub fn degree(self) -> Option<Degree> {
        match self {
            PartOfSpeech::SuperlativeAdjective
            | PartOfSpeech::SuperlativeAdverb
            | PartOfSpeech::SuperlativeNoun => Some(Degree::Superlative),
            PartOfSpeech::ComparativeAdjective
            | PartOfSpeech::ComparativeAdverb
            | PartOfSpeech::ComparativeNoun => Some(Degree::Comparative),
            _ => None,
        }
    }

    /// Apply a degree to an adjective, adverb or noun
    pub fn with_degree(self, degree: Degree) -> Result<Self> {
        match (self.base(), degree) {
            (PartOfSpeech::Adjective, Degree::Comparative) => Ok(PartOfSpeech::ComparativeAdjective),
            (PartOfSpeech::Adjective, Degree::Superlative) => Ok(PartOfSpeech::SuperlativeAdjective),
            (PartOfSpeech::Adverb, Degree::Comparative) => Ok(PartOfSpeech::ComparativeAdverb),
            (PartOfSpeech::Adverb, Degree::Superlative) => Ok(PartOfSpeech::SuperlativeAdverb),
            (PartOfSpeech::Noun, Degree::Comparative) => Ok(PartOfSpeech::ComparativeNoun),
            (PartOfSpeech::Noun, Degree::Superlative) => Ok(PartOfSpeech::SuperlativeNoun),
            _ => Err(KoineError::InvalidParsing(format!(
                "degree on {self:?}"
            ))),
        }
    }
}

/// Degree of comparison folded into [`PartOfSpeech`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// -τερος and friends
    Comparative,
    /// -τατος and friends
    Superlative,
}

/// Tense form, including second ("strong") forms and the referent-number
/// values personal pronouns use
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum TenseForm {
    #[default]
    Unknown = 0,
    Present = 1,
    Future = 2,
    Aorist = 3,
    Imperfect = 4,
    Perfect = 5,
    Pluperfect = 6,
    SecondFuture = 7,
    SecondAorist = 8,
    SecondPerfect = 9,
    SecondPluperfect = 10,
    RefSingular = 11,
    RefPlural = 12,
}

impl TenseForm {
    const VARIANTS: [TenseForm; 13] = [
        TenseForm::Unknown,
        TenseForm::Present,
        TenseForm::Future,
        TenseForm::Aorist,
        TenseForm::Imperfect,
        TenseForm::Perfect,
        TenseForm::Pluperfect,
        TenseForm::SecondFuture,
        TenseForm::SecondAorist,
        TenseForm::SecondPerfect,
        TenseForm::SecondPluperfect,
        TenseForm::RefSingular,
        TenseForm::RefPlural,
    ];

    fn from_bits(bits: u32) -> Result<Self> {
        Self::VARIANTS
            .get(bits as usize)
            .copied()
            .ok_or_else(|| KoineError::InvalidU32(format!("tense form {bits}")))
    }
}

/// Verbal mood
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Mood {
    #[default]
    Unknown = 0,
    Indicative = 1,
    Subjunctive = 2,
    Optative = 3,
    Imperative = 4,
    Infinitive = 5,
    Participle = 6,
}

impl Mood {
    fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Mood::Unknown),
            1 => Ok(Mood::Indicative),
            2 => Ok(Mood::Subjunctive),
            3 => Ok(Mood::Optative),
            4 => Ok(Mood::Imperative),
            5 => Ok(Mood::Infinitive),
            6 => Ok(Mood::Participle),
            other => Err(KoineError::InvalidU32(format!("mood {other}"))),
        }
    }
}

/// Grammatical gender. Value 6 is unused in the packed layout.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Masculine = 1,
    Feminine = 2,
    MasculineFeminine = 3,
    Neuter = 4,
    MasculineNeuter = 5,
    MasculineFeminineNeuter = 7,
}

impl Gender {
    fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Gender::Unknown),
            1 => Ok(Gender::Masculine),
            2 => Ok(Gender::Feminine),
            3 => Ok(Gender::MasculineFeminine),
            4 => Ok(Gender::Neuter),
            5 => Ok(Gender::MasculineNeuter),
            7 => Ok(Gender::MasculineFeminineNeuter),
            other => Err(KoineError::InvalidGender(other.to_string())),
        }
    }
}

/// Verbal voice, deponent variants included
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Voice {
    #[default]
    Unknown = 0,
    Active = 1,
    Middle = 2,
    Passive = 3,
    MiddleOrPassive = 4,
    MiddleDeponent = 5,
    PassiveDeponent = 6,
    MiddleOrPassiveDeponent = 7,
}

impl Voice {
    fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Voice::Unknown),
            1 => Ok(Voice::Active),
            2 => Ok(Voice::Middle),
            3 => Ok(Voice::Passive),
            4 => Ok(Voice::MiddleOrPassive),
            5 => Ok(Voice::MiddleDeponent),
            6 => Ok(Voice::PassiveDeponent),
            7 => Ok(Voice::MiddleOrPassiveDeponent),
            _ => unreachable!("three-bit field"),
        }
    }
}

/// Grammatical case
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Case {
    #[default]
    Unknown = 0,
    Nominative = 1,
    Accusative = 2,
    Genitive = 3,
    Dative = 4,
    Vocative = 5,
}

impl Case {
    fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            0 => Ok(Case::Unknown),
            1 => Ok(Case::Nominative),
            2 => Ok(Case::Accusative),
            3 => Ok(Case::Genitive),
            4 => Ok(Case::Dative),
            5 => Ok(Case::Vocative),
            other => Err(KoineError::InvalidU32(format!("case {other}"))),
        }
    }
}

/// Grammatical person
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Person {
    #[default]
    Unknown = 0,
    First = 1,
    Second = 2,
    Third = 3,
}

impl Person {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Person::First,
            2 => Person::Second,
            3 => Person::Third,
            _ => Person::Unknown,
        }
    }
}

/// Grammatical number
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Number {
    #[default]
    Unknown = 0,
    Singular = 1,
    Dual = 2,
    Plural = 3,
}

impl Number {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Number::Singular,
            2 => Number::Dual,
            3 => Number::Plural,
            _ => Number::Unknown,
        }
    }
}

const POS_SHIFT: u32 = 0;
const POS_MASK: u32 = 0x1F;
const TENSE_SHIFT: u32 = 5;
const TENSE_MASK: u32 = 0xF;
const MOOD_SHIFT: u32 = 9;
const MOOD_MASK: u32 = 0x7;
const GENDER_SHIFT: u32 = 12;
const GENDER_MASK: u32 = 0x7;
const VOICE_SHIFT: u32 = 15;
const VOICE_MASK: u32 = 0x7;
const CASE_SHIFT: u32 = 18;
const CASE_MASK: u32 = 0x7;
const PERSON_SHIFT: u32 = 21;
const PERSON_MASK: u32 = 0x3;
const NUMBER_SHIFT: u32 = 23;
const NUMBER_MASK: u32 = 0x3;

const INTERROGATIVE_BIT: u32 = 1 << 25;
const NEGATIVE_BIT: u32 = 1 << 26;
const CORRELATIVE_BIT: u32 = 1 << 27;
const INDEFINITE_BIT: u32 = 1 << 28;
const INDECLINABLE_BIT: u32 = 1 << 29;
const CRASIS_BIT: u32 = 1 << 30;
const UNUSED_BIT: u32 = 1 << 31;

/// A packed 32-bit morphosyntactic analysis.
///
/// The all-zero value means "completely unknown" and is the [`Default`].
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Parsing(u32);

impl Parsing {
    /// The packed representation stored by the binary format
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Rebuild from a packed representation, validating every field
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & UNUSED_BIT != 0 {
            return Err(KoineError::InvalidU32(format!("parsing {bits:#x}")));
        }
        PartOfSpeech::from_bits((bits >> POS_SHIFT) & POS_MASK)?;
        TenseForm::from_bits((bits >> TENSE_SHIFT) & TENSE_MASK)?;
        Mood::from_bits((bits >> MOOD_SHIFT) & MOOD_MASK)?;
        Gender::from_bits((bits >> GENDER_SHIFT) & GENDER_MASK)?;
        Case::from_bits((bits >> CASE_SHIFT) & CASE_MASK)?;
        Ok(Self(bits))
    }

    /// Build a parsing carrying only a part of speech
    pub fn of_pos(pos: PartOfSpeech) -> Self {
        let mut parsing = Self::default();
        parsing.set_pos(pos);
        parsing
    }

    /// Part of speech
    pub fn pos(self) -> PartOfSpeech {
        PartOfSpeech::from_bits((self.0 >> POS_SHIFT) & POS_MASK).unwrap_or_default()
    }

    /// Tense form
    pub fn tense(self) -> TenseForm {
        TenseForm::from_bits((self.0 >> TENSE_SHIFT) & TENSE_MASK).unwrap_or_default()
    }

    /// Mood
    pub fn mood(self) -> Mood {
        Mood::from_bits((self.0 >> MOOD_SHIFT) & MOOD_MASK).unwrap_or_default()
    }

    /// Gender
    pub fn gender(self) -> Gender {
        Gender::from_bits((self.0 >> GENDER_SHIFT) & GENDER_MASK).unwrap_or_default()
    }

    /// Voice
    pub fn voice(self) -> Voice {
        Voice::from_bits((self.0 >> VOICE_SHIFT) & VOICE_MASK).unwrap_or_default()
    }

    /// Case
    pub fn case(self) -> Case {
        Case::from_bits((self.0 >> CASE_SHIFT) & CASE_MASK).unwrap_or_default()
    }

    /// Person
    pub fn person(self) -> Person {
        Person::from_bits((self.0 >> PERSON_SHIFT) & PERSON_MASK)
    }

    /// Number
    pub fn number(self) -> Number {
        Number::from_bits((self.0 >> NUMBER_SHIFT) & NUMBER_MASK)
    }

    /// Set the part of speech
    pub fn set_pos(&mut self, pos: PartOfSpeech) {
        self.0 = (self.0 & !(POS_MASK << POS_SHIFT)) | ((pos as u32) << POS_SHIFT);
    }

    /// Set the tense form
    pub fn set_tense(&mut self, tense: TenseForm) {
        self.0 = (self.0 & !(TENSE_MASK << TENSE_SHIFT)) | ((tense as u32) << TENSE_SHIFT);
    }

    /// Set the mood
    pub fn set_mood(&mut self, mood: Mood) {
        self.0 = (self.0 & !(MOOD_MASK << MOOD_SHIFT)) | ((mood as u32) << MOOD_SHIFT);
    }

    /// Set the gender
    pub fn set_gender(&mut self, gender: Gender) {
        self.0 = (self.0 & !(GENDER_MASK << GENDER_SHIFT)) | ((gender as u32) << GENDER_SHIFT);
    }

    /// Set the voice
    pub fn set_voice(&mut self, voice: Voice) {
        self.0 = (self.0 & !(VOICE_MASK << VOICE_SHIFT)) | ((voice as u32) << VOICE_SHIFT);
    }

    /// Set the case
    pub fn set_case(&mut self, case: Case) {
        self.0 = (self.0 & !(CASE_MASK << CASE_SHIFT)) | ((case as u32) << CASE_SHIFT);
    }

    /// Set the person
    pub fn set_person(&mut self, person: Person) {
        self.0 = (self.0 & !(PERSON_MASK << PERSON_SHIFT)) | ((person as u32) << PERSON_SHIFT);
    }

    /// Set the number
    pub fn set_number(&mut self, number: Number) {
        self.0 = (self.0 & !(NUMBER_MASK << NUMBER_SHIFT)) | ((number as u32) << NUMBER_SHIFT);
    }

    /// Interrogative flag
    pub fn interrogative(self) -> bool {
        self.0 & INTERROGATIVE_BIT != 0
    }

    /// Negative flag
    pub fn negative(self) -> bool {
        self.0 & NEGATIVE_BIT != 0
    }

    /// Correlative flag
    pub fn correlative(self) -> bool {
        self.0 & CORRELATIVE_BIT != 0
    }

    /// Indefinite flag
    pub fn indefinite(self) -> bool {
        self.0 & INDEFINITE_BIT != 0
    }

    /// Indeclinable flag
    pub fn indeclinable(self) -> bool {
        self.0 & INDECLINABLE_BIT != 0
    }

    /// Crasis flag
    pub fn crasis(self) -> bool {
        self.0 & CRASIS_BIT != 0
    }

    /// Set the interrogative flag
    pub fn set_interrogative(&mut self, on: bool) {
        self.set_bit(INTERROGATIVE_BIT, on);
    }

    /// Set the negative flag
    pub fn set_negative(&mut self, on: bool) {
        self.set_bit(NEGATIVE_BIT, on);
    }

    /// Set the correlative flag
    pub fn set_correlative(&mut self, on: bool) {
        self.set_bit(CORRELATIVE_BIT, on);
    }

    /// Set the indefinite flag
    pub fn set_indefinite(&mut self, on: bool) {
        self.set_bit(INDEFINITE_BIT, on);
    }

    /// Set the indeclinable flag
    pub fn set_indeclinable(&mut self, on: bool) {
        self.set_bit(INDECLINABLE_BIT, on);
    }

    /// Set the crasis flag
    pub fn set_crasis(&mut self, on: bool) {
        self.set_bit(CRASIS_BIT, on);
    }

    fn set_bit(&mut self, bit: u32, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    /// Whether nothing at all has been recorded
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse a native Byzantine-style tag
    pub fn parse_byzantine(tag: &str) -> Result<Self> {
        byzantine::parse(tag)
    }

    /// Format as a native Byzantine-style tag
    pub fn format_byzantine(self) -> Result<String> {
        byzantine::format(self)
    }

    /// Parse a CCAT tag
    pub fn parse_ccat(tag: &str) -> Result<Self> {
        ccat::parse(tag)
    }

    /// Format as a CCAT tag
    pub fn format_ccat(self) -> Result<String> {
        ccat::format(self)
    }

    /// Parse a MorphGNT tag
    pub fn parse_morphgnt(tag: &str) -> Result<Self> {
        morphgnt::parse(tag)
    }

    /// Format as a MorphGNT tag
    pub fn format_morphgnt(self) -> Result<String> {
        morphgnt::format(self)
    }

    /// Parse a CNTR tag
    pub fn parse_cntr(tag: &str) -> Result<Self> {
        cntr::parse(tag)
    }

    /// Format as a CNTR tag
    pub fn format_cntr(self) -> Result<String> {
        cntr::format(self)
    }
}

impl fmt::Display for Parsing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match byzantine::format(*self) {
            Ok(tag) => f.write_str(&tag),
            Err(_) => f.write_str("[incomplete]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_is_frozen() {
        let mut parsing = Parsing::default();
        parsing.set_pos(PartOfSpeech::Verb);
        parsing.set_tense(TenseForm::Present);
        parsing.set_voice(Voice::Active);
        parsing.set_mood(Mood::Indicative);
        parsing.set_person(Person::First);
        parsing.set_number(Number::Plural);
        let bits = parsing.bits();
        assert_eq!(bits & 0x1F, PartOfSpeech::Verb as u32);
        assert_eq!((bits >> 5) & 0xF, TenseForm::Present as u32);
        assert_eq!((bits >> 9) & 0x7, Mood::Indicative as u32);
        assert_eq!((bits >> 15) & 0x7, Voice::Active as u32);
        assert_eq!((bits >> 21) & 0x3, Person::First as u32);
        assert_eq!((bits >> 23) & 0x3, Number::Plural as u32);
        assert_eq!(Parsing::from_bits(bits).unwrap(), parsing);
    }

    #[test]
    fn setters_do_not_clobber_neighbours() {
        let mut parsing = Parsing::default();
        parsing.set_gender(Gender::MasculineFeminineNeuter);
        parsing.set_case(Case::Vocative);
        parsing.set_crasis(true);
        assert_eq!(parsing.gender(), Gender::MasculineFeminineNeuter);
        assert_eq!(parsing.case(), Case::Vocative);
        assert!(parsing.crasis());
        parsing.set_gender(Gender::Neuter);
        assert_eq!(parsing.case(), Case::Vocative);
        assert!(parsing.crasis());
    }

    #[test]
    fn invalid_bits_rejected() {
        // gender 6 is the hole in the gender encoding
        assert!(Parsing::from_bits(6 << 12).is_err());
        // the top bit must stay clear
        assert!(Parsing::from_bits(1 << 31).is_err());
        // part of speech 30 and 31 do not exist
        assert!(Parsing::from_bits(30).is_err());
    }

    #[test]
    fn degree_mapping() {
        assert_eq!(
            PartOfSpeech::Adjective
                .with_degree(Degree::Superlative)
                .unwrap(),
            PartOfSpeech::SuperlativeAdjective
        );
        assert_eq!(
            PartOfSpeech::SuperlativeAdjective.base(),
            PartOfSpeech::Adjective
        );
        assert_eq!(
            PartOfSpeech::ComparativeAdverb.degree(),
            Some(Degree::Comparative)
        );
        assert!(PartOfSpeech::Verb.with_degree(Degree::Comparative).is_err());
    }

    #[test]
    fn dialects_agree_on_shared_analyses() {
        let native = Parsing::parse_byzantine("V-PAI-3S").unwrap();
        assert_eq!(Parsing::parse_ccat("V IPA3..S").unwrap(), native);
        assert_eq!(Parsing::parse_cntr("VIPA3..S").unwrap(), native);
        assert_eq!(Parsing::parse_morphgnt("V-3PAI-S--").unwrap(), native);

        let noun = Parsing::parse_byzantine("N-NSM").unwrap();
        assert_eq!(Parsing::parse_ccat("N NSM").unwrap(), noun);
        assert_eq!(Parsing::parse_cntr("N....NMS").unwrap(), noun);
        assert_eq!(Parsing::parse_morphgnt("N-----NSM-").unwrap(), noun);
    }

    #[test]
    fn incomplete_display_placeholder() {
        let mut parsing = Parsing::default();
        parsing.set_pos(PartOfSpeech::Adjective);
        parsing.set_case(Case::Genitive);
        parsing.set_number(Number::Singular);
        // no gender: the native dialect cannot render this
        assert_eq!(parsing.to_string(), "[incomplete]");
    }
}
