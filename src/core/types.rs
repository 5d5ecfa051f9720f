//! Core type definitions for the koine lexicon

use crate::core::error::{KoineError, Result};
use std::fmt;

/// Unique 24-bit identifier for a lexeme or a form.
///
/// Uids share one namespace: no lexeme and form in the same dictionary may
/// carry the same non-zero uid. Zero means "needs assignment".
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize,
    serde::Deserialize,
)]
pub struct Uid(pub u32);

impl Uid {
    /// Sentinel for an id that has not been assigned yet
    pub const UNASSIGNED: Self = Self(0);

    /// Largest representable uid (24 bits)
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Check whether this uid has been assigned
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// Validate that the raw value fits in 24 bits
    pub fn try_from_u32(raw: u32) -> Result<Self> {
        if raw > Self::MAX {
            return Err(KoineError::UidTooLarge(raw));
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid#{}", self.0)
    }
}

/// Handle to a lexeme inside a dictionary's lexeme store
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LexemeIx(pub u32);

/// Handle to a form inside a dictionary's form store
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FormIx(pub u32);

impl LexemeIx {
    /// Index into the lexeme store
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FormIx {
    /// Index into the form store
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Language of a word or a gloss
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Lang {
    /// Language not recorded
    #[default]
    Unknown = 0,
    /// Hebrew
    Hebrew = 1,
    /// Koine or classical Greek
    Greek = 2,
    /// Aramaic
    Aramaic = 3,
    /// English
    English = 4,
    /// Chinese
    Chinese = 5,
    /// Spanish
    Spanish = 6,
    /// Korean
    Korean = 7,
    /// Russian
    Russian = 8,
}

impl Lang {
    /// Parse the two/three letter language code used by the text format
    pub fn parse_code(code: &str) -> Result<Self> {
        match code {
            "" => Ok(Lang::Unknown),
            "he" => Ok(Lang::Hebrew),
            "el" => Ok(Lang::Greek),
            "aaa" => Ok(Lang::Aramaic),
            "en" => Ok(Lang::English),
            "zh" => Ok(Lang::Chinese),
            "es" => Ok(Lang::Spanish),
            "ko" => Ok(Lang::Korean),
            "ru" => Ok(Lang::Russian),
            other => Err(KoineError::InvalidLanguage(other.to_string())),
        }
    }

    /// The language code used by the text format
    pub fn code(self) -> &'static str {
        match self {
            Lang::Unknown => "",
            Lang::Hebrew => "he",
            Lang::Greek => "el",
            Lang::Aramaic => "aaa",
            Lang::English => "en",
            Lang::Chinese => "zh",
            Lang::Spanish => "es",
            Lang::Korean => "ko",
            Lang::Russian => "ru",
        }
    }

    /// Decode the single byte used by the binary format
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Lang::Unknown),
            1 => Ok(Lang::Hebrew),
            2 => Ok(Lang::Greek),
            3 => Ok(Lang::Aramaic),
            4 => Ok(Lang::English),
            5 => Ok(Lang::Chinese),
            6 => Ok(Lang::Spanish),
            7 => Ok(Lang::Korean),
            8 => Ok(Lang::Russian),
            other => Err(KoineError::InvalidLanguage(other.to_string())),
        }
    }
}

/// Canonical Greek article recorded against a lexeme.
///
/// Combined variants cover lexemes attested with more than one gender.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Article {
    /// No article recorded
    #[default]
    None = 0,
    /// ὁ
    Masculine = 1,
    /// ἡ
    Feminine = 2,
    /// τό
    Neuter = 3,
    /// ὁ ἡ
    MasculineFeminine = 4,
    /// ὁ τό
    MasculineNeuter = 5,
    /// ὁ ἡ τό
    MasculineFeminineNeuter = 6,
}

impl Article {
    /// Parse the article field of the text format
    pub fn parse_text(text: &str) -> Result<Self> {
        match text {
            "" => Ok(Article::None),
            "ὁ" => Ok(Article::Masculine),
            "ἡ" => Ok(Article::Feminine),
            "τό" => Ok(Article::Neuter),
            "ὁ ἡ" => Ok(Article::MasculineFeminine),
            "ὁ τό" => Ok(Article::MasculineNeuter),
            "ὁ ἡ τό" => Ok(Article::MasculineFeminineNeuter),
            other => Err(KoineError::InvalidGender(other.to_string())),
        }
    }

    /// Render the article the way the text format stores it
    pub fn as_text(self) -> &'static str {
        match self {
            Article::None => "",
            Article::Masculine => "ὁ",
            Article::Feminine => "ἡ",
            Article::Neuter => "τό",
            Article::MasculineFeminine => "ὁ ἡ",
            Article::MasculineNeuter => "ὁ τό",
            Article::MasculineFeminineNeuter => "ὁ ἡ τό",
        }
    }

    /// Decode the single byte used by the binary format
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Article::None),
            1 => Ok(Article::Masculine),
            2 => Ok(Article::Feminine),
            3 => Ok(Article::Neuter),
            4 => Ok(Article::MasculineFeminine),
            5 => Ok(Article::MasculineNeuter),
            6 => Ok(Article::MasculineFeminineNeuter),
            other => Err(KoineError::InvalidGender(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_bounds() {
        assert!(Uid::try_from_u32(Uid::MAX).is_ok());
        assert!(Uid::try_from_u32(Uid::MAX + 1).is_err());
        assert!(!Uid::UNASSIGNED.is_assigned());
        assert!(Uid(100_000).is_assigned());
    }

    #[test]
    fn lang_codes_round_trip() {
        for lang in [
            Lang::Unknown,
            Lang::Hebrew,
            Lang::Greek,
            Lang::Aramaic,
            Lang::English,
            Lang::Chinese,
            Lang::Spanish,
            Lang::Korean,
            Lang::Russian,
        ] {
            assert_eq!(Lang::parse_code(lang.code()).unwrap(), lang);
            assert_eq!(Lang::from_u8(lang as u8).unwrap(), lang);
        }
        assert!(Lang::parse_code("xx").is_err());
    }

    #[test]
    fn article_round_trip() {
        for article in [
            Article::None,
            Article::Masculine,
            Article::Feminine,
            Article::Neuter,
            Article::MasculineFeminine,
            Article::MasculineNeuter,
            Article::MasculineFeminineNeuter,
        ] {
            assert_eq!(Article::parse_text(article.as_text()).unwrap(), article);
            assert_eq!(Article::from_u8(article as u8).unwrap(), article);
        }
        assert!(Article::parse_text("ὁ ὁ").is_err());
    }
}
