//! Error types for the koine lexicon

use std::io;
use thiserror::Error;

/// Main error type for koine lexicon operations
#[derive(Debug, Error)]
pub enum KoineError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A parsing tag could not be interpreted
    #[error("invalid parsing tag: {0}")]
    InvalidParsing(String),

    /// A parsing value is missing fields its dialect requires
    #[error("incomplete parsing value")]
    Incomplete,

    /// A gender code outside the known set
    #[error("invalid gender: {0}")]
    InvalidGender(String),

    /// A language code outside the known set
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// A field did not parse as a 16-bit integer
    #[error("invalid u16 field: {0}")]
    InvalidU16(String),

    /// A field did not parse as a 24-bit unsigned id
    #[error("invalid u24 field: {0}")]
    InvalidU24(String),

    /// A field did not parse as a 32-bit integer
    #[error("invalid u32 field: {0}")]
    InvalidU32(String),

    /// A boolean field was not one of true/false/yes/no
    #[error("invalid boolean field: {0}")]
    InvalidBooleanField(String),

    /// A required field is absent
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A required field is present but empty
    #[error("empty field: {0}")]
    EmptyField(&'static str),

    /// A scripture reference did not resolve
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Invalid UTF-8 in input text
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,

    /// A word exceeded the maximum normalizable size
    #[error("word too long: {0} bytes")]
    WordTooLong(usize),

    /// A codepoint outside the representable range
    #[error("codepoint too large: {0:#x}")]
    CodepointTooLarge(u32),

    /// Beta-code input contained a character with no mapping.
    /// Carries the character and its byte position.
    #[error("unexpected character {0:?} at {1}")]
    UnexpectedCharacter(char, usize),

    /// Beta-code accents with no precomposed letter for the base.
    /// Carries the base letter and its byte position.
    #[error("unexpected accent on {0:?} at {1}")]
    UnexpectedAccent(char, usize),

    /// The dictionary payload is not a recognized format
    #[error("invalid dictionary file: {0}")]
    InvalidDictionaryFile(String),

    /// The embedded search index is malformed
    #[error("invalid index file: {0}")]
    InvalidIndexFile(String),

    /// The input ended before a record was complete
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A search result bucket exceeded the serializable entry count
    #[error("index too large: keyword {keyword:?} has {count} entries")]
    IndexTooLarge {
        /// Keyword whose bucket overflowed
        keyword: String,
        /// Number of entries in the overflowing bucket
        count: usize,
    },

    /// A uid does not fit in 24 bits
    #[error("uid too large: {0}")]
    UidTooLarge(u32),

    /// An inner error annotated with the source line it occurred on
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the source text
        line: usize,
        /// The underlying error
        #[source]
        source: Box<KoineError>,
    },
}

impl KoineError {
    /// Annotate this error with the 1-based source line it occurred on.
    ///
    /// Errors that already carry a line are returned unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            KoineError::Line { .. } => self,
            other => KoineError::Line {
                line,
                source: Box::new(other),
            },
        }
    }
}

/// Result type alias for koine operations
pub type Result<T> = std::result::Result<T, KoineError>;
