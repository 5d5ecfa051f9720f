//! Scripture references: module and book tables plus the reference parsers.
//!
//! A [`Reference`] pins a form to a word in a verse of a source module:
//! `byz#Mark 1:2 3` is the third word of Mark 1:2 in the Byzantine
//! text. Book and module names resolve case-insensitively through alias
//! tables (`1 John`, `1John` and `1Jn` are the same book).

use crate::core::error::{KoineError, Result};

/// A source text module
#[repr(u16)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Module {
    /// Module not recorded
    #[default]
    Unknown = 0,
    /// Robinson-Pierpont Byzantine text form
    Byzantine = 1,
    /// King James / Textus Receptus
    Kjtr = 2,
    /// Nestle-Aland critical text
    NestleAland = 3,
    /// SBL Greek New Testament
    Sbl = 4,
    /// Septuagint
    Septuagint = 5,
}

impl Module {
    /// Resolve a module name or alias, case-insensitively
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "byz" | "byzantine" | "rp" => Ok(Module::Byzantine),
            "kjtr" | "tr" => Ok(Module::Kjtr),
            "na" | "na27" | "na28" | "nestle" => Ok(Module::NestleAland),
            "sbl" | "sblgnt" => Ok(Module::Sbl),
            "lxx" | "septuagint" => Ok(Module::Septuagint),
            other => Err(KoineError::InvalidReference(format!("module {other}"))),
        }
    }

    /// The canonical short name used by the text format
    pub fn code(self) -> &'static str {
        match self {
            Module::Unknown => "",
            Module::Byzantine => "byz",
            Module::Kjtr => "kjtr",
            Module::NestleAland => "na",
            Module::Sbl => "sbl",
            Module::Septuagint => "lxx",
        }
    }

    /// Decode the binary representation
    pub fn from_u16(value: u16) -> Result<Self> {
        match value {
            0 => Ok(Module::Unknown),
            1 => Ok(Module::Byzantine),
            2 => Ok(Module::Kjtr),
            3 => Ok(Module::NestleAland),
            4 => Ok(Module::Sbl),
            5 => Ok(Module::Septuagint),
            other => Err(KoineError::InvalidReference(format!("module {other}"))),
        }
    }
}

/// New Testament book
#[repr(u16)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[allow(missing_docs)]
pub enum Book {
    Matthew = 1,
    Mark = 2,
    Luke = 3,
    John = 4,
    Acts = 5,
    Romans = 6,
    FirstCorinthians = 7,
    SecondCorinthians = 8,
    Galatians = 9,
    Ephesians = 10,
    Philippians = 11,
    Colossians = 12,
    FirstThessalonians = 13,
    SecondThessalonians = 14,
    FirstTimothy = 15,
    SecondTimothy = 16,
    Titus = 17,
    Philemon = 18,
    Hebrews = 19,
    James = 20,
    FirstPeter = 21,
    SecondPeter = 22,
    FirstJohn = 23,
    SecondJohn = 24,
    ThirdJohn = 25,
    Jude = 26,
    Revelation = 27,
}

const BOOKS: [Book; 27] = [
    Book::Matthew,
    Book::Mark,
    Book::Luke,
    Book::John,
    Book::Acts,
    Book::Romans,
    Book::FirstCorinthians,
    Book::SecondCorinthians,
    Book::Galatians,
    Book::Ephesians,
    Book::Philippians,
    Book::Colossians,
    Book::FirstThessalonians,
    Book::SecondThessalonians,
    Book::FirstTimothy,
    Book::SecondTimothy,
    Book::Titus,
    Book::Philemon,
    Book::Hebrews,
    Book::James,
    Book::FirstPeter,
    Book::SecondPeter,
    Book::FirstJohn,
    Book::SecondJohn,
    Book::ThirdJohn,
    Book::Jude,
    Book::Revelation,
];

impl Book {
    /// Resolve a book name or alias. Case and internal whitespace are
    /// ignored, so `1 John`, `1john` and `1Jn` all resolve.
    pub fn parse(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let book = match key.as_str() {
            "matthew" | "matt" | "mat" | "mt" => Book::Matthew,
            "mark" | "mrk" | "mk" => Book::Mark,
            "luke" | "luk" | "lk" => Book::Luke,
            "john" | "joh" | "jhn" | "jn" => Book::John,
            "acts" | "act" | "ac" => Book::Acts,
            "romans" | "rom" | "ro" => Book::Romans,
            "1corinthians" | "1cor" | "1co" => Book::FirstCorinthians,
            "2corinthians" | "2cor" | "2co" => Book::SecondCorinthians,
            "galatians" | "gal" | "ga" => Book::Galatians,
            "ephesians" | "eph" => Book::Ephesians,
            "philippians" | "phil" | "php" => Book::Philippians,
            "colossians" | "col" => Book::Colossians,
            "1thessalonians" | "1thess" | "1th" => Book::FirstThessalonians,
            "2thessalonians" | "2thess" | "2th" => Book::SecondThessalonians,
            "1timothy" | "1tim" | "1ti" => Book::FirstTimothy,
            "2timothy" | "2tim" | "2ti" => Book::SecondTimothy,
            "titus" | "tit" => Book::Titus,
            "philemon" | "phlm" | "phm" => Book::Philemon,
            "hebrews" | "heb" => Book::Hebrews,
            "james" | "jas" => Book::James,
            "1peter" | "1pet" | "1pe" => Book::FirstPeter,
            "2peter" | "2pet" | "2pe" => Book::SecondPeter,
            "1john" | "1jn" | "1jo" => Book::FirstJohn,
            "2john" | "2jn" | "2jo" => Book::SecondJohn,
            "3john" | "3jn" | "3jo" => Book::ThirdJohn,
            "jude" | "jud" => Book::Jude,
            "revelation" | "rev" | "re" | "apocalypse" => Book::Revelation,
            _ => return Err(KoineError::InvalidReference(format!("book {name}"))),
        };
        Ok(book)
    }

    /// The canonical short name used when writing references out
    pub fn code(self) -> &'static str {
        match self {
            Book::Matthew => "Matt",
            Book::Mark => "Mark",
            Book::Luke => "Luke",
            Book::John => "John",
            Book::Acts => "Acts",
            Book::Romans => "Rom",
            Book::FirstCorinthians => "1Cor",
            Book::SecondCorinthians => "2Cor",
            Book::Galatians => "Gal",
            Book::Ephesians => "Eph",
            Book::Philippians => "Phil",
            Book::Colossians => "Col",
            Book::FirstThessalonians => "1Th",
            Book::SecondThessalonians => "2Th",
            Book::FirstTimothy => "1Tim",
            Book::SecondTimothy => "2Tim",
            Book::Titus => "Titus",
            Book::Philemon => "Phlm",
            Book::Hebrews => "Heb",
            Book::James => "Jas",
            Book::FirstPeter => "1Pet",
            Book::SecondPeter => "2Pet",
            Book::FirstJohn => "1John",
            Book::SecondJohn => "2John",
            Book::ThirdJohn => "3John",
            Book::Jude => "Jude",
            Book::Revelation => "Rev",
        }
    }

    /// Decode the binary representation
    pub fn from_u16(value: u16) -> Result<Self> {
        BOOKS
            .get((value as usize).wrapping_sub(1))
            .copied()
            .ok_or_else(|| KoineError::InvalidReference(format!("book {value}")))
    }
}

/// One attestation of a form: module, book, chapter, verse, word index
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Reference {
    /// Source text module; [`Module::Unknown`] when not recorded
    pub module: Module,
    /// Book of the reference
    pub book: Book,
    /// Chapter number
    pub chapter: u16,
    /// Verse number
    pub verse: u16,
    /// 1-based word position within the verse; 0 when not recorded
    pub word: u16,
}

impl Reference {
    /// Render as `module#Book chapter:verse [word]`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.module != Module::Unknown {
            out.push_str(self.module.code());
            out.push('#');
        }
        out.push_str(self.book.code());
        out.push(' ');
        out.push_str(&self.chapter.to_string());
        out.push(':');
        out.push_str(&self.verse.to_string());
        if self.word != 0 {
            out.push(' ');
            out.push_str(&self.word.to_string());
        }
        out
    }
}

/// Parse a bare reference like `Matt 3:4`, `1 John 2:3` or `1Th 3:4`,
/// with an optional trailing word index.
pub fn parse_reference(input: &str) -> Result<Reference> {
    let trimmed = input.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(KoineError::InvalidReference(input.to_string()));
    }

    // Locate the chapter:verse token; anything before it is the book name,
    // a single numeric token after it is the word index.
    let cv_pos = tokens
        .iter()
        .position(|t| t.contains(':'))
        .ok_or_else(|| KoineError::InvalidReference(input.to_string()))?;
    if cv_pos == 0 || tokens.len() > cv_pos + 2 {
        return Err(KoineError::InvalidReference(input.to_string()));
    }

    let book = Book::parse(&tokens[..cv_pos].join(" "))?;
    let (chapter_str, verse_str) = tokens[cv_pos]
        .split_once(':')
        .ok_or_else(|| KoineError::InvalidReference(input.to_string()))?;
    let chapter = parse_u16(chapter_str)?;
    let verse = parse_u16(verse_str)?;
    let word = match tokens.get(cv_pos + 1) {
        Some(w) => parse_u16(w)?,
        None => 0,
    };

    Ok(Reference {
        module: Module::Unknown,
        book,
        chapter,
        verse,
        word,
    })
}

/// Parse a comma-separated `module#Book C:V W` list, stopping at `|`,
/// newline or NUL.
pub fn parse_reference_list(input: &str) -> Result<Vec<Reference>> {
    let end = input
        .find(['|', '\n', '\0'])
        .unwrap_or(input.len());
    let body = input[..end].trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let mut references = Vec::new();
    for item in body.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let (module_str, rest) = item
            .split_once('#')
            .ok_or_else(|| KoineError::InvalidReference(item.to_string()))?;
        let module = Module::parse(module_str)?;
        let mut reference = parse_reference(rest)?;
        reference.module = module;
        references.push(reference);
    }
    Ok(references)
}

/// Render a reference list the way [`parse_reference_list`] reads it
pub fn format_reference_list(references: &[Reference]) -> String {
    references
        .iter()
        .map(Reference::to_text)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_u16(text: &str) -> Result<u16> {
    text.parse::<u16>()
        .map_err(|_| KoineError::InvalidU16(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_references() {
        let r = parse_reference("Matt 3:4").unwrap();
        assert_eq!(r.book, Book::Matthew);
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse, 4);
        assert_eq!(r.word, 0);

        let r = parse_reference("Rev 19:28").unwrap();
        assert_eq!(r.book, Book::Revelation);
        assert_eq!(r.chapter, 19);
        assert_eq!(r.verse, 28);
    }

    #[test]
    fn numbered_books() {
        let r = parse_reference("1 John 2:3").unwrap();
        assert_eq!(r.book, Book::FirstJohn);
        assert_eq!(r.chapter, 2);
        assert_eq!(r.verse, 3);

        assert_eq!(parse_reference("1Th 3:4").unwrap().book, Book::FirstThessalonians);
        assert_eq!(parse_reference("1john 2:3").unwrap().book, Book::FirstJohn);
    }

    #[test]
    fn unknown_book_rejected() {
        assert!(matches!(
            parse_reference("Enoch 1:1"),
            Err(KoineError::InvalidReference(_))
        ));
        assert!(parse_reference("3:4").is_err());
    }

    #[test]
    fn reference_lists() {
        let refs = parse_reference_list("byz#Mark 1:2 3,kjtr#Mark 1:2 3").unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].module, Module::Byzantine);
        assert_eq!(refs[0].book, Book::Mark);
        assert_eq!(refs[0].chapter, 1);
        assert_eq!(refs[0].verse, 2);
        assert_eq!(refs[0].word, 3);
        assert_eq!(refs[1].module, Module::Kjtr);
    }

    #[test]
    fn list_stops_at_terminator() {
        let refs = parse_reference_list("byz#Mark 1:2|byz#Mark 9:9").unwrap();
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn list_round_trip() {
        let text = "byz#Mark 1:2 3,kjtr#Matt 5:6";
        let refs = parse_reference_list(text).unwrap();
        assert_eq!(format_reference_list(&refs), text);
    }

    #[test]
    fn module_aliases() {
        assert_eq!(Module::parse("byzantine").unwrap(), Module::Byzantine);
        assert_eq!(Module::parse("BYZ").unwrap(), Module::Byzantine);
        assert_eq!(Module::parse("lxx").unwrap(), Module::Septuagint);
        assert!(Module::parse("wh").is_err());
    }

    #[test]
    fn binary_codes_round_trip() {
        for book in BOOKS {
            assert_eq!(Book::from_u16(book as u16).unwrap(), book);
            assert_eq!(Book::parse(book.code()).unwrap(), book);
        }
        assert!(Book::from_u16(0).is_err());
        assert!(Book::from_u16(28).is_err());
    }
}
