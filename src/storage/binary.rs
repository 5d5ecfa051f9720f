//! Binary record codec: separators, fixed-width little-endian integers and
//! the lexeme/form/gloss record layouts.
//!
//! The binary dictionary format is framed with the three classic ASCII
//! separators: US (0x1F) ends a string, RS (0x1E) ends a gloss record and
//! FS (0x1C) ends a top-level section. All integers are little-endian;
//! uids travel as three bytes.

use crate::core::error::{KoineError, Result};
use crate::core::{Form, FormFlags, Gloss, Lang, Lexeme, Uid};
use crate::morphology::Parsing;
use crate::reference::{Book, Module, Reference};

/// Unit separator: terminates a string
pub const US: u8 = 0x1F;
/// Record separator: terminates a gloss
pub const RS: u8 = 0x1E;
/// File separator: terminates a section
pub const FS: u8 = 0x1C;

/// Magic bytes opening a binary dictionary
pub const MAGIC: [u8; 2] = [99, 1];

/// A cursor over borrowed binary data
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Wrap a byte slice
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Whether every byte has been consumed
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = self.peek().ok_or(KoineError::UnexpectedEof)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    /// Read a three-byte little-endian uid
    pub fn read_u24(&mut self) -> Result<Uid> {
        let b0 = self.read_u8()? as u32;
        let b1 = self.read_u8()? as u32;
        let b2 = self.read_u8()? as u32;
        Ok(Uid(b0 | (b1 << 8) | (b2 << 16)))
    }

    /// Read a little-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        let lo = self.read_u16()? as u32;
        let hi = self.read_u16()? as u32;
        Ok(lo | (hi << 16))
    }

    /// Read a UTF-8 string terminated by US
    pub fn read_str(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if byte == US {
                let text = std::str::from_utf8(&self.data[start..self.pos])
                    .map_err(|_| KoineError::InvalidUtf8)?;
                self.pos += 1;
                return Ok(text.to_string());
            }
            self.pos += 1;
        }
        Err(KoineError::UnexpectedEof)
    }

    /// Consume one expected byte
    pub fn expect(&mut self, expected: u8) -> Result<()> {
        let byte = self.read_u8()?;
        if byte != expected {
            return Err(KoineError::InvalidDictionaryFile(format!(
                "expected byte {expected:#04x}, found {byte:#04x}"
            )));
        }
        Ok(())
    }
}

/// Append a little-endian u16
pub fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append a three-byte little-endian uid
pub fn put_u24(out: &mut Vec<u8>, uid: Uid) -> Result<()> {
    if uid.0 > Uid::MAX {
        return Err(KoineError::UidTooLarge(uid.0));
    }
    out.extend_from_slice(&uid.0.to_le_bytes()[..3]);
    Ok(())
}

/// Append a little-endian u32
pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append a string and its US terminator
pub fn put_str(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(text.as_bytes());
    out.push(US);
}

/// Append one gloss record
pub fn put_gloss(out: &mut Vec<u8>, gloss: &Gloss) {
    out.push(gloss.lang as u8);
    for entry in &gloss.entries {
        put_str(out, entry);
    }
    out.push(RS);
}

/// Read one gloss record
pub fn read_gloss(reader: &mut ByteReader<'_>) -> Result<Gloss> {
    let lang = Lang::from_u8(reader.read_u8()?)?;
    let mut gloss = Gloss::new(lang);
    loop {
        match reader.peek() {
            Some(RS) => {
                reader.read_u8()?;
                break;
            }
            Some(_) => gloss.entries.push(reader.read_str()?),
            None => return Err(KoineError::UnexpectedEof),
        }
    }
    Ok(gloss)
}

/// Append a lexeme record, forms excluded; the caller follows with the
/// form count and form records.
pub fn put_lexeme(out: &mut Vec<u8>, lexeme: &Lexeme) -> Result<()> {
    put_u24(out, lexeme.uid)?;
    put_str(out, &lexeme.word);
    out.push(lexeme.lang as u8);
    put_u32(out, lexeme.pos.bits());
    out.push(lexeme.article as u8);
    put_u16(out, lexeme.glosses.len() as u16);
    for gloss in &lexeme.glosses {
        put_gloss(out, gloss);
    }
    out.push(lexeme.tags.len() as u8);
    for tag in &lexeme.tags {
        put_str(out, tag);
    }
    out.push(lexeme.strongs.len() as u8);
    for strong in &lexeme.strongs {
        put_u16(out, *strong);
    }
    Ok(())
}

/// Read a lexeme record, forms excluded
pub fn read_lexeme(reader: &mut ByteReader<'_>) -> Result<Lexeme> {
    let uid = reader.read_u24()?;
    let word = reader.read_str()?;
    if word.is_empty() {
        return Err(KoineError::EmptyField("lexeme word"));
    }
    let lang = Lang::from_u8(reader.read_u8()?)?;
    let pos = Parsing::from_bits(reader.read_u32()?)?;
    let article = crate::core::Article::from_u8(reader.read_u8()?)?;

    let mut lexeme = Lexeme::new(word);
    lexeme.uid = uid;
    lexeme.lang = lang;
    lexeme.pos = pos;
    lexeme.article = article;

    let gloss_count = reader.read_u16()?;
    lexeme.glosses.reserve(gloss_count as usize);
    for _ in 0..gloss_count {
        lexeme.glosses.push(read_gloss(reader)?);
    }
    let tag_count = reader.read_u8()?;
    for _ in 0..tag_count {
        lexeme.tags.push(reader.read_str()?);
    }
    let strongs_count = reader.read_u8()?;
    lexeme.strongs.reserve(strongs_count as usize);
    for _ in 0..strongs_count {
        lexeme.strongs.push(reader.read_u16()?);
    }
    Ok(lexeme)
}

/// Append a form record
pub fn put_form(out: &mut Vec<u8>, form: &Form) -> Result<()> {
    put_u24(out, form.uid)?;
    put_u32(out, form.parsing.bits());
    out.push(form.flags.bits());
    put_str(out, &form.word);
    put_u16(out, form.glosses.len() as u16);
    for gloss in &form.glosses {
        put_gloss(out, gloss);
    }
    put_u32(out, form.references.len() as u32);
    for reference in &form.references {
        put_u16(out, reference.module as u16);
        put_u16(out, reference.book as u16);
        put_u16(out, reference.chapter);
        put_u16(out, reference.verse);
        put_u16(out, reference.word);
    }
    Ok(())
}

/// Read a form record
pub fn read_form(reader: &mut ByteReader<'_>) -> Result<Form> {
    let uid = reader.read_u24()?;
    let parsing = Parsing::from_bits(reader.read_u32()?)?;
    let flags = FormFlags::from_bits(reader.read_u8()?)
        .ok_or_else(|| KoineError::InvalidDictionaryFile("unknown form flags".to_string()))?;
    let word = reader.read_str()?;
    if word.is_empty() {
        return Err(KoineError::EmptyField("form word"));
    }

    let mut form = Form::new(word);
    form.uid = uid;
    form.parsing = parsing;
    form.flags = flags;

    let gloss_count = reader.read_u16()?;
    form.glosses.reserve(gloss_count as usize);
    for _ in 0..gloss_count {
        form.glosses.push(read_gloss(reader)?);
    }
    let reference_count = reader.read_u32()?;
    form.references.reserve(reference_count as usize);
    for _ in 0..reference_count {
        let module = Module::from_u16(reader.read_u16()?)?;
        let book = Book::from_u16(reader.read_u16()?)?;
        form.references.push(Reference {
            module,
            book,
            chapter: reader.read_u16()?,
            verse: reader.read_u16()?,
            word: reader.read_u16()?,
        });
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Article;

    #[test]
    fn integer_round_trips() {
        let mut out = Vec::new();
        put_u16(&mut out, 0xBEEF);
        put_u24(&mut out, Uid(0x00ABCDEF)).unwrap();
        put_u32(&mut out, 0xDEADBEEF);
        put_str(&mut out, "λόγος");

        let mut reader = ByteReader::new(&out);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_u24().unwrap(), Uid(0x00ABCDEF));
        assert_eq!(reader.read_u32().unwrap(), 0xDEADBEEF);
        assert_eq!(reader.read_str().unwrap(), "λόγος");
        assert!(reader.at_end());
    }

    #[test]
    fn oversized_uid_rejected() {
        let mut out = Vec::new();
        assert!(matches!(
            put_u24(&mut out, Uid(0x0100_0000)),
            Err(KoineError::UidTooLarge(_))
        ));
    }

    #[test]
    fn truncated_input_is_eof() {
        let mut reader = ByteReader::new(&[0x01]);
        assert!(matches!(reader.read_u16(), Err(KoineError::UnexpectedEof)));
        let mut reader = ByteReader::new(b"abc");
        assert!(matches!(reader.read_str(), Err(KoineError::UnexpectedEof)));
    }

    #[test]
    fn gloss_record_round_trip() {
        let gloss = Gloss {
            lang: Lang::English,
            entries: vec!["dragon".to_string(), "large serpent".to_string()],
        };
        let mut out = Vec::new();
        put_gloss(&mut out, &gloss);
        let mut reader = ByteReader::new(&out);
        assert_eq!(read_gloss(&mut reader).unwrap(), gloss);
        assert!(reader.at_end());
    }

    #[test]
    fn lexeme_record_round_trip() {
        let mut lexeme = Lexeme::new("δράκων");
        lexeme.uid = Uid(123_456);
        lexeme.lang = Lang::Greek;
        lexeme.article = Article::Masculine;
        lexeme.pos = crate::morphology::byzantine::parse("N-NSM").unwrap();
        lexeme.strongs = vec![1404];
        lexeme.tags = vec!["animal".to_string()];
        lexeme.glosses = vec![Gloss {
            lang: Lang::English,
            entries: vec!["dragon".to_string()],
        }];

        let mut out = Vec::new();
        put_lexeme(&mut out, &lexeme).unwrap();
        let mut reader = ByteReader::new(&out);
        let read_back = read_lexeme(&mut reader).unwrap();
        assert_eq!(read_back, lexeme);
        assert!(reader.at_end());
    }

    #[test]
    fn form_record_round_trip() {
        let mut form = Form::new("δράκοντα");
        form.uid = Uid(654_321);
        form.parsing = crate::morphology::byzantine::parse("N-ASM").unwrap();
        form.flags = FormFlags::PREFERRED;
        form.references = vec![Reference {
            module: Module::Byzantine,
            book: Book::Revelation,
            chapter: 12,
            verse: 3,
            word: 7,
        }];

        let mut out = Vec::new();
        put_form(&mut out, &form).unwrap();
        let mut reader = ByteReader::new(&out);
        let read_back = read_form(&mut reader).unwrap();
        assert_eq!(read_back, form);
        assert!(reader.at_end());
    }
}
