//! The human-editable text format.
//!
//! One lexeme per block: the lexeme line starts at column zero, its forms
//! follow on indented lines. Fields are pipe-separated:
//!
//! ```text
//! δράκων|el|123456|Noun|ὁ|οντος|1404||en:dragon:large serpent|||
//!   δράκων|N-NSM|true|123457||byz#Rev 12:3 7
//!   δράκοντα|N-ASM|false|123458||
//! ```
//!
//! A malformed field fails the whole load with the offending line number
//! attached; the reader never resynchronizes past a bad line.

use crate::core::error::{KoineError, Result};
use crate::core::{
    format_gloss_list, parse_gloss_list, Article, Form, FormFlags, Lang, Lexeme, LexemeIx, Uid,
    MAX_TAGS,
};
use crate::morphology::{byzantine, Parsing, PartOfSpeech};
use crate::reference::{format_reference_list, parse_reference_list};

/// Parsed stores with back-pointers wired: every form knows its lexeme
/// and every lexeme lists its forms in source order.
pub fn parse_text(source: &str) -> Result<(Vec<Lexeme>, Vec<Form>)> {
    let mut lexemes: Vec<Lexeme> = Vec::new();
    let mut forms: Vec<Form> = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            let owner = match lexemes.len() {
                0 => {
                    return Err(KoineError::InvalidDictionaryFile(
                        "form line before any lexeme".to_string(),
                    )
                    .at_line(line_no))
                }
                n => LexemeIx((n - 1) as u32),
            };
            let mut form = parse_form_line(line.trim_start()).map_err(|e| e.at_line(line_no))?;
            form.lexeme = Some(owner);
            let form_ix = crate::core::FormIx(forms.len() as u32);
            lexemes[owner.index()].forms.push(form_ix);
            forms.push(form);
        } else {
            let lexeme = parse_lexeme_line(line).map_err(|e| e.at_line(line_no))?;
            lexemes.push(lexeme);
        }
    }

    Ok((lexemes, forms))
}

/// Render the stores in the format [`parse_text`] reads
pub fn write_text(lexemes: &[Lexeme], forms: &[Form]) -> String {
    let mut out = String::new();
    for lexeme in lexemes {
        out.push_str(&lexeme_line(lexeme));
        out.push('\n');
        for form_ix in &lexeme.forms {
            out.push_str("  ");
            out.push_str(&form_line(&forms[form_ix.index()]));
            out.push('\n');
        }
    }
    out
}

fn parse_lexeme_line(line: &str) -> Result<Lexeme> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 12 {
        return Err(KoineError::MissingField("lexeme fields"));
    }
    for extra in &fields[12..] {
        if !extra.is_empty() {
            return Err(KoineError::InvalidDictionaryFile(format!(
                "unexpected trailing field {extra:?}"
            )));
        }
    }

    if fields[0].is_empty() {
        return Err(KoineError::EmptyField("lexeme word"));
    }
    let mut lexeme = Lexeme::new(fields[0]);
    lexeme.lang = Lang::parse_code(fields[1])?;
    lexeme.uid = parse_uid(fields[2])?;
    lexeme.pos = Parsing::of_pos(parse_pos_name(fields[3])?);
    lexeme.article = Article::parse_text(fields[4])?;
    lexeme.genitive_suffix = fields[5].to_string();
    lexeme.strongs = parse_strongs(fields[6])?;
    lexeme.root = fields[7].to_string();
    lexeme.glosses = parse_gloss_list(fields[8])?;
    lexeme.adjective = fields[9].to_string();
    lexeme.tags = parse_tags(fields[10])?;
    lexeme.note = fields[11].to_string();
    Ok(lexeme)
}

fn lexeme_line(lexeme: &Lexeme) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|",
        lexeme.word,
        lexeme.lang.code(),
        lexeme.uid.0,
        pos_name(lexeme.pos.pos()),
        lexeme.article.as_text(),
        lexeme.genitive_suffix,
        lexeme
            .strongs
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(","),
        lexeme.root,
        format_gloss_list(&lexeme.glosses),
        lexeme.adjective,
        lexeme.tags.join(","),
        lexeme.note,
    )
}

fn parse_form_line(line: &str) -> Result<Form> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 6 {
        return Err(KoineError::MissingField("form fields"));
    }
    for extra in &fields[6..] {
        if !extra.is_empty() {
            return Err(KoineError::InvalidDictionaryFile(format!(
                "unexpected trailing field {extra:?}"
            )));
        }
    }

    if fields[0].is_empty() {
        return Err(KoineError::EmptyField("form word"));
    }
    let mut form = Form::new(fields[0]);
    if !fields[1].is_empty() {
        form.parsing = byzantine::parse(fields[1])?;
    }
    if parse_bool(fields[2])? {
        form.flags |= FormFlags::PREFERRED;
    }
    form.uid = parse_uid(fields[3])?;
    form.glosses = parse_gloss_list(fields[4])?;
    form.references = parse_reference_list(fields[5])?;
    Ok(form)
}

fn form_line(form: &Form) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        form.word,
        byzantine::format(form.parsing).unwrap_or_default(),
        if form.preferred() { "true" } else { "false" },
        form.uid.0,
        format_gloss_list(&form.glosses),
        format_reference_list(&form.references),
    )
}

fn parse_uid(field: &str) -> Result<Uid> {
    if field.is_empty() {
        return Ok(Uid::UNASSIGNED);
    }
    let raw: u32 = field
        .parse()
        .map_err(|_| KoineError::InvalidU24(field.to_string()))?;
    Uid::try_from_u32(raw)
}

fn parse_bool(field: &str) -> Result<bool> {
    match field.to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" | "" => Ok(false),
        other => Err(KoineError::InvalidBooleanField(other.to_string())),
    }
}

fn parse_strongs(field: &str) -> Result<Vec<u16>> {
    field
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.trim()
                .parse::<u16>()
                .map_err(|_| KoineError::InvalidU16(s.to_string()))
        })
        .collect()
}

fn parse_tags(field: &str) -> Result<Vec<String>> {
    let tags: Vec<String> = field
        .split(',')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();
    if tags.len() > MAX_TAGS {
        return Err(KoineError::InvalidDictionaryFile(format!(
            "{} tags exceeds the limit of {MAX_TAGS}",
            tags.len()
        )));
    }
    Ok(tags)
}

fn parse_pos_name(name: &str) -> Result<PartOfSpeech> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    let pos = match key.as_str() {
        "" | "unknown" => PartOfSpeech::Unknown,
        "particle" => PartOfSpeech::Particle,
        "verb" => PartOfSpeech::Verb,
        "noun" => PartOfSpeech::Noun,
        "adjective" => PartOfSpeech::Adjective,
        "adverb" => PartOfSpeech::Adverb,
        "conjunction" => PartOfSpeech::Conjunction,
        "propernoun" => PartOfSpeech::ProperNoun,
        "preposition" => PartOfSpeech::Preposition,
        "conditional" => PartOfSpeech::Conditional,
        "article" => PartOfSpeech::Article,
        "interjection" => PartOfSpeech::Interjection,
        "pronoun" => PartOfSpeech::Pronoun,
        "personalpronoun" => PartOfSpeech::PersonalPronoun,
        "possessivepronoun" => PartOfSpeech::PossessivePronoun,
        "relativepronoun" => PartOfSpeech::RelativePronoun,
        "demonstrativepronoun" => PartOfSpeech::DemonstrativePronoun,
        "reciprocalpronoun" => PartOfSpeech::ReciprocalPronoun,
        "reflexivepronoun" => PartOfSpeech::ReflexivePronoun,
        "transliteration" => PartOfSpeech::Transliteration,
        "hebrewtransliteration" => PartOfSpeech::HebrewTransliteration,
        "aramaictransliteration" => PartOfSpeech::AramaicTransliteration,
        "letter" => PartOfSpeech::Letter,
        "numeral" => PartOfSpeech::Numeral,
        "superlativeadjective" => PartOfSpeech::SuperlativeAdjective,
        "superlativeadverb" => PartOfSpeech::SuperlativeAdverb,
        "superlativenoun" => PartOfSpeech::SuperlativeNoun,
        "comparativeadjective" => PartOfSpeech::ComparativeAdjective,
        "comparativeadverb" => PartOfSpeech::ComparativeAdverb,
        "comparativenoun" => PartOfSpeech::ComparativeNoun,
        _ => return Err(KoineError::InvalidParsing(name.to_string())),
    };
    Ok(pos)
}

fn pos_name(pos: PartOfSpeech) -> &'static str {
    match pos {
        PartOfSpeech::Unknown => "",
        PartOfSpeech::Particle => "Particle",
        PartOfSpeech::Verb => "Verb",
        PartOfSpeech::Noun => "Noun",
        PartOfSpeech::Adjective => "Adjective",
        PartOfSpeech::Adverb => "Adverb",
        PartOfSpeech::Conjunction => "Conjunction",
        PartOfSpeech::ProperNoun => "ProperNoun",
        PartOfSpeech::Preposition => "Preposition",
        PartOfSpeech::Conditional => "Conditional",
        PartOfSpeech::Article => "Article",
        PartOfSpeech::Interjection => "Interjection",
        PartOfSpeech::Pronoun => "Pronoun",
        PartOfSpeech::PersonalPronoun => "PersonalPronoun",
        PartOfSpeech::PossessivePronoun => "PossessivePronoun",
        PartOfSpeech::RelativePronoun => "RelativePronoun",
        PartOfSpeech::DemonstrativePronoun => "DemonstrativePronoun",
        PartOfSpeech::ReciprocalPronoun => "ReciprocalPronoun",
        PartOfSpeech::ReflexivePronoun => "ReflexivePronoun",
        PartOfSpeech::Transliteration => "Transliteration",
        PartOfSpeech::HebrewTransliteration => "HebrewTransliteration",
        PartOfSpeech::AramaicTransliteration => "AramaicTransliteration",
        PartOfSpeech::Letter => "Letter",
        PartOfSpeech::Numeral => "Numeral",
        PartOfSpeech::SuperlativeAdjective => "SuperlativeAdjective",
        PartOfSpeech::SuperlativeAdverb => "SuperlativeAdverb",
        PartOfSpeech::SuperlativeNoun => "SuperlativeNoun",
        PartOfSpeech::ComparativeAdjective => "ComparativeAdjective",
        PartOfSpeech::ComparativeAdverb => "ComparativeAdverb",
        PartOfSpeech::ComparativeNoun => "ComparativeNoun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Book, Module};

    const SAMPLE: &str = "\
δράκων|el|123456|Noun|ὁ|οντος|1404||en:dragon:large serpent|||
  δράκων|N-NSM|true|123457||byz#Rev 12:3 7
  δράκοντα|N-ASM|false|123458||
λύω|el|200000|Verb|||3089||en:loose:untie|||
  λύω|V-PAI-1S|true|200001||
  λύει|V-PAI-3S|true|200002||
  λύει|V-PAI-3S|false|200003||
";

    #[test]
    fn parses_lexeme_blocks() {
        let (lexemes, forms) = parse_text(SAMPLE).unwrap();
        assert_eq!(lexemes.len(), 2);
        assert_eq!(forms.len(), 5);

        let drakon = &lexemes[0];
        assert_eq!(drakon.word, "δράκων");
        assert_eq!(drakon.uid, Uid(123_456));
        assert_eq!(drakon.lang, Lang::Greek);
        assert_eq!(drakon.article, Article::Masculine);
        assert_eq!(drakon.genitive_suffix, "οντος");
        assert_eq!(drakon.strongs, vec![1404]);
        assert_eq!(drakon.glosses.len(), 1);
        assert_eq!(drakon.glosses[0].entries, vec!["dragon", "large serpent"]);
        assert_eq!(drakon.forms.len(), 2);

        let nsm = &forms[0];
        assert_eq!(nsm.word, "δράκων");
        assert!(nsm.preferred());
        assert_eq!(nsm.lexeme, Some(LexemeIx(0)));
        assert_eq!(nsm.references.len(), 1);
        assert_eq!(nsm.references[0].module, Module::Byzantine);
        assert_eq!(nsm.references[0].book, Book::Revelation);
        assert_eq!(nsm.references[0].word, 7);
    }

    #[test]
    fn round_trips_through_writer() {
        let (lexemes, forms) = parse_text(SAMPLE).unwrap();
        let rendered = write_text(&lexemes, &forms);
        let (again_lexemes, again_forms) = parse_text(&rendered).unwrap();
        assert_eq!(again_lexemes, lexemes);
        assert_eq!(again_forms, forms);
    }

    #[test]
    fn form_before_lexeme_fails_with_line() {
        let err = parse_text("  ὁ|T-NSM|false|1||\n").unwrap_err();
        assert!(matches!(err, KoineError::Line { line: 1, .. }));
    }

    #[test]
    fn bad_field_reports_line_number() {
        let source = "δράκων|el|123456|Noun|ὁ||||en:dragon|||\n  δράκων|N-NSM|perhaps|0||\n";
        let err = parse_text(source).unwrap_err();
        match err {
            KoineError::Line { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, KoineError::InvalidBooleanField(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn pos_aliases() {
        assert_eq!(parse_pos_name("Noun").unwrap(), PartOfSpeech::Noun);
        assert_eq!(parse_pos_name("ProperNoun").unwrap(), PartOfSpeech::ProperNoun);
        assert_eq!(parse_pos_name("Proper Noun").unwrap(), PartOfSpeech::ProperNoun);
        assert_eq!(parse_pos_name("proper_noun").unwrap(), PartOfSpeech::ProperNoun);
        assert_eq!(
            parse_pos_name("personal pronoun").unwrap(),
            PartOfSpeech::PersonalPronoun
        );
        assert!(parse_pos_name("gerund").is_err());
    }

    #[test]
    fn zero_and_empty_uid_mean_unassigned() {
        assert_eq!(parse_uid("").unwrap(), Uid::UNASSIGNED);
        assert_eq!(parse_uid("0").unwrap(), Uid::UNASSIGNED);
        assert!(parse_uid("99999999").is_err());
        assert!(parse_uid("abc").is_err());
    }

    #[test]
    fn too_many_tags_rejected() {
        let ten = (0..10).map(|i| format!("t{i}")).collect::<Vec<_>>().join(",");
        assert_eq!(parse_tags(&ten).unwrap().len(), 10);
        let eleven = (0..11).map(|i| format!("t{i}")).collect::<Vec<_>>().join(",");
        assert!(parse_tags(&eleven).is_err());
    }
}
