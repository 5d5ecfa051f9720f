//! Translation glosses

use crate::core::error::{KoineError, Result};
use crate::core::types::Lang;

/// A translation entry: one target language, one ordered list of short
/// translation strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gloss {
    /// Target language of the entries
    pub lang: Lang,
    /// Ordered translation strings; none may contain `:` or `#`
    pub entries: Vec<String>,
}

impl Gloss {
    /// Create a gloss with no entries yet
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            entries: Vec::new(),
        }
    }

    /// Parse one `lang:entry[:entry]*` segment of the text format
    pub fn parse_text(segment: &str) -> Result<Self> {
        let mut parts = segment.split(':');
        let code = parts.next().ok_or(KoineError::MissingField("gloss language"))?;
        let lang = Lang::parse_code(code)?;
        let entries: Vec<String> = parts
            .filter(|e| !e.is_empty())
            .map(|e| e.to_string())
            .collect();
        if entries.is_empty() {
            return Err(KoineError::EmptyField("gloss entries"));
        }
        Ok(Self { lang, entries })
    }

    /// Render this gloss as a `lang:entry[:entry]*` segment
    pub fn to_text(&self) -> String {
        let mut out = String::from(self.lang.code());
        for entry in &self.entries {
            out.push(':');
            out.push_str(entry);
        }
        out
    }

    /// Validate that no entry contains a separator the text format reserves
    pub fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.contains(':') || entry.contains('#') {
                return Err(KoineError::InvalidDictionaryFile(format!(
                    "gloss entry contains reserved separator: {entry:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Parse a `#`-joined gloss list field. An empty field is an empty list.
pub fn parse_gloss_list(field: &str) -> Result<Vec<Gloss>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    let mut glosses = Vec::new();
    for segment in field.split('#') {
        if segment.is_empty() {
            continue;
        }
        glosses.push(Gloss::parse_text(segment)?);
    }
    Ok(glosses)
}

/// Render a gloss list as a `#`-joined field
pub fn format_gloss_list(glosses: &[Gloss]) -> String {
    glosses
        .iter()
        .map(Gloss::to_text)
        .collect::<Vec<_>>()
        .join("#")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_gloss() {
        let gloss = Gloss::parse_text("en:dragon:large serpent").unwrap();
        assert_eq!(gloss.lang, Lang::English);
        assert_eq!(gloss.entries, vec!["dragon", "large serpent"]);
    }

    #[test]
    fn parse_gloss_list_multiple_languages() {
        let glosses = parse_gloss_list("en:word#es:palabra").unwrap();
        assert_eq!(glosses.len(), 2);
        assert_eq!(glosses[0].lang, Lang::English);
        assert_eq!(glosses[1].lang, Lang::Spanish);
        assert_eq!(glosses[1].entries, vec!["palabra"]);
    }

    #[test]
    fn gloss_list_round_trip() {
        let field = "en:loose:untie#ru:развязывать";
        let glosses = parse_gloss_list(field).unwrap();
        assert_eq!(format_gloss_list(&glosses), field);
    }

    #[test]
    fn empty_field_is_empty_list() {
        assert!(parse_gloss_list("").unwrap().is_empty());
        assert_eq!(format_gloss_list(&[]), "");
    }

    #[test]
    fn unknown_language_rejected() {
        assert!(Gloss::parse_text("fr:mot").is_err());
    }

    #[test]
    fn entries_must_not_carry_separators() {
        let gloss = Gloss {
            lang: Lang::English,
            entries: vec!["a#b".to_string()],
        };
        assert!(gloss.validate().is_err());
    }
}
