//! Integration tests for the koine lexicon: end-to-end load, search,
//! and persistence round trips.

use koine::core::error::KoineError;
use koine::dictionary::MIN_GENERATED_UID;
use koine::{Dictionary, Uid};
use tempfile::TempDir;

const SAMPLE: &str = "\
δράκων|el|0|Noun|ὁ|οντος|1404||en:dragon:large serpent|||
  δράκων|N-NSM|true|0||byz#Rev 12:3 7
  δράκοντα|N-ASM|false|0||
λύω|el|0|Verb|||3089||en:loose:untie|||
  λύω|V-PAI-1S|true|0||
  λύει|V-PAI-3S|true|0||
  λύει|V-PAI-3S|false|0||
";

fn sample_dictionary() -> Dictionary {
    Dictionary::load_text(SAMPLE).expect("sample dictionary loads")
}

#[test]
fn form_lookup_prefers_exact_accented() {
    let dict = sample_dictionary();

    let hit = dict.by_form().lookup("λύω").unwrap();
    assert_eq!(hit.exact_accented.len(), 1);
    assert_eq!(dict.form(hit.exact_accented[0]).word, "λύω");
}

#[test]
fn equal_words_rank_preferred_first() {
    let dict = sample_dictionary();

    let hit = dict.by_form().lookup("λύει").unwrap();
    assert_eq!(hit.exact_accented.len(), 2);
    assert!(dict.form(hit.exact_accented[0]).preferred());
    assert!(!dict.form(hit.exact_accented[1]).preferred());
}

#[test]
fn unaccented_query_falls_back() {
    let dict = sample_dictionary();

    let hit = dict.by_form().lookup("δρακων").unwrap();
    assert_eq!(hit.exact_unaccented.len(), 1);
    assert_eq!(dict.form(hit.exact_unaccented[0]).word, "δράκων");
}

#[test]
fn typed_prefix_matches_partially() {
    let dict = sample_dictionary();

    let hit = dict.by_form().lookup("δρα").unwrap();
    assert_eq!(hit.partial_match.len(), 2);
}

#[test]
fn gloss_lookup_hits_primary_form() {
    let dict = sample_dictionary();

    let hit = dict.by_gloss().lookup("serpent").unwrap();
    let word = &dict.form(hit.exact_accented[0]).word;
    assert!(word == "δράκων" || word == "δράκοντα");

    let hit = dict.by_gloss().lookup("dragon").unwrap();
    assert_eq!(dict.form(hit.exact_accented[0]).word, "δράκων");

    // prefixes of gloss tokens autocomplete too
    assert!(dict.by_gloss().lookup("serp").is_some());
}

#[test]
fn stopword_gloss_has_no_entry() {
    let dict = sample_dictionary();
    assert!(dict.by_gloss().lookup("the").is_none());
}

#[test]
fn transliterated_lookup() {
    let dict = sample_dictionary();

    let hit = dict.by_transliteration().lookup("drakon").unwrap();
    assert_eq!(dict.form(hit.exact_accented[0]).word, "δράκων");

    // romanized headwords also reach the gloss index
    assert!(dict.by_gloss().lookup("luo").is_some());
}

#[test]
fn lemma_lookup() {
    let dict = sample_dictionary();

    let hit = dict.by_lexeme().lookup("λύω").unwrap();
    assert_eq!(hit.exact_accented.len(), 1);
    assert_eq!(dict.lexeme(hit.exact_accented[0]).word, "λύω");
}

#[test]
fn auto_assigned_uids_are_unique_and_high() {
    let dict = sample_dictionary();

    let mut seen = std::collections::HashSet::new();
    for lexeme in dict.lexemes() {
        assert!(lexeme.uid.is_assigned());
        assert!(lexeme.uid.0 >= MIN_GENERATED_UID);
        assert!(lexeme.uid.0 <= Uid::MAX);
        assert!(seen.insert(lexeme.uid));
    }
    for form in dict.forms() {
        assert!(form.uid.is_assigned());
        assert!(form.uid.0 >= MIN_GENERATED_UID);
        assert!(seen.insert(form.uid));
    }
}

#[test]
fn explicit_uids_survive_loading() {
    let source = "λόγος|el|150000|Noun|ὁ||3056||en:word|||\n  λόγος|N-NSM|true|150001||\n";
    let dict = Dictionary::load_text(source).unwrap();
    assert_eq!(dict.lexemes()[0].uid, Uid(150_000));
    assert_eq!(dict.forms()[0].uid, Uid(150_001));
    assert!(dict.lexeme_by_uid(Uid(150_000)).is_some());
    assert!(dict.form_by_uid(Uid(150_001)).is_some());
}

#[test]
fn duplicate_uids_rejected() {
    let source = "λόγος|el|150000|Noun|||||en:word|||\n  λόγος|N-NSM|true|150000||\n";
    assert!(matches!(
        Dictionary::load_text(source),
        Err(KoineError::InvalidDictionaryFile(_))
    ));
}

#[test]
fn text_round_trip_is_stable() {
    let dict = sample_dictionary();
    let first = dict.write_text();
    let again = Dictionary::load_text(&first).unwrap();
    assert_eq!(again.write_text(), first);
    assert_eq!(again.lexemes(), dict.lexemes());
    assert_eq!(again.forms(), dict.forms());
}

#[test]
fn binary_round_trip_is_byte_identical() {
    let dict = sample_dictionary();
    let bytes = dict.write_binary().unwrap();

    let reloaded = Dictionary::load_binary(&bytes).unwrap();
    let bytes_again = reloaded.write_binary().unwrap();
    assert_eq!(bytes, bytes_again);

    let third = Dictionary::load_binary(&bytes_again).unwrap();
    assert_eq!(third.lexemes(), reloaded.lexemes());
    assert_eq!(third.forms(), reloaded.forms());
}

#[test]
fn binary_round_trip_preserves_index_buckets() {
    let dict = sample_dictionary();
    let bytes = dict.write_binary().unwrap();
    let reloaded = Dictionary::load_binary(&bytes).unwrap();

    assert_eq!(
        reloaded.by_form().sorted_keywords(),
        dict.by_form().sorted_keywords()
    );
    for keyword in dict.by_form().sorted_keywords() {
        let original = dict.by_form().get(keyword).unwrap();
        let restored = reloaded.by_form().get(keyword).unwrap();
        let uids = |bucket: &[koine::FormIx], d: &Dictionary| {
            bucket.iter().map(|ix| d.form(*ix).uid).collect::<Vec<_>>()
        };
        assert_eq!(
            uids(&restored.exact_accented, &reloaded),
            uids(&original.exact_accented, &dict),
            "{keyword}"
        );
        assert_eq!(
            uids(&restored.partial_match, &reloaded),
            uids(&original.partial_match, &dict),
            "{keyword}"
        );
    }

    // searches behave identically after the round trip
    let hit = reloaded.by_form().lookup("λύει").unwrap();
    assert!(reloaded.form(hit.exact_accented[0]).preferred());
}

#[test]
fn load_file_detects_format_by_magic() {
    let dir = TempDir::new().unwrap();
    let dict = sample_dictionary();

    let text_path = dir.path().join("greek.txt");
    dict.save_text(&text_path).unwrap();
    let from_text = Dictionary::load_file(&text_path).unwrap();
    assert_eq!(from_text.lexemes(), dict.lexemes());

    let bin_path = dir.path().join("greek.dict");
    dict.save_binary(&bin_path).unwrap();
    let from_binary = Dictionary::load_file(&bin_path).unwrap();
    assert_eq!(from_binary.forms(), dict.forms());
}

#[test]
fn malformed_line_aborts_load() {
    let source = "δράκων|el|0|Gerund|||||en:dragon|||\n";
    let err = Dictionary::load_text(source).unwrap_err();
    assert!(matches!(err, KoineError::Line { line: 1, .. }));
}

#[test]
fn normalization_idempotent_over_random_words() {
    use koine::Normalizer;
    use rand::prelude::*;

    let pool: Vec<char> = "αβγδεζηθικλμνξοπρσςτυφχψω\
ἀἁἄἅἂἃᾶάὰϊΐἡἥὴήῆῃᾧὧὦῶώὼὐὑὕῦύϋΰ\
ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩἈἉἌ"
        .chars()
        .collect();
    let mut rng = StdRng::seed_from_u64(0x517E);
    let mut normalizer = Normalizer::new();

    for _ in 0..500 {
        let len = rng.gen_range(1..12);
        let word: String = (0..len)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        let first = normalizer.normalise(&word).unwrap().accented.to_string();
        let second = normalizer.normalise(&first).unwrap().accented.to_string();
        assert_eq!(first, second, "normalizing {word:?}");

        let keywords = normalizer.keywords(&word).unwrap();
        let accented = keywords.accented.to_string();
        let unaccented = keywords.unaccented.to_string();
        for kw in &keywords.keywords {
            let kw: &str = kw;
            assert!(
                accented.starts_with(kw) || unaccented.starts_with(kw),
                "keyword {kw:?} is not a prefix of {accented:?}/{unaccented:?}"
            );
        }
    }
}
