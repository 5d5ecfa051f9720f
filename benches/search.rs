//! Lookup benchmarks for the search index.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use koine::Dictionary;

const SAMPLE: &str = "\
δράκων|el|0|Noun|ὁ|οντος|1404||en:dragon:large serpent|||
  δράκων|N-NSM|true|0||byz#Rev 12:3 7
  δράκοντα|N-ASM|false|0||
λύω|el|0|Verb|||3089||en:loose:untie|||
  λύω|V-PAI-1S|true|0||
  λύει|V-PAI-3S|true|0||
ἄνθρωπος|el|0|Noun|ὁ|ου|444||en:man:person:human|||
  ἄνθρωπος|N-NSM|true|0||
  ἀνθρώπου|N-GSM|false|0||
  ἀνθρώπῳ|N-DSM|false|0||
λόγος|el|0|Noun|ὁ|ου|3056||en:word:saying:message|||
  λόγος|N-NSM|true|0||
  λόγον|N-ASM|false|0||
";

fn bench_lookup(c: &mut Criterion) {
    let dictionary = Dictionary::load_text(SAMPLE).expect("bench dictionary loads");

    c.bench_function("exact accented lookup", |b| {
        b.iter(|| dictionary.by_form().lookup(black_box("λόγος")))
    });

    c.bench_function("unaccented fallback lookup", |b| {
        b.iter(|| dictionary.by_form().lookup(black_box("ανθρωπος")))
    });

    c.bench_function("prefix lookup", |b| {
        b.iter(|| dictionary.by_form().lookup(black_box("ἀνθ")))
    });

    c.bench_function("gloss lookup", |b| {
        b.iter(|| dictionary.by_gloss().lookup(black_box("person")))
    });
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load text dictionary", |b| {
        b.iter(|| Dictionary::load_text(black_box(SAMPLE)).unwrap())
    });
}

criterion_group!(benches, bench_lookup, bench_load);
criterion_main!(benches);
