use criterion::{black_box, criterion_group, criterion_main, Criterion};
use el_data::codepoints::{count_chars_matching, get_bytes};
use el_data::ethiopic::{normalise_homophones, EthiopicString};
use el_data::{CharSet, LookupDb, UcdString};

fn benchmark_properties(c: &mut Criterion) {
    let text = "ሰላም ለዓለም! Hello, world! 你好，世界";

    c.bench_function("ucd_string_data", |b| {
        b.iter(|| UcdString::new(black_box(text)).data())
    });

    c.bench_function("parse_uset_ethiopic_letters", |b| {
        b.iter(|| CharSet::parse(black_box(r"[[\p{Ethiopic}]&[\p{L}]]")))
    });

    c.bench_function("get_bytes_windows_1252", |b| {
        b.iter(|| get_bytes(black_box("Größe €5"), "windows-1252"))
    });

    c.bench_function("scan_codespace_alphabetic", |b| {
        b.iter(|| count_chars_matching(|ch| ch.is_alphabetic()))
    });
}

fn benchmark_ethiopic(c: &mut Criterion) {
    let db = LookupDb::in_memory().expect("Failed to create in-memory database");
    db.seed_ethiopic().expect("Failed to seed Ethiopic table");

    let text = "ሠላም ለዓለም፤ ሐበሻ ፀሐይ";

    c.bench_function("ethiopic_string_family", |b| {
        b.iter(|| {
            EthiopicString::new(&db, black_box(text))
                .expect("Failed to look up string")
                .family()
        })
    });

    c.bench_function("normalise_homophones", |b| {
        b.iter(|| normalise_homophones(&db, black_box(text)))
    });
}

criterion_group!(benches, benchmark_properties, benchmark_ethiopic);
criterion_main!(benches);
