//! Report tables: titles, captions and cell contents.

use std::io::Cursor;

use el_data::cldr::parse_exemplars;
use el_data::report::{
    byte_sequences, casing_data, encoding_data, entities, ethiopic_data, exemplar_table,
    unicode_data, unihan_data, EncodingMode, Report,
};
use el_data::{Error, LookupDb};

fn rows(report: &Report) -> Vec<Vec<String>> {
    report
        .table()
        .row_iter()
        .map(|row| row.cell_iter().map(|cell| cell.content()).collect())
        .collect()
}

fn header(report: &Report) -> Vec<String> {
    report
        .table()
        .header()
        .map(|row| row.cell_iter().map(|cell| cell.content()).collect())
        .unwrap_or_default()
}

#[test]
fn test_unicode_data() {
    let report = unicode_data("aሀ");
    assert_eq!(report.title(), "Character properties");
    assert_eq!(report.caption(), "String: aሀ");
    assert_eq!(header(&report)[..3], ["char", "cp", "name"]);

    let rows = rows(&report);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..4], ["a", "0061", "LATIN SMALL LETTER A", "Latin"]);
    assert_eq!(rows[1][..4], ["ሀ", "1200", "ETHIOPIC SYLLABLE HA", "Ethiopic"]);
    assert_eq!(rows[0][5], "Ll");
    assert_eq!(rows[0][7], "0");

    let rendered = report.to_string();
    assert!(rendered.starts_with("Character properties\n"));
    assert!(rendered.ends_with("String: aሀ"));
}

#[test]
fn test_casing_data() {
    let report = casing_data("ß").expect("Failed to build casing table");
    assert_eq!(report.caption(), "Character: ß");
    assert_eq!(
        rows(&report),
        vec![
            vec!["Uppercase", "SS", "ß"],
            vec!["Titlecase", "Ss", "ß"],
            vec!["Lowercase", "ß", "ß"],
            vec!["Case folding", "ss", "ß"],
        ]
    );
    assert!(matches!(casing_data("ab"), Err(Error::InvalidCharLength(2))));
}

#[test]
fn test_entities() {
    let report = entities("é");
    assert_eq!(
        rows(&report),
        vec![vec!["é", "0xe9", "233", "0o351", "0b11101001", "&eacute;", "&#0233;", "&#x00E9;"]]
    );
}

#[test]
fn test_byte_sequences() {
    let report = byte_sequences("aé", "utf-8").unwrap();
    assert_eq!(report.caption(), "String: aé\nEncoding: utf-8");
    assert_eq!(rows(&report), vec![vec!["a", "61"], vec!["é", "C3 A9"]]);
    assert!(byte_sequences("a", "klingon").is_err());
}

#[test]
fn test_encoding_data_modes() {
    let report = encoding_data("aé", "utf-8", EncodingMode::CodepointsBytes).unwrap();
    assert!(report.table().header().is_none());
    assert_eq!(
        rows(&report),
        vec![vec!["a", "é"], vec!["0061", "00E9"], vec!["61", "C3 A9"]]
    );

    let report = encoding_data("a😊", "utf-16", EncodingMode::CodeUnits).unwrap();
    assert_eq!(rows(&report)[1], vec!["0061", "D83D DE0A"]);

    let report = encoding_data("a", "utf-8", EncodingMode::Codepoints).unwrap();
    assert_eq!(rows(&report).len(), 2);

    assert!(encoding_data("a", "klingon", EncodingMode::Bytes).is_err());
}

#[test]
fn test_ethiopic_data() {
    let db = LookupDb::in_memory().unwrap();
    db.seed_ethiopic().unwrap();

    let report = ethiopic_data(&db, "ሁሉ!").unwrap();
    assert_eq!(report.title(), "Ethiopic character data");
    let rows = rows(&report);
    assert_eq!(rows[0][5..], ["ሀ", "2", "ካዕብ"]);
    assert_eq!(rows[1][5..], ["ለ", "2", "ካዕብ"]);
    assert_eq!(rows[2][5..], ["-", "-", "-"]);
}

#[test]
fn test_unihan_data() {
    let db = LookupDb::in_memory().unwrap();
    db.import_unihan(Cursor::new("U+4E00\tkMandarin\tyī\nU+4E00\tkJapaneseOn\tICHI ITSU\n"))
        .unwrap();

    let report = unihan_data(&db, '一', &["kMandarin", "kCantonese"]).unwrap();
    assert_eq!(report.caption(), "Character: 一 (U+4E00)");
    assert_eq!(
        rows(&report),
        vec![vec!["kMandarin", "yī"], vec!["kCantonese", "-"]]
    );

    let all = unihan_data(&db, '一', &[]).unwrap();
    assert_eq!(rows(&all).len(), 2);
    assert!(rows(&all).contains(&vec!["kJapaneseOn".to_string(), "ICHI ITSU".to_string()]));

    assert!(matches!(unihan_data(&db, '一', &["kNope"]), Err(Error::UnknownField(_))));
}

#[test]
fn test_exemplar_table() {
    let ldml = r#"<ldml><characters>
        <exemplarCharacters>[a-c]</exemplarCharacters>
        <exemplarCharacters type="auxiliary">[x]</exemplarCharacters>
    </characters></ldml>"#;
    let exemplars = parse_exemplars(ldml.as_bytes()).unwrap();
    let report = exemplar_table("en", &exemplars);
    assert_eq!(report.caption(), "Locale: en");
    assert_eq!(rows(&report), vec![vec!["auxiliary", "[x]"], vec!["main", "[a-c]"]]);
}
