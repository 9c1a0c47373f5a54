//! Lookup database: encodings table, Unihan and Unikemet imports.

use std::io::Cursor;

use el_data::codepoints::CodeValue;
use el_data::db::Table;
use el_data::encodings::{normalise_byte, Encodings};
use el_data::unihan::{field_metadata, FieldValue, Unihan, UnihanString};
use el_data::unikemet::{Unikemet, UnikemetString};
use el_data::{Error, LookupDb};

const LABELS: &[&str] = &["windows-1252", "iso-8859-1", "iso-8859-10", "iso-8859-2", "koi8-r"];

fn encodings_db() -> LookupDb {
    let db = LookupDb::in_memory().expect("Failed to create in-memory database");
    let seeded = db.seed_encodings(LABELS).expect("Failed to seed encodings");
    assert_eq!(seeded, LABELS.len());
    db
}

const UNIHAN_FIXTURE: &str = "\
# Unihan_Readings.txt
U+4E00\tkDefinition\tone; a, an; alone
U+4E00\tkMandarin\tyī
U+4E00\tkJapaneseOn\tICHI ITSU
U+4E00\tkTotalStrokes\t1
U+4E00\tkNotARealField\tignored
U+4E8C\tkDefinition\ttwo; twice
";

const UNIKEMET_FIXTURE: &str = "\
U+13000\tkEH_Cat\tA-1-1
U+13000\tkEH_Desc\tSeated man
U+13001\tkEH_Cat\tA-1-2
";

#[test]
fn test_normalise_byte() {
    assert_eq!(normalise_byte(&CodeValue::from(0x41)).unwrap(), "0x41");
    assert_eq!(normalise_byte(&CodeValue::from("a")).unwrap(), "0x0A");
    assert_eq!(normalise_byte(&CodeValue::from("0xff")).unwrap(), "0xFF");
    assert!(normalise_byte(&CodeValue::from(0x100)).is_err());
}

#[test]
fn test_encodings_table_seeded_from_encoding_rs() {
    let db = encodings_db();
    let enc = Encodings::new(&db).unwrap();

    assert_eq!(enc.available_encodings().unwrap(), LABELS.to_vec());

    let euro = enc.codepoint_data(&CodeValue::from("80")).unwrap();
    assert_eq!(euro["windows-1252"].as_deref(), Some("0x20AC"));
    assert_eq!(euro["iso-8859-1"].as_deref(), Some("0x0080"));

    let koi8 = enc.encoding_data("KOI8-R").unwrap();
    assert_eq!(koi8.len(), 256);
    assert_eq!(koi8["0x41"].as_deref(), Some("0x0041"));
    assert_eq!(koi8["0xC1"].as_deref(), Some("0x0430"));

    assert!(matches!(enc.encoding_data("ebcdic"), Err(Error::UnknownEncoding(_))));
}

#[test]
fn test_match_character_sorted_numerically() {
    let db = encodings_db();
    let enc = Encodings::new(&db).unwrap();

    assert_eq!(enc.match_character('€', &CodeValue::from(0x80)).unwrap(), vec!["windows-1252"]);
    assert_eq!(
        enc.match_character('A', &CodeValue::from("41")).unwrap(),
        vec!["iso-8859-1", "iso-8859-2", "iso-8859-10", "koi8-r", "windows-1252"]
    );
    assert!(enc.match_character('ሀ', &CodeValue::from("41")).unwrap().is_empty());
}

#[test]
fn test_on_disk_database_reopens_read_only() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.db");
    {
        let db = LookupDb::create(&path).unwrap();
        db.seed_ethiopic().unwrap();
        db.seed_encodings(&["windows-1252"]).unwrap();
    }

    let db = LookupDb::open(&path);
    assert_eq!(db.lookup(Table::Ethiopic, "ሉ", "ቤት").unwrap().as_deref(), Some("ካዕብ"));
    assert!(db.seed_encodings(&["koi8-r"]).is_err());
}

#[test]
fn test_missing_database_answers_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = LookupDb::open(dir.path().join("absent.db"));
    assert!(matches!(db.connection(), Err(Error::Database(_))));
    assert_eq!(db.lookup(Table::Ethiopic, "ሀ", "ቤት").unwrap(), None);
    assert_eq!(db.lookup(Table::Encodings, "0041", "koi8-r").unwrap(), None);
    assert!(db.lookup_row(Table::Unihan, "一").unwrap().is_none());
    assert!(db.keys_where(Table::Ethiopic, "ቤት", "ግዕዝ").unwrap().is_empty());
    assert!(db.column_values(Table::Unikemet, "kEH_Cat").unwrap().is_empty());
    assert!(db.seed_ethiopic().is_err());
}

#[test]
fn test_column_names_are_whitelisted() {
    let db = LookupDb::in_memory().unwrap();
    assert!(matches!(
        db.lookup(Table::Unihan, "一", "kMandarin; DROP TABLE unihan"),
        Err(Error::UnknownField(_))
    ));
    assert!(db.lookup(Table::Unihan, "一", "kMandarin").unwrap().is_none());
}

#[test]
fn test_unihan_import_and_lookup() {
    let db = LookupDb::in_memory().unwrap();
    let count = db.import_unihan(Cursor::new(UNIHAN_FIXTURE)).unwrap();
    assert_eq!(count, 5);

    let one = Unihan::new(&db, '一');
    assert_eq!(one.ucn().unwrap().as_deref(), Some("U+4E00"));
    assert_eq!(one.mandarin().unwrap(), Some(FieldValue::Text("yī".into())));
    assert_eq!(
        one.definition().unwrap(),
        Some(FieldValue::Text("one; a, an; alone".into()))
    );
    assert_eq!(
        one.japanese_on().unwrap(),
        Some(FieldValue::List(vec!["ICHI".into(), "ITSU".into()]))
    );
    assert_eq!(one.total_strokes().unwrap().map(|v| v.to_string()), Some("1".into()));
    assert_eq!(one.cantonese().unwrap(), None);
    assert!(matches!(one.field("kBogus"), Err(Error::UnknownField(_))));

    let fields: Vec<String> = one.all_fields().unwrap().into_iter().map(|(k, _)| k).collect();
    assert_eq!(fields.len(), 4);
    assert!(fields.contains(&"kJapaneseOn".to_string()));

    assert_eq!(one.script(), "Han");
    assert!(Unihan::new(&db, '三').all_fields().unwrap().is_empty());
}

#[test]
fn test_unihan_reimport_updates_in_place() {
    let db = LookupDb::in_memory().unwrap();
    db.import_unihan(Cursor::new(UNIHAN_FIXTURE)).unwrap();
    db.import_unihan(Cursor::new("U+4E00\tkMandarin\tyi1\n")).unwrap();
    let one = Unihan::new(&db, '一');
    assert_eq!(one.mandarin().unwrap(), Some(FieldValue::Text("yi1".into())));
    assert!(one.definition().unwrap().is_some());
}

#[test]
fn test_unihan_field_metadata() {
    let meta = field_metadata("kCangjie").expect("kCangjie is documented");
    assert_eq!(meta.category, "Dictionary-like Data");
    assert_eq!(meta.syntax, "[A-Z]+");
    assert!(field_metadata("kMandarin").is_none());
}

#[test]
fn test_unikemet_import_and_lookup() {
    let db = LookupDb::in_memory().unwrap();
    assert_eq!(db.import_unikemet(Cursor::new(UNIKEMET_FIXTURE)).unwrap(), 3);

    let a1 = Unikemet::new(&db, '\u{13000}');
    assert_eq!(a1.field("kEH_Cat").unwrap().as_deref(), Some("A-1-1"));
    assert_eq!(a1.field("kEH_HG").unwrap(), None);
    assert_eq!(a1.all_fields().unwrap().len(), 2);
    assert!(matches!(a1.field("kDefinition"), Err(Error::UnknownField(_))));
    assert_eq!(a1.script(), "Egyptian_Hieroglyphs");
}

#[test]
fn test_unihan_string_fields() {
    let db = LookupDb::in_memory().unwrap();
    db.import_unihan(Cursor::new(UNIHAN_FIXTURE)).unwrap();

    let s = UnihanString::new(&db, "一二三");
    assert_eq!(s.len(), 3);
    assert_eq!(s.to_string(), "一二三");
    assert_eq!(
        s.field("kDefinition").unwrap(),
        vec![
            Some(FieldValue::Text("one; a, an; alone".into())),
            Some(FieldValue::Text("two; twice".into())),
            None,
        ]
    );
    assert_eq!(s.slice(1..3).characters(), vec!['二', '三']);
    assert_eq!(s.get(1).map(|c| c.codepoint()), Some("4E8C".to_string()));
    assert!(matches!(s.field("kBogus"), Err(Error::UnknownField(_))));
    assert_eq!(format!("{:?}", s.slice(0..1)), "UnihanString(chars=['一'])");
}

#[test]
fn test_unikemet_string_fields() {
    let db = LookupDb::in_memory().unwrap();
    db.import_unikemet(Cursor::new(UNIKEMET_FIXTURE)).unwrap();

    let s = UnikemetString::new(&db, "\u{13000}\u{13001}\u{13002}");
    assert_eq!(
        s.field("kEH_Cat").unwrap(),
        vec![Some("A-1-1".to_string()), Some("A-1-2".to_string()), None]
    );
    assert_eq!(s.slice(0..1).field("kEH_Desc").unwrap(), vec![Some("Seated man".to_string())]);
    assert_eq!(s.entities().len(), 3);
    assert!(UnikemetString::new(&db, "").is_empty());
}
