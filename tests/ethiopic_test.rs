//! Ethiopic family and order lookups against a freshly seeded database.

use el_data::ethiopic::{
    are_homophones, expand_ranges, expand_ranges_within, homophone_class, is_ethiopic_numeral,
    normalise_homophones, resolve_order, syllables_for_families, syllables_for_orders, EthiopicString, EthiopicUcd,
    FamilyMode, OrderMode, CHARACTERS, FAMILIES, MARKS, NUMERALS, ORDERS, PUNCTUATION, SCRIPT,
    SYLLABLES, ZAIMA_QIRTS,
};
use el_data::{Error, LookupDb};

fn seeded_db() -> LookupDb {
    let db = LookupDb::in_memory().expect("Failed to create in-memory database");
    let count = db.seed_ethiopic().expect("Failed to seed Ethiopic table");
    assert!(count > 300, "only {} syllables seeded", count);
    db
}

#[test]
fn test_metadata_tables() {
    assert_eq!(FAMILIES.len(), 34);
    assert_eq!(ORDERS.len(), 14);
    assert_eq!(FAMILIES[0].romanised, "Hoy");
    assert_eq!(SCRIPT.iso_15924, "Ethi");
    assert_eq!(SCRIPT.iso_15924_numeric, 430);
    assert_eq!(resolve_order("ሳብዕ").map(|o| o.number), Some(7));
    assert_eq!(resolve_order("Kaib").map(|o| o.name), Some("ካዕብ"));
    assert_eq!(resolve_order("14").map(|o| o.romanised), Some("Zemede-Baʽed"));
    assert!(resolve_order("15").is_none());
    assert!(resolve_order("0").is_none());
}

#[test]
fn test_character_classes_are_populated() {
    for (name, class) in [
        ("characters", &*CHARACTERS),
        ("syllables", &*SYLLABLES),
        ("punctuation", &*PUNCTUATION),
        ("numerals", &*NUMERALS),
        ("marks", &*MARKS),
        ("zaima qirts", &*ZAIMA_QIRTS),
    ] {
        assert!(!class.is_empty(), "{} class is empty", name);
        assert!(class.chars().all(|c| CHARACTERS.contains_char(c)), "{} leaks outside Ethiopic", name);
    }
    assert!(ZAIMA_QIRTS.contains_char('\u{1390}'));
}

#[test]
fn test_character_classes() {
    assert!(SYLLABLES.contains_char('ሀ'));
    assert!(!SYLLABLES.contains_char('።'));
    assert!(PUNCTUATION.contains_char('።'));
    assert!(NUMERALS.contains_char('፩'));
    assert!(MARKS.contains_char('\u{135F}'));
    assert!(is_ethiopic_numeral("፩፪፫"));
    assert!(!is_ethiopic_numeral("፩2"));
    assert!(!is_ethiopic_numeral(""));
}

#[test]
fn test_family_and_order() {
    let db = seeded_db();

    let hu = EthiopicUcd::new(&db, 'ሁ').unwrap();
    assert_eq!(hu.family(FamilyMode::Default).as_deref(), Some("ሀ"));
    assert_eq!(hu.family(FamilyMode::Label).as_deref(), Some("ሆይ"));
    assert_eq!(hu.family(FamilyMode::Romanised).as_deref(), Some("Hoy"));
    assert_eq!(hu.order(OrderMode::Default).as_deref(), Some("ካዕብ"));
    assert_eq!(hu.order(OrderMode::Number).as_deref(), Some("2"));
    assert_eq!(hu.order(OrderMode::Romanised).as_deref(), Some("Kaib"));
    assert_eq!(hu.order_number(), Some(2));

    // Deref to the underlying character data.
    assert_eq!(hu.script(), "Ethiopic");
    assert_eq!(hu.codepoint(), "1201");
}

#[test]
fn test_labialised_rows_join_preceding_family() {
    let db = seeded_db();

    let qwa = EthiopicUcd::new(&db, 'ቈ').unwrap();
    assert_eq!(qwa.family(FamilyMode::Default).as_deref(), Some("ቀ"));
    assert_eq!(qwa.order_number(), Some(9));

    let qwi = EthiopicUcd::new(&db, 'ቊ').unwrap();
    assert_eq!(qwi.order(OrderMode::Default).as_deref(), Some("ዘመደ-ሣልስ"));

    let qa = EthiopicUcd::new(&db, 'ቀ').unwrap();
    let members = qa.family_members().unwrap();
    assert_eq!(members.len(), 13);
    assert!(members.contains(&'ቍ'));
}

#[test]
fn test_non_syllables_have_no_family() {
    let db = seeded_db();
    for c in ['፩', '።', 'a'] {
        let e = EthiopicUcd::new(&db, c).unwrap();
        assert_eq!(e.family(FamilyMode::Default), None);
        assert_eq!(e.order(OrderMode::Default), None);
        assert!(e.family_members().unwrap().is_empty());
        assert_eq!(e.convert_order("3").unwrap(), None);
    }
    assert!(EthiopicUcd::new(&db, '፩').unwrap().is_ethiopic_numeral());
}

#[test]
fn test_family_and_order_sets() {
    let db = seeded_db();
    let le = EthiopicUcd::new(&db, 'ለ').unwrap();
    assert_eq!(le.family_members().unwrap(), "ለሉሊላሌልሎሏ".chars().collect::<Vec<_>>());
    assert_eq!(le.family_pattern().unwrap(), "[ለ-ሏ]");

    let order = le.order_set().unwrap();
    assert!(order.contains_char('ሀ'));
    assert!(order.contains_char('ፐ'));
    assert!(!order.contains_char('ሉ'));
}

#[test]
fn test_convert_order() {
    let db = seeded_db();
    let le = EthiopicUcd::new(&db, 'ለ').unwrap();
    assert_eq!(le.convert_order("3").unwrap(), Some('ሊ'));
    assert_eq!(le.convert_order("Salis").unwrap(), Some('ሊ'));
    assert_eq!(le.convert_order("ሳድስ").unwrap(), Some('ል'));
    assert_eq!(le.convert_order("13").unwrap(), None);
    assert!(matches!(le.convert_order("seventeenth"), Err(Error::NotFound(_))));
}

#[test]
fn test_ethiopic_string() {
    let db = seeded_db();
    let s = EthiopicString::new(&db, "ሰላም!").unwrap();
    assert_eq!(s.len(), 4);
    assert_eq!(s.to_string(), "ሰላም!");
    assert_eq!(
        s.family(),
        vec![Some("ሰ".to_string()), Some("ለ".to_string()), Some("መ".to_string()), None]
    );
    assert_eq!(s.convert_order("1", None).unwrap(), "ሰለመ!");
    assert_eq!(s.convert_order("1", Some(2)).unwrap(), "ሰላመ!");
    assert!(!s.is_ethiopic_numeral());
}

#[test]
fn test_ethiopic_string_slice_and_char_conversion() {
    let db = seeded_db();
    let s = EthiopicString::new(&db, "ሰላም!").unwrap();

    let middle = s.slice(1..3);
    assert_eq!(middle.to_string(), "ላም");
    assert_eq!(middle.family(), vec![Some("ለ".to_string()), Some("መ".to_string())]);
    assert_eq!(middle.order(), vec![Some("ራዕብ".to_string()), Some("ሳድስ".to_string())]);
    assert_eq!(s.slice(3..10).characters(), vec!['!']);
    assert!(s.slice(5..9).is_empty());

    assert_eq!(s.convert_order_chars("ግዕዝ", None).unwrap(), vec!['ሰ', 'ለ', 'መ', '!']);
    assert_eq!(s.convert_order_chars("6", Some(0)).unwrap(), vec!['ስ', 'ላ', 'ም', '!']);
}

#[test]
fn test_expand_ranges() {
    assert_eq!(expand_ranges("1-3,7").unwrap(), vec![1, 2, 3, 7]);
    assert_eq!(expand_ranges("7, 3,1-2,2").unwrap(), vec![1, 2, 3, 7]);
    assert_eq!(expand_ranges("5-5").unwrap(), vec![5]);

    for bad in ["", "1,,2", "3-1", "a", "1-b", "-2"] {
        assert!(
            matches!(expand_ranges(bad), Err(Error::InvalidRange { .. })),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_huge_ranges_rejected_before_expansion() {
    assert!(matches!(expand_ranges("1-4000000000"), Err(Error::InvalidRange { .. })));
    assert!(matches!(expand_ranges_within("1-20000000", 1..=14), Err(Error::InvalidRange { .. })));
    assert!(matches!(expand_ranges_within("14-2", 1..=14), Err(Error::InvalidRange { .. })));
    assert_eq!(expand_ranges_within("12-14", 1..=14).unwrap(), vec![12, 13, 14]);

    let db = seeded_db();
    assert!(matches!(syllables_for_orders(&db, "1-4000000000"), Err(Error::InvalidRange { .. })));
    assert!(matches!(syllables_for_families(&db, "4000000000-1"), Err(Error::InvalidRange { .. })));
}

#[test]
fn test_syllables_for_orders_and_families() {
    let db = seeded_db();

    let first = syllables_for_orders(&db, "1").unwrap();
    assert!(first.contains(&'ሀ'));
    assert!(first.contains(&'ለ'));
    assert!(!first.contains(&'ሁ'));
    assert!(first.windows(2).all(|w| w[0] < w[1]));

    let le = syllables_for_families(&db, "2").unwrap();
    assert_eq!(le.len(), 8);
    let two = syllables_for_families(&db, "1-2").unwrap();
    assert_eq!(two.len(), 16);

    assert!(matches!(syllables_for_families(&db, "35"), Err(Error::InvalidRange { .. })));
    assert!(matches!(syllables_for_orders(&db, "0-2"), Err(Error::InvalidRange { .. })));
}

#[test]
fn test_homophones() {
    assert_eq!(homophone_class('ሑ'), Some(&['ሀ', 'ሐ', 'ኀ', 'ኸ'][..]));
    assert_eq!(homophone_class('ለ'), None);
    assert!(are_homophones('ሀ', 'ሐ'));
    assert!(are_homophones('ሠ', 'ሰ'));
    assert!(!are_homophones('ሀ', 'ሑ'));
    assert!(!are_homophones('ሀ', 'ለ'));

    let db = seeded_db();
    assert_eq!(normalise_homophones(&db, "ሐሑ ሠላም ዐ ፀሐይ").unwrap(), "ሀሁ ሰላም አ ጸሀይ");
    // No seventh-order-plus labialised form exists in the canonical family.
    assert_eq!(normalise_homophones(&db, "ኈ").unwrap(), "ኈ");
}
