//! Exemplar parsing from a local LDML file and locale URL construction.

use std::fs::File;

use el_data::cldr::{
    locale_url, normalise_locale, parse_exemplars, Cldr, ExemplarMode, ExemplarSource,
    MainExemplars,
};
use el_data::{Error, Settings};

fn fixture() -> File {
    File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/am.xml"))
        .expect("Failed to open LDML fixture")
}

#[test]
fn test_parse_exemplars_keeps_character_sets_only() {
    let exemplars = parse_exemplars(fixture()).expect("Failed to parse LDML");
    let kinds: Vec<&str> = exemplars.keys().map(String::as_str).collect();
    assert_eq!(kinds, vec!["auxiliary", "main"]);

    let main = &exemplars["main"];
    assert_eq!(main.len(), 23);
    assert!(main.contains_char('ለ'));
    assert!(!main.contains_char('ሇ'));
    assert!(!main.contains_char('x'));
    assert_eq!(exemplars["auxiliary"].len(), 16);
}

#[test]
fn test_cldr_from_ldml_main_exemplars() {
    let cldr = Cldr::from_ldml("am", ExemplarSource::Cldr, fixture()).unwrap();
    assert_eq!(cldr.locale_id(), "am");
    assert_eq!(cldr.source(), ExemplarSource::Cldr);

    assert_eq!(
        cldr.main_exemplars(ExemplarMode::Pattern),
        Some(MainExemplars::Pattern("[ሀ-ሆለ-ሏመ-ሟ]".to_string()))
    );
    match cldr.main_exemplars(ExemplarMode::List) {
        Some(MainExemplars::List(list)) => {
            assert_eq!(list.len(), 23);
            assert_eq!(list.first().map(String::as_str), Some("ሀ"));
        }
        other => panic!("expected a list, got {:?}", other),
    }
    assert!(matches!(cldr.main_exemplars(ExemplarMode::Set), Some(MainExemplars::Set(_))));
}

#[test]
fn test_missing_main_exemplars() {
    let ldml = r#"<ldml><characters><exemplarCharacters type="index">[A-Z]</exemplarCharacters></characters></ldml>"#;
    let cldr = Cldr::from_ldml("en", ExemplarSource::Cldr, ldml.as_bytes()).unwrap();
    assert_eq!(cldr.exemplars().map(|e| e.len()), Some(1));
    assert_eq!(cldr.main_exemplars(ExemplarMode::Pattern), None);
}

#[test]
fn test_malformed_xml_is_an_error() {
    let result = parse_exemplars("<ldml><characters>".as_bytes());
    assert!(matches!(result, Err(Error::Xml(_))));
}

#[test]
fn test_normalise_locale() {
    assert_eq!(normalise_locale("am-ET").unwrap(), "am_ET");
    assert_eq!(normalise_locale("gez_Ethi").unwrap(), "gez_Ethi");
    assert!(matches!(normalise_locale("../etc/passwd"), Err(Error::UnknownLocale(_))));
    assert!(normalise_locale("").is_err());
    assert!(normalise_locale("am ET").is_err());
}

#[test]
fn test_locale_url() {
    let settings = Settings::default();
    assert_eq!(
        locale_url(&settings, "am-ET", ExemplarSource::Cldr).unwrap(),
        "https://raw.githubusercontent.com/unicode-org/cldr/main/common/main/am_ET.xml"
    );
    assert_eq!(
        locale_url(&settings, "tig", ExemplarSource::Sldr).unwrap(),
        "https://raw.githubusercontent.com/silnrsi/sldr/refs/heads/master/sldr/t/tig.xml"
    );

    let local = Settings {
        cldr_url: "http://localhost:8000/main/".to_string(),
        ..Settings::default()
    };
    assert_eq!(
        locale_url(&local, "ti", ExemplarSource::Cldr).unwrap(),
        "http://localhost:8000/main/ti.xml"
    );
}
