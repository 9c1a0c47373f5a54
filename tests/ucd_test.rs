//! Character property lookups, block table and the `Ucd` facade.

use el_data::blocks::{block_by_name, block_of, BLOCKS, NO_BLOCK};
use el_data::property::{get_property_str, PropertyKind};
use el_data::{get_property, Error, NameChoice, Property, PropertyValue, Ucd, UcdString};

#[test]
fn test_property_lookup_by_alias() {
    assert_eq!(Property::from_name("gc").unwrap(), Property::GeneralCategory);
    assert_eq!(Property::from_name("General Category").unwrap(), Property::GeneralCategory);
    assert_eq!(Property::from_name("white-space").unwrap(), Property::WhiteSpace);
    assert_eq!(Property::from_name("WSpace").unwrap(), Property::WhiteSpace);
    assert!(matches!(Property::from_name("no_such_property"), Err(Error::UnknownProperty(_))));
}

#[test]
fn test_binary_and_enumerated_classification() {
    assert_eq!(Property::Alphabetic.kind(), PropertyKind::Binary);
    assert_eq!(Property::Script.kind(), PropertyKind::Enumerated);
    assert!(Property::BINARY.contains(&Property::BasicEmoji));
    assert!(!Property::BINARY.contains(&Property::Block));
    assert_eq!(
        Property::ALL.len(),
        Property::BINARY.len() + Property::ENUMERATED.len()
    );
}

#[test]
fn test_binary_properties() {
    assert_eq!(get_property(' ', Property::WhiteSpace, NameChoice::Long), PropertyValue::Bool(true));
    assert_eq!(get_property('a', Property::WhiteSpace, NameChoice::Long), PropertyValue::Bool(false));
    assert_eq!(get_property('a', Property::Alphabetic, NameChoice::Long), PropertyValue::Bool(true));
    assert_eq!(get_property('\u{4E00}', Property::UnifiedIdeograph, NameChoice::Long), PropertyValue::Bool(true));
    assert_eq!(get_property('😀', Property::BasicEmoji, NameChoice::Long), PropertyValue::Bool(true));
}

#[test]
fn test_enumerated_properties_long_and_short() {
    let script = |c, choice| get_property(c, Property::Script, choice);
    assert_eq!(script('ሀ', NameChoice::Long), PropertyValue::Name("Ethiopic".into()));
    assert_eq!(script('ሀ', NameChoice::Short), PropertyValue::Name("Ethi".into()));

    let gc = |c, choice| get_property(c, Property::GeneralCategory, choice);
    assert_eq!(gc('A', NameChoice::Long), PropertyValue::Name("Uppercase_Letter".into()));
    assert_eq!(gc('A', NameChoice::Short), PropertyValue::Name("Lu".into()));

    let bpt = |c, choice| get_property(c, Property::BidiPairedBracketType, choice);
    assert_eq!(bpt('(', NameChoice::Long), PropertyValue::Name("Open".into()));
    assert_eq!(bpt('(', NameChoice::Short), PropertyValue::Name("o".into()));
    assert_eq!(bpt(']', NameChoice::Long), PropertyValue::Name("Close".into()));
    assert_eq!(bpt(')', NameChoice::Short), PropertyValue::Name("c".into()));
    assert_eq!(bpt('a', NameChoice::Long), PropertyValue::Name("None".into()));
}

#[test]
fn test_property_requires_single_character() {
    let err = get_property_str("ab", Property::Script, NameChoice::Long).unwrap_err();
    assert!(matches!(err, Error::InvalidCharLength(2)));
    assert!(matches!(
        get_property_str("", Property::Script, NameChoice::Long),
        Err(Error::InvalidCharLength(0))
    ));
}

#[test]
fn test_block_table_sorted_and_disjoint() {
    assert_eq!(BLOCKS.len(), 338);
    for pair in BLOCKS.windows(2) {
        assert!(pair[0].start <= pair[0].end);
        assert!(pair[0].end < pair[1].start, "{} overlaps {}", pair[0].name, pair[1].name);
    }
}

#[test]
fn test_block_lookup() {
    assert_eq!(block_of('A').map(|b| b.code()), Some("Basic_Latin".to_string()));
    assert_eq!(block_of('ሀ').map(|b| b.name), Some("Ethiopic"));
    assert!(block_of('\u{E0080}').is_none());
    assert_eq!(
        get_property('\u{E0080}', Property::Block, NameChoice::Long),
        PropertyValue::Name(NO_BLOCK.into())
    );

    for name in ["basic_latin", "Basic Latin", "basic-latin"] {
        assert_eq!(block_by_name(name).map(|b| b.start), Some(0), "{}", name);
    }
    assert_eq!(block_by_name("Latin Extended-A").map(|b| b.code()), Some("Latin_Extended-A".into()));
}

#[test]
fn test_ucd_identity() {
    let a = Ucd::new('A');
    assert_eq!(a.character(), 'A');
    assert_eq!(a.codepoint(), "0041");
    assert_eq!(a.codepoint_decimal(), 65);
    assert_eq!(a.name(), "LATIN CAPITAL LETTER A");
    assert_eq!(Ucd::new('\t').name(), "<control-0009>");
    assert!(Ucd::parse("AB").is_err());
}

#[test]
fn test_ucd_enumerated_accessors() {
    let ha = Ucd::new('ሀ');
    assert_eq!(ha.script(), "Ethiopic");
    assert_eq!(ha.script_code(), "Ethi");
    assert_eq!(ha.block(), "Ethiopic");
    assert_eq!(ha.general_category_code(), "Lo");
    assert!(ha.is_script("Ethi"));

    let acute = Ucd::new('\u{0301}');
    assert_eq!(acute.combining_class(), 230);
    assert_eq!(acute.general_category_code(), "Mn");
}

#[test]
fn test_ucd_bidi_and_mirroring() {
    let paren = Ucd::new('(');
    assert!(paren.is_mirrored());
    assert_eq!(paren.mirror(), ')');
    assert_eq!(paren.bidi_paired_bracket(), Some(')'));
    assert_eq!(Ucd::new('a').mirror(), 'a');
    assert_eq!(Ucd::new('a').bidi_class_code(), "L");
    assert_eq!(Ucd::new('\u{05D0}').bidi_class_code(), "R");
}

#[test]
fn test_ucd_case_mappings() {
    let sharp_s = Ucd::new('ß');
    assert_eq!(sharp_s.uppercase_mapping(), "SS");
    assert_eq!(sharp_s.simple_uppercase_mapping(), 'ß');
    assert_eq!(sharp_s.case_folding(), "ss");
    assert_eq!(Ucd::new('A').lowercase_mapping(), "a");
    assert_eq!(Ucd::new('a').simple_titlecase_mapping(), 'A');
}

#[test]
fn test_ucd_normalization_and_digits() {
    assert!(Ucd::new('é').is_nfc());
    assert!(!Ucd::new('é').is_nfd());
    assert!(!Ucd::new('\u{FB01}').is_nfkc());
    assert_eq!(Ucd::new('7').digit_value(), Some(7));
    assert_eq!(Ucd::new('\u{0663}').digit_value(), Some(3));
    assert_eq!(Ucd::new('x').digit_value(), None);
}

#[test]
fn test_lead_and_trail_combining_class() {
    let e_acute = Ucd::new('é');
    assert_eq!(e_acute.canonical_combining_class(), "Not_Reordered");
    assert_eq!(e_acute.lead_canonical_combining_class(), "Not_Reordered");
    assert_eq!(e_acute.trail_canonical_combining_class(), "Above");
    assert_eq!(e_acute.trail_canonical_combining_class_code(), "A");

    let dialytika_tonos = Ucd::new('\u{0344}');
    assert_eq!(dialytika_tonos.lead_canonical_combining_class(), "Above");
    assert_eq!(dialytika_tonos.trail_canonical_combining_class(), "Above");

    assert_eq!(Ucd::new('a').lead_canonical_combining_class_code(), "NR");
    assert_eq!(Property::from_name("tccc").unwrap(), Property::TrailCanonicalCombiningClass);
    assert_eq!(
        get_property('é', Property::LeadCanonicalCombiningClass, NameChoice::Short),
        PropertyValue::Name("NR".into())
    );
}

#[test]
fn test_java_and_unicode_predicates() {
    assert!(Ucd::new('$').is_java_id_start());
    assert!(Ucd::new('_').is_java_id_start());
    assert!(!Ucd::new('1').is_java_id_start());
    assert!(Ucd::new('1').is_java_id_part());
    assert!(Ucd::new('\u{0301}').is_java_id_part());
    assert!(Ucd::new('\u{00AD}').is_java_id_part());
    assert!(!Ucd::new('-').is_java_id_part());

    assert!(Ucd::new('\u{00A0}').is_java_space_char());
    assert!(!Ucd::new('\t').is_java_space_char());
    assert!(Ucd::new('\t').is_u_whitespace());

    assert!(Ucd::new('\u{0345}').is_u_alphabetic());
    assert!(Ucd::new('ª').is_u_lowercase());
    assert!(!Ucd::new('ª').is_lower());
    assert!(Ucd::new('\u{24B6}').is_u_uppercase());

    assert_eq!(Ucd::new('A').char_type(), "Uppercase_Letter");
    assert_eq!(Ucd::new('A').char_type_code(), "Lu");
}

#[test]
fn test_ucd_entities() {
    let e = Ucd::new('é').entities();
    assert_eq!(e.decimal, 233);
    assert_eq!(e.html_entity, "&eacute;");
    assert_eq!(e.hex_ncr, "&#x00E9;");
    assert_eq!(Ucd::new('ሀ').entities().html_entity, "-");
}

#[test]
fn test_ucd_in_set() {
    let c = Ucd::new('ሀ');
    assert!(c.in_set(r"[\p{Ethiopic}]").unwrap());
    assert!(!c.in_set(r"[\p{Latin}]").unwrap());
}

#[test]
fn test_ucd_string() {
    let s = UcdString::new("aሀ😀");
    assert_eq!(s.len(), 3);
    assert_eq!(s.to_string(), "aሀ😀");
    assert_eq!(s.codepoints(), vec!["0061", "1200", "1F600"]);
    assert_eq!(s.scripts(), vec!["Latin", "Ethiopic", "Common"]);
    assert_eq!(s.slice(1..2).characters(), vec!['ሀ']);

    let data = s.data();
    assert_eq!(data[0].general_category, "Ll");
    let json = serde_json::to_string(&data[1]).expect("serialise CharData");
    assert!(json.contains("\"codepoint\":\"1200\""));
}
