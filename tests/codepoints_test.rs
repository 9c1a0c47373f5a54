//! Codepoint, code unit and byte conversions.

use el_data::codepoints::{
    chars_matching, chars_to_codepoints, codepoints_to_chars, combine_surrogates,
    count_chars_matching, encode_text, get_bytes, get_code_units, hexdump, html_entity_name,
    parse_codepoint_input, surrogate_pair, CodeUnits, CodeValue, CodepointForm, EncodingForm, Radix,
};
use el_data::Error;

fn hex(values: &[&str]) -> Vec<CodeValue> {
    values.iter().map(|&v| CodeValue::from(v)).collect()
}

#[test]
fn test_surrogate_decomposition_and_recombination() {
    assert_eq!(surrogate_pair('😊'), Some((0xD83D, 0xDE0A)));
    assert_eq!(surrogate_pair('\u{10000}'), Some((0xD800, 0xDC00)));
    assert_eq!(surrogate_pair('\u{10FFFF}'), Some((0xDBFF, 0xDFFF)));
    assert_eq!(surrogate_pair('A'), None);

    assert_eq!(combine_surrogates(0xD83D, 0xDE0A).unwrap(), '😊');
    assert!(combine_surrogates(0xDE0A, 0xD83D).is_err());
    assert!(combine_surrogates(0x0041, 0xDC00).is_err());
}

#[test]
fn test_chars_to_codepoints() {
    assert_eq!(
        chars_to_codepoints("a😊", Radix::Hex, CodepointForm::Utf32),
        hex(&["0061", "1F60A"])
    );
    assert_eq!(
        chars_to_codepoints("a😊", Radix::Hex, CodepointForm::Utf16),
        hex(&["0061", "D83D", "DE0A"])
    );
    assert_eq!(
        chars_to_codepoints("a😊", Radix::Decimal, CodepointForm::Utf32),
        vec![CodeValue::Decimal(97), CodeValue::Decimal(128522)]
    );
}

#[test]
fn test_codepoints_to_chars() {
    assert_eq!(codepoints_to_chars(&hex(&["0061", "1F60A"]), CodepointForm::Utf32).unwrap(), "a😊");
    assert_eq!(codepoints_to_chars(&hex(&["D83D", "DE0A"]), CodepointForm::Utf16).unwrap(), "😊");
    assert_eq!(codepoints_to_chars(&hex(&["U+1200", "0x1201"]), CodepointForm::Utf32).unwrap(), "ሀሁ");
    assert_eq!(
        codepoints_to_chars(&[CodeValue::Decimal(4608)], CodepointForm::Utf32).unwrap(),
        "ሀ"
    );

    assert!(codepoints_to_chars(&hex(&["D83D"]), CodepointForm::Utf16).is_err());
    assert!(codepoints_to_chars(&hex(&["D83D", "0041"]), CodepointForm::Utf16).is_err());
    assert!(codepoints_to_chars(&hex(&["110000"]), CodepointForm::Utf32).is_err());
    assert!(codepoints_to_chars(&hex(&["zz"]), CodepointForm::Utf32).is_err());
}

#[test]
fn test_code_units() {
    let flat = get_code_units("é😊", EncodingForm::Utf8, Radix::Hex, false);
    assert_eq!(flat, CodeUnits::Flat(hex(&["C3", "A9", "F0", "9F", "98", "8A"])));

    let per_char = get_code_units("é😊", EncodingForm::Utf16, Radix::Hex, true);
    assert_eq!(
        per_char,
        CodeUnits::PerChar(vec![hex(&["00E9"]), hex(&["D83D", "DE0A"])])
    );

    let utf32 = get_code_units("é", EncodingForm::Utf32, Radix::Hex, false);
    assert_eq!(utf32, CodeUnits::Flat(hex(&["000000E9"])));

    assert_eq!(EncodingForm::from_label("UTF_16LE"), EncodingForm::Utf16);
    assert_eq!(EncodingForm::from_label("utf8"), EncodingForm::Utf8);
}

#[test]
fn test_get_bytes() {
    assert_eq!(get_bytes("aé", "utf-8").unwrap(), vec!["61", "C3 A9"]);
    assert_eq!(get_bytes("é", "utf-16le").unwrap(), vec!["E9 00"]);
    assert_eq!(get_bytes("é", "utf-16-be").unwrap(), vec!["00 E9"]);
    assert_eq!(get_bytes("€", "windows-1252").unwrap(), vec!["80"]);
    assert_eq!(get_bytes("ሀ", "windows-1252").unwrap(), vec![""]);
    assert!(matches!(get_bytes("a", "no-such-encoding"), Err(Error::UnknownEncoding(_))));
}

#[test]
fn test_latin1_is_not_windows_1252() {
    assert_eq!(get_bytes("é€", "iso-8859-1").unwrap(), vec!["E9", ""]);
    assert_eq!(get_bytes("€", "latin-1").unwrap(), vec![""]);
    assert_eq!(get_bytes("\u{80}ÿ", "latin1").unwrap(), vec!["80", "FF"]);
    assert_eq!(encode_text("aé€", "ISO_8859-1").unwrap(), vec![0x61, 0xE9]);
}

#[test]
fn test_encode_and_hexdump() {
    let bytes = encode_text("Hello, ሀ", "utf-8").unwrap();
    assert_eq!(bytes.len(), 10);
    let dump = hexdump(&bytes);
    let mut lines = dump.lines();
    let first = format!("00000000  48 65 6c 6c 6f 2c 20 e1  88 80{}|Hello, ...|", " ".repeat(20));
    assert_eq!(lines.next(), Some(first.as_str()));
    assert_eq!(lines.next(), Some("0000000a"));
}

#[test]
fn test_parse_codepoint_input() {
    assert_eq!(parse_codepoint_input("U+1200").unwrap(), 'ሀ');
    assert_eq!(parse_codepoint_input("0x41").unwrap(), 'A');
    assert_eq!(parse_codepoint_input("0b1000001").unwrap(), 'A');
    assert_eq!(parse_codepoint_input("0o101").unwrap(), 'A');
    assert_eq!(parse_codepoint_input("ሀ").unwrap(), 'ሀ');
    assert!(matches!(parse_codepoint_input("ab"), Err(Error::InvalidCharLength(2))));
    assert!(parse_codepoint_input("0xD800").is_err());
}

#[test]
fn test_html_entities() {
    assert_eq!(html_entity_name(0x26), Some("amp"));
    assert_eq!(html_entity_name(0xE9), Some("eacute"));
    assert_eq!(html_entity_name(0x1200), None);
}

#[test]
fn test_codespace_scans() {
    assert_eq!(count_chars_matching(|c| c.is_ascii_uppercase()), 26);
    let digits = chars_matching(|c| c.is_ascii_digit());
    assert_eq!(digits.first(), Some(&'0'));
    assert_eq!(digits.len(), 10);
}
