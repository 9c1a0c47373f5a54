//! UnicodeSet notation parsing and set operations.

use el_data::uset::{property_set, uset_contains, uset_to_list, uset_to_pattern, SetMode};
use el_data::{CharSet, Error};

#[test]
fn test_parse_literals_and_ranges() {
    let set = CharSet::parse("[a-d x]").unwrap();
    assert_eq!(set.to_list(), vec!["a", "b", "c", "d", "x"]);
    assert_eq!(set.len(), 5);
    assert_eq!(set.to_pattern(), "[a-dx]");
}

#[test]
fn test_parse_strings_and_escapes() {
    let set = CharSet::parse(r"[A \x{42} {ch} {ll}]").unwrap();
    assert!(set.contains("A"));
    assert!(set.contains("B"));
    assert!(set.contains("ch"));
    assert!(!set.contains("c"));
    assert_eq!(set.to_list(), vec!["A", "B", "ch", "ll"]);
    assert_eq!(set.to_pattern(), "[AB{ch}{ll}]");
}

#[test]
fn test_escaped_syntax_characters_round_trip() {
    let set = CharSet::parse(r"[\- \[ \] a]").unwrap();
    assert!(set.contains_char('-'));
    assert!(set.contains_char('['));
    let again = CharSet::parse(&set.to_pattern()).unwrap();
    assert_eq!(set, again);
}

#[test]
fn test_negation() {
    let set = CharSet::parse("[^a-z]").unwrap();
    assert!(!set.contains_char('m'));
    assert!(set.contains_char('A'));
    assert!(set.contains_char('\u{10FFFF}'));
}

#[test]
fn test_intersection_and_difference() {
    let both = CharSet::parse("[[a-m]&[h-z]]").unwrap();
    assert_eq!(both.to_pattern(), "[h-m]");

    let minus = CharSet::parse("[[a-z]-[aeiou]]").unwrap();
    assert!(minus.contains_char('b'));
    assert!(!minus.contains_char('e'));
    assert_eq!(minus.len(), 21);
}

#[test]
fn test_property_classes() {
    let ethiopic_letters = CharSet::parse(r"[[\p{Ethiopic}]&[\p{L}]]").unwrap();
    assert!(ethiopic_letters.contains_char('ሀ'));
    assert!(!ethiopic_letters.contains_char('፩'));
    assert!(!ethiopic_letters.contains_char('a'));

    let not_latin = CharSet::parse(r"[\P{Latin}]").unwrap();
    assert!(!not_latin.contains_char('a'));
    assert!(not_latin.contains_char('ሀ'));

    let posix = CharSet::parse("[[:Lu:]]").unwrap();
    assert!(posix.contains_char('Q'));
    assert!(!posix.contains_char('q'));

    let by_key = CharSet::parse(r"[\p{gc=Nd}&\p{sc=Ethi}]").unwrap();
    assert!(by_key.is_empty());
}

#[test]
fn test_property_set_lookup() {
    assert!(property_set("White_Space").unwrap().contains_char(' '));
    assert!(property_set("blk=Basic_Latin").unwrap().contains_char('~'));
    assert!(property_set("ascii").unwrap().contains_char('\u{7F}'));
    assert!(matches!(property_set("Klingon_Runes"), Err(Error::UnknownProperty(_))));
}

#[test]
fn test_syntax_errors_report_position() {
    match CharSet::parse("[a-") {
        Err(Error::SetSyntax { position, .. }) => assert!(position >= 2),
        other => panic!("expected syntax error, got {:?}", other),
    }
    assert!(CharSet::parse("[z-a]").is_err());
    assert!(CharSet::parse("abc").is_err());
    assert!(CharSet::parse("[a] trailing").is_err());
}

#[test]
fn test_containment_modes() {
    let set = "[a-c {xy}]";
    assert!(uset_contains("abc", set, SetMode::All).unwrap());
    assert!(!uset_contains("abd", set, SetMode::All).unwrap());
    assert!(uset_contains("zzb", set, SetMode::Some).unwrap());
    assert!(uset_contains("zz", set, SetMode::None).unwrap());
    assert!(uset_contains("xy", set, SetMode::Contains).unwrap());
    assert!(!uset_contains("ab", set, SetMode::Contains).unwrap());
}

#[test]
fn test_helpers() {
    assert_eq!(uset_to_list("[c a b]").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(uset_to_pattern("[abcdef]").unwrap(), "[a-f]");
    assert_eq!(uset_to_pattern("[ab]").unwrap(), "[ab]");
}

#[test]
fn test_len_excludes_surrogates() {
    let set = CharSet::from_ranges([0xD7FF..=0xE000]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.chars().collect::<Vec<_>>(), vec!['\u{D7FF}', '\u{E000}']);
    assert_eq!(CharSet::all().complement(), CharSet::new());
}

#[test]
fn test_containment_of_empty_string_and_member_strings() {
    assert!(uset_contains("", "[a-z]", SetMode::All).unwrap());
    assert!(uset_contains("", "[a-z]", SetMode::None).unwrap());
    assert!(!uset_contains("", "[a-z]", SetMode::Some).unwrap());

    assert!(uset_contains("chat", "[{ch}]", SetMode::Some).unwrap());
    assert!(!uset_contains("chat", "[{ch}]", SetMode::None).unwrap());
    assert!(uset_contains("chat", "[{ch} a t]", SetMode::All).unwrap());
    assert!(!uset_contains("chat", "[{ch} a]", SetMode::All).unwrap());
    assert!(uset_contains("llama", "[{ll} a m]", SetMode::All).unwrap());
}

#[test]
fn test_leading_and_trailing_hyphen_are_literal() {
    let leading = CharSet::parse("[-a]").expect("Failed to parse leading hyphen");
    assert!(leading.contains_char('-'));
    assert!(leading.contains_char('a'));
    assert_eq!(leading.len(), 2);

    let trailing = CharSet::parse("[a-]").expect("Failed to parse trailing hyphen");
    assert_eq!(trailing, leading);

    let negated = CharSet::parse("[^-a]").unwrap();
    assert!(!negated.contains_char('-'));
    assert!(negated.contains_char('b'));

    assert!(CharSet::parse("[a-z-]").unwrap().contains_char('-'));
}

#[test]
fn test_insert_range_merges_in_place() {
    let mut set = CharSet::new();
    set.insert_range(0x70, 0x7A);
    set.insert_range(0x41, 0x45);
    set.insert_range(0x61, 0x63);
    assert_eq!(set.ranges(), &[(0x41, 0x45), (0x61, 0x63), (0x70, 0x7A)]);

    set.insert_range(0x64, 0x6F);
    assert_eq!(set.ranges(), &[(0x41, 0x45), (0x61, 0x7A)]);

    set.insert_range(0x40, 0x80);
    assert_eq!(set.ranges(), &[(0x40, 0x80)]);

    set.insert_char('\u{10FFFF}');
    assert_eq!(set.len(), 0x41 + 1);
}
