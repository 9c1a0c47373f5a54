//! Per-character and per-string access to Unicode Character Database
//! properties.

use std::fmt;
use std::ops::Range;

use icu::casemap::titlecase::TitlecaseOptions;
use icu::casemap::CaseMapper;
use icu::locid::LanguageIdentifier;
use icu::normalizer::{ComposingNormalizer, DecomposingNormalizer};
use icu::properties::bidi_data::{self, BidiPairingProperties};
use icu::properties::script::script_with_extensions;
use icu::properties::{maps, sets, GeneralCategory, GeneralCategoryGroup, Script};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::codepoints::html_entity_name;
use crate::constants::{self, ASCII_MAX};
use crate::error::Result;
use crate::property::{get_property, single_char, NameChoice, Property, PropertyValue};
use crate::uset::CharSet;

/// Summary row used by the character property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharData {
    pub character: String,
    pub codepoint: String,
    pub name: String,
    pub script: String,
    pub block: String,
    pub general_category: String,
    pub bidi_class: String,
    pub combining_class: u8,
}

/// Numeric and markup representations of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entities {
    pub character: String,
    pub hexadecimal: String,
    pub decimal: u32,
    pub octal: String,
    pub binary: String,
    pub html_entity: String,
    pub decimal_ncr: String,
    pub hex_ncr: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ucd {
    ch: char,
}

static CASE_MAPPER: Lazy<CaseMapper> = Lazy::new(CaseMapper::new);
static NFC: Lazy<ComposingNormalizer> = Lazy::new(ComposingNormalizer::new_nfc);
static NFKC: Lazy<ComposingNormalizer> = Lazy::new(ComposingNormalizer::new_nfkc);
pub(crate) static NFD: Lazy<DecomposingNormalizer> = Lazy::new(DecomposingNormalizer::new_nfd);
static NFKD: Lazy<DecomposingNormalizer> = Lazy::new(DecomposingNormalizer::new_nfkd);

macro_rules! binary_accessors {
    ($($method:ident => $property:ident,)*) => {
        impl Ucd {
            $(
                pub fn $method(&self) -> bool {
                    self.flag(Property::$property)
                }
            )*
        }
    };
}

macro_rules! enumerated_accessors {
    ($($long:ident, $short:ident => $property:ident,)*) => {
        impl Ucd {
            $(
                pub fn $long(&self) -> String {
                    self.property_name(Property::$property, NameChoice::Long)
                }

                pub fn $short(&self) -> String {
                    self.property_name(Property::$property, NameChoice::Short)
                }
            )*
        }
    };
}

binary_accessors! {
    alphabetic => Alphabetic,
    ascii_hex_digit => AsciiHexDigit,
    basic_emoji => BasicEmoji,
    bidi_control => BidiControl,
    bidi_mirrored => BidiMirrored,
    case_ignorable => CaseIgnorable,
    case_sensitive => CaseSensitive,
    cased => Cased,
    changes_when_casefolded => ChangesWhenCasefolded,
    changes_when_casemapped => ChangesWhenCasemapped,
    changes_when_lowercased => ChangesWhenLowercased,
    changes_when_nfkc_casefolded => ChangesWhenNfkcCasefolded,
    changes_when_titlecased => ChangesWhenTitlecased,
    changes_when_uppercased => ChangesWhenUppercased,
    dash => Dash,
    default_ignorable_code_point => DefaultIgnorableCodePoint,
    deprecated => Deprecated,
    diacritic => Diacritic,
    emoji => Emoji,
    emoji_component => EmojiComponent,
    emoji_modifier => EmojiModifier,
    emoji_modifier_base => EmojiModifierBase,
    emoji_presentation => EmojiPresentation,
    extended_pictographic => ExtendedPictographic,
    extender => Extender,
    full_composition_exclusion => FullCompositionExclusion,
    grapheme_base => GraphemeBase,
    grapheme_extend => GraphemeExtend,
    grapheme_link => GraphemeLink,
    hex_digit => HexDigit,
    hyphen => Hyphen,
    id_continue => IdContinue,
    id_start => IdStart,
    ideographic => Ideographic,
    ids_binary_operator => IdsBinaryOperator,
    ids_trinary_operator => IdsTrinaryOperator,
    join_control => JoinControl,
    logical_order_exception => LogicalOrderException,
    lowercase => Lowercase,
    math => Math,
    nfc_inert => NfcInert,
    nfd_inert => NfdInert,
    nfkc_inert => NfkcInert,
    nfkd_inert => NfkdInert,
    noncharacter_code_point => NoncharacterCodePoint,
    pattern_syntax => PatternSyntax,
    pattern_white_space => PatternWhiteSpace,
    posix_alnum => PosixAlnum,
    posix_blank => PosixBlank,
    posix_graph => PosixGraph,
    posix_print => PosixPrint,
    posix_xdigit => PosixXdigit,
    prepended_concatenation_mark => PrependedConcatenationMark,
    quotation_mark => QuotationMark,
    radical => Radical,
    regional_indicator => RegionalIndicator,
    segment_starter => SegmentStarter,
    sentence_terminal => SentenceTerminal,
    soft_dotted => SoftDotted,
    terminal_punctuation => TerminalPunctuation,
    unified_ideograph => UnifiedIdeograph,
    uppercase => Uppercase,
    variation_selector => VariationSelector,
    white_space => WhiteSpace,
    xid_continue => XidContinue,
    xid_start => XidStart,
}

enumerated_accessors! {
    bidi_class, bidi_class_code => BidiClass,
    bidi_paired_bracket_type, bidi_paired_bracket_type_code => BidiPairedBracketType,
    block, block_code => Block,
    canonical_combining_class, canonical_combining_class_code => CanonicalCombiningClass,
    east_asian_width, east_asian_width_code => EastAsianWidth,
    general_category, general_category_code => GeneralCategory,
    grapheme_cluster_break, grapheme_cluster_break_code => GraphemeClusterBreak,
    hangul_syllable_type, hangul_syllable_type_code => HangulSyllableType,
    indic_syllabic_category, indic_syllabic_category_code => IndicSyllabicCategory,
    joining_type, joining_type_code => JoiningType,
    lead_canonical_combining_class, lead_canonical_combining_class_code => LeadCanonicalCombiningClass,
    line_break, line_break_code => LineBreak,
    script, script_code => Script,
    sentence_break, sentence_break_code => SentenceBreak,
    trail_canonical_combining_class, trail_canonical_combining_class_code => TrailCanonicalCombiningClass,
    word_break, word_break_code => WordBreak,
}

impl Ucd {
    pub fn new(ch: char) -> Self {
        Ucd { ch }
    }

    /// Fails unless `text` is exactly one character.
    pub fn parse(text: &str) -> Result<Self> {
        single_char(text).map(Ucd::new)
    }

    pub fn property(&self, property: Property) -> PropertyValue {
        get_property(self.ch, property, NameChoice::Long)
    }

    pub fn property_code(&self, property: Property) -> PropertyValue {
        get_property(self.ch, property, NameChoice::Short)
    }

    fn flag(&self, property: Property) -> bool {
        self.property(property).as_bool().unwrap_or(false)
    }

    fn property_name(&self, property: Property, choice: NameChoice) -> String {
        match get_property(self.ch, property, choice) {
            PropertyValue::Name(name) => name,
            PropertyValue::Bool(b) => b.to_string(),
        }
    }

    fn gc(&self) -> GeneralCategory {
        maps::general_category().get(self.ch)
    }

    fn in_group(&self, group: GeneralCategoryGroup) -> bool {
        group.contains(self.gc())
    }

    // identity

    pub fn character(&self) -> char {
        self.ch
    }

    pub fn codepoint(&self) -> String {
        format!("{:04X}", self.ch as u32)
    }

    pub fn codepoint_decimal(&self) -> u32 {
        self.ch as u32
    }

    /// Unicode character name, or a code point label such as
    /// `<control-0009>` for characters without one.
    pub fn name(&self) -> String {
        if let Some(name) = unicode_names2::name(self.ch) {
            return name.to_string();
        }
        let cp = self.ch as u32;
        let kind = match self.gc() {
            GeneralCategory::Control => "control",
            GeneralCategory::PrivateUse => "private-use",
            GeneralCategory::Surrogate => "surrogate",
            _ if constants::is_noncharacter(cp) => "noncharacter",
            _ => "reserved",
        };
        format!("<{}-{:04X}>", kind, cp)
    }

    pub fn script_extensions(&self) -> Vec<String> {
        self.script_extension_values()
            .into_iter()
            .filter_map(|sc| Script::enum_to_long_name_mapper().get(sc).map(str::to_string))
            .collect()
    }

    pub fn script_extensions_codes(&self) -> Vec<String> {
        self.script_extension_values()
            .into_iter()
            .filter_map(|sc| Script::enum_to_short_name_mapper().get(sc).map(|s| s.to_string()))
            .collect()
    }

    fn script_extension_values(&self) -> Vec<Script> {
        script_with_extensions()
            .get_script_extensions_val(self.ch as u32)
            .iter()
            .collect()
    }

    /// Matches the script's long name (`Ethiopic`) or ISO 15924 code
    /// (`Ethi`), ignoring case.
    pub fn is_script(&self, name: &str) -> bool {
        self.script().eq_ignore_ascii_case(name) || self.script_code().eq_ignore_ascii_case(name)
    }

    // numeric

    pub fn combining_class(&self) -> u8 {
        maps::canonical_combining_class().get(self.ch).0
    }

    /// Decimal digit value for characters with General_Category=Nd.
    pub fn digit_value(&self) -> Option<u32> {
        if self.gc() != GeneralCategory::DecimalNumber {
            return None;
        }
        let cp = self.ch as u32;
        maps::general_category()
            .iter_ranges_for_value(GeneralCategory::DecimalNumber)
            .find(|r| r.contains(&cp))
            .map(|r| (cp - r.start()) % 10)
    }

    // bidi

    pub fn bidi_mirroring_glyph(&self) -> Option<char> {
        bidi_data::bidi_auxiliary_properties()
            .get32_mirroring_props(self.ch as u32)
            .mirroring_glyph
    }

    pub fn bidi_paired_bracket(&self) -> Option<char> {
        match bidi_data::bidi_auxiliary_properties().get32_pairing_props(self.ch as u32) {
            BidiPairingProperties::Open(c) | BidiPairingProperties::Close(c) => Some(c),
            _ => None,
        }
    }

    /// Mirroring glyph, or the character itself.
    pub fn mirror(&self) -> char {
        self.bidi_mirroring_glyph().unwrap_or(self.ch)
    }

    pub fn direction(&self) -> String {
        self.bidi_class()
    }

    pub fn direction_code(&self) -> String {
        self.bidi_class_code()
    }

    // case

    pub fn uppercase_mapping(&self) -> String {
        CASE_MAPPER.uppercase_to_string(&self.to_string(), &LanguageIdentifier::UND)
    }

    pub fn lowercase_mapping(&self) -> String {
        CASE_MAPPER.lowercase_to_string(&self.to_string(), &LanguageIdentifier::UND)
    }

    pub fn titlecase_mapping(&self) -> String {
        CASE_MAPPER.titlecase_segment_with_only_case_data_to_string(
            &self.to_string(),
            &LanguageIdentifier::UND,
            TitlecaseOptions::default(),
        )
    }

    pub fn case_folding(&self) -> String {
        CASE_MAPPER.fold_string(&self.to_string())
    }

    pub fn simple_uppercase_mapping(&self) -> char {
        CASE_MAPPER.simple_uppercase(self.ch)
    }

    pub fn simple_lowercase_mapping(&self) -> char {
        CASE_MAPPER.simple_lowercase(self.ch)
    }

    pub fn simple_titlecase_mapping(&self) -> char {
        CASE_MAPPER.simple_titlecase(self.ch)
    }

    pub fn simple_case_folding(&self) -> char {
        CASE_MAPPER.simple_fold(self.ch)
    }

    /// NFKC_Casefold mapping, composed as NFKC(fold(NFKC(c))) with
    /// default ignorable code points removed.
    pub fn nfkc_casefold(&self) -> String {
        let folded = CASE_MAPPER.fold_string(&NFKC.normalize(&self.to_string()));
        let ignorable = sets::default_ignorable_code_point();
        let stripped: String = folded.chars().filter(|&c| !ignorable.contains(c)).collect();
        NFKC.normalize(&stripped)
    }

    // normalization

    pub fn is_nfc(&self) -> bool {
        NFC.is_normalized(&self.to_string())
    }

    pub fn is_nfd(&self) -> bool {
        NFD.is_normalized(&self.to_string())
    }

    pub fn is_nfkc(&self) -> bool {
        NFKC.is_normalized(&self.to_string())
    }

    pub fn is_nfkd(&self) -> bool {
        NFKD.is_normalized(&self.to_string())
    }

    /// Members of `set` whose canonical decomposition contains this
    /// character.
    pub fn nfd_contains(&self, set: &CharSet) -> Vec<String> {
        set.iter()
            .filter(|item| NFD.normalize(item).contains(self.ch))
            .collect()
    }

    pub fn nfkd_contains(&self, set: &CharSet) -> Vec<String> {
        set.iter()
            .filter(|item| NFKD.normalize(item).contains(self.ch))
            .collect()
    }

    // POSIX and Java style predicates

    pub fn is_alnum(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Letter) || self.gc() == GeneralCategory::DecimalNumber
    }

    pub fn is_alpha(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Letter)
    }

    pub fn is_ascii(&self) -> bool {
        (self.ch as u32) <= ASCII_MAX
    }

    pub fn is_base(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Letter)
            || self.in_group(GeneralCategoryGroup::Number)
            || self.in_group(GeneralCategoryGroup::Mark)
    }

    pub fn is_blank(&self) -> bool {
        sets::blank().contains(self.ch)
    }

    pub fn is_cased(&self) -> bool {
        self.cased()
    }

    pub fn is_cntrl(&self) -> bool {
        matches!(
            self.gc(),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
    }

    pub fn is_defined(&self) -> bool {
        self.gc() != GeneralCategory::Unassigned
    }

    pub fn is_digit(&self) -> bool {
        self.gc() == GeneralCategory::DecimalNumber
    }

    pub fn is_graph(&self) -> bool {
        sets::graph().contains(self.ch)
    }

    pub fn is_lower(&self) -> bool {
        self.gc() == GeneralCategory::LowercaseLetter
    }

    pub fn is_upper(&self) -> bool {
        self.gc() == GeneralCategory::UppercaseLetter
    }

    pub fn is_title(&self) -> bool {
        self.gc() == GeneralCategory::TitlecaseLetter
    }

    pub fn is_print(&self) -> bool {
        sets::print().contains(self.ch)
    }

    pub fn is_punct(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Punctuation)
    }

    pub fn is_space(&self) -> bool {
        let cp = self.ch as u32;
        self.in_group(GeneralCategoryGroup::Separator)
            || (0x09..=0x0D).contains(&cp)
            || (0x1C..=0x1F).contains(&cp)
    }

    /// Java-style whitespace: separators other than no-break spaces,
    /// plus the ASCII and C0 separators.
    pub fn is_whitespace(&self) -> bool {
        let cp = self.ch as u32;
        (self.in_group(GeneralCategoryGroup::Separator)
            && !matches!(cp, 0x00A0 | 0x2007 | 0x202F))
            || (0x09..=0x0D).contains(&cp)
            || (0x1C..=0x1F).contains(&cp)
    }

    pub fn is_xdigit(&self) -> bool {
        sets::xdigit().contains(self.ch)
    }

    pub fn is_mirrored(&self) -> bool {
        self.bidi_mirrored()
    }

    pub fn is_id_start(&self) -> bool {
        self.id_start()
    }

    pub fn is_id_part(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Letter)
            || matches!(
                self.gc(),
                GeneralCategory::LetterNumber
                    | GeneralCategory::SpacingMark
                    | GeneralCategory::NonspacingMark
                    | GeneralCategory::DecimalNumber
                    | GeneralCategory::ConnectorPunctuation
            )
            || self.is_id_ignorable()
    }

    pub fn is_id_ignorable(&self) -> bool {
        let cp = self.ch as u32;
        cp <= 0x08
            || (0x0E..=0x1B).contains(&cp)
            || (0x7F..=0x9F).contains(&cp)
            || self.gc() == GeneralCategory::Format
    }

    pub fn is_iso_control(&self) -> bool {
        constants::is_iso_control(self.ch)
    }

    pub fn is_java_id_start(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Letter)
            || matches!(
                self.gc(),
                GeneralCategory::LetterNumber
                    | GeneralCategory::CurrencySymbol
                    | GeneralCategory::ConnectorPunctuation
            )
    }

    pub fn is_java_id_part(&self) -> bool {
        self.is_java_id_start()
            || matches!(
                self.gc(),
                GeneralCategory::DecimalNumber
                    | GeneralCategory::SpacingMark
                    | GeneralCategory::NonspacingMark
            )
            || self.is_id_ignorable()
    }

    pub fn is_java_space_char(&self) -> bool {
        self.in_group(GeneralCategoryGroup::Separator)
    }

    // Unicode binary properties under their ICU `isU*` names

    pub fn is_u_alphabetic(&self) -> bool {
        self.alphabetic()
    }

    pub fn is_u_lowercase(&self) -> bool {
        self.lowercase()
    }

    pub fn is_u_uppercase(&self) -> bool {
        self.uppercase()
    }

    pub fn is_u_whitespace(&self) -> bool {
        self.white_space()
    }

    /// General category, as returned by ICU `charType`.
    pub fn char_type(&self) -> String {
        self.general_category()
    }

    pub fn char_type_code(&self) -> String {
        self.general_category_code()
    }

    // encodings

    fn hex_join(bytes: impl IntoIterator<Item = u8>) -> String {
        bytes
            .into_iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn utf8_bytes(&self) -> String {
        let mut buf = [0u8; 4];
        Self::hex_join(self.ch.encode_utf8(&mut buf).bytes())
    }

    pub fn utf16_le_bytes(&self) -> String {
        let mut buf = [0u16; 2];
        Self::hex_join(self.ch.encode_utf16(&mut buf).iter().flat_map(|u| u.to_le_bytes()))
    }

    pub fn utf16_be_bytes(&self) -> String {
        let mut buf = [0u16; 2];
        Self::hex_join(self.ch.encode_utf16(&mut buf).iter().flat_map(|u| u.to_be_bytes()))
    }

    pub fn utf32_le_bytes(&self) -> String {
        Self::hex_join((self.ch as u32).to_le_bytes())
    }

    pub fn utf32_be_bytes(&self) -> String {
        Self::hex_join((self.ch as u32).to_be_bytes())
    }

    // entities

    /// Markup-escaped ASCII, otherwise a hexadecimal or decimal NCR.
    pub fn html_entity(&self, hexadecimal: bool) -> String {
        let cp = self.ch as u32;
        if cp <= ASCII_MAX {
            return match self.ch {
                '&' => "&amp;".to_string(),
                '<' => "&lt;".to_string(),
                '>' => "&gt;".to_string(),
                '"' => "&quot;".to_string(),
                '\'' => "&#x27;".to_string(),
                c => c.to_string(),
            };
        }
        if hexadecimal {
            format!("&#x{:04X};", cp)
        } else {
            format!("&#{};", cp)
        }
    }

    pub fn entities(&self) -> Entities {
        let cp = self.ch as u32;
        Entities {
            character: self.ch.to_string(),
            hexadecimal: format!("{:#x}", cp),
            decimal: cp,
            octal: format!("0o{:o}", cp),
            binary: format!("{:#b}", cp),
            html_entity: html_entity_name(cp)
                .map(|name| format!("&{};", name))
                .unwrap_or_else(|| "-".to_string()),
            decimal_ncr: format!("&#{:04};", cp),
            hex_ncr: format!("&#x{:04X};", cp),
        }
    }

    pub fn in_set(&self, notation: &str) -> Result<bool> {
        Ok(CharSet::parse(notation)?.contains_char(self.ch))
    }

    pub fn data(&self) -> CharData {
        CharData {
            character: self.ch.to_string(),
            codepoint: self.codepoint(),
            name: self.name(),
            script: self.script(),
            block: self.block(),
            general_category: self.general_category_code(),
            bidi_class: self.bidi_class_code(),
            combining_class: self.combining_class(),
        }
    }
}

impl From<char> for Ucd {
    fn from(ch: char) -> Self {
        Ucd::new(ch)
    }
}

impl TryFrom<&str> for Ucd {
    type Error = crate::error::Error;

    fn try_from(text: &str) -> Result<Self> {
        Ucd::parse(text)
    }
}

impl fmt::Display for Ucd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

impl fmt::Debug for Ucd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ucd(char={}, codepoint={}, name={})",
            self.ch,
            self.codepoint(),
            self.name()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UcdString {
    chars: Vec<Ucd>,
}

impl UcdString {
    pub fn new(text: &str) -> Self {
        UcdString {
            chars: text.chars().map(Ucd::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ucd> {
        self.chars.get(index)
    }

    pub fn slice(&self, range: Range<usize>) -> UcdString {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        UcdString {
            chars: self.chars[start..end].to_vec(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ucd> {
        self.chars.iter()
    }

    pub fn characters(&self) -> Vec<char> {
        self.chars.iter().map(Ucd::character).collect()
    }

    pub fn codepoints(&self) -> Vec<String> {
        self.chars.iter().map(Ucd::codepoint).collect()
    }

    pub fn codepoints_decimal(&self) -> Vec<u32> {
        self.chars.iter().map(Ucd::codepoint_decimal).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.chars.iter().map(Ucd::name).collect()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.chars.iter().map(Ucd::script).collect()
    }

    pub fn blocks(&self) -> Vec<String> {
        self.chars.iter().map(Ucd::block).collect()
    }

    pub fn in_set(&self, notation: &str) -> Result<Vec<bool>> {
        let set = CharSet::parse(notation)?;
        Ok(self.chars.iter().map(|c| set.contains_char(c.ch)).collect())
    }

    pub fn properties(&self, property: Property, choice: NameChoice) -> Vec<PropertyValue> {
        self.chars
            .iter()
            .map(|c| get_property(c.ch, property, choice))
            .collect()
    }

    pub fn data(&self) -> Vec<CharData> {
        self.chars.iter().map(Ucd::data).collect()
    }

    pub fn entities(&self) -> Vec<Entities> {
        self.chars.iter().map(Ucd::entities).collect()
    }
}

impl<'a> IntoIterator for &'a UcdString {
    type Item = &'a Ucd;
    type IntoIter = std::slice::Iter<'a, Ucd>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

impl From<&str> for UcdString {
    fn from(text: &str) -> Self {
        UcdString::new(text)
    }
}

impl fmt::Display for UcdString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.ch)?;
        }
        Ok(())
    }
}
