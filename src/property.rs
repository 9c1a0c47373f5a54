//! Unicode property identifiers and value lookup.
//!
//! Binary properties resolve to a `bool`; enumerated properties resolve to a
//! property value alias, long (`Arabic_Number`) or short (`AN`).

use std::fmt;

use icu::properties::bidi_data::{self, BidiPairingProperties};
use icu::properties::sets::CodePointSetDataBorrowed;
use icu::properties::{
    maps, sets, BidiClass, CanonicalCombiningClass, EastAsianWidth, GeneralCategory,
    GraphemeClusterBreak, HangulSyllableType, IndicSyllabicCategory, JoiningType, LineBreak,
    Script, SentenceBreak, WordBreak,
};
use serde::Serialize;

use crate::blocks::{block_of, NO_BLOCK};
use crate::error::{Error, Result};
use crate::ucd::NFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Binary,
    Enumerated,
}

/// Which alias to return for an enumerated property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameChoice {
    Short,
    #[default]
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Name(String),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            PropertyValue::Bool(_) => None,
            PropertyValue::Name(n) => Some(n),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Name(n) => f.write_str(n),
        }
    }
}

macro_rules! properties {
    (
        binary {
            $($bvariant:ident($blong:literal, $bshort:literal) => $bset:path,)*
        }
        emoji_strings {
            $($svariant:ident($slong:literal, $sshort:literal),)*
        }
        enumerated {
            $($evariant:ident($elong:literal, $eshort:literal),)*
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Property {
            $($bvariant,)*
            $($svariant,)*
            $($evariant,)*
        }

        impl Property {
            pub const ALL: &'static [Property] = &[
                $(Property::$bvariant,)* $(Property::$svariant,)* $(Property::$evariant,)*
            ];
            pub const BINARY: &'static [Property] = &[$(Property::$bvariant,)* $(Property::$svariant,)*];
            pub const ENUMERATED: &'static [Property] = &[$(Property::$evariant,)*];

            pub fn long_name(self) -> &'static str {
                match self {
                    $(Property::$bvariant => $blong,)*
                    $(Property::$svariant => $slong,)*
                    $(Property::$evariant => $elong,)*
                }
            }

            pub fn short_name(self) -> &'static str {
                match self {
                    $(Property::$bvariant => $bshort,)*
                    $(Property::$svariant => $sshort,)*
                    $(Property::$evariant => $eshort,)*
                }
            }

            pub fn kind(self) -> PropertyKind {
                match self {
                    $(Property::$bvariant)|* $(| Property::$svariant)* => PropertyKind::Binary,
                    _ => PropertyKind::Enumerated,
                }
            }

            /// Code point set backing a binary property. `None` for
            /// enumerated properties and for properties of strings.
            pub fn code_point_set(self) -> Option<CodePointSetDataBorrowed<'static>> {
                match self {
                    $(Property::$bvariant => Some($bset()),)*
                    _ => None,
                }
            }
        }
    };
}

properties! {
    binary {
        Alphabetic("Alphabetic", "Alpha") => sets::alphabetic,
        AsciiHexDigit("ASCII_Hex_Digit", "AHex") => sets::ascii_hex_digit,
        BidiControl("Bidi_Control", "Bidi_C") => sets::bidi_control,
        BidiMirrored("Bidi_Mirrored", "Bidi_M") => sets::bidi_mirrored,
        CaseIgnorable("Case_Ignorable", "CI") => sets::case_ignorable,
        CaseSensitive("Case_Sensitive", "Sensitive") => sets::case_sensitive,
        Cased("Cased", "Cased") => sets::cased,
        ChangesWhenCasefolded("Changes_When_Casefolded", "CWCF") => sets::changes_when_casefolded,
        ChangesWhenCasemapped("Changes_When_Casemapped", "CWCM") => sets::changes_when_casemapped,
        ChangesWhenLowercased("Changes_When_Lowercased", "CWL") => sets::changes_when_lowercased,
        ChangesWhenNfkcCasefolded("Changes_When_NFKC_Casefolded", "CWKCF") => sets::changes_when_nfkc_casefolded,
        ChangesWhenTitlecased("Changes_When_Titlecased", "CWT") => sets::changes_when_titlecased,
        ChangesWhenUppercased("Changes_When_Uppercased", "CWU") => sets::changes_when_uppercased,
        Dash("Dash", "Dash") => sets::dash,
        DefaultIgnorableCodePoint("Default_Ignorable_Code_Point", "DI") => sets::default_ignorable_code_point,
        Deprecated("Deprecated", "Dep") => sets::deprecated,
        Diacritic("Diacritic", "Dia") => sets::diacritic,
        Emoji("Emoji", "Emoji") => sets::emoji,
        EmojiComponent("Emoji_Component", "EComp") => sets::emoji_component,
        EmojiModifier("Emoji_Modifier", "EMod") => sets::emoji_modifier,
        EmojiModifierBase("Emoji_Modifier_Base", "EBase") => sets::emoji_modifier_base,
        EmojiPresentation("Emoji_Presentation", "EPres") => sets::emoji_presentation,
        ExtendedPictographic("Extended_Pictographic", "ExtPict") => sets::extended_pictographic,
        Extender("Extender", "Ext") => sets::extender,
        FullCompositionExclusion("Full_Composition_Exclusion", "Comp_Ex") => sets::full_composition_exclusion,
        GraphemeBase("Grapheme_Base", "Gr_Base") => sets::grapheme_base,
        GraphemeExtend("Grapheme_Extend", "Gr_Ext") => sets::grapheme_extend,
        GraphemeLink("Grapheme_Link", "Gr_Link") => sets::grapheme_link,
        HexDigit("Hex_Digit", "Hex") => sets::hex_digit,
        Hyphen("Hyphen", "Hyphen") => sets::hyphen,
        IdContinue("ID_Continue", "IDC") => sets::id_continue,
        IdStart("ID_Start", "IDS") => sets::id_start,
        Ideographic("Ideographic", "Ideo") => sets::ideographic,
        IdsBinaryOperator("IDS_Binary_Operator", "IDSB") => sets::ids_binary_operator,
        IdsTrinaryOperator("IDS_Trinary_Operator", "IDST") => sets::ids_trinary_operator,
        JoinControl("Join_Control", "Join_C") => sets::join_control,
        LogicalOrderException("Logical_Order_Exception", "LOE") => sets::logical_order_exception,
        Lowercase("Lowercase", "Lower") => sets::lowercase,
        Math("Math", "Math") => sets::math,
        NfcInert("NFC_Inert", "nfcinert") => sets::nfc_inert,
        NfdInert("NFD_Inert", "nfdinert") => sets::nfd_inert,
        NfkcInert("NFKC_Inert", "nfkcinert") => sets::nfkc_inert,
        NfkdInert("NFKD_Inert", "nfkdinert") => sets::nfkd_inert,
        NoncharacterCodePoint("Noncharacter_Code_Point", "NChar") => sets::noncharacter_code_point,
        PatternSyntax("Pattern_Syntax", "Pat_Syn") => sets::pattern_syntax,
        PatternWhiteSpace("Pattern_White_Space", "Pat_WS") => sets::pattern_white_space,
        PosixAlnum("alnum", "alnum") => sets::alnum,
        PosixBlank("blank", "blank") => sets::blank,
        PosixGraph("graph", "graph") => sets::graph,
        PosixPrint("print", "print") => sets::print,
        PosixXdigit("xdigit", "xdigit") => sets::xdigit,
        PrependedConcatenationMark("Prepended_Concatenation_Mark", "PCM") => sets::prepended_concatenation_mark,
        QuotationMark("Quotation_Mark", "QMark") => sets::quotation_mark,
        Radical("Radical", "Radical") => sets::radical,
        RegionalIndicator("Regional_Indicator", "RI") => sets::regional_indicator,
        SegmentStarter("Segment_Starter", "segstart") => sets::segment_starter,
        SentenceTerminal("Sentence_Terminal", "STerm") => sets::sentence_terminal,
        SoftDotted("Soft_Dotted", "SD") => sets::soft_dotted,
        TerminalPunctuation("Terminal_Punctuation", "Term") => sets::terminal_punctuation,
        UnifiedIdeograph("Unified_Ideograph", "UIdeo") => sets::unified_ideograph,
        Uppercase("Uppercase", "Upper") => sets::uppercase,
        VariationSelector("Variation_Selector", "VS") => sets::variation_selector,
        WhiteSpace("White_Space", "WSpace") => sets::white_space,
        XidContinue("XID_Continue", "XIDC") => sets::xid_continue,
        XidStart("XID_Start", "XIDS") => sets::xid_start,
    }
    emoji_strings {
        BasicEmoji("Basic_Emoji", "Basic_Emoji"),
    }
    enumerated {
        BidiClass("Bidi_Class", "bc"),
        BidiPairedBracketType("Bidi_Paired_Bracket_Type", "bpt"),
        Block("Block", "blk"),
        CanonicalCombiningClass("Canonical_Combining_Class", "ccc"),
        EastAsianWidth("East_Asian_Width", "ea"),
        GeneralCategory("General_Category", "gc"),
        GraphemeClusterBreak("Grapheme_Cluster_Break", "GCB"),
        HangulSyllableType("Hangul_Syllable_Type", "hst"),
        IndicSyllabicCategory("Indic_Syllabic_Category", "InSC"),
        JoiningType("Joining_Type", "jt"),
        LeadCanonicalCombiningClass("Lead_Canonical_Combining_Class", "lccc"),
        LineBreak("Line_Break", "lb"),
        Script("Script", "sc"),
        SentenceBreak("Sentence_Break", "SB"),
        TrailCanonicalCombiningClass("Trail_Canonical_Combining_Class", "tccc"),
        WordBreak("Word_Break", "WB"),
    }
}

fn loose_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Property {
    /// Looks up a property by long or short alias, ignoring case, spaces,
    /// underscores and hyphens.
    pub fn from_name(name: &str) -> Result<Property> {
        let key = loose_key(name);
        Property::ALL
            .iter()
            .copied()
            .find(|p| loose_key(p.long_name()) == key || loose_key(p.short_name()) == key)
            .ok_or_else(|| Error::UnknownProperty(name.to_string()))
    }

    pub fn is_binary(self) -> bool {
        self.kind() == PropertyKind::Binary
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

macro_rules! value_name {
    ($ty:ty, $value:expr, $choice:expr) => {
        match $choice {
            NameChoice::Short => <$ty>::enum_to_short_name_mapper()
                .get($value)
                .map(|s| s.to_string()),
            NameChoice::Long => <$ty>::enum_to_long_name_mapper()
                .get($value)
                .map(|s| s.to_string()),
        }
    };
}

fn paired_bracket_type_name(ch: char, choice: NameChoice) -> String {
    let (long, short) = match bidi_data::bidi_auxiliary_properties().get32_pairing_props(ch as u32) {
        BidiPairingProperties::Open(_) => ("Open", "o"),
        BidiPairingProperties::Close(_) => ("Close", "c"),
        _ => ("None", "n"),
    };
    match choice {
        NameChoice::Short => short.to_string(),
        NameChoice::Long => long.to_string(),
    }
}

fn combining_class_name(ccc: CanonicalCombiningClass, choice: NameChoice) -> String {
    value_name!(CanonicalCombiningClass, ccc, choice).unwrap_or_else(|| ccc.0.to_string())
}

/// Combining class of the first (`lead`) or last character of the
/// canonical decomposition of `ch`.
fn decomposed_combining_class(ch: char, lead: bool, choice: NameChoice) -> String {
    let mut buf = [0u8; 4];
    let nfd = NFD.normalize(ch.encode_utf8(&mut buf));
    let end = if lead { nfd.chars().next() } else { nfd.chars().next_back() };
    let ccc = maps::canonical_combining_class().get(end.unwrap_or(ch));
    combining_class_name(ccc, choice)
}

fn enumerated_value(ch: char, property: Property, choice: NameChoice) -> Option<String> {
    match property {
        Property::BidiClass => value_name!(BidiClass, maps::bidi_class().get(ch), choice),
        Property::BidiPairedBracketType => Some(paired_bracket_type_name(ch, choice)),
        Property::Block => Some(
            block_of(ch)
                .map(|b| b.code())
                .unwrap_or_else(|| NO_BLOCK.to_string()),
        ),
        Property::CanonicalCombiningClass => Some(combining_class_name(
            maps::canonical_combining_class().get(ch),
            choice,
        )),
        Property::LeadCanonicalCombiningClass => Some(decomposed_combining_class(ch, true, choice)),
        Property::TrailCanonicalCombiningClass => Some(decomposed_combining_class(ch, false, choice)),
        Property::EastAsianWidth => {
            value_name!(EastAsianWidth, maps::east_asian_width().get(ch), choice)
        }
        Property::GeneralCategory => {
            value_name!(GeneralCategory, maps::general_category().get(ch), choice)
        }
        Property::GraphemeClusterBreak => value_name!(
            GraphemeClusterBreak,
            maps::grapheme_cluster_break().get(ch),
            choice
        ),
        Property::HangulSyllableType => value_name!(
            HangulSyllableType,
            maps::hangul_syllable_type().get(ch),
            choice
        ),
        Property::IndicSyllabicCategory => value_name!(
            IndicSyllabicCategory,
            maps::indic_syllabic_category().get(ch),
            choice
        ),
        Property::JoiningType => value_name!(JoiningType, maps::joining_type().get(ch), choice),
        Property::LineBreak => value_name!(LineBreak, maps::line_break().get(ch), choice),
        Property::Script => value_name!(Script, maps::script().get(ch), choice),
        Property::SentenceBreak => {
            value_name!(SentenceBreak, maps::sentence_break().get(ch), choice)
        }
        Property::WordBreak => value_name!(WordBreak, maps::word_break().get(ch), choice),
        _ => None,
    }
}

/// Evaluates `property` for a single character.
pub fn get_property(ch: char, property: Property, choice: NameChoice) -> PropertyValue {
    if property == Property::BasicEmoji {
        return PropertyValue::Bool(sets::basic_emoji().contains_char(ch));
    }
    if let Some(set) = property.code_point_set() {
        return PropertyValue::Bool(set.contains(ch));
    }
    PropertyValue::Name(enumerated_value(ch, property, choice).unwrap_or_default())
}

/// Like [`get_property`], for input that must hold exactly one character.
pub fn get_property_str(text: &str, property: Property, choice: NameChoice) -> Result<PropertyValue> {
    let ch = single_char(text)?;
    Ok(get_property(ch, property, choice))
}

pub(crate) fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidCharLength(text.chars().count())),
    }
}
