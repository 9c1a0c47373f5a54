//! Unihan lookups for CJK ideographs.

use std::fmt;
use std::ops::{Deref, Range};

use serde::Serialize;

use crate::db::{LookupDb, Table};
use crate::error::{Error, Result};
use crate::ucd::Ucd;

pub const UNIHAN_FIELDS: &[&str] = &[
    "kCangjie", "kCantonese", "kDefinition", "kHanYu", "kIRGHanyuDaZidian", "kIRGKangXi",
    "kIRG_GSource", "kIRG_JSource", "kIRG_TSource", "kJapanese", "kKangXi", "kMandarin",
    "kMojiJoho", "kMorohashi", "kRSUnicode", "kSemanticVariant", "kTotalStrokes", "kCihaiT",
    "kHanyuPinyin", "kIRG_KSource", "kSBGY", "kJIS0213", "kNelson", "kRSAdobe_Japan1_6",
    "kStrange", "kCowles", "kMatthews", "kOtherNumeric", "kPhonetic", "kSpoofingVariant", "kGSR",
    "kIRG_KPSource", "kIRG_VSource", "kFenn", "kFennIndex", "kKarlgren", "kVietnameseNumeric",
    "kIRG_HSource", "kUnihanCore2020", "kTraditionalVariant", "kFourCornerCode",
    "kSMSZD2003Index", "kTGH", "kTGHZ2013", "kXHC1983", "kMeyerWempe", "kVietnamese",
    "kSimplifiedVariant", "kSMSZD2003Readings", "kHangul", "kKoreanName",
    "kSpecializedSemanticVariant", "kEACC", "kLau", "kCheungBauer", "kCheungBauerIndex",
    "kIRG_USource", "kIICore", "kTang", "kZhuangNumeric", "kZVariant", "kTaiwanTelegraph",
    "kIRG_MSource", "kJapaneseKun", "kJapaneseOn", "kJa", "kIRG_UKSource",
    "kAlternateTotalStrokes", "kBigFive", "kCCCII", "kCNS1986", "kCNS1992", "kDaeJaweon",
    "kFrequency", "kGB0", "kGB1", "kGradeLevel", "kHDZRadBreak", "kHKGlyph", "kHanyuPinlu",
    "kIRGDaeJaweon", "kJis0", "kJoyoKanji", "kKorean", "kKoreanEducationHanja",
    "kMainlandTelegraph", "kPrimaryNumeric", "kXerox", "kGB5", "kJis1", "kPseudoGB1", "kGB3",
    "kGB8", "kJinmeiyoKanji", "kIBMJapan", "kAccountingNumeric", "kGB7", "kCompatibilityVariant",
    "kIRG_SSource",
];

/// A stored field value. Fields with several space-delimited items come
/// back as a list; everything else as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub(crate) fn from_stored(raw: String) -> Self {
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut items) if items.len() == 1 => FieldValue::Text(items.remove(0)),
            Ok(items) => FieldValue::List(items),
            Err(_) => FieldValue::Text(raw),
        }
    }

    pub fn items(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) => vec![s.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMetadata {
    pub property: &'static str,
    pub status: &'static str,
    pub category: &'static str,
    pub introduced: &'static str,
    pub delimiter: &'static str,
    pub syntax: &'static str,
    pub description: &'static str,
}

const FIELD_METADATA: &[FieldMetadata] = &[
    FieldMetadata {
        property: "kAccountingNumeric",
        status: "Informative",
        category: "Numeric Values",
        introduced: "3.2",
        delimiter: "space",
        syntax: "[0-9]+",
        description: "The value of the ideograph when used as an accounting numeral to prevent \
            fraud in Chinese and derivative numeric systems. Ideographs with this property have \
            a single, well-defined value.",
    },
    FieldMetadata {
        property: "kAlternateTotalStrokes",
        status: "Provisional",
        category: "Dictionary-like Data",
        introduced: "15.0",
        delimiter: "space",
        syntax: r"(\d+:[BHJKMPSUV]+)|-",
        description: "The total number of strokes in the ideograph (including the radical), \
            each value a decimal count followed by an IRG source specifier, or the special \
            value \"-\".",
    },
    FieldMetadata {
        property: "kBigFive",
        status: "Provisional",
        category: "Other Mappings",
        introduced: "2.0",
        delimiter: "N/A",
        syntax: "[0-9A-F]{4}'?",
        description: "The Big Five mapping for this ideograph in hexadecimal. This does not \
            cover any of the Big Five extensions in common use.",
    },
    FieldMetadata {
        property: "kCangjie",
        status: "Provisional",
        category: "Dictionary-like Data",
        introduced: "3.1.1",
        delimiter: "N/A",
        syntax: "[A-Z]+",
        description: "The cangjie input code for the ideograph.",
    },
    FieldMetadata {
        property: "kCantonese",
        status: "Provisional",
        category: "Readings",
        introduced: "2.0",
        delimiter: "space",
        syntax: "[a-z]{1,6}[1-6]",
        description: "The most customary jyutping (Cantonese) reading for this ideograph.",
    },
];

/// Documentation for the fields that carry it; `None` otherwise.
pub fn field_metadata(name: &str) -> Option<&'static FieldMetadata> {
    FIELD_METADATA.iter().find(|m| m.property == name)
}

pub fn is_unihan_field(name: &str) -> bool {
    UNIHAN_FIELDS.contains(&name)
}

macro_rules! field_accessors {
    ($($method:ident => $field:literal,)*) => {
        $(
            pub fn $method(&self) -> Result<Option<FieldValue>> {
                self.field($field)
            }
        )*
    };
}

#[derive(Clone)]
pub struct Unihan<'db> {
    ucd: Ucd,
    db: &'db LookupDb,
}

impl<'db> Unihan<'db> {
    pub fn new(db: &'db LookupDb, ch: char) -> Self {
        Unihan {
            ucd: Ucd::new(ch),
            db,
        }
    }

    pub fn parse(db: &'db LookupDb, text: &str) -> Result<Self> {
        Ok(Self::new(db, Ucd::parse(text)?.character()))
    }

    fn key(&self) -> String {
        self.ucd.character().to_string()
    }

    /// Value of a Unihan field, `None` when the character has no entry.
    pub fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        if !is_unihan_field(name) {
            return Err(Error::UnknownField(name.to_string()));
        }
        Ok(self
            .db
            .lookup(Table::Unihan, &self.key(), name)?
            .map(FieldValue::from_stored))
    }

    /// Universal character name as stored, e.g. `U+4E00`.
    pub fn ucn(&self) -> Result<Option<String>> {
        self.db.lookup(Table::Unihan, &self.key(), "ucn")
    }

    field_accessors! {
        definition => "kDefinition",
        mandarin => "kMandarin",
        cantonese => "kCantonese",
        japanese_on => "kJapaneseOn",
        japanese_kun => "kJapaneseKun",
        hangul => "kHangul",
        korean => "kKorean",
        vietnamese => "kVietnamese",
        total_strokes => "kTotalStrokes",
        radical_stroke => "kRSUnicode",
        simplified_variant => "kSimplifiedVariant",
        traditional_variant => "kTraditionalVariant",
        semantic_variant => "kSemanticVariant",
    }

    /// Every populated Unihan field of the character.
    pub fn all_fields(&self) -> Result<Vec<(String, FieldValue)>> {
        let row = match self.db.lookup_row(Table::Unihan, &self.key())? {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };
        Ok(row
            .into_iter()
            .filter(|(name, _)| is_unihan_field(name))
            .filter_map(|(name, value)| value.map(|v| (name, FieldValue::from_stored(v))))
            .collect())
    }
}

impl Deref for Unihan<'_> {
    type Target = Ucd;

    fn deref(&self) -> &Ucd {
        &self.ucd
    }
}

impl fmt::Debug for Unihan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unihan(char={}, codepoint={})", self.ucd.character(), self.ucd.codepoint())
    }
}

/// Per-character Unihan view over a string.
#[derive(Clone)]
pub struct UnihanString<'db> {
    chars: Vec<Unihan<'db>>,
}

impl<'db> UnihanString<'db> {
    pub fn new(db: &'db LookupDb, text: &str) -> Self {
        UnihanString {
            chars: text.chars().map(|c| Unihan::new(db, c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Unihan<'db>> {
        self.chars.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unihan<'db>> {
        self.chars.iter()
    }

    pub fn slice(&self, range: Range<usize>) -> UnihanString<'db> {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        UnihanString {
            chars: self.chars[start..end].to_vec(),
        }
    }

    pub fn characters(&self) -> Vec<char> {
        self.chars.iter().map(|c| c.character()).collect()
    }

    /// `name` for each character, `None` where it has no entry.
    pub fn field(&self, name: &str) -> Result<Vec<Option<FieldValue>>> {
        self.chars.iter().map(|c| c.field(name)).collect()
    }
}

impl fmt::Display for UnihanString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.character())?;
        }
        Ok(())
    }
}

impl fmt::Debug for UnihanString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnihanString(chars={:?})", self.characters())
    }
}
