//! Ethiopic syllabary: families (consonant rows), orders (vowel columns),
//! homophone families and compact range selection.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, Range, RangeInclusive};

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

use crate::constants::is_row_syllable;
use crate::db::{syllable_position, LookupDb, Table};
use crate::error::{Error, Result};
use crate::ucd::Ucd;
use crate::uset::CharSet;

const FAMILY_COLUMN: &str = "ቤተሰብ";
const ORDER_COLUMN: &str = "ቤት";

pub struct ScriptMetadata {
    pub label: &'static str,
    pub alternative_label: &'static str,
    pub script_type: &'static str,
    pub direction: &'static str,
    pub iso_15924: &'static str,
    pub iso_15924_numeric: u16,
    pub blocks: &'static [&'static str],
}

pub const SCRIPT: ScriptMetadata = ScriptMetadata {
    label: "Ethiopic",
    alternative_label: "Geʽez",
    script_type: "Abugida",
    direction: "left-to-right",
    iso_15924: "Ethi",
    iso_15924_numeric: 430,
    blocks: &[
        "Ethiopic",
        "Ethiopic Supplement",
        "Ethiopic Extended",
        "Ethiopic Extended-A",
        "Ethiopic Extended-B",
    ],
};

pub const CLDR_LOCALES: &[&str] = &["am", "am_ET", "gez", "gez_ER", "gez_ET", "ti", "ti_ER", "ti_ET"];
pub const SLDR_LOCALES: &[&str] = &[
    "am", "am_ET", "aiw_Ethi", "gez", "gez_ER", "gez_ET", "ti", "ti_ER", "ti_ET",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub base: char,
    pub label: &'static str,
    pub romanised: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub name: &'static str,
    pub number: u32,
    pub romanised: &'static str,
}

macro_rules! families {
    ($($base:literal => $label:literal, $rom:literal;)*) => {
        pub const FAMILIES: &[Family] = &[
            $(Family { base: $base, label: $label, romanised: $rom },)*
        ];
    };
}

families! {
    'ሀ' => "ሆይ", "Hoy";
    'ለ' => "ላዊ", "Lawi";
    'ሐ' => "ሐውት", "ሐውት";
    'መ' => "ማይ", "ማይ";
    'ሠ' => "ሠውት", "ሠውት";
    'ረ' => "ርእስ", "ርእስ";
    'ሰ' => "ሳት", "ሳት";
    'ሸ' => "ሻ-ሳት", "ሻ-ሳት";
    'ቀ' => "ቃፍ", "ቃፍ";
    'በ' => "ቤት", "ቤት";
    'ቨ' => "ቬ-ቤት", "ቬ-ቤት";
    'ተ' => "ታው", "ታው";
    'ቸ' => "ቻ-ታው", "ቻ-ታው";
    'ኀ' => "ኀርም", "ኀርም";
    'ነ' => "ነሐስ", "ነሐስ";
    'ኘ' => "ኛ-ነሐስ", "ኛ-ነሐስ";
    'አ' => "አልፍ", "አልፍ";
    'ከ' => "ካፍ", "ካፍ";
    'ኸ' => "ኻ-ካፍ", "ኻ-ካፍ";
    'ወ' => "ወዌ", "ወዌ";
    'ዐ' => "ዐይን", "ዐይን";
    'ዘ' => "ዘይ", "ዘይ";
    'ዠ' => "ዠ-ዘይ", "ዠ-ዘይ";
    'የ' => "የመነ", "የመነ";
    'ደ' => "ድንት", "ድንት";
    'ጀ' => "ጅ-ድንት", "ጅ-ድንት";
    'ገ' => "ገምል", "ገምል";
    'ጠ' => "ጠይት", "ጠይት";
    'ጨ' => "ጨ-ጠይት", "ጨ-ጠይት";
    'ጰ' => "ጰይት", "ጰይት";
    'ጸ' => "ጸደይ", "ጸደይ";
    'ፀ' => "ፀጳ", "ፀጳ";
    'ፈ' => "አፍ", "አፍ";
    'ፐ' => "ፕሳ", "ፕሳ";
}

pub const ORDERS: &[Order] = &[
    Order { name: "ግዕዝ", number: 1, romanised: "Geʽez" },
    Order { name: "ካዕብ", number: 2, romanised: "Kaib" },
    Order { name: "ሣልስ", number: 3, romanised: "Salis" },
    Order { name: "ራዕብ", number: 4, romanised: "Rabi" },
    Order { name: "ኃምስ", number: 5, romanised: "Hamis" },
    Order { name: "ሳድስ", number: 6, romanised: "Sadis" },
    Order { name: "ሳብዕ", number: 7, romanised: "Sabi" },
    Order { name: "ሳምን", number: 8, romanised: "Samin" },
    Order { name: "ዘመደ-ግዕዝ", number: 9, romanised: "Zemede-Geʽez" },
    Order { name: "ዘመደ-ካዕብ", number: 10, romanised: "Zemede-Kaʽeb" },
    Order { name: "ዘመደ-ሣልስ", number: 11, romanised: "Zemede-Salis" },
    Order { name: "ዘመደ-ራብዕ", number: 12, romanised: "Zemede-Rabi" },
    Order { name: "ዘመደ-ኃምስ", number: 13, romanised: "Zemede-Hamis" },
    Order { name: "ዘመደ-ባዕድ", number: 14, romanised: "Zemede-Baʽed" },
];

/// Families pronounced identically in Amharic. The first family of each
/// class is the canonical spelling.
pub const HOMOPHONES: &[&[char]] = &[&['ሀ', 'ሐ', 'ኀ', 'ኸ'], &['ሰ', 'ሠ'], &['አ', 'ዐ'], &['ጸ', 'ፀ']];

static FAMILY_INDEX: Lazy<FxHashMap<char, &'static Family>> =
    Lazy::new(|| FAMILIES.iter().map(|f| (f.base, f)).collect());

static ORDER_INDEX: Lazy<FxHashMap<&'static str, &'static Order>> = Lazy::new(|| {
    let mut index = FxHashMap::default();
    for order in ORDERS {
        index.insert(order.name, order);
        index.insert(order.romanised, order);
    }
    index
});

/// Panics on a malformed pattern: the patterns below are constants.
fn class_set(notation: &str) -> CharSet {
    match CharSet::parse(notation) {
        Ok(set) => set,
        Err(e) => panic!("invalid Ethiopic class {}: {}", notation, e),
    }
}

pub static CHARACTERS: Lazy<CharSet> = Lazy::new(|| class_set(r"[\p{Ethiopic}]"));
pub static SYLLABLES: Lazy<CharSet> = Lazy::new(|| class_set(r"[[\p{Ethiopic}]&[\p{L}]]"));
pub static PUNCTUATION: Lazy<CharSet> = Lazy::new(|| class_set(r"[[\p{Ethiopic}]&[\p{P}]]"));
pub static NUMERALS: Lazy<CharSet> = Lazy::new(|| class_set(r"[[\p{Ethiopic}]&[\p{N}]]"));
pub static MARKS: Lazy<CharSet> = Lazy::new(|| class_set(r"[[\p{Ethiopic}]&[\p{Mn}]]"));
pub static ZAIMA_QIRTS: Lazy<CharSet> = Lazy::new(|| class_set(r"[[\p{Ethiopic}]&[\p{So}]]"));

pub fn family_metadata(base: char) -> Option<&'static Family> {
    FAMILY_INDEX.get(&base).copied()
}

/// Looks an order up by Ge'ez name, romanisation or number.
pub fn resolve_order(order: &str) -> Option<&'static Order> {
    let order = order.trim();
    if let Ok(n) = order.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| ORDERS.get(i));
    }
    ORDER_INDEX.get(order).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyMode {
    #[default]
    Default,
    Label,
    Romanised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    #[default]
    Default,
    Number,
    Romanised,
}

/// True if every character of `text` is an Ethiopic numeral.
pub fn is_ethiopic_numeral(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| NUMERALS.contains_char(c))
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// A character with its Ethiopic family and order, read from the lookup
/// database. Characters outside the syllabary have neither.
#[derive(Clone)]
pub struct EthiopicUcd<'db> {
    ucd: Ucd,
    db: &'db LookupDb,
    family: Option<char>,
    order: Option<String>,
}

impl<'db> EthiopicUcd<'db> {
    pub fn new(db: &'db LookupDb, ch: char) -> Result<Self> {
        let (family, order) = if SYLLABLES.contains_char(ch) {
            let key = ch.to_string();
            (
                db.lookup(Table::Ethiopic, &key, FAMILY_COLUMN)?
                    .as_deref()
                    .and_then(first_char),
                db.lookup(Table::Ethiopic, &key, ORDER_COLUMN)?,
            )
        } else {
            (None, None)
        };
        Ok(EthiopicUcd {
            ucd: Ucd::new(ch),
            db,
            family,
            order,
        })
    }

    pub fn parse(db: &'db LookupDb, text: &str) -> Result<Self> {
        let ucd = Ucd::parse(text)?;
        Self::new(db, ucd.character())
    }

    pub fn family(&self, mode: FamilyMode) -> Option<String> {
        let base = self.family?;
        match mode {
            FamilyMode::Default => Some(base.to_string()),
            FamilyMode::Label => family_metadata(base).map(|f| f.label.to_string()),
            FamilyMode::Romanised => family_metadata(base).map(|f| f.romanised.to_string()),
        }
    }

    pub fn order(&self, mode: OrderMode) -> Option<String> {
        let name = self.order.as_deref()?;
        match mode {
            OrderMode::Default => Some(name.to_string()),
            OrderMode::Number => self.order_number().map(|n| n.to_string()),
            OrderMode::Romanised => resolve_order(name).map(|o| o.romanised.to_string()),
        }
    }

    pub fn order_number(&self) -> Option<u32> {
        self.order.as_deref().and_then(resolve_order).map(|o| o.number)
    }

    pub fn family_members(&self) -> Result<Vec<char>> {
        match self.family {
            Some(base) => members(self.db, FAMILY_COLUMN, &base.to_string()),
            None => Ok(Vec::new()),
        }
    }

    pub fn family_set(&self) -> Result<CharSet> {
        Ok(chars_to_set(self.family_members()?))
    }

    pub fn family_pattern(&self) -> Result<String> {
        Ok(self.family_set()?.to_pattern())
    }

    pub fn order_members(&self) -> Result<Vec<char>> {
        match &self.order {
            Some(order) => members(self.db, ORDER_COLUMN, order),
            None => Ok(Vec::new()),
        }
    }

    pub fn order_set(&self) -> Result<CharSet> {
        Ok(chars_to_set(self.order_members()?))
    }

    pub fn order_pattern(&self) -> Result<String> {
        Ok(self.order_set()?.to_pattern())
    }

    /// The syllable of the same family in `order` (name, romanisation or
    /// number). `None` if the family has no such syllable.
    pub fn convert_order(&self, order: &str) -> Result<Option<char>> {
        let family = match self.family {
            Some(f) => f.to_string(),
            None => return Ok(None),
        };
        let order = resolve_order(order).ok_or_else(|| Error::NotFound(format!("order {}", order)))?;
        let keys = self.db.keys_matching(
            Table::Ethiopic,
            &[(FAMILY_COLUMN, family.as_str()), (ORDER_COLUMN, order.name)],
        )?;
        Ok(keys.first().and_then(|k| first_char(k)))
    }

    pub fn is_ethiopic_numeral(&self) -> bool {
        NUMERALS.contains_char(self.ucd.character())
    }
}

impl Deref for EthiopicUcd<'_> {
    type Target = Ucd;

    fn deref(&self) -> &Ucd {
        &self.ucd
    }
}

impl fmt::Debug for EthiopicUcd<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EthiopicUcd(char={}, codepoint={}, name={})",
            self.ucd.character(),
            self.ucd.codepoint(),
            self.ucd.name()
        )
    }
}

fn members(db: &LookupDb, column: &str, value: &str) -> Result<Vec<char>> {
    Ok(db
        .keys_where(Table::Ethiopic, column, value)?
        .iter()
        .filter_map(|k| first_char(k))
        .collect())
}

fn chars_to_set(chars: impl IntoIterator<Item = char>) -> CharSet {
    let mut set = CharSet::new();
    for c in chars {
        set.insert_char(c);
    }
    set
}

#[derive(Clone)]
pub struct EthiopicString<'db> {
    chars: Vec<EthiopicUcd<'db>>,
}

impl<'db> EthiopicString<'db> {
    pub fn new(db: &'db LookupDb, text: &str) -> Result<Self> {
        let chars = text
            .chars()
            .map(|c| EthiopicUcd::new(db, c))
            .collect::<Result<Vec<_>>>()?;
        Ok(EthiopicString { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EthiopicUcd<'db>> {
        self.chars.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EthiopicUcd<'db>> {
        self.chars.iter()
    }

    /// Characters in `range`, clamped to the string.
    pub fn slice(&self, range: Range<usize>) -> EthiopicString<'db> {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        EthiopicString {
            chars: self.chars[start..end].to_vec(),
        }
    }

    pub fn characters(&self) -> Vec<char> {
        self.chars.iter().map(|c| c.character()).collect()
    }

    pub fn family(&self) -> Vec<Option<String>> {
        self.chars.iter().map(|c| c.family(FamilyMode::Default)).collect()
    }

    pub fn order(&self) -> Vec<Option<String>> {
        self.chars.iter().map(|c| c.order(OrderMode::Default)).collect()
    }

    /// Converts every syllable, or only the one at `index`, to `order`.
    /// Characters without a counterpart are kept unchanged.
    pub fn convert_order_chars(&self, order: &str, index: Option<usize>) -> Result<Vec<char>> {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let converted = if index.map_or(true, |idx| idx == i) {
                    c.convert_order(order)?
                } else {
                    None
                };
                Ok(converted.unwrap_or_else(|| c.character()))
            })
            .collect()
    }

    /// [`convert_order_chars`](Self::convert_order_chars) joined into a string.
    pub fn convert_order(&self, order: &str, index: Option<usize>) -> Result<String> {
        Ok(self.convert_order_chars(order, index)?.into_iter().collect())
    }

    pub fn is_ethiopic_numeral(&self) -> bool {
        !self.chars.is_empty() && self.chars.iter().all(EthiopicUcd::is_ethiopic_numeral)
    }
}

impl fmt::Display for EthiopicString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.character())?;
        }
        Ok(())
    }
}

/// Largest value [`expand_ranges`] accepts.
pub const RANGE_LIMIT: u32 = 0xFFFF;

/// Expands compact range notation such as `"1-3,7"` into a sorted,
/// deduplicated list of values in `0..=RANGE_LIMIT`.
pub fn expand_ranges(notation: &str) -> Result<Vec<u32>> {
    expand_ranges_within(notation, 0..=RANGE_LIMIT)
}

/// Like [`expand_ranges`], rejecting values outside `bounds` before anything
/// is expanded.
pub fn expand_ranges_within(notation: &str, bounds: RangeInclusive<u32>) -> Result<Vec<u32>> {
    let invalid = |reason: String| Error::InvalidRange {
        notation: notation.to_string(),
        reason,
    };
    let parse = |s: &str| -> Result<u32> {
        let n = s
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid(format!("{:?} is not a number", s.trim())))?;
        if bounds.contains(&n) {
            Ok(n)
        } else {
            Err(invalid(format!("{} is outside {}-{}", n, bounds.start(), bounds.end())))
        }
    };

    let mut spans = Vec::new();
    for item in notation.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err(invalid("empty item".to_string()));
        }
        let (start, end) = match item.split_once('-') {
            Some((start, end)) => (parse(start)?, parse(end)?),
            None => {
                let n = parse(item)?;
                (n, n)
            }
        };
        if start > end {
            return Err(invalid(format!("reversed range {}-{}", start, end)));
        }
        spans.push(start..=end);
    }
    Ok(spans.into_iter().flatten().collect::<BTreeSet<_>>().into_iter().collect())
}

fn sorted_union(groups: Vec<Vec<char>>) -> Vec<char> {
    groups
        .into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Syllables of the orders selected by `notation` (1-14).
pub fn syllables_for_orders(db: &LookupDb, notation: &str) -> Result<Vec<char>> {
    let numbers = expand_ranges_within(notation, 1..=ORDERS.len() as u32)?;
    let groups = numbers
        .iter()
        .map(|&n| members(db, ORDER_COLUMN, ORDERS[n as usize - 1].name))
        .collect::<Result<Vec<_>>>()?;
    Ok(sorted_union(groups))
}

/// Syllables of the families selected by `notation`, numbered in
/// [`FAMILIES`] order (1-34).
pub fn syllables_for_families(db: &LookupDb, notation: &str) -> Result<Vec<char>> {
    let numbers = expand_ranges_within(notation, 1..=FAMILIES.len() as u32)?;
    let groups = numbers
        .iter()
        .map(|&n| members(db, FAMILY_COLUMN, &FAMILIES[n as usize - 1].base.to_string()))
        .collect::<Result<Vec<_>>>()?;
    Ok(sorted_union(groups))
}

fn family_of(ch: char) -> Option<char> {
    if !is_row_syllable(ch) {
        return None;
    }
    char::from_u32(syllable_position(ch).0)
}

/// Homophone class of the family `ch` belongs to.
pub fn homophone_class(ch: char) -> Option<&'static [char]> {
    let family = family_of(ch)?;
    HOMOPHONES.iter().copied().find(|class| class.contains(&family))
}

/// Same order in families of the same homophone class.
pub fn are_homophones(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    match (homophone_class(a), homophone_class(b)) {
        (Some(ca), Some(cb)) => {
            ca[0] == cb[0] && syllable_position(a).1 == syllable_position(b).1
        }
        _ => false,
    }
}

/// Respells syllables of non-canonical homophone families with the same
/// order of the canonical family.
pub fn normalise_homophones(db: &LookupDb, text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let replacement = match homophone_class(c) {
            Some(class) if family_of(c) != Some(class[0]) => {
                let syllable = EthiopicUcd::new(db, c)?;
                let canonical = class[0].to_string();
                match syllable.order.as_deref() {
                    Some(order) => db
                        .keys_matching(
                            Table::Ethiopic,
                            &[(FAMILY_COLUMN, canonical.as_str()), (ORDER_COLUMN, order)],
                        )?
                        .first()
                        .and_then(|k| first_char(k)),
                    None => None,
                }
            }
            _ => None,
        };
        out.push(replacement.unwrap_or(c));
    }
    Ok(out)
}
