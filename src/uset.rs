//! UnicodeSet notation.
//!
//! `CharSet` is an ordered set of code point ranges plus multi-character
//! strings. The parser understands the subset of ICU UnicodeSet syntax used
//! for CLDR exemplars and script character classes: literals, escapes,
//! ranges, `{strings}`, property classes and nested set operations.

use std::collections::BTreeSet;
use std::fmt;

use icu::properties::script::script_with_extensions;
use icu::properties::{maps, GeneralCategoryGroup, Script};

use crate::blocks::block_by_name;
use crate::constants::{is_surrogate, HIGH_SURROGATE_START, LOW_SURROGATE_END, MAX_CODEPOINT};
use crate::error::{Error, Result};
use crate::property::Property;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    ranges: Vec<(u32, u32)>,
    strings: BTreeSet<String>,
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses UnicodeSet notation such as `[[\p{Ethiopic}]&[\p{L}]]`.
    pub fn parse(notation: &str) -> Result<Self> {
        Parser::new(notation).parse_top()
    }

    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = std::ops::RangeInclusive<u32>>,
    {
        let mut set = CharSet::new();
        for r in ranges {
            set.ranges.push((*r.start(), *r.end()));
        }
        set.normalize();
        set
    }

    pub fn all() -> Self {
        CharSet {
            ranges: vec![(0, MAX_CODEPOINT)],
            strings: BTreeSet::new(),
        }
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    pub fn insert_char(&mut self, c: char) {
        self.insert_range(c as u32, c as u32);
    }

    pub fn insert_range(&mut self, start: u32, end: u32) {
        let lo = self
            .ranges
            .partition_point(|&(_, e)| e.saturating_add(1) < start);
        let hi = self
            .ranges
            .partition_point(|&(s, _)| s <= end.saturating_add(1));
        if lo == hi {
            self.ranges.insert(lo, (start, end));
        } else {
            let merged = (start.min(self.ranges[lo].0), end.max(self.ranges[hi - 1].1));
            self.ranges.splice(lo..hi, std::iter::once(merged));
        }
    }

    /// Single characters go to the range list, longer strings are kept
    /// as strings. Empty input is ignored.
    pub fn insert_str(&mut self, s: &str) {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(c), None) => self.insert_char(c),
            _ => {
                self.strings.insert(s.to_string());
            }
        }
    }

    fn normalize(&mut self) {
        self.ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(self.ranges.len());
        for &(start, end) in &self.ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(end);
                }
                _ => merged.push((start, end)),
            }
        }
        self.ranges = merged;
    }

    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut out = self.clone();
        out.ranges.extend_from_slice(&other.ranges);
        out.strings.extend(other.strings.iter().cloned());
        out.normalize();
        out
    }

    pub fn intersection(&self, other: &CharSet) -> CharSet {
        let mut ranges = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let (a0, a1) = self.ranges[i];
            let (b0, b1) = other.ranges[j];
            let lo = a0.max(b0);
            let hi = a1.min(b1);
            if lo <= hi {
                ranges.push((lo, hi));
            }
            if a1 < b1 {
                i += 1;
            } else {
                j += 1;
            }
        }
        CharSet {
            ranges,
            strings: self.strings.intersection(&other.strings).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &CharSet) -> CharSet {
        let complement = other.complement();
        let mut out = self.intersection(&complement);
        out.strings = self.strings.difference(&other.strings).cloned().collect();
        out
    }

    /// Complement over the code space. Strings are dropped.
    pub fn complement(&self) -> CharSet {
        let mut ranges = Vec::new();
        let mut next = 0u32;
        for &(start, end) in &self.ranges {
            if start > next {
                ranges.push((next, start - 1));
            }
            next = end.saturating_add(1);
        }
        if next <= MAX_CODEPOINT {
            ranges.push((next, MAX_CODEPOINT));
        }
        CharSet {
            ranges,
            strings: BTreeSet::new(),
        }
    }

    pub fn contains_char(&self, c: char) -> bool {
        let cp = c as u32;
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < cp {
                    std::cmp::Ordering::Less
                } else if start > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// True if `s` is an element of the set: a single member character or
    /// one of the member strings.
    pub fn contains(&self, s: &str) -> bool {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.contains_char(c),
            _ => self.strings.contains(s),
        }
    }

    /// True if `s` splits entirely into member characters and member
    /// strings. The empty string is trivially contained.
    pub fn contains_all(&self, s: &str) -> bool {
        // reachable[i]: s[..i] is a concatenation of set elements
        let mut reachable = vec![false; s.len() + 1];
        reachable[0] = true;
        for (i, c) in s.char_indices() {
            if !reachable[i] {
                continue;
            }
            if self.contains_char(c) {
                reachable[i + c.len_utf8()] = true;
            }
            for t in self.strings.iter().filter(|t| s[i..].starts_with(t.as_str())) {
                reachable[i + t.len()] = true;
            }
        }
        reachable[s.len()]
    }

    /// True if any member character or member string occurs in `s`.
    pub fn contains_some(&self, s: &str) -> bool {
        s.chars().any(|c| self.contains_char(c))
            || self.strings.iter().any(|t| s.contains(t.as_str()))
    }

    pub fn contains_none(&self, s: &str) -> bool {
        !self.contains_some(s)
    }

    /// Member code points, surrogates skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges
            .iter()
            .flat_map(|&(start, end)| start..=end)
            .filter(|&cp| !is_surrogate(cp))
            .filter_map(char::from_u32)
    }

    /// Ordered elements: code points first, then strings.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.chars()
            .map(String::from)
            .chain(self.strings.iter().cloned())
    }

    pub fn len(&self) -> usize {
        let points: u64 = self
            .ranges
            .iter()
            .map(|&(start, end)| {
                let total = u64::from(end - start) + 1;
                let lo = start.max(HIGH_SURROGATE_START);
                let hi = end.min(LOW_SURROGATE_END);
                let surrogates = if lo <= hi { u64::from(hi - lo) + 1 } else { 0 };
                total - surrogates
            })
            .sum();
        points as usize + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && self.strings.is_empty()
    }

    pub fn to_list(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Compact pattern: runs of three or more code points collapse to `a-c`.
    pub fn to_pattern(&self) -> String {
        let mut out = String::from("[");
        for &(start, end) in &self.ranges {
            push_escaped(&mut out, start);
            if end > start {
                if end > start + 1 {
                    out.push('-');
                }
                push_escaped(&mut out, end);
            }
        }
        for s in &self.strings {
            out.push('{');
            for c in s.chars() {
                push_escaped(&mut out, c as u32);
            }
            out.push('}');
        }
        out.push(']');
        out
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

fn push_escaped(out: &mut String, cp: u32) {
    match char::from_u32(cp) {
        Some(c) if "[]{}-^&\\$:".contains(c) => {
            out.push('\\');
            out.push(c);
        }
        Some(c) if !c.is_whitespace() && !c.is_control() => out.push(c),
        _ if cp > 0xFFFF => out.push_str(&format!("\\U{:08X}", cp)),
        _ => out.push_str(&format!("\\u{:04X}", cp)),
    }
}

/// How `uset_contains` compares a string against a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetMode {
    /// Every character of the string is in the set.
    #[default]
    All,
    Some,
    None,
    /// The string itself is an element.
    Contains,
}

pub fn uset_to_list(notation: &str) -> Result<Vec<String>> {
    Ok(CharSet::parse(notation)?.to_list())
}

pub fn uset_to_pattern(notation: &str) -> Result<String> {
    Ok(CharSet::parse(notation)?.to_pattern())
}

pub fn uset_contains(chars: &str, notation: &str, mode: SetMode) -> Result<bool> {
    let set = CharSet::parse(notation)?;
    Ok(match mode {
        SetMode::All => set.contains_all(chars),
        SetMode::Some => set.contains_some(chars),
        SetMode::None => set.contains_none(chars),
        SetMode::Contains => set.contains(chars),
    })
}

#[derive(Clone, Copy)]
enum Op {
    Intersect,
    Subtract,
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(notation: &str) -> Self {
        Parser {
            chars: notation.chars().collect(),
            pos: 0,
        }
    }

    fn error<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(Error::SetSyntax {
            position: self.pos,
            message: message.into(),
        })
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => self.error(format!("expected '{}', found '{}'", want, c)),
            None => self.error(format!("expected '{}', found end of input", want)),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_top(mut self) -> Result<CharSet> {
        self.skip_whitespace();
        let set = self.parse_operand()?;
        self.skip_whitespace();
        if self.pos < self.chars.len() {
            return self.error("trailing input after set");
        }
        Ok(set)
    }

    fn at_set_start(&self) -> bool {
        matches!(
            (self.peek(), self.peek_at(1)),
            (Some('['), _) | (Some('\\'), Some('p')) | (Some('\\'), Some('P'))
        )
    }

    /// A bracketed set or a property class.
    fn parse_operand(&mut self) -> Result<CharSet> {
        match (self.peek(), self.peek_at(1)) {
            (Some('['), Some(':')) => self.parse_posix_class(),
            (Some('['), _) => self.parse_bracketed(),
            (Some('\\'), Some('p')) | (Some('\\'), Some('P')) => self.parse_property_escape(),
            _ => self.error("expected a set"),
        }
    }

    fn parse_bracketed(&mut self) -> Result<CharSet> {
        self.expect('[')?;
        let negate = if self.peek() == Some('^') {
            self.pos += 1;
            true
        } else {
            false
        };

        let mut set = CharSet::new();
        let mut pending: Option<Op> = None;
        let mut prev_char: Option<char> = None;
        let mut first = true;

        loop {
            self.skip_whitespace();
            let c = match self.peek() {
                Some(c) => c,
                None => return self.error("unterminated set"),
            };
            let starting = std::mem::replace(&mut first, false);
            match c {
                // a leading hyphen is literal
                '-' if starting => {
                    self.pos += 1;
                    set.insert_char('-');
                    prev_char = Some('-');
                }
                ']' => {
                    self.pos += 1;
                    break;
                }
                '&' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if !self.at_set_start() {
                        return self.error("'&' must be followed by a set");
                    }
                    pending = Some(Op::Intersect);
                    prev_char = None;
                }
                '-' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.at_set_start() {
                        pending = Some(Op::Subtract);
                        prev_char = None;
                    } else if self.peek() == Some(']') {
                        set.insert_char('-');
                    } else if let Some(start) = prev_char.take() {
                        let end = self.parse_single_char()?;
                        if end < start {
                            return self.error(format!(
                                "reversed range {}-{}",
                                start.escape_unicode(),
                                end.escape_unicode()
                            ));
                        }
                        set.insert_range(start as u32, end as u32);
                    } else {
                        return self.error("range has no start");
                    }
                }
                '[' | '\\' if self.at_set_start() => {
                    let operand = self.parse_operand()?;
                    set = apply(set, pending.take(), &operand);
                    prev_char = None;
                }
                '{' => {
                    self.pos += 1;
                    let mut s = String::new();
                    loop {
                        match self.peek() {
                            Some('}') => {
                                self.pos += 1;
                                break;
                            }
                            Some(_) => s.push(self.parse_single_char()?),
                            None => return self.error("unterminated string"),
                        }
                    }
                    let mut operand = CharSet::new();
                    operand.insert_str(&s);
                    set = apply(set, pending.take(), &operand);
                    prev_char = None;
                }
                _ => {
                    let ch = self.parse_single_char()?;
                    let mut operand = CharSet::new();
                    operand.insert_char(ch);
                    set = apply(set, pending.take(), &operand);
                    prev_char = Some(ch);
                }
            }
        }

        if pending.is_some() {
            return self.error("operator without right operand");
        }
        Ok(if negate { set.complement() } else { set })
    }

    fn parse_single_char(&mut self) -> Result<char> {
        match self.bump() {
            Some('\\') => self.parse_escape(),
            Some(c) => Ok(c),
            None => self.error("unexpected end of input"),
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.bump() {
            Some('u') => {
                if self.peek() == Some('{') {
                    self.pos += 1;
                    self.parse_hex_until('}')
                } else {
                    self.parse_hex_digits(4)
                }
            }
            Some('U') => self.parse_hex_digits(8),
            Some('x') => {
                if self.peek() == Some('{') {
                    self.pos += 1;
                    self.parse_hex_until('}')
                } else {
                    self.parse_hex_digits(2)
                }
            }
            Some('t') => Ok('\t'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some(c) => Ok(c),
            None => self.error("dangling escape"),
        }
    }

    fn parse_hex_digits(&mut self, count: usize) -> Result<char> {
        let start = self.pos;
        let end = start + count;
        if end > self.chars.len() {
            return self.error("truncated hex escape");
        }
        let digits: String = self.chars[start..end].iter().collect();
        self.pos = end;
        self.hex_to_char(&digits)
    }

    fn parse_hex_until(&mut self, close: char) -> Result<char> {
        let mut digits = String::new();
        loop {
            match self.bump() {
                Some(c) if c == close => break,
                Some(c) => digits.push(c),
                None => return self.error("unterminated hex escape"),
            }
        }
        self.hex_to_char(digits.trim())
    }

    fn hex_to_char(&self, digits: &str) -> Result<char> {
        match u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
            Some(c) => Ok(c),
            None => self.error(format!("invalid code point {:?}", digits)),
        }
    }

    fn parse_property_escape(&mut self) -> Result<CharSet> {
        self.expect('\\')?;
        let negate = self.bump() == Some('P');
        self.expect('{')?;
        let mut body = String::new();
        loop {
            match self.bump() {
                Some('}') => break,
                Some(c) => body.push(c),
                None => return self.error("unterminated property class"),
            }
        }
        self.class_set(&body, negate)
    }

    fn parse_posix_class(&mut self) -> Result<CharSet> {
        self.expect('[')?;
        self.expect(':')?;
        let negate = if self.peek() == Some('^') {
            self.pos += 1;
            true
        } else {
            false
        };
        let mut body = String::new();
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(':'), Some(']')) => {
                    self.pos += 2;
                    break;
                }
                (Some(c), _) => {
                    body.push(c);
                    self.pos += 1;
                }
                (None, _) => return self.error("unterminated property class"),
            }
        }
        self.class_set(&body, negate)
    }

    fn class_set(&self, body: &str, negate: bool) -> Result<CharSet> {
        let (body, negate) = match body.trim().strip_prefix('^') {
            Some(rest) => (rest, !negate),
            None => (body.trim(), negate),
        };
        let set = match property_set(body) {
            Ok(set) => set,
            Err(Error::UnknownProperty(name)) => {
                return self.error(format!("unknown property {:?}", name))
            }
            Err(e) => return Err(e),
        };
        Ok(if negate { set.complement() } else { set })
    }
}

fn apply(left: CharSet, op: Option<Op>, right: &CharSet) -> CharSet {
    match op {
        None => left.union(right),
        Some(Op::Intersect) => left.intersection(right),
        Some(Op::Subtract) => left.difference(right),
    }
}

fn loose(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolves the body of `\p{...}` to a set.
pub fn property_set(body: &str) -> Result<CharSet> {
    let unknown = || Error::UnknownProperty(body.to_string());

    if let Some((key, value)) = body.split_once(['=', ':']) {
        let value = value.trim();
        return match loose(key).as_str() {
            "gc" | "generalcategory" => general_category_set(value).ok_or_else(unknown),
            "sc" | "script" => script_set(value).ok_or_else(unknown),
            "scx" | "scriptextensions" => script_extensions_set(value).ok_or_else(unknown),
            "blk" | "block" => block_by_name(value)
                .map(|b| CharSet::from_ranges([b.start..=b.end]))
                .ok_or_else(unknown),
            _ => {
                let property = Property::from_name(key)?;
                let set = binary_set(property).ok_or_else(unknown)?;
                match loose(value).as_str() {
                    "y" | "yes" | "t" | "true" => Ok(set),
                    "n" | "no" | "f" | "false" => Ok(set.complement()),
                    _ => Err(unknown()),
                }
            }
        };
    }

    match loose(body).as_str() {
        "any" => return Ok(CharSet::all()),
        "ascii" => return Ok(CharSet::from_ranges([0..=0x7F])),
        "assigned" => {
            return Ok(general_category_set("Cn")
                .unwrap_or_default()
                .complement())
        }
        _ => {}
    }

    general_category_set(body)
        .or_else(|| script_set(body))
        .or_else(|| Property::from_name(body).ok().and_then(binary_set))
        .ok_or_else(unknown)
}

fn general_category_set(name: &str) -> Option<CharSet> {
    let group = GeneralCategoryGroup::name_to_enum_mapper().get_loose(name)?;
    Some(CharSet::from_ranges(
        maps::general_category().iter_ranges_for_group(group),
    ))
}

fn script_set(name: &str) -> Option<CharSet> {
    let script = Script::name_to_enum_mapper().get_loose(name)?;
    Some(CharSet::from_ranges(
        maps::script().iter_ranges_for_value(script),
    ))
}

fn script_extensions_set(name: &str) -> Option<CharSet> {
    let script = Script::name_to_enum_mapper().get_loose(name)?;
    Some(CharSet::from_ranges(
        script_with_extensions().get_script_extensions_ranges(script),
    ))
}

fn binary_set(property: Property) -> Option<CharSet> {
    property
        .code_point_set()
        .map(|set| CharSet::from_ranges(set.iter_ranges()))
}
