//! Conversions between characters, code points, code units and bytes.

use std::fmt;

use encoding_rs::Encoding;
use rayon::prelude::*;
use serde::Serialize;

use crate::constants::{is_high_surrogate, is_low_surrogate, MAX_CODEPOINT, SUPPLEMENTARY_START};
use crate::error::{Error, Result};

/// A code point or code unit, as upper-case hex (`00E9`) or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeValue {
    Hex(String),
    Decimal(u32),
}

impl CodeValue {
    pub fn value(&self) -> Result<u32> {
        match self {
            CodeValue::Decimal(v) => Ok(*v),
            CodeValue::Hex(s) => parse_hex(s),
        }
    }
}

impl From<u32> for CodeValue {
    fn from(v: u32) -> Self {
        CodeValue::Decimal(v)
    }
}

impl From<&str> for CodeValue {
    fn from(s: &str) -> Self {
        CodeValue::Hex(s.to_string())
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeValue::Hex(s) => f.write_str(s),
            CodeValue::Decimal(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Hex,
    Decimal,
}

/// Code point granularity: one value per scalar, or UTF-16 with
/// supplementary characters split into surrogate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodepointForm {
    #[default]
    Utf32,
    Utf16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingForm {
    #[default]
    Utf8,
    Utf16,
    Utf32,
}

impl EncodingForm {
    /// `utf-8`, `utf-16`/`utf-16-be`/`utf-16-le`; anything else is UTF-32.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => EncodingForm::Utf8,
            "utf-16" | "utf-16-be" | "utf-16be" | "utf-16-le" | "utf-16le" | "utf16" => {
                EncodingForm::Utf16
            }
            _ => EncodingForm::Utf32,
        }
    }

    fn digits(self) -> usize {
        match self {
            EncodingForm::Utf8 => 2,
            EncodingForm::Utf16 => 4,
            EncodingForm::Utf32 => 8,
        }
    }

    fn units(self, c: char) -> Vec<u32> {
        match self {
            EncodingForm::Utf8 => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf).bytes().map(u32::from).collect()
            }
            EncodingForm::Utf16 => {
                let mut buf = [0u16; 2];
                c.encode_utf16(&mut buf).iter().map(|&u| u32::from(u)).collect()
            }
            EncodingForm::Utf32 => vec![c as u32],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeUnits {
    Flat(Vec<CodeValue>),
    PerChar(Vec<Vec<CodeValue>>),
}

fn parse_hex(s: &str) -> Result<u32> {
    let digits = s
        .trim()
        .trim_start_matches("U+")
        .trim_start_matches("u+")
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidCodepoint(s.to_string()))
}

fn format_value(v: u32, width: usize, radix: Radix) -> CodeValue {
    match radix {
        Radix::Hex => CodeValue::Hex(format!("{:0width$X}", v, width = width)),
        Radix::Decimal => CodeValue::Decimal(v),
    }
}

pub fn surrogate_pair(ch: char) -> Option<(u16, u16)> {
    let cp = ch as u32;
    if cp < SUPPLEMENTARY_START {
        return None;
    }
    let v = cp - SUPPLEMENTARY_START;
    Some((0xD800 + (v >> 10) as u16, 0xDC00 + (v & 0x3FF) as u16))
}

pub fn combine_surrogates(high: u16, low: u16) -> Result<char> {
    let (hi, lo) = (u32::from(high), u32::from(low));
    if !is_high_surrogate(hi) || !is_low_surrogate(lo) {
        return Err(Error::InvalidCodepoint(format!("{:04X} {:04X}", high, low)));
    }
    let cp = SUPPLEMENTARY_START + ((hi - 0xD800) << 10) + (lo - 0xDC00);
    char::from_u32(cp).ok_or_else(|| Error::InvalidCodepoint(format!("{:04X}", cp)))
}

/// Code points of `text`, as `%04X` strings or numbers.
pub fn chars_to_codepoints(text: &str, radix: Radix, form: CodepointForm) -> Vec<CodeValue> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match (form, surrogate_pair(c)) {
            (CodepointForm::Utf16, Some((hi, lo))) => {
                out.push(format_value(u32::from(hi), 4, radix));
                out.push(format_value(u32::from(lo), 4, radix));
            }
            _ => out.push(format_value(c as u32, 4, radix)),
        }
    }
    out
}

/// Inverse of [`chars_to_codepoints`]. With `CodepointForm::Utf16`
/// surrogate pairs are recombined.
pub fn codepoints_to_chars(values: &[CodeValue], form: CodepointForm) -> Result<String> {
    let numbers = values
        .iter()
        .map(CodeValue::value)
        .collect::<Result<Vec<u32>>>()?;

    let mut out = String::with_capacity(numbers.len());
    let mut iter = numbers.iter().copied().peekable();
    while let Some(v) = iter.next() {
        if form == CodepointForm::Utf16 && is_high_surrogate(v) {
            match iter.peek().copied() {
                Some(lo) if is_low_surrogate(lo) => {
                    iter.next();
                    out.push(combine_surrogates(v as u16, lo as u16)?);
                    continue;
                }
                _ => return Err(Error::InvalidCodepoint(format!("unpaired surrogate {:04X}", v))),
            }
        }
        let c = char::from_u32(v).ok_or_else(|| Error::InvalidCodepoint(format!("{:04X}", v)))?;
        out.push(c);
    }
    Ok(out)
}

/// Code units of `text` in the given encoding form, upper-case hex or
/// decimal. UTF-16 and UTF-32 units are big-endian.
pub fn get_code_units(text: &str, form: EncodingForm, radix: Radix, per_char: bool) -> CodeUnits {
    let width = form.digits();
    let unit_values = |c: char| -> Vec<CodeValue> {
        form.units(c)
            .into_iter()
            .map(|u| format_value(u, width, radix))
            .collect()
    };
    if per_char {
        CodeUnits::PerChar(text.chars().map(unit_values).collect())
    } else {
        CodeUnits::Flat(text.chars().flat_map(unit_values).collect())
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labels for ISO-8859-1 proper. WHATWG resolves these to windows-1252,
/// so they are handled as the identity mapping on U+0000..=U+00FF.
pub(crate) fn is_latin1_label(label: &str) -> bool {
    matches!(
        label.trim().to_ascii_lowercase().replace('_', "-").as_str(),
        "iso-8859-1" | "iso8859-1" | "8859" | "cp819" | "latin" | "latin-1" | "latin1" | "l1"
    )
}

enum ByteEncoder {
    Latin1,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    Whatwg(&'static Encoding),
}

impl ByteEncoder {
    fn for_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-16" | "utf-16-be" | "utf-16be" => return Ok(ByteEncoder::Utf16Be),
            "utf-16-le" | "utf-16le" => return Ok(ByteEncoder::Utf16Le),
            "utf-32" | "utf-32-be" | "utf-32be" => return Ok(ByteEncoder::Utf32Be),
            "utf-32-le" | "utf-32le" => return Ok(ByteEncoder::Utf32Le),
            _ if is_latin1_label(&normalized) => return Ok(ByteEncoder::Latin1),
            _ => {}
        }
        Encoding::for_label(normalized.as_bytes())
            .or_else(|| Encoding::for_label(normalized.replace('-', "").as_bytes()))
            .map(ByteEncoder::Whatwg)
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    fn encode(&self, c: char) -> Option<Vec<u8>> {
        let cp = c as u32;
        match self {
            ByteEncoder::Latin1 => u8::try_from(cp).ok().map(|b| vec![b]),
            ByteEncoder::Utf16Be => {
                let mut buf = [0u16; 2];
                Some(c.encode_utf16(&mut buf).iter().flat_map(|u| u.to_be_bytes()).collect())
            }
            ByteEncoder::Utf16Le => {
                let mut buf = [0u16; 2];
                Some(c.encode_utf16(&mut buf).iter().flat_map(|u| u.to_le_bytes()).collect())
            }
            ByteEncoder::Utf32Be => Some(cp.to_be_bytes().to_vec()),
            ByteEncoder::Utf32Le => Some(cp.to_le_bytes().to_vec()),
            ByteEncoder::Whatwg(encoding) => {
                let mut buf = [0u8; 4];
                let (bytes, _, had_errors) = encoding.encode(c.encode_utf8(&mut buf));
                if had_errors {
                    None
                } else {
                    Some(bytes.into_owned())
                }
            }
        }
    }
}

/// Byte sequence of each character of `text` in `encoding`, as upper-case
/// hex. Characters the encoding cannot represent give an empty string.
pub fn get_bytes(text: &str, encoding: &str) -> Result<Vec<String>> {
    let encoder = ByteEncoder::for_label(encoding)?;
    Ok(text
        .chars()
        .map(|c| encoder.encode(c).map(|b| hex_bytes(&b)).unwrap_or_default())
        .collect())
}

/// Encodes the whole of `text`, for dumping.
pub fn encode_text(text: &str, encoding: &str) -> Result<Vec<u8>> {
    let encoder = ByteEncoder::for_label(encoding)?;
    Ok(text.chars().filter_map(|c| encoder.encode(c)).flatten().collect())
}

/// Parses `0b…`, `0o…`, `0x…`, `U+…` or a literal single character.
pub fn parse_codepoint_input(input: &str) -> Result<char> {
    let s = input.trim();
    let invalid = || Error::InvalidCodepoint(input.to_string());
    let (digits, radix) = if let Some(rest) = s.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = s.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (rest, 16)
    } else if let Some(rest) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        (rest, 16)
    } else {
        let mut chars = input.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::InvalidCharLength(input.chars().count())),
        };
    };
    let value = u32::from_str_radix(digits, radix).map_err(|_| invalid())?;
    char::from_u32(value).ok_or_else(invalid)
}

/// Number of Unicode scalar values for which `pred` holds.
pub fn count_chars_matching<F>(pred: F) -> usize
where
    F: Fn(char) -> bool + Sync,
{
    (0..=MAX_CODEPOINT)
        .into_par_iter()
        .filter_map(char::from_u32)
        .filter(|&c| pred(c))
        .count()
}

/// Scalar values for which `pred` holds, in code point order.
pub fn chars_matching<F>(pred: F) -> Vec<char>
where
    F: Fn(char) -> bool + Sync,
{
    (0..=MAX_CODEPOINT)
        .into_par_iter()
        .filter_map(char::from_u32)
        .filter(|&c| pred(c))
        .collect()
}

/// Canonical hex+ASCII dump, sixteen bytes per line.
pub fn hexdump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(16).enumerate() {
        out.push_str(&format!("{:08x} ", line * 16));
        for i in 0..16 {
            if i == 8 {
                out.push(' ');
            }
            match chunk.get(i) {
                Some(b) => out.push_str(&format!(" {:02x}", b)),
                None => out.push_str("   "),
            }
        }
        out.push_str("  |");
        out.extend(chunk.iter().map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }
    out.push_str(&format!("{:08x}\n", bytes.len()));
    out
}

/// HTML 4 named entity for a code point.
pub fn html_entity_name(cp: u32) -> Option<&'static str> {
    HTML_ENTITIES
        .binary_search_by_key(&cp, |&(c, _)| c)
        .ok()
        .map(|i| HTML_ENTITIES[i].1)
}

const HTML_ENTITIES: &[(u32, &str)] = &[
    (0x0022, "quot"), (0x0026, "amp"), (0x003C, "lt"), (0x003E, "gt"),
    (0x00A0, "nbsp"), (0x00A1, "iexcl"), (0x00A2, "cent"), (0x00A3, "pound"),
    (0x00A4, "curren"), (0x00A5, "yen"), (0x00A6, "brvbar"), (0x00A7, "sect"),
    (0x00A8, "uml"), (0x00A9, "copy"), (0x00AA, "ordf"), (0x00AB, "laquo"),
    (0x00AC, "not"), (0x00AD, "shy"), (0x00AE, "reg"), (0x00AF, "macr"),
    (0x00B0, "deg"), (0x00B1, "plusmn"), (0x00B2, "sup2"), (0x00B3, "sup3"),
    (0x00B4, "acute"), (0x00B5, "micro"), (0x00B6, "para"), (0x00B7, "middot"),
    (0x00B8, "cedil"), (0x00B9, "sup1"), (0x00BA, "ordm"), (0x00BB, "raquo"),
    (0x00BC, "frac14"), (0x00BD, "frac12"), (0x00BE, "frac34"), (0x00BF, "iquest"),
    (0x00C0, "Agrave"), (0x00C1, "Aacute"), (0x00C2, "Acirc"), (0x00C3, "Atilde"),
    (0x00C4, "Auml"), (0x00C5, "Aring"), (0x00C6, "AElig"), (0x00C7, "Ccedil"),
    (0x00C8, "Egrave"), (0x00C9, "Eacute"), (0x00CA, "Ecirc"), (0x00CB, "Euml"),
    (0x00CC, "Igrave"), (0x00CD, "Iacute"), (0x00CE, "Icirc"), (0x00CF, "Iuml"),
    (0x00D0, "ETH"), (0x00D1, "Ntilde"), (0x00D2, "Ograve"), (0x00D3, "Oacute"),
    (0x00D4, "Ocirc"), (0x00D5, "Otilde"), (0x00D6, "Ouml"), (0x00D7, "times"),
    (0x00D8, "Oslash"), (0x00D9, "Ugrave"), (0x00DA, "Uacute"), (0x00DB, "Ucirc"),
    (0x00DC, "Uuml"), (0x00DD, "Yacute"), (0x00DE, "THORN"), (0x00DF, "szlig"),
    (0x00E0, "agrave"), (0x00E1, "aacute"), (0x00E2, "acirc"), (0x00E3, "atilde"),
    (0x00E4, "auml"), (0x00E5, "aring"), (0x00E6, "aelig"), (0x00E7, "ccedil"),
    (0x00E8, "egrave"), (0x00E9, "eacute"), (0x00EA, "ecirc"), (0x00EB, "euml"),
    (0x00EC, "igrave"), (0x00ED, "iacute"), (0x00EE, "icirc"), (0x00EF, "iuml"),
    (0x00F0, "eth"), (0x00F1, "ntilde"), (0x00F2, "ograve"), (0x00F3, "oacute"),
    (0x00F4, "ocirc"), (0x00F5, "otilde"), (0x00F6, "ouml"), (0x00F7, "divide"),
    (0x00F8, "oslash"), (0x00F9, "ugrave"), (0x00FA, "uacute"), (0x00FB, "ucirc"),
    (0x00FC, "uuml"), (0x00FD, "yacute"), (0x00FE, "thorn"), (0x00FF, "yuml"),
    (0x0152, "OElig"), (0x0153, "oelig"), (0x0160, "Scaron"), (0x0161, "scaron"),
    (0x0178, "Yuml"), (0x0192, "fnof"), (0x02C6, "circ"), (0x02DC, "tilde"),
    (0x0391, "Alpha"), (0x0392, "Beta"), (0x0393, "Gamma"), (0x0394, "Delta"),
    (0x0395, "Epsilon"), (0x0396, "Zeta"), (0x0397, "Eta"), (0x0398, "Theta"),
    (0x0399, "Iota"), (0x039A, "Kappa"), (0x039B, "Lambda"), (0x039C, "Mu"),
    (0x039D, "Nu"), (0x039E, "Xi"), (0x039F, "Omicron"), (0x03A0, "Pi"),
    (0x03A1, "Rho"), (0x03A3, "Sigma"), (0x03A4, "Tau"), (0x03A5, "Upsilon"),
    (0x03A6, "Phi"), (0x03A7, "Chi"), (0x03A8, "Psi"), (0x03A9, "Omega"),
    (0x03B1, "alpha"), (0x03B2, "beta"), (0x03B3, "gamma"), (0x03B4, "delta"),
    (0x03B5, "epsilon"), (0x03B6, "zeta"), (0x03B7, "eta"), (0x03B8, "theta"),
    (0x03B9, "iota"), (0x03BA, "kappa"), (0x03BB, "lambda"), (0x03BC, "mu"),
    (0x03BD, "nu"), (0x03BE, "xi"), (0x03BF, "omicron"), (0x03C0, "pi"),
    (0x03C1, "rho"), (0x03C2, "sigmaf"), (0x03C3, "sigma"), (0x03C4, "tau"),
    (0x03C5, "upsilon"), (0x03C6, "phi"), (0x03C7, "chi"), (0x03C8, "psi"),
    (0x03C9, "omega"), (0x03D1, "thetasym"), (0x03D2, "upsih"), (0x03D6, "piv"),
    (0x2002, "ensp"), (0x2003, "emsp"), (0x2009, "thinsp"), (0x200C, "zwnj"),
    (0x200D, "zwj"), (0x200E, "lrm"), (0x200F, "rlm"), (0x2013, "ndash"),
    (0x2014, "mdash"), (0x2018, "lsquo"), (0x2019, "rsquo"), (0x201A, "sbquo"),
    (0x201C, "ldquo"), (0x201D, "rdquo"), (0x201E, "bdquo"), (0x2020, "dagger"),
    (0x2021, "Dagger"), (0x2022, "bull"), (0x2026, "hellip"), (0x2030, "permil"),
    (0x2032, "prime"), (0x2033, "Prime"), (0x2039, "lsaquo"), (0x203A, "rsaquo"),
    (0x203E, "oline"), (0x2044, "frasl"), (0x20AC, "euro"), (0x2111, "image"),
    (0x2118, "weierp"), (0x211C, "real"), (0x2122, "trade"), (0x2135, "alefsym"),
    (0x2190, "larr"), (0x2191, "uarr"), (0x2192, "rarr"), (0x2193, "darr"),
    (0x2194, "harr"), (0x21B5, "crarr"), (0x21D0, "lArr"), (0x21D1, "uArr"),
    (0x21D2, "rArr"), (0x21D3, "dArr"), (0x21D4, "hArr"), (0x2200, "forall"),
    (0x2202, "part"), (0x2203, "exist"), (0x2205, "empty"), (0x2207, "nabla"),
    (0x2208, "isin"), (0x2209, "notin"), (0x220B, "ni"), (0x220F, "prod"),
    (0x2211, "sum"), (0x2212, "minus"), (0x2217, "lowast"), (0x221A, "radic"),
    (0x221D, "prop"), (0x221E, "infin"), (0x2220, "ang"), (0x2227, "and"),
    (0x2228, "or"), (0x2229, "cap"), (0x222A, "cup"), (0x222B, "int"),
    (0x2234, "there4"), (0x223C, "sim"), (0x2245, "cong"), (0x2248, "asymp"),
    (0x2260, "ne"), (0x2261, "equiv"), (0x2264, "le"), (0x2265, "ge"),
    (0x2282, "sub"), (0x2283, "sup"), (0x2284, "nsub"), (0x2286, "sube"),
    (0x2287, "supe"), (0x2295, "oplus"), (0x2297, "otimes"), (0x22A5, "perp"),
    (0x22C5, "sdot"), (0x2308, "lceil"), (0x2309, "rceil"), (0x230A, "lfloor"),
    (0x230B, "rfloor"), (0x2329, "lang"), (0x232A, "rang"), (0x25CA, "loz"),
    (0x2660, "spades"), (0x2663, "clubs"), (0x2665, "hearts"), (0x2666, "diams"),
];
