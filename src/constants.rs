// Ethiopic Unicode Ranges
pub const ETHIOPIC_START: char = '\u{1200}';
pub const ETHIOPIC_END: char = '\u{137F}';
pub const ETHIOPIC_SUPPLEMENT_START: char = '\u{1380}';
pub const ETHIOPIC_SUPPLEMENT_END: char = '\u{139F}';
pub const ETHIOPIC_EXTENDED_START: char = '\u{2D80}';
pub const ETHIOPIC_EXTENDED_END: char = '\u{2DDF}';
pub const ETHIOPIC_EXTENDED_A_START: char = '\u{AB00}';
pub const ETHIOPIC_EXTENDED_A_END: char = '\u{AB2F}';
pub const ETHIOPIC_EXTENDED_B_START: char = '\u{1E7E0}';
pub const ETHIOPIC_EXTENDED_B_END: char = '\u{1E7FF}';

/// Last syllable of the Ethiopic block laid out in rows of eight.
pub const SYLLABARY_ROW_END: u32 = 0x1357;

/// Labialised rows of the Ethiopic block. Each belongs to the family
/// of the row immediately before it.
pub const LABIALISED_ROWS: [u32; 6] = [0x1248, 0x1258, 0x1288, 0x12B0, 0x12C0, 0x1310];

// UTF-16
pub const HIGH_SURROGATE_START: u32 = 0xD800;
pub const HIGH_SURROGATE_END: u32 = 0xDBFF;
pub const LOW_SURROGATE_START: u32 = 0xDC00;
pub const LOW_SURROGATE_END: u32 = 0xDFFF;
pub const SUPPLEMENTARY_START: u32 = 0x10000;
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

pub const ASCII_MAX: u32 = 0x7F;

pub fn is_ethiopic_char(c: char) -> bool {
    (c >= ETHIOPIC_START && c <= ETHIOPIC_END)
        || (c >= ETHIOPIC_SUPPLEMENT_START && c <= ETHIOPIC_SUPPLEMENT_END)
        || (c >= ETHIOPIC_EXTENDED_START && c <= ETHIOPIC_EXTENDED_END)
        || (c >= ETHIOPIC_EXTENDED_A_START && c <= ETHIOPIC_EXTENDED_A_END)
        || (c >= ETHIOPIC_EXTENDED_B_START && c <= ETHIOPIC_EXTENDED_B_END)
}

pub fn is_row_syllable(c: char) -> bool {
    let code = c as u32;
    code >= 0x1200 && code <= SYLLABARY_ROW_END
}

pub fn is_combining_mark(c: char) -> bool {
    let code = c as u32;
    code >= 0x135D && code <= 0x135F
}

pub fn is_punctuation(c: char) -> bool {
    let code = c as u32;
    code >= 0x1360 && code <= 0x1368
}

pub fn is_numeral(c: char) -> bool {
    let code = c as u32;
    code >= 0x1369 && code <= 0x137C
}

/// Start of the eight-syllable row containing `c`.
pub fn row_start(c: char) -> u32 {
    (c as u32) & !0x7
}

pub fn is_high_surrogate(unit: u32) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= HIGH_SURROGATE_END
}

pub fn is_low_surrogate(unit: u32) -> bool {
    unit >= LOW_SURROGATE_START && unit <= LOW_SURROGATE_END
}

pub fn is_surrogate(unit: u32) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= LOW_SURROGATE_END
}

pub fn is_iso_control(c: char) -> bool {
    let code = c as u32;
    code <= 0x1F || (code >= 0x7F && code <= 0x9F)
}

pub fn is_noncharacter(code: u32) -> bool {
    (code >= 0xFDD0 && code <= 0xFDEF) || (code & 0xFFFE) == 0xFFFE
}
