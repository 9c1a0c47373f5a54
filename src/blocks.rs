//! Unicode 16.0 block table.

/// A named block of contiguous code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl Block {
    pub fn contains(&self, c: char) -> bool {
        let code = c as u32;
        code >= self.start && code <= self.end
    }

    /// Property-value form of the block name, e.g. `Latin_Extended-A`.
    pub fn code(&self) -> String {
        self.name.replace(' ', "_")
    }

    /// Lower-case label used as a lookup key, e.g. `latin_extended-a`.
    pub fn label(&self) -> String {
        prep_label(self.name)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Scalar values in the block, skipping surrogates.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.start..=self.end).filter_map(char::from_u32)
    }
}

pub const NO_BLOCK: &str = "No_Block";

pub fn prep_label(label: &str) -> String {
    label.replace(' ', "_").to_lowercase()
}

fn loose_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn block_of(c: char) -> Option<&'static Block> {
    let code = c as u32;
    BLOCKS
        .binary_search_by(|b| {
            if b.end < code {
                std::cmp::Ordering::Less
            } else if b.start > code {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|i| &BLOCKS[i])
}

/// Finds a block ignoring case, spaces, underscores and hyphens.
pub fn block_by_name(name: &str) -> Option<&'static Block> {
    let key = loose_key(name);
    BLOCKS.iter().find(|b| loose_key(b.name) == key)
}

pub const BLOCKS: &[Block] = &[
    Block { name: "Basic Latin", start: 0x0000, end: 0x007F },
    Block { name: "Latin-1 Supplement", start: 0x0080, end: 0x00FF },
    Block { name: "Latin Extended-A", start: 0x0100, end: 0x017F },
    Block { name: "Latin Extended-B", start: 0x0180, end: 0x024F },
    Block { name: "IPA Extensions", start: 0x0250, end: 0x02AF },
    Block { name: "Spacing Modifier Letters", start: 0x02B0, end: 0x02FF },
    Block { name: "Combining Diacritical Marks", start: 0x0300, end: 0x036F },
    Block { name: "Greek and Coptic", start: 0x0370, end: 0x03FF },
    Block { name: "Cyrillic", start: 0x0400, end: 0x04FF },
    Block { name: "Cyrillic Supplement", start: 0x0500, end: 0x052F },
    Block { name: "Armenian", start: 0x0530, end: 0x058F },
    Block { name: "Hebrew", start: 0x0590, end: 0x05FF },
    Block { name: "Arabic", start: 0x0600, end: 0x06FF },
    Block { name: "Syriac", start: 0x0700, end: 0x074F },
    Block { name: "Arabic Supplement", start: 0x0750, end: 0x077F },
    Block { name: "Thaana", start: 0x0780, end: 0x07BF },
    Block { name: "NKo", start: 0x07C0, end: 0x07FF },
    Block { name: "Samaritan", start: 0x0800, end: 0x083F },
    Block { name: "Mandaic", start: 0x0840, end: 0x085F },
    Block { name: "Syriac Supplement", start: 0x0860, end: 0x086F },
    Block { name: "Arabic Extended-B", start: 0x0870, end: 0x089F },
    Block { name: "Arabic Extended-A", start: 0x08A0, end: 0x08FF },
    Block { name: "Devanagari", start: 0x0900, end: 0x097F },
    Block { name: "Bengali", start: 0x0980, end: 0x09FF },
    Block { name: "Gurmukhi", start: 0x0A00, end: 0x0A7F },
    Block { name: "Gujarati", start: 0x0A80, end: 0x0AFF },
    Block { name: "Oriya", start: 0x0B00, end: 0x0B7F },
    Block { name: "Tamil", start: 0x0B80, end: 0x0BFF },
    Block { name: "Telugu", start: 0x0C00, end: 0x0C7F },
    Block { name: "Kannada", start: 0x0C80, end: 0x0CFF },
    Block { name: "Malayalam", start: 0x0D00, end: 0x0D7F },
    Block { name: "Sinhala", start: 0x0D80, end: 0x0DFF },
    Block { name: "Thai", start: 0x0E00, end: 0x0E7F },
    Block { name: "Lao", start: 0x0E80, end: 0x0EFF },
    Block { name: "Tibetan", start: 0x0F00, end: 0x0FFF },
    Block { name: "Myanmar", start: 0x1000, end: 0x109F },
    Block { name: "Georgian", start: 0x10A0, end: 0x10FF },
    Block { name: "Hangul Jamo", start: 0x1100, end: 0x11FF },
    Block { name: "Ethiopic", start: 0x1200, end: 0x137F },
    Block { name: "Ethiopic Supplement", start: 0x1380, end: 0x139F },
    Block { name: "Cherokee", start: 0x13A0, end: 0x13FF },
    Block { name: "Unified Canadian Aboriginal Syllabics", start: 0x1400, end: 0x167F },
    Block { name: "Ogham", start: 0x1680, end: 0x169F },
    Block { name: "Runic", start: 0x16A0, end: 0x16FF },
    Block { name: "Tagalog", start: 0x1700, end: 0x171F },
    Block { name: "Hanunoo", start: 0x1720, end: 0x173F },
    Block { name: "Buhid", start: 0x1740, end: 0x175F },
    Block { name: "Tagbanwa", start: 0x1760, end: 0x177F },
    Block { name: "Khmer", start: 0x1780, end: 0x17FF },
    Block { name: "Mongolian", start: 0x1800, end: 0x18AF },
    Block { name: "Unified Canadian Aboriginal Syllabics Extended", start: 0x18B0, end: 0x18FF },
    Block { name: "Limbu", start: 0x1900, end: 0x194F },
    Block { name: "Tai Le", start: 0x1950, end: 0x197F },
    Block { name: "New Tai Lue", start: 0x1980, end: 0x19DF },
    Block { name: "Khmer Symbols", start: 0x19E0, end: 0x19FF },
    Block { name: "Buginese", start: 0x1A00, end: 0x1A1F },
    Block { name: "Tai Tham", start: 0x1A20, end: 0x1AAF },
    Block { name: "Combining Diacritical Marks Extended", start: 0x1AB0, end: 0x1AFF },
    Block { name: "Balinese", start: 0x1B00, end: 0x1B7F },
    Block { name: "Sundanese", start: 0x1B80, end: 0x1BBF },
    Block { name: "Batak", start: 0x1BC0, end: 0x1BFF },
    Block { name: "Lepcha", start: 0x1C00, end: 0x1C4F },
    Block { name: "Ol Chiki", start: 0x1C50, end: 0x1C7F },
    Block { name: "Cyrillic Extended-C", start: 0x1C80, end: 0x1C8F },
    Block { name: "Georgian Extended", start: 0x1C90, end: 0x1CBF },
    Block { name: "Sundanese Supplement", start: 0x1CC0, end: 0x1CCF },
    Block { name: "Vedic Extensions", start: 0x1CD0, end: 0x1CFF },
    Block { name: "Phonetic Extensions", start: 0x1D00, end: 0x1D7F },
    Block { name: "Phonetic Extensions Supplement", start: 0x1D80, end: 0x1DBF },
    Block { name: "Combining Diacritical Marks Supplement", start: 0x1DC0, end: 0x1DFF },
    Block { name: "Latin Extended Additional", start: 0x1E00, end: 0x1EFF },
    Block { name: "Greek Extended", start: 0x1F00, end: 0x1FFF },
    Block { name: "General Punctuation", start: 0x2000, end: 0x206F },
    Block { name: "Superscripts and Subscripts", start: 0x2070, end: 0x209F },
    Block { name: "Currency Symbols", start: 0x20A0, end: 0x20CF },
    Block { name: "Combining Diacritical Marks for Symbols", start: 0x20D0, end: 0x20FF },
    Block { name: "Letterlike Symbols", start: 0x2100, end: 0x214F },
    Block { name: "Number Forms", start: 0x2150, end: 0x218F },
    Block { name: "Arrows", start: 0x2190, end: 0x21FF },
    Block { name: "Mathematical Operators", start: 0x2200, end: 0x22FF },
    Block { name: "Miscellaneous Technical", start: 0x2300, end: 0x23FF },
    Block { name: "Control Pictures", start: 0x2400, end: 0x243F },
    Block { name: "Optical Character Recognition", start: 0x2440, end: 0x245F },
    Block { name: "Enclosed Alphanumerics", start: 0x2460, end: 0x24FF },
    Block { name: "Box Drawing", start: 0x2500, end: 0x257F },
    Block { name: "Block Elements", start: 0x2580, end: 0x259F },
    Block { name: "Geometric Shapes", start: 0x25A0, end: 0x25FF },
    Block { name: "Miscellaneous Symbols", start: 0x2600, end: 0x26FF },
    Block { name: "Dingbats", start: 0x2700, end: 0x27BF },
    Block { name: "Miscellaneous Mathematical Symbols-A", start: 0x27C0, end: 0x27EF },
    Block { name: "Supplemental Arrows-A", start: 0x27F0, end: 0x27FF },
    Block { name: "Braille Patterns", start: 0x2800, end: 0x28FF },
    Block { name: "Supplemental Arrows-B", start: 0x2900, end: 0x297F },
    Block { name: "Miscellaneous Mathematical Symbols-B", start: 0x2980, end: 0x29FF },
    Block { name: "Supplemental Mathematical Operators", start: 0x2A00, end: 0x2AFF },
    Block { name: "Miscellaneous Symbols and Arrows", start: 0x2B00, end: 0x2BFF },
    Block { name: "Glagolitic", start: 0x2C00, end: 0x2C5F },
    Block { name: "Latin Extended-C", start: 0x2C60, end: 0x2C7F },
    Block { name: "Coptic", start: 0x2C80, end: 0x2CFF },
    Block { name: "Georgian Supplement", start: 0x2D00, end: 0x2D2F },
    Block { name: "Tifinagh", start: 0x2D30, end: 0x2D7F },
    Block { name: "Ethiopic Extended", start: 0x2D80, end: 0x2DDF },
    Block { name: "Cyrillic Extended-A", start: 0x2DE0, end: 0x2DFF },
    Block { name: "Supplemental Punctuation", start: 0x2E00, end: 0x2E7F },
    Block { name: "CJK Radicals Supplement", start: 0x2E80, end: 0x2EFF },
    Block { name: "Kangxi Radicals", start: 0x2F00, end: 0x2FDF },
    Block { name: "Ideographic Description Characters", start: 0x2FF0, end: 0x2FFF },
    Block { name: "CJK Symbols and Punctuation", start: 0x3000, end: 0x303F },
    Block { name: "Hiragana", start: 0x3040, end: 0x309F },
    Block { name: "Katakana", start: 0x30A0, end: 0x30FF },
    Block { name: "Bopomofo", start: 0x3100, end: 0x312F },
    Block { name: "Hangul Compatibility Jamo", start: 0x3130, end: 0x318F },
    Block { name: "Kanbun", start: 0x3190, end: 0x319F },
    Block { name: "Bopomofo Extended", start: 0x31A0, end: 0x31BF },
    Block { name: "CJK Strokes", start: 0x31C0, end: 0x31EF },
    Block { name: "Katakana Phonetic Extensions", start: 0x31F0, end: 0x31FF },
    Block { name: "Enclosed CJK Letters and Months", start: 0x3200, end: 0x32FF },
    Block { name: "CJK Compatibility", start: 0x3300, end: 0x33FF },
    Block { name: "CJK Unified Ideographs Extension A", start: 0x3400, end: 0x4DBF },
    Block { name: "Yijing Hexagram Symbols", start: 0x4DC0, end: 0x4DFF },
    Block { name: "CJK Unified Ideographs", start: 0x4E00, end: 0x9FFF },
    Block { name: "Yi Syllables", start: 0xA000, end: 0xA48F },
    Block { name: "Yi Radicals", start: 0xA490, end: 0xA4CF },
    Block { name: "Lisu", start: 0xA4D0, end: 0xA4FF },
    Block { name: "Vai", start: 0xA500, end: 0xA63F },
    Block { name: "Cyrillic Extended-B", start: 0xA640, end: 0xA69F },
    Block { name: "Bamum", start: 0xA6A0, end: 0xA6FF },
    Block { name: "Modifier Tone Letters", start: 0xA700, end: 0xA71F },
    Block { name: "Latin Extended-D", start: 0xA720, end: 0xA7FF },
    Block { name: "Syloti Nagri", start: 0xA800, end: 0xA82F },
    Block { name: "Common Indic Number Forms", start: 0xA830, end: 0xA83F },
    Block { name: "Phags-pa", start: 0xA840, end: 0xA87F },
    Block { name: "Saurashtra", start: 0xA880, end: 0xA8DF },
    Block { name: "Devanagari Extended", start: 0xA8E0, end: 0xA8FF },
    Block { name: "Kayah Li", start: 0xA900, end: 0xA92F },
    Block { name: "Rejang", start: 0xA930, end: 0xA95F },
    Block { name: "Hangul Jamo Extended-A", start: 0xA960, end: 0xA97F },
    Block { name: "Javanese", start: 0xA980, end: 0xA9DF },
    Block { name: "Myanmar Extended-B", start: 0xA9E0, end: 0xA9FF },
    Block { name: "Cham", start: 0xAA00, end: 0xAA5F },
    Block { name: "Myanmar Extended-A", start: 0xAA60, end: 0xAA7F },
    Block { name: "Tai Viet", start: 0xAA80, end: 0xAADF },
    Block { name: "Meetei Mayek Extensions", start: 0xAAE0, end: 0xAAFF },
    Block { name: "Ethiopic Extended-A", start: 0xAB00, end: 0xAB2F },
    Block { name: "Latin Extended-E", start: 0xAB30, end: 0xAB6F },
    Block { name: "Cherokee Supplement", start: 0xAB70, end: 0xABBF },
    Block { name: "Meetei Mayek", start: 0xABC0, end: 0xABFF },
    Block { name: "Hangul Syllables", start: 0xAC00, end: 0xD7AF },
    Block { name: "Hangul Jamo Extended-B", start: 0xD7B0, end: 0xD7FF },
    Block { name: "High Surrogates", start: 0xD800, end: 0xDB7F },
    Block { name: "High Private Use Surrogates", start: 0xDB80, end: 0xDBFF },
    Block { name: "Low Surrogates", start: 0xDC00, end: 0xDFFF },
    Block { name: "Private Use Area", start: 0xE000, end: 0xF8FF },
    Block { name: "CJK Compatibility Ideographs", start: 0xF900, end: 0xFAFF },
    Block { name: "Alphabetic Presentation Forms", start: 0xFB00, end: 0xFB4F },
    Block { name: "Arabic Presentation Forms-A", start: 0xFB50, end: 0xFDFF },
    Block { name: "Variation Selectors", start: 0xFE00, end: 0xFE0F },
    Block { name: "Vertical Forms", start: 0xFE10, end: 0xFE1F },
    Block { name: "Combining Half Marks", start: 0xFE20, end: 0xFE2F },
    Block { name: "CJK Compatibility Forms", start: 0xFE30, end: 0xFE4F },
    Block { name: "Small Form Variants", start: 0xFE50, end: 0xFE6F },
    Block { name: "Arabic Presentation Forms-B", start: 0xFE70, end: 0xFEFF },
    Block { name: "Halfwidth and Fullwidth Forms", start: 0xFF00, end: 0xFFEF },
    Block { name: "Specials", start: 0xFFF0, end: 0xFFFF },
    Block { name: "Linear B Syllabary", start: 0x10000, end: 0x1007F },
    Block { name: "Linear B Ideograms", start: 0x10080, end: 0x100FF },
    Block { name: "Aegean Numbers", start: 0x10100, end: 0x1013F },
    Block { name: "Ancient Greek Numbers", start: 0x10140, end: 0x1018F },
    Block { name: "Ancient Symbols", start: 0x10190, end: 0x101CF },
    Block { name: "Phaistos Disc", start: 0x101D0, end: 0x101FF },
    Block { name: "Lycian", start: 0x10280, end: 0x1029F },
    Block { name: "Carian", start: 0x102A0, end: 0x102DF },
    Block { name: "Coptic Epact Numbers", start: 0x102E0, end: 0x102FF },
    Block { name: "Old Italic", start: 0x10300, end: 0x1032F },
    Block { name: "Gothic", start: 0x10330, end: 0x1034F },
    Block { name: "Old Permic", start: 0x10350, end: 0x1037F },
    Block { name: "Ugaritic", start: 0x10380, end: 0x1039F },
    Block { name: "Old Persian", start: 0x103A0, end: 0x103DF },
    Block { name: "Deseret", start: 0x10400, end: 0x1044F },
    Block { name: "Shavian", start: 0x10450, end: 0x1047F },
    Block { name: "Osmanya", start: 0x10480, end: 0x104AF },
    Block { name: "Osage", start: 0x104B0, end: 0x104FF },
    Block { name: "Elbasan", start: 0x10500, end: 0x1052F },
    Block { name: "Caucasian Albanian", start: 0x10530, end: 0x1056F },
    Block { name: "Vithkuqi", start: 0x10570, end: 0x105BF },
    Block { name: "Todhri", start: 0x105C0, end: 0x105FF },
    Block { name: "Linear A", start: 0x10600, end: 0x1077F },
    Block { name: "Latin Extended-F", start: 0x10780, end: 0x107BF },
    Block { name: "Cypriot Syllabary", start: 0x10800, end: 0x1083F },
    Block { name: "Imperial Aramaic", start: 0x10840, end: 0x1085F },
    Block { name: "Palmyrene", start: 0x10860, end: 0x1087F },
    Block { name: "Nabataean", start: 0x10880, end: 0x108AF },
    Block { name: "Hatran", start: 0x108E0, end: 0x108FF },
    Block { name: "Phoenician", start: 0x10900, end: 0x1091F },
    Block { name: "Lydian", start: 0x10920, end: 0x1093F },
    Block { name: "Meroitic Hieroglyphs", start: 0x10980, end: 0x1099F },
    Block { name: "Meroitic Cursive", start: 0x109A0, end: 0x109FF },
    Block { name: "Kharoshthi", start: 0x10A00, end: 0x10A5F },
    Block { name: "Old South Arabian", start: 0x10A60, end: 0x10A7F },
    Block { name: "Old North Arabian", start: 0x10A80, end: 0x10A9F },
    Block { name: "Manichaean", start: 0x10AC0, end: 0x10AFF },
    Block { name: "Avestan", start: 0x10B00, end: 0x10B3F },
    Block { name: "Inscriptional Parthian", start: 0x10B40, end: 0x10B5F },
    Block { name: "Inscriptional Pahlavi", start: 0x10B60, end: 0x10B7F },
    Block { name: "Psalter Pahlavi", start: 0x10B80, end: 0x10BAF },
    Block { name: "Old Turkic", start: 0x10C00, end: 0x10C4F },
    Block { name: "Old Hungarian", start: 0x10C80, end: 0x10CFF },
    Block { name: "Hanifi Rohingya", start: 0x10D00, end: 0x10D3F },
    Block { name: "Garay", start: 0x10D40, end: 0x10D8F },
    Block { name: "Rumi Numeral Symbols", start: 0x10E60, end: 0x10E7F },
    Block { name: "Yezidi", start: 0x10E80, end: 0x10EBF },
    Block { name: "Arabic Extended-C", start: 0x10EC0, end: 0x10EFF },
    Block { name: "Old Sogdian", start: 0x10F00, end: 0x10F2F },
    Block { name: "Sogdian", start: 0x10F30, end: 0x10F6F },
    Block { name: "Old Uyghur", start: 0x10F70, end: 0x10FAF },
    Block { name: "Chorasmian", start: 0x10FB0, end: 0x10FDF },
    Block { name: "Elymaic", start: 0x10FE0, end: 0x10FFF },
    Block { name: "Brahmi", start: 0x11000, end: 0x1107F },
    Block { name: "Kaithi", start: 0x11080, end: 0x110CF },
    Block { name: "Sora Sompeng", start: 0x110D0, end: 0x110FF },
    Block { name: "Chakma", start: 0x11100, end: 0x1114F },
    Block { name: "Mahajani", start: 0x11150, end: 0x1117F },
    Block { name: "Sharada", start: 0x11180, end: 0x111DF },
    Block { name: "Sinhala Archaic Numbers", start: 0x111E0, end: 0x111FF },
    Block { name: "Khojki", start: 0x11200, end: 0x1124F },
    Block { name: "Multani", start: 0x11280, end: 0x112AF },
    Block { name: "Khudawadi", start: 0x112B0, end: 0x112FF },
    Block { name: "Grantha", start: 0x11300, end: 0x1137F },
    Block { name: "Tulu-Tigalari", start: 0x11380, end: 0x113FF },
    Block { name: "Newa", start: 0x11400, end: 0x1147F },
    Block { name: "Tirhuta", start: 0x11480, end: 0x114DF },
    Block { name: "Siddham", start: 0x11580, end: 0x115FF },
    Block { name: "Modi", start: 0x11600, end: 0x1165F },
    Block { name: "Mongolian Supplement", start: 0x11660, end: 0x1167F },
    Block { name: "Takri", start: 0x11680, end: 0x116CF },
    Block { name: "Myanmar Extended-C", start: 0x116D0, end: 0x116FF },
    Block { name: "Ahom", start: 0x11700, end: 0x1174F },
    Block { name: "Dogra", start: 0x11800, end: 0x1184F },
    Block { name: "Warang Citi", start: 0x118A0, end: 0x118FF },
    Block { name: "Dives Akuru", start: 0x11900, end: 0x1195F },
    Block { name: "Nandinagari", start: 0x119A0, end: 0x119FF },
    Block { name: "Zanabazar Square", start: 0x11A00, end: 0x11A4F },
    Block { name: "Soyombo", start: 0x11A50, end: 0x11AAF },
    Block { name: "Unified Canadian Aboriginal Syllabics Extended-A", start: 0x11AB0, end: 0x11ABF },
    Block { name: "Pau Cin Hau", start: 0x11AC0, end: 0x11AFF },
    Block { name: "Devanagari Extended-A", start: 0x11B00, end: 0x11B5F },
    Block { name: "Sunuwar", start: 0x11BC0, end: 0x11BFF },
    Block { name: "Bhaiksuki", start: 0x11C00, end: 0x11C6F },
    Block { name: "Marchen", start: 0x11C70, end: 0x11CBF },
    Block { name: "Masaram Gondi", start: 0x11D00, end: 0x11D5F },
    Block { name: "Gunjala Gondi", start: 0x11D60, end: 0x11DAF },
    Block { name: "Makasar", start: 0x11EE0, end: 0x11EFF },
    Block { name: "Kawi", start: 0x11F00, end: 0x11F5F },
    Block { name: "Lisu Supplement", start: 0x11FB0, end: 0x11FBF },
    Block { name: "Tamil Supplement", start: 0x11FC0, end: 0x11FFF },
    Block { name: "Cuneiform", start: 0x12000, end: 0x123FF },
    Block { name: "Cuneiform Numbers and Punctuation", start: 0x12400, end: 0x1247F },
    Block { name: "Early Dynastic Cuneiform", start: 0x12480, end: 0x1254F },
    Block { name: "Cypro-Minoan", start: 0x12F90, end: 0x12FFF },
    Block { name: "Egyptian Hieroglyphs", start: 0x13000, end: 0x1342F },
    Block { name: "Egyptian Hieroglyph Format Controls", start: 0x13430, end: 0x1345F },
    Block { name: "Egyptian Hieroglyphs Extended-A", start: 0x13460, end: 0x143FF },
    Block { name: "Anatolian Hieroglyphs", start: 0x14400, end: 0x1467F },
    Block { name: "Gurung Khema", start: 0x16100, end: 0x1613F },
    Block { name: "Bamum Supplement", start: 0x16800, end: 0x16A3F },
    Block { name: "Mro", start: 0x16A40, end: 0x16A6F },
    Block { name: "Tangsa", start: 0x16A70, end: 0x16ACF },
    Block { name: "Bassa Vah", start: 0x16AD0, end: 0x16AFF },
    Block { name: "Pahawh Hmong", start: 0x16B00, end: 0x16B8F },
    Block { name: "Kirat Rai", start: 0x16D40, end: 0x16D7F },
    Block { name: "Medefaidrin", start: 0x16E40, end: 0x16E9F },
    Block { name: "Miao", start: 0x16F00, end: 0x16F9F },
    Block { name: "Ideographic Symbols and Punctuation", start: 0x16FE0, end: 0x16FFF },
    Block { name: "Tangut", start: 0x17000, end: 0x187FF },
    Block { name: "Tangut Components", start: 0x18800, end: 0x18AFF },
    Block { name: "Khitan Small Script", start: 0x18B00, end: 0x18CFF },
    Block { name: "Tangut Supplement", start: 0x18D00, end: 0x18D7F },
    Block { name: "Kana Extended-B", start: 0x1AFF0, end: 0x1AFFF },
    Block { name: "Kana Supplement", start: 0x1B000, end: 0x1B0FF },
    Block { name: "Kana Extended-A", start: 0x1B100, end: 0x1B12F },
    Block { name: "Small Kana Extension", start: 0x1B130, end: 0x1B16F },
    Block { name: "Nushu", start: 0x1B170, end: 0x1B2FF },
    Block { name: "Duployan", start: 0x1BC00, end: 0x1BC9F },
    Block { name: "Shorthand Format Controls", start: 0x1BCA0, end: 0x1BCAF },
    Block { name: "Symbols for Legacy Computing Supplement", start: 0x1CC00, end: 0x1CEBF },
    Block { name: "Znamenny Musical Notation", start: 0x1CF00, end: 0x1CFCF },
    Block { name: "Byzantine Musical Symbols", start: 0x1D000, end: 0x1D0FF },
    Block { name: "Musical Symbols", start: 0x1D100, end: 0x1D1FF },
    Block { name: "Ancient Greek Musical Notation", start: 0x1D200, end: 0x1D24F },
    Block { name: "Kaktovik Numerals", start: 0x1D2C0, end: 0x1D2DF },
    Block { name: "Mayan Numerals", start: 0x1D2E0, end: 0x1D2FF },
    Block { name: "Tai Xuan Jing Symbols", start: 0x1D300, end: 0x1D35F },
    Block { name: "Counting Rod Numerals", start: 0x1D360, end: 0x1D37F },
    Block { name: "Mathematical Alphanumeric Symbols", start: 0x1D400, end: 0x1D7FF },
    Block { name: "Sutton SignWriting", start: 0x1D800, end: 0x1DAAF },
    Block { name: "Latin Extended-G", start: 0x1DF00, end: 0x1DFFF },
    Block { name: "Glagolitic Supplement", start: 0x1E000, end: 0x1E02F },
    Block { name: "Cyrillic Extended-D", start: 0x1E030, end: 0x1E08F },
    Block { name: "Nyiakeng Puachue Hmong", start: 0x1E100, end: 0x1E14F },
    Block { name: "Toto", start: 0x1E290, end: 0x1E2BF },
    Block { name: "Wancho", start: 0x1E2C0, end: 0x1E2FF },
    Block { name: "Nag Mundari", start: 0x1E4D0, end: 0x1E4FF },
    Block { name: "Ol Onal", start: 0x1E5D0, end: 0x1E5FF },
    Block { name: "Ethiopic Extended-B", start: 0x1E7E0, end: 0x1E7FF },
    Block { name: "Mende Kikakui", start: 0x1E800, end: 0x1E8DF },
    Block { name: "Adlam", start: 0x1E900, end: 0x1E95F },
    Block { name: "Indic Siyaq Numbers", start: 0x1EC70, end: 0x1ECBF },
    Block { name: "Ottoman Siyaq Numbers", start: 0x1ED00, end: 0x1ED4F },
    Block { name: "Arabic Mathematical Alphabetic Symbols", start: 0x1EE00, end: 0x1EEFF },
    Block { name: "Mahjong Tiles", start: 0x1F000, end: 0x1F02F },
    Block { name: "Domino Tiles", start: 0x1F030, end: 0x1F09F },
    Block { name: "Playing Cards", start: 0x1F0A0, end: 0x1F0FF },
    Block { name: "Enclosed Alphanumeric Supplement", start: 0x1F100, end: 0x1F1FF },
    Block { name: "Enclosed Ideographic Supplement", start: 0x1F200, end: 0x1F2FF },
    Block { name: "Miscellaneous Symbols and Pictographs", start: 0x1F300, end: 0x1F5FF },
    Block { name: "Emoticons", start: 0x1F600, end: 0x1F64F },
    Block { name: "Ornamental Dingbats", start: 0x1F650, end: 0x1F67F },
    Block { name: "Transport and Map Symbols", start: 0x1F680, end: 0x1F6FF },
    Block { name: "Alchemical Symbols", start: 0x1F700, end: 0x1F77F },
    Block { name: "Geometric Shapes Extended", start: 0x1F780, end: 0x1F7FF },
    Block { name: "Supplemental Arrows-C", start: 0x1F800, end: 0x1F8FF },
    Block { name: "Supplemental Symbols and Pictographs", start: 0x1F900, end: 0x1F9FF },
    Block { name: "Chess Symbols", start: 0x1FA00, end: 0x1FA6F },
    Block { name: "Symbols and Pictographs Extended-A", start: 0x1FA70, end: 0x1FAFF },
    Block { name: "Symbols for Legacy Computing", start: 0x1FB00, end: 0x1FBFF },
    Block { name: "CJK Unified Ideographs Extension B", start: 0x20000, end: 0x2A6DF },
    Block { name: "CJK Unified Ideographs Extension C", start: 0x2A700, end: 0x2B73F },
    Block { name: "CJK Unified Ideographs Extension D", start: 0x2B740, end: 0x2B81F },
    Block { name: "CJK Unified Ideographs Extension E", start: 0x2B820, end: 0x2CEAF },
    Block { name: "CJK Unified Ideographs Extension F", start: 0x2CEB0, end: 0x2EBEF },
    Block { name: "CJK Unified Ideographs Extension I", start: 0x2EBF0, end: 0x2EE5F },
    Block { name: "CJK Compatibility Ideographs Supplement", start: 0x2F800, end: 0x2FA1F },
    Block { name: "CJK Unified Ideographs Extension G", start: 0x30000, end: 0x3134F },
    Block { name: "CJK Unified Ideographs Extension H", start: 0x31350, end: 0x323AF },
    Block { name: "Tags", start: 0xE0000, end: 0xE007F },
    Block { name: "Variation Selectors Supplement", start: 0xE0100, end: 0xE01EF },
    Block { name: "Supplementary Private Use Area-A", start: 0xF0000, end: 0xFFFFF },
    Block { name: "Supplementary Private Use Area-B", start: 0x100000, end: 0x10FFFF },
];
