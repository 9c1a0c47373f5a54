//! Terminal tables for the `eldata` subcommands.

use std::fmt;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::cldr::Exemplars;
use crate::codepoints::{get_bytes, get_code_units, CodeUnits, EncodingForm, Radix};
use crate::db::LookupDb;
use crate::ethiopic::{EthiopicUcd, FamilyMode, OrderMode};
use crate::error::Result;
use crate::ucd::{Ucd, UcdString};
use crate::unihan::Unihan;

/// A table with the title printed above it and the caption below.
pub struct Report {
    title: String,
    caption: String,
    table: Table,
}

impl Report {
    fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        Report {
            title: title.into(),
            caption: caption.into(),
            table,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.table)?;
        write!(f, "{}", self.caption)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    #[default]
    CodepointsBytes,
    Codepoints,
    Bytes,
    CodeUnits,
}

/// Character, codepoint, name, script, block, category, bidi class and
/// combining class of each character.
pub fn unicode_data(text: &str) -> Report {
    let mut report = Report::new("Character properties", format!("String: {}", text));
    report
        .table
        .set_header(vec!["char", "cp", "name", "script", "block", "cat", "bidi", "cc"]);
    for c in UcdString::new(text).iter() {
        let d = c.data();
        report.table.add_row(vec![
            d.character,
            d.codepoint,
            d.name,
            d.script,
            d.block,
            d.general_category,
            d.bidi_class,
            d.combining_class.to_string(),
        ]);
    }
    report
}

pub fn casing_data(text: &str) -> Result<Report> {
    let c = Ucd::parse(text)?;
    let mut report = Report::new(
        "Case mapping and folding",
        format!("Character: {}", c.character()),
    );
    report.table.set_header(vec!["Operation", "Full", "Simple"]);
    let rows = [
        ("Uppercase", c.uppercase_mapping(), c.simple_uppercase_mapping()),
        ("Titlecase", c.titlecase_mapping(), c.simple_titlecase_mapping()),
        ("Lowercase", c.lowercase_mapping(), c.simple_lowercase_mapping()),
        ("Case folding", c.case_folding(), c.simple_case_folding()),
    ];
    for (operation, full, simple) in rows {
        report
            .table
            .add_row(vec![operation.to_string(), full, simple.to_string()]);
    }
    Ok(report)
}

pub fn entities(text: &str) -> Report {
    let mut report = Report::new(
        "Numeric and entity values",
        format!("String: {}", text),
    );
    report.table.set_header(vec![
        "Character", "Hexadecimal", "Decimal", "Octal", "Binary", "HTML ent", "Dec. NCR", "Hex. NCR",
    ]);
    for e in UcdString::new(text).entities() {
        report.table.add_row(vec![
            e.character,
            e.hexadecimal,
            e.decimal.to_string(),
            e.octal,
            e.binary,
            e.html_entity,
            e.decimal_ncr,
            e.hex_ncr,
        ]);
    }
    report
}

pub fn byte_sequences(text: &str, encoding: &str) -> Result<Report> {
    let bytes = get_bytes(text, encoding)?;
    let mut report = Report::new(
        "Byte representation of string",
        format!("String: {}\nEncoding: {}", text, encoding),
    );
    report.table.set_header(vec!["Character", "Bytes"]);
    for (c, b) in text.chars().zip(bytes) {
        report.table.add_row(vec![c.to_string(), b]);
    }
    Ok(report)
}

/// One column per character: the character, then codepoints, bytes or code
/// units depending on `mode`.
pub fn encoding_data(text: &str, encoding: &str, mode: EncodingMode) -> Result<Report> {
    let mut report = Report::new(
        "Byte representation of string",
        format!("String: {}\nEncoding: {}", text, encoding),
    );
    let codepoints = || text.chars().map(|c| format!("{:04X}", c as u32)).collect::<Vec<_>>();
    let mut rows = vec![text.chars().map(String::from).collect::<Vec<_>>()];
    match mode {
        EncodingMode::CodepointsBytes => {
            rows.push(codepoints());
            rows.push(get_bytes(text, encoding)?);
        }
        EncodingMode::Codepoints => rows.push(codepoints()),
        EncodingMode::Bytes => rows.push(get_bytes(text, encoding)?),
        EncodingMode::CodeUnits => {
            let form = EncodingForm::from_label(encoding);
            if let CodeUnits::PerChar(units) = get_code_units(text, form, Radix::Hex, true) {
                rows.push(
                    units
                        .iter()
                        .map(|u| u.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" "))
                        .collect(),
                );
            }
        }
    }
    for row in rows {
        report.table.add_row(row);
    }
    for column in report.table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }
    Ok(report)
}

/// Character properties plus Ethiopic family and order.
pub fn ethiopic_data(db: &LookupDb, text: &str) -> Result<Report> {
    let mut report = Report::new("Ethiopic character data", format!("String: {}", text));
    report.table.set_header(vec![
        "char", "cp", "name", "block", "cat", "family", "order", "order name",
    ]);
    for c in text.chars() {
        let e = EthiopicUcd::new(db, c)?;
        let dash = || "-".to_string();
        report.table.add_row(vec![
            c.to_string(),
            e.codepoint(),
            e.name(),
            e.block(),
            e.general_category_code(),
            e.family(FamilyMode::Default).unwrap_or_else(dash),
            e.order(OrderMode::Number).unwrap_or_else(dash),
            e.order(OrderMode::Default).unwrap_or_else(dash),
        ]);
    }
    Ok(report)
}

/// Selected Unihan fields of one character, or every populated field when
/// `fields` is empty.
pub fn unihan_data(db: &LookupDb, ch: char, fields: &[&str]) -> Result<Report> {
    let u = Unihan::new(db, ch);
    let mut report = Report::new(
        "Unihan data",
        format!("Character: {} (U+{})", ch, u.codepoint()),
    );
    report.table.set_header(vec!["Field", "Value"]);
    if fields.is_empty() {
        for (name, value) in u.all_fields()? {
            report.table.add_row(vec![name, value.to_string()]);
        }
    } else {
        for &name in fields {
            let value = u.field(name)?.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
            report.table.add_row(vec![name.to_string(), value]);
        }
    }
    Ok(report)
}

pub fn exemplar_table(locale_id: &str, exemplars: &Exemplars) -> Report {
    let mut report = Report::new("Exemplar characters", format!("Locale: {}", locale_id));
    report.table.set_header(vec!["Type", "Characters"]);
    for (kind, set) in exemplars {
        report.table.add_row(vec![kind.clone(), set.to_pattern()]);
    }
    report
}

pub fn print_unicode_data(text: &str) {
    println!("{}", unicode_data(text));
}

pub fn print_casing_data(text: &str) -> Result<()> {
    println!("{}", casing_data(text)?);
    Ok(())
}

pub fn print_entities(text: &str) {
    println!("{}", entities(text));
}

pub fn print_byte_sequences(text: &str, encoding: &str) -> Result<()> {
    println!("{}", byte_sequences(text, encoding)?);
    Ok(())
}

pub fn print_encoding_data(text: &str, encoding: &str, mode: EncodingMode) -> Result<()> {
    println!("{}", encoding_data(text, encoding, mode)?);
    Ok(())
}

pub fn print_ethiopic_data(db: &LookupDb, text: &str) -> Result<()> {
    println!("{}", ethiopic_data(db, text)?);
    Ok(())
}

pub fn print_unihan_data(db: &LookupDb, ch: char, fields: &[&str]) -> Result<()> {
    println!("{}", unihan_data(db, ch, fields)?);
    Ok(())
}

pub fn print_exemplar_table(locale_id: &str, exemplars: &Exemplars) {
    println!("{}", exemplar_table(locale_id, exemplars));
}
