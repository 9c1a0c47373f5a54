//! Legacy 8-bit encoding tables stored in the lookup database.

use std::collections::BTreeMap;

use icu::collator::{Collator, CollatorOptions, Numeric};

use crate::codepoints::CodeValue;
use crate::db::{LookupDb, Table};
use crate::error::{Error, Result};

/// Normalises a byte given as an integer or hex string to `0xHH`.
pub fn normalise_byte(byte: &CodeValue) -> Result<String> {
    let value = byte.value()?;
    if value > 0xFF {
        return Err(Error::InvalidCodepoint(format!("{} is not a byte", byte)));
    }
    Ok(format!("0x{:02X}", value))
}

pub struct Encodings<'db> {
    db: &'db LookupDb,
    collator: Collator,
}

impl<'db> Encodings<'db> {
    pub fn new(db: &'db LookupDb) -> Result<Self> {
        let mut options = CollatorOptions::new();
        options.numeric = Some(Numeric::On);
        let collator = Collator::try_new(&Default::default(), options)
            .map_err(|e| Error::Collator(e.to_string()))?;
        Ok(Encodings { db, collator })
    }

    /// Encoding labels with a column in the table.
    pub fn available_encodings(&self) -> Result<Vec<String>> {
        Ok(self
            .db
            .columns(Table::Encodings)?
            .into_iter()
            .filter(|c| c != Table::Encodings.key_column())
            .collect())
    }

    /// Codepoint of `byte` in each encoding; `None` where undefined.
    pub fn codepoint_data(&self, byte: &CodeValue) -> Result<BTreeMap<String, Option<String>>> {
        let key = normalise_byte(byte)?;
        let row = self
            .db
            .lookup_row(Table::Encodings, &key)?
            .ok_or_else(|| Error::NotFound(format!("byte {}", key)))?;
        Ok(row
            .into_iter()
            .filter(|(name, _)| name != Table::Encodings.key_column())
            .collect())
    }

    /// Byte to codepoint mapping of one encoding.
    pub fn encoding_data(&self, label: &str) -> Result<BTreeMap<String, Option<String>>> {
        let label = label.to_ascii_lowercase();
        if !self.available_encodings()?.contains(&label) {
            return Err(Error::UnknownEncoding(label));
        }
        Ok(self
            .db
            .column_values(Table::Encodings, &label)?
            .into_iter()
            .collect())
    }

    /// Encodings in which `byte` decodes to `ch`.
    pub fn match_character(&self, ch: char, byte: &CodeValue) -> Result<Vec<String>> {
        let target = format!("0x{:04X}", ch as u32);
        let mut matches: Vec<String> = self
            .codepoint_data(byte)?
            .into_iter()
            .filter(|(_, value)| value.as_deref() == Some(target.as_str()))
            .map(|(label, _)| label)
            .collect();
        self.sort(&mut matches);
        Ok(matches)
    }

    /// Sorts labels with numeric runs compared by value.
    pub fn sort(&self, labels: &mut [String]) {
        labels.sort_by(|a, b| self.collator.compare(a, b));
    }
}
