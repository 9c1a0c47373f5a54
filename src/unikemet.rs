//! Unikemet lookups for Egyptian hieroglyphs.

use std::fmt;
use std::ops::{Deref, Range};

use crate::db::{LookupDb, Table};
use crate::error::{Error, Result};
use crate::ucd::{Entities, Ucd};

pub const UNIKEMET_FIELDS: &[&str] = &[
    "kEH_Cat",
    "kEH_Core",
    "kEH_Desc",
    "kEH_Func",
    "kEH_FVal",
    "kEH_HG",
    "kEH_IFAO",
    "kEH_JSesh",
    "kEH_NoMirror",
    "kEH_NoRotate",
    "kEH_UniK",
    "kEH_AltSeq",
];

#[derive(Clone)]
pub struct Unikemet<'db> {
    ucd: Ucd,
    db: &'db LookupDb,
}

impl<'db> Unikemet<'db> {
    pub fn new(db: &'db LookupDb, ch: char) -> Self {
        Unikemet {
            ucd: Ucd::new(ch),
            db,
        }
    }

    pub fn parse(db: &'db LookupDb, text: &str) -> Result<Self> {
        Ok(Self::new(db, Ucd::parse(text)?.character()))
    }

    pub fn field(&self, name: &str) -> Result<Option<String>> {
        if !UNIKEMET_FIELDS.contains(&name) {
            return Err(Error::UnknownField(name.to_string()));
        }
        self.db.lookup(Table::Unikemet, &self.ucd.codepoint(), name)
    }

    pub fn all_fields(&self) -> Result<Vec<(String, String)>> {
        let row = match self.db.lookup_row(Table::Unikemet, &self.ucd.codepoint())? {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };
        Ok(row
            .into_iter()
            .filter(|(name, _)| name != "codepoint")
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect())
    }
}

impl Deref for Unikemet<'_> {
    type Target = Ucd;

    fn deref(&self) -> &Ucd {
        &self.ucd
    }
}

impl fmt::Debug for Unikemet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unikemet(char={}, codepoint={})", self.ucd.character(), self.ucd.codepoint())
    }
}

#[derive(Clone)]
pub struct UnikemetString<'db> {
    chars: Vec<Unikemet<'db>>,
}

impl<'db> UnikemetString<'db> {
    pub fn new(db: &'db LookupDb, text: &str) -> Self {
        UnikemetString {
            chars: text.chars().map(|c| Unikemet::new(db, c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Unikemet<'db>> {
        self.chars.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unikemet<'db>> {
        self.chars.iter()
    }

    pub fn slice(&self, range: Range<usize>) -> UnikemetString<'db> {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        UnikemetString {
            chars: self.chars[start..end].to_vec(),
        }
    }

    pub fn characters(&self) -> Vec<char> {
        self.chars.iter().map(|c| c.character()).collect()
    }

    pub fn field(&self, name: &str) -> Result<Vec<Option<String>>> {
        self.chars.iter().map(|c| c.field(name)).collect()
    }

    pub fn entities(&self) -> Vec<Entities> {
        self.chars.iter().map(|c| c.entities()).collect()
    }
}

impl fmt::Display for UnikemetString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c.character())?;
        }
        Ok(())
    }
}

impl fmt::Debug for UnikemetString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnikemetString(chars={:?})", self.characters())
    }
}
