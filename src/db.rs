//! Lazily opened SQLite lookup database.
//!
//! Four tables: `ethiopic` (syllable family and order), `encodings`
//! (legacy 8-bit code pages), `unihan` and `unikemet`. Lookups never write.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use icu::properties::{maps, GeneralCategory};
use log::{debug, error, info, warn};
use once_cell::unsync::OnceCell;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::codepoints::is_latin1_label;
use crate::constants::{is_row_syllable, row_start, LABIALISED_ROWS, SYLLABARY_ROW_END};
use crate::error::{Error, Result};
use crate::ethiopic::ORDERS;
use crate::unihan::UNIHAN_FIELDS;
use crate::unikemet::UNIKEMET_FIELDS;

/// Single-byte encodings seeded into the `encodings` table by default.
pub const DEFAULT_ENCODINGS: &[&str] = &[
    "iso-8859-1",
    "iso-8859-2",
    "iso-8859-3",
    "iso-8859-4",
    "iso-8859-5",
    "iso-8859-6",
    "iso-8859-7",
    "iso-8859-8",
    "iso-8859-10",
    "iso-8859-13",
    "iso-8859-14",
    "iso-8859-15",
    "iso-8859-16",
    "koi8-r",
    "koi8-u",
    "ibm866",
    "macintosh",
    "x-mac-cyrillic",
    "windows-874",
    "windows-1250",
    "windows-1251",
    "windows-1252",
    "windows-1253",
    "windows-1254",
    "windows-1255",
    "windows-1256",
    "windows-1257",
    "windows-1258",
];

/// Tables of the lookup database, with the column each is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Ethiopic,
    Encodings,
    Unihan,
    Unikemet,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Ethiopic => "ethiopic",
            Table::Encodings => "encodings",
            Table::Unihan => "unihan",
            Table::Unikemet => "unikemet",
        }
    }

    pub fn key_column(self) -> &'static str {
        match self {
            Table::Ethiopic => "ሆሄ",
            Table::Encodings => "codepoint",
            Table::Unihan => "char",
            Table::Unikemet => "codepoint",
        }
    }
}

enum Source {
    File(PathBuf, OpenFlags),
    Memory,
}

pub struct LookupDb {
    source: Source,
    conn: OnceCell<Connection>,
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl LookupDb {
    /// Read-only handle. The file is not touched until the first query.
    pub fn open(path: impl AsRef<Path>) -> Self {
        LookupDb {
            source: Source::File(
                path.as_ref().to_path_buf(),
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
            conn: OnceCell::new(),
        }
    }

    /// Writable handle, creating the file and schema if needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let db = LookupDb {
            source: Source::File(
                path.as_ref().to_path_buf(),
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
            conn: OnceCell::new(),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self> {
        let db = LookupDb {
            source: Source::Memory,
            conn: OnceCell::new(),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn connection(&self) -> Result<&Connection> {
        self.conn.get_or_try_init(|| {
            let opened = match &self.source {
                Source::File(path, flags) => {
                    debug!("opening lookup database {}", path.display());
                    Connection::open_with_flags(path, *flags)
                }
                Source::Memory => Connection::open_in_memory(),
            };
            opened.map_err(|e| {
                error!("lookup database connection not established: {}", e);
                Error::Database(e)
            })
        })
    }

    /// Connection for read paths. A failure is logged by `connection` and
    /// the caller answers as if the table were empty.
    fn reader(&self) -> Option<&Connection> {
        self.connection().ok()
    }

    pub fn init_schema(&self) -> Result<()> {
        let conn = self.connection()?;
        let unihan_columns: String = UNIHAN_FIELDS
            .iter()
            .map(|f| format!(",\n    {} TEXT", quote_ident(f)))
            .collect();
        let unikemet_columns: String = UNIKEMET_FIELDS
            .iter()
            .map(|f| format!(",\n    {} TEXT", quote_ident(f)))
            .collect();
        conn.execute_batch(&format!(
            "
            CREATE TABLE IF NOT EXISTS ethiopic(
                ሆሄ TEXT PRIMARY KEY,
                ቤተሰብ TEXT NOT NULL,
                ቤት TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS encodings(
                codepoint TEXT PRIMARY KEY
            );
            CREATE TABLE IF NOT EXISTS unihan(
                id INTEGER PRIMARY KEY,
                ucn TEXT,
                char TEXT UNIQUE{}
            );
            CREATE TABLE IF NOT EXISTS unikemet(
                codepoint TEXT PRIMARY KEY{}
            );
            ",
            unihan_columns, unikemet_columns
        ))?;
        Ok(())
    }

    /// Column names of `table` in declaration order.
    pub fn columns(&self, table: Table) -> Result<Vec<String>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table.name()))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn check_column(&self, table: Table, column: &str) -> Result<()> {
        let known = match table {
            Table::Unihan => {
                matches!(column, "id" | "ucn" | "char") || UNIHAN_FIELDS.contains(&column)
            }
            Table::Unikemet => column == "codepoint" || UNIKEMET_FIELDS.contains(&column),
            Table::Ethiopic => matches!(column, "ሆሄ" | "ቤተሰብ" | "ቤት"),
            Table::Encodings => self.columns(table)?.iter().any(|c| c == column),
        };
        if known {
            Ok(())
        } else {
            Err(Error::UnknownField(column.to_string()))
        }
    }

    /// Single cell lookup. `Ok(None)` when the row is missing or the cell
    /// is NULL.
    pub fn lookup(&self, table: Table, key: &str, column: &str) -> Result<Option<String>> {
        let Some(conn) = self.reader() else {
            return Ok(None);
        };
        self.check_column(table, column)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            quote_ident(column),
            table.name(),
            quote_ident(table.key_column())
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, Option<String>>(0))
            .optional()?;
        Ok(value.flatten())
    }

    /// Every column of the row keyed by `key`, paired with its name.
    pub fn lookup_row(&self, table: Table, key: &str) -> Result<Option<Vec<(String, Option<String>)>>> {
        let Some(conn) = self.reader() else {
            return Ok(None);
        };
        let columns = self.columns(table)?;
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ?1",
            table.name(),
            quote_ident(table.key_column())
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let row = stmt
            .query_row(params![key], |row| {
                let mut cells = Vec::with_capacity(columns.len());
                for (i, name) in columns.iter().enumerate() {
                    let value: rusqlite::types::Value = row.get(i)?;
                    let text = match value {
                        rusqlite::types::Value::Null => None,
                        rusqlite::types::Value::Integer(n) => Some(n.to_string()),
                        rusqlite::types::Value::Real(f) => Some(f.to_string()),
                        rusqlite::types::Value::Text(s) => Some(s),
                        rusqlite::types::Value::Blob(b) => Some(String::from_utf8_lossy(&b).into_owned()),
                    };
                    cells.push((name.clone(), text));
                }
                Ok(cells)
            })
            .optional()?;
        Ok(row)
    }

    /// Keys of rows whose `column` equals `value`, in key order.
    pub fn keys_where(&self, table: Table, column: &str, value: &str) -> Result<Vec<String>> {
        self.keys_matching(table, &[(column, value)])
    }

    /// Keys of rows matching every `(column, value)` condition.
    pub fn keys_matching(&self, table: Table, conditions: &[(&str, &str)]) -> Result<Vec<String>> {
        let Some(conn) = self.reader() else {
            return Ok(Vec::new());
        };
        for (column, _) in conditions {
            self.check_column(table, column)?;
        }
        let clauses = conditions
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", quote_ident(column), i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");
        let sql = format!(
            "SELECT {key} FROM {table} WHERE {clauses} ORDER BY {key}",
            key = quote_ident(table.key_column()),
            table = table.name(),
            clauses = if clauses.is_empty() { "1".to_string() } else { clauses }
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let values: Vec<&str> = conditions.iter().map(|(_, v)| *v).collect();
        let keys = stmt
            .query_and_then(rusqlite::params_from_iter(values), |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    /// Values of `column` for every row, in key order.
    pub fn column_values(&self, table: Table, column: &str) -> Result<Vec<(String, Option<String>)>> {
        let Some(conn) = self.reader() else {
            return Ok(Vec::new());
        };
        self.check_column(table, column)?;
        let sql = format!(
            "SELECT {key}, {col} FROM {table} ORDER BY {key}",
            key = quote_ident(table.key_column()),
            col = quote_ident(column),
            table = table.name()
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Fills the `ethiopic` table from the layout of the Ethiopic block:
    /// rows of eight syllables, labialised rows belonging to the family of
    /// the preceding row.
    pub fn seed_ethiopic(&self) -> Result<usize> {
        let conn = self.connection()?;
        let tx = conn.unchecked_transaction()?;
        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO ethiopic(ሆሄ, ቤተሰብ, ቤት) VALUES (?1, ?2, ?3)",
            )?;
            for cp in 0x1200..=SYLLABARY_ROW_END {
                let c = match char::from_u32(cp) {
                    Some(c) if is_row_syllable(c) => c,
                    _ => continue,
                };
                if maps::general_category().get(c) != GeneralCategory::OtherLetter {
                    continue;
                }
                let (family, order) = syllable_position(c);
                let (family, order) = match (char::from_u32(family), ORDERS.get(order as usize - 1)) {
                    (Some(f), Some(o)) => (f, o),
                    _ => continue,
                };
                stmt.execute(params![c.to_string(), family.to_string(), order.name])?;
                count += 1;
            }
        }
        tx.commit()?;
        info!("seeded {} Ethiopic syllables", count);
        Ok(count)
    }

    /// Adds one column per encoding label and fills it by decoding every
    /// byte `0x00..=0xFF`. Undefined bytes are stored as NULL.
    pub fn seed_encodings(&self, labels: &[&str]) -> Result<usize> {
        let conn = self.connection()?;
        let existing = self.columns(Table::Encodings)?;
        let tx = conn.unchecked_transaction()?;
        for b in 0u32..=0xFF {
            tx.execute(
                "INSERT OR IGNORE INTO encodings(codepoint) VALUES (?1)",
                params![format!("0x{:02X}", b)],
            )?;
        }
        let mut seeded = 0;
        for &label in labels {
            let label = label.to_ascii_lowercase();
            let decoder = match SingleByteDecoder::for_label(&label) {
                Some(d) => d,
                None => {
                    warn!("skipping encoding {:?}: not a single-byte encoding", label);
                    continue;
                }
            };
            if !existing.contains(&label) {
                tx.execute_batch(&format!(
                    "ALTER TABLE encodings ADD COLUMN {} TEXT",
                    quote_ident(&label)
                ))?;
            }
            let sql = format!(
                "UPDATE encodings SET {} = ?1 WHERE codepoint = ?2",
                quote_ident(&label)
            );
            let mut stmt = tx.prepare(&sql)?;
            for b in 0u8..=0xFF {
                let value = decoder.decode(b).map(|c| format!("0x{:04X}", c as u32));
                stmt.execute(params![value, format!("0x{:02X}", b)])?;
            }
            seeded += 1;
        }
        tx.commit()?;
        info!("seeded {} encodings", seeded);
        Ok(seeded)
    }

    /// Loads `U+XXXX<TAB>kField<TAB>value` lines into the `unihan` table.
    /// Values are stored as JSON arrays of their space-delimited items;
    /// `kDefinition` is kept whole.
    pub fn import_unihan<R: BufRead>(&self, reader: R) -> Result<usize> {
        let conn = self.connection()?;
        let tx = conn.unchecked_transaction()?;
        let mut count = 0;
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let (c, field, value) = match parse_tsv_line(&line) {
                Some(parts) => parts,
                None => continue,
            };
            if !UNIHAN_FIELDS.contains(&field) {
                warn!("line {}: unknown Unihan field {}", n + 1, field);
                continue;
            }
            let items: Vec<&str> = if field == "kDefinition" {
                vec![value]
            } else {
                value.split_whitespace().collect()
            };
            let json = serde_json::to_string(&items)?;
            let sql = format!(
                "INSERT INTO unihan(ucn, char, {col}) VALUES (?1, ?2, ?3)
                 ON CONFLICT(char) DO UPDATE SET {col} = excluded.{col}",
                col = quote_ident(field)
            );
            tx.prepare_cached(&sql)?
                .execute(params![format!("U+{:04X}", c as u32), c.to_string(), json])?;
            count += 1;
        }
        tx.commit()?;
        info!("imported {} Unihan values", count);
        Ok(count)
    }

    /// Loads `U+XXXX<TAB>kEH_Field<TAB>value` lines into the `unikemet`
    /// table, keyed by `XXXX`.
    pub fn import_unikemet<R: BufRead>(&self, reader: R) -> Result<usize> {
        let conn = self.connection()?;
        let tx = conn.unchecked_transaction()?;
        let mut count = 0;
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let (c, field, value) = match parse_tsv_line(&line) {
                Some(parts) => parts,
                None => continue,
            };
            if !UNIKEMET_FIELDS.contains(&field) {
                warn!("line {}: unknown Unikemet field {}", n + 1, field);
                continue;
            }
            let sql = format!(
                "INSERT INTO unikemet(codepoint, {col}) VALUES (?1, ?2)
                 ON CONFLICT(codepoint) DO UPDATE SET {col} = excluded.{col}",
                col = quote_ident(field)
            );
            tx.prepare_cached(&sql)?
                .execute(params![format!("{:04X}", c as u32), value])?;
            count += 1;
        }
        tx.commit()?;
        info!("imported {} Unikemet values", count);
        Ok(count)
    }
}

/// Family base code point and order number (1..=14) of a syllable in the
/// row-structured part of the Ethiopic block.
pub(crate) fn syllable_position(c: char) -> (u32, u32) {
    let base = row_start(c);
    let offset = c as u32 - base;
    if LABIALISED_ROWS.contains(&base) {
        (base - 8, 9 + offset)
    } else {
        (base, offset + 1)
    }
}

fn parse_tsv_line(line: &str) -> Option<(char, &str, &str)> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut parts = line.splitn(3, '\t');
    let cp = parts.next()?.strip_prefix("U+")?;
    let field = parts.next()?;
    let value = parts.next()?;
    let c = u32::from_str_radix(cp, 16).ok().and_then(char::from_u32)?;
    Some((c, field, value))
}

enum SingleByteDecoder {
    Latin1,
    Whatwg(&'static Encoding),
}

impl SingleByteDecoder {
    fn for_label(label: &str) -> Option<Self> {
        if is_latin1_label(label) {
            return Some(SingleByteDecoder::Latin1);
        }
        let encoding = Encoding::for_label(label.as_bytes())?;
        if encoding.is_single_byte() {
            Some(SingleByteDecoder::Whatwg(encoding))
        } else {
            None
        }
    }

    fn decode(&self, b: u8) -> Option<char> {
        match self {
            SingleByteDecoder::Latin1 => Some(char::from(b)),
            SingleByteDecoder::Whatwg(encoding) => {
                let bytes = [b];
                let text = encoding.decode_without_bom_handling_and_without_replacement(&bytes)?;
                text.chars().next()
            }
        }
    }
}
