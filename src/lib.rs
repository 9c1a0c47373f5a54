//! Helpers for querying Unicode character data, legacy encodings, Ethiopic
//! syllabary structure, Unihan and CLDR exemplar sets.

pub mod blocks;
pub mod cldr;
pub mod codepoints;
pub mod config;
pub mod constants;
pub mod db;
pub mod encodings;
pub mod error;
pub mod ethiopic;
pub mod property;
pub mod report;
pub mod ucd;
pub mod unihan;
pub mod unikemet;
pub mod uset;

pub use config::Settings;
pub use db::LookupDb;
pub use error::{Error, Result};
pub use property::{get_property, NameChoice, Property, PropertyValue};
pub use ucd::{Ucd, UcdString};
pub use uset::CharSet;
