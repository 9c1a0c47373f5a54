//! Locale exemplar characters from CLDR or SLDR locale data (LDML).

use std::collections::BTreeMap;
use std::io::Read;

use icu::locid::LanguageIdentifier;
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use xml::reader::{EventReader, XmlEvent};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::uset::CharSet;

/// Exemplar sets keyed by type (`main`, `auxiliary`, `index`, ...).
pub type Exemplars = BTreeMap<String, CharSet>;

const INHERITED: &str = "↑↑↑";
const SKIPPED_TYPES: &[&str] = &["numbers", "punctuation"];
const EXEMPLAR_PATH: &[&str] = &["ldml", "characters", "exemplarCharacters"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExemplarSource {
    #[default]
    Cldr,
    Sldr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExemplarMode {
    #[default]
    Set,
    List,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainExemplars {
    Set(CharSet),
    List(Vec<String>),
    Pattern(String),
}

/// Normalises `-` to `_` and checks the identifier is well formed.
pub fn normalise_locale(locale_id: &str) -> Result<String> {
    let id = locale_id.trim().replace('-', "_");
    let valid = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && id.replace('_', "-").parse::<LanguageIdentifier>().is_ok();
    if valid {
        Ok(id)
    } else {
        Err(Error::UnknownLocale(locale_id.to_string()))
    }
}

pub fn locale_url(settings: &Settings, locale_id: &str, source: ExemplarSource) -> Result<String> {
    let id = normalise_locale(locale_id)?;
    Ok(match source {
        ExemplarSource::Cldr => format!("{}/{}.xml", settings.cldr_url.trim_end_matches('/'), id),
        ExemplarSource::Sldr => {
            let initial = id.chars().next().unwrap_or('_');
            format!("{}/{}/{}.xml", settings.sldr_url.trim_end_matches('/'), initial, id)
        }
    })
}

/// Downloads the LDML file for `locale_id`. `None` if the server answers
/// 404 or 500.
pub fn fetch_ldml(settings: &Settings, locale_id: &str, source: ExemplarSource) -> Result<Option<String>> {
    let url = locale_url(settings, locale_id, source)?;
    let client = Client::builder()
        .timeout(settings.timeout())
        .user_agent(settings.user_agent.as_str())
        .build()?;
    debug!("fetching {}", url);
    let response = client.get(&url).send()?;
    match response.status() {
        StatusCode::NOT_FOUND | StatusCode::INTERNAL_SERVER_ERROR => {
            warn!("no locale data at {} ({})", url, response.status());
            Ok(None)
        }
        _ => Ok(Some(response.error_for_status()?.text()?)),
    }
}

pub fn get_exemplars(
    settings: &Settings,
    locale_id: &str,
    source: ExemplarSource,
) -> Result<Option<Exemplars>> {
    match fetch_ldml(settings, locale_id, source)? {
        Some(ldml) => parse_exemplars(ldml.as_bytes()).map(Some),
        None => Ok(None),
    }
}

/// Collects `ldml/characters/exemplarCharacters` sets. Numbers and
/// punctuation exemplars and inherited markers are skipped.
pub fn parse_exemplars<R: Read>(source: R) -> Result<Exemplars> {
    let mut exemplars = Exemplars::new();
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for event in EventReader::new(source) {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => {
                path.push(name.local_name);
                if path.iter().map(String::as_str).eq(EXEMPLAR_PATH.iter().copied()) {
                    let kind = attributes
                        .iter()
                        .find(|a| a.name.local_name == "type")
                        .map(|a| a.value.clone())
                        .unwrap_or_else(|| "main".to_string());
                    current = Some((kind, String::new()));
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            XmlEvent::EndElement { .. } => {
                path.pop();
                if let Some((kind, text)) = current.take() {
                    let text = text.trim();
                    if text.is_empty() || text == INHERITED || SKIPPED_TYPES.contains(&kind.as_str()) {
                        continue;
                    }
                    match CharSet::parse(text) {
                        Ok(set) => {
                            exemplars.insert(kind, set);
                        }
                        Err(e) => warn!("skipping {} exemplars: {}", kind, e),
                    }
                }
            }
            _ => {}
        }
    }
    Ok(exemplars)
}

/// Exemplar data for one locale, fetched once.
#[derive(Debug, Clone)]
pub struct Cldr {
    locale_id: String,
    source: ExemplarSource,
    exemplars: Option<Exemplars>,
}

impl Cldr {
    pub fn fetch(settings: &Settings, locale_id: &str, source: ExemplarSource) -> Result<Self> {
        let locale_id = normalise_locale(locale_id)?;
        let exemplars = get_exemplars(settings, &locale_id, source)?;
        Ok(Cldr {
            locale_id,
            source,
            exemplars,
        })
    }

    pub fn from_ldml<R: Read>(locale_id: &str, source: ExemplarSource, ldml: R) -> Result<Self> {
        Ok(Cldr {
            locale_id: normalise_locale(locale_id)?,
            source,
            exemplars: Some(parse_exemplars(ldml)?),
        })
    }

    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn source(&self) -> ExemplarSource {
        self.source
    }

    /// `None` when the locale file was not found.
    pub fn exemplars(&self) -> Option<&Exemplars> {
        self.exemplars.as_ref()
    }

    pub fn main_exemplars(&self, mode: ExemplarMode) -> Option<MainExemplars> {
        let set = self.exemplars.as_ref()?.get("main")?;
        Some(match mode {
            ExemplarMode::Set => MainExemplars::Set(set.clone()),
            ExemplarMode::List => MainExemplars::List(set.to_list()),
            ExemplarMode::Pattern => MainExemplars::Pattern(set.to_pattern()),
        })
    }
}
