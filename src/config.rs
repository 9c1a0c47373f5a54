//! Settings read from a JSON file or `EL_DATA_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CLDR_URL: &str = "https://raw.githubusercontent.com/unicode-org/cldr/main/common/main";
pub const DEFAULT_SLDR_URL: &str =
    "https://raw.githubusercontent.com/silnrsi/sldr/refs/heads/master/sldr";

fn default_db() -> PathBuf {
    PathBuf::from("data.db")
}
fn default_cldr_url() -> String {
    DEFAULT_CLDR_URL.into()
}
fn default_sldr_url() -> String {
    DEFAULT_SLDR_URL.into()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("el-data/", env!("CARGO_PKG_VERSION")).into()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lookup database path.
    #[serde(default = "default_db")]
    pub db: PathBuf,
    #[serde(default = "default_cldr_url")]
    pub cldr_url: String,
    #[serde(default = "default_sldr_url")]
    pub sldr_url: String,
    /// Seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db: default_db(),
            cldr_url: default_cldr_url(),
            sldr_url: default_sldr_url(),
            http_timeout: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reads `EL_DATA_DB`, `EL_DATA_CLDR_URL`, `EL_DATA_SLDR_URL`,
    /// `EL_DATA_HTTP_TIMEOUT` and `EL_DATA_USER_AGENT`.
    pub fn from_env() -> Result<Settings> {
        Ok(envy::prefixed("EL_DATA_").from_env()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Settings>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("EL_DATA_").from_iter(vars)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}
