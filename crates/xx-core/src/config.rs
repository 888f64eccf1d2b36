//! Environment configuration loaded from a TOML file (`env.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, XxError};

pub const DEFAULT_CONFIG_PATH: &str = "./env.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct XxConfig {
    /// Project root. Informational only.
    #[serde(alias = "Root")]
    pub root: Option<String>,
    /// Directory output files are written into.
    #[serde(alias = "Output")]
    pub output: PathBuf,
}

impl Default for XxConfig {
    fn default() -> Self {
        Self {
            root: None,
            output: PathBuf::from("."),
        }
    }
}

impl XxConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| XxError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| XxError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Output directory joined with `file_name`.
    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.output.join(file_name)
    }
}
