#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_delimiter, validate_marker_pattern, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `<!--quote(path)-->`，路徑只接受文字字元、`.` 與 `/`
pub const DEFAULT_MARKER_PATTERN: &str = r"<!--quote\(([\w./]+)\)-->";

/// fortune 格式：單獨一行的 `%`
pub const DEFAULT_DELIMITER: &str = "%\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    pub marker_pattern: String,
    pub delimiter: String,
    pub data_dir: String,
    pub html_dir: String,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            marker_pattern: DEFAULT_MARKER_PATTERN.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            data_dir: ".".to_string(),
            html_dir: ".".to_string(),
        }
    }
}

impl ConfigProvider for QuoteSettings {
    fn marker_pattern(&self) -> &str {
        &self.marker_pattern
    }

    fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn data_dir(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    fn html_dir(&self) -> &Path {
        Path::new(&self.html_dir)
    }
}

impl Validate for QuoteSettings {
    fn validate(&self) -> Result<()> {
        validate_marker_pattern("quote.marker_pattern", &self.marker_pattern)?;
        validate_delimiter("quote.delimiter", &self.delimiter)?;
        validate_path("quote.data_dir", &self.data_dir)?;
        validate_path("quote.html_dir", &self.html_dir)?;
        Ok(())
    }
}

/// 編譯後、處理期間不再變動的設定
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    marker: Regex,
    delimiter: String,
    data_dir: PathBuf,
    html_dir: PathBuf,
}

impl QuoteConfig {
    pub fn from_provider<C: ConfigProvider>(provider: &C) -> Result<Self> {
        let marker = validate_marker_pattern("marker_pattern", provider.marker_pattern())?;
        validate_delimiter("delimiter", provider.delimiter())?;

        Ok(Self {
            marker,
            delimiter: provider.delimiter().to_string(),
            data_dir: provider.data_dir().to_path_buf(),
            html_dir: provider.html_dir().to_path_buf(),
        })
    }

    pub fn marker(&self) -> &Regex {
        &self.marker
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn html_dir(&self) -> &Path {
        &self.html_dir
    }
}
