use crate::config::QuoteSettings;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub quote: QuoteSettings,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// `compact` 或 `json`
    pub format: Option<String>,
}

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            QuoteError::ConfigReadError {
                path: path.as_ref().to_path_buf(),
                source,
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${QUOTE_DATA_DIR})，未設定的變數視為缺少設定；
    /// `#` 開頭的註解行原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;
        let mut missing = None;
        let mut processed = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                processed.push_str(line);
                continue;
            }

            let replaced = re.replace_all(line, |caps: &regex::Captures<'_>| {
                let name = &caps[1];
                std::env::var(name).unwrap_or_else(|_| {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                })
            });
            processed.push_str(&replaced);
        }

        match missing {
            Some(name) => Err(QuoteError::MissingConfigError {
                field: format!("environment variable {}", name),
            }),
            None => Ok(processed),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.quote.validate()?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_ref()) {
            if !LOG_FORMATS.contains(&format.as_str()) {
                return Err(QuoteError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: format!("Unsupported format. Valid formats: {}", LOG_FORMATS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DELIMITER, DEFAULT_MARKER_PATTERN};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[quote]
marker_pattern = '\[\[quote:([\w.]+)\]\]'
delimiter = "\n%%\n"
data_dir = "/srv/blog/data"
html_dir = "/srv/blog/html"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.quote.marker_pattern, r"\[\[quote:([\w.]+)\]\]");
        assert_eq!(config.quote.delimiter, "\n%%\n");
        assert_eq!(config.quote.data_dir, "/srv/blog/data");
        assert!(config.json_logs());
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TomlConfig::from_toml_str("[quote]\ndata_dir = \"data\"\n").unwrap();

        assert_eq!(config.quote.marker_pattern, DEFAULT_MARKER_PATTERN);
        assert_eq!(config.quote.delimiter, DEFAULT_DELIMITER);
        assert_eq!(config.quote.html_dir, ".");
        assert!(!config.json_logs());

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(empty.quote, QuoteSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUOTE_INJECT_TEST_DATA_DIR", "/var/lib/quotes");

        let toml_content = r#"
[quote]
data_dir = "${QUOTE_INJECT_TEST_DATA_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.quote.data_dir, "/var/lib/quotes");

        std::env::remove_var("QUOTE_INJECT_TEST_DATA_DIR");
    }

    #[test]
    fn test_unset_env_var_is_missing_config() {
        let result = TomlConfig::from_toml_str("[quote]\ndata_dir = \"${QUOTE_INJECT_TEST_UNSET_VAR}\"\n");

        assert!(matches!(
            result,
            Err(QuoteError::MissingConfigError { ref field }) if field.contains("QUOTE_INJECT_TEST_UNSET_VAR")
        ));
    }

    #[test]
    fn test_unset_env_var_in_comment_is_ignored() {
        let toml_content = r#"
# data_dir = "${QUOTE_INJECT_TEST_COMMENTED_VAR}"
[quote]
    # html_dir = "${QUOTE_INJECT_TEST_COMMENTED_VAR}"
data_dir = "plain"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.quote.data_dir, "plain");
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let err = TomlConfig::from_file("/nonexistent/quote-inject.toml").unwrap_err();

        assert!(matches!(
            err,
            QuoteError::ConfigReadError { ref path, .. } if path == Path::new("/nonexistent/quote-inject.toml")
        ));
        assert!(err.to_string().contains("/nonexistent/quote-inject.toml"));
    }

    #[test]
    fn test_config_validation() {
        let invalid_format = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(invalid_format.validate().is_err());

        let invalid_delimiter = TomlConfig::from_toml_str("[quote]\ndelimiter = \"\"\n").unwrap();
        assert!(invalid_delimiter.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = TomlConfig::from_toml_str("[quote\ndelimiter = ");
        assert!(matches!(result, Err(QuoteError::ConfigParseError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[quote]\ndata_dir = \"file-data\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.quote.data_dir, "file-data");
    }
}
