use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    /// 所有候選路徑都無法讀取，`path` 為最後嘗試的路徑
    #[error("Can't open {}: {}", path.display(), source)]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't open {}: no quotes in file", path.display())]
    NoQuotes { path: PathBuf },

    #[error("Can't read config {}: {}", path.display(), source)]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid marker pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resolution,
    Configuration,
    System,
}

impl ErrorCategory {
    /// 命令列工具的結束碼：設定 1、解析 2、系統 3
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Configuration => 1,
            Self::Resolution => 2,
            Self::System => 3,
        }
    }
}

impl QuoteError {
    /// 找不到引言檔或檔案內沒有任何引言
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoQuotes { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::NoQuotes { .. } => ErrorCategory::Resolution,
            Self::IoError(_) | Self::ConfigReadError { .. } => ErrorCategory::System,
            Self::RegexError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigParseError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 '{}' 無效: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("缺少設定: {}", field),
            Self::RegexError(_) => "marker_pattern 不是合法的正規表達式".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Resolution => {
                "Check that the quote file exists under the data or HTML directory"
            }
            ErrorCategory::Configuration => {
                "Review the [quote] section of the config file or the command line flags"
            }
            ErrorCategory::System => "Check file permissions and that the input path is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
