use crate::utils::error::{QuoteError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 分隔字串不能為空，否則整個檔案會被切成單一字元
pub fn validate_delimiter(field_name: &str, delimiter: &str) -> Result<()> {
    if delimiter.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 編譯標記樣式，並確認至少有一個擷取群組可以取出檔名
pub fn validate_marker_pattern(field_name: &str, pattern: &str) -> Result<Regex> {
    if pattern.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern cannot be empty or whitespace-only".to_string(),
        });
    }

    let regex = Regex::new(pattern)?;

    // captures_len 包含整體比對的群組 0
    if regex.captures_len() < 2 {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern must contain a capture group for the quote file name".to_string(),
        });
    }

    Ok(regex)
}
