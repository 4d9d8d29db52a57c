use crate::adapters::storage::LocalStorage;
use crate::core::{CategoryPath, QuoteFile, QuoteSource, Storage};
use crate::utils::error::{QuoteError, Result};
use std::path::{Path, PathBuf};

/// 把檔案內容依 `delimiter` 切成引言。
///
/// 分隔字串結束一則引言並從中移除，之後每則再去掉一個結尾換行；
/// 結尾的空白片段不算引言。`"apple\n%\nbanana\n%\n"` 搭配 `"%\n"`
/// 會得到 `["apple", "banana"]`。
pub fn parse_quotes(content: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        let unit = strip_line_ending(content);
        return if unit.is_empty() {
            Vec::new()
        } else {
            vec![unit.to_string()]
        };
    }

    let mut units: Vec<String> = content
        .split_inclusive(delimiter)
        .map(|unit| unit.strip_suffix(delimiter).unwrap_or(unit))
        .map(strip_line_ending)
        .map(str::to_string)
        .collect();

    // 只有最後一段空白是分隔字串留下的殘餘，中間的空引言照樣保留
    if units.last().is_some_and(|unit| unit.is_empty()) {
        units.pop();
    }

    units
}

fn strip_line_ending(unit: &str) -> &str {
    match unit.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => unit,
    }
}

/// 依序在資料目錄、HTML 目錄與原始路徑中尋找引言檔
pub struct QuoteResolver<S: Storage> {
    storage: S,
    data_dir: PathBuf,
    html_dir: PathBuf,
    delimiter: String,
}

impl<S: Storage> QuoteResolver<S> {
    pub fn new(
        storage: S,
        data_dir: impl Into<PathBuf>,
        html_dir: impl Into<PathBuf>,
        delimiter: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            data_dir: data_dir.into(),
            html_dir: html_dir.into(),
            delimiter: delimiter.into(),
        }
    }

    /// 候選路徑，越特定的越前面：
    /// 分類下的資料目錄、資料目錄、分類下的 HTML 目錄、檔名本身
    pub fn candidate_paths(&self, filename: &str, category: &CategoryPath) -> [PathBuf; 4] {
        [
            category.join_onto(&self.data_dir).join(filename),
            self.data_dir.join(filename),
            category.join_onto(&self.html_dir).join(filename),
            PathBuf::from(filename),
        ]
    }

    /// 讀取第一個可讀的候選檔並解析，每次呼叫都重新讀檔
    pub fn load(&self, filename: &str, category: &CategoryPath) -> Result<QuoteFile> {
        let mut last_failure: Option<(PathBuf, std::io::Error)> = None;

        let found = self
            .candidate_paths(filename, category)
            .into_iter()
            .find_map(|path| match self.storage.read_file(&path) {
                Ok(bytes) => Some((path, bytes)),
                Err(e) => {
                    tracing::debug!("Quote candidate {} not readable: {}", path.display(), e);
                    last_failure = Some((path, e));
                    None
                }
            });

        let (path, bytes) = match found {
            Some(hit) => hit,
            None => {
                let (path, source) = last_failure.unwrap_or_else(|| {
                    (
                        PathBuf::from(filename),
                        std::io::Error::from(std::io::ErrorKind::NotFound),
                    )
                });
                return Err(QuoteError::NotFound { path, source });
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        let units = parse_quotes(&content, &self.delimiter);
        tracing::debug!(
            "Loaded {} quotes from {} for '{}'",
            units.len(),
            path.display(),
            filename
        );

        Ok(QuoteFile { path, units })
    }

    pub fn resolve(&self, filename: &str, category: &CategoryPath) -> Result<String> {
        let file = self.load(filename, category)?;
        match file.choose() {
            Some(quote) => Ok(quote.to_string()),
            None => Err(QuoteError::NoQuotes { path: file.path }),
        }
    }
}

impl<S: Storage> QuoteSource for QuoteResolver<S> {
    fn quote(&self, filename: &str, category: &CategoryPath) -> Result<String> {
        self.resolve(filename, category)
    }
}

/// 直接從檔案系統解析一則引言
pub fn resolve(
    filename: &str,
    category: &CategoryPath,
    data_dir: &Path,
    html_dir: &Path,
    delimiter: &str,
) -> Result<String> {
    QuoteResolver::new(LocalStorage::new(), data_dir, html_dir, delimiter).resolve(filename, category)
}
