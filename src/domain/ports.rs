use crate::domain::model::{CategoryPath, Entry};
use crate::utils::error::Result;
use std::path::Path;

/// 讀取引言檔的來源；失敗時回傳原始 IO 錯誤，讓解析器記錄原因
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn marker_pattern(&self) -> &str;
    fn delimiter(&self) -> &str;
    fn data_dir(&self) -> &Path;
    fn html_dir(&self) -> &Path;
}

/// 依檔名與分類取得一則引言
pub trait QuoteSource: Send + Sync {
    fn quote(&self, filename: &str, category: &CategoryPath) -> Result<String>;
}

/// 宿主管線中的單一步驟，逐篇文章執行
pub trait EntryAction: Send + Sync {
    fn name(&self) -> &str;
    fn apply(&self, entry: &mut Entry) -> Result<()>;
}
