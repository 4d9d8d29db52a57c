use crate::core::Storage;
use std::fs;
use std::path::{Path, PathBuf};

/// 檔案系統上的引言來源。相對路徑以 `base_path` 為基準，未設定時使用行程的工作目錄
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            // join 遇到絕對路徑時會直接採用該路徑
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(self.full_path(path))
    }
}
