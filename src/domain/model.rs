use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 文章在內容樹中的位置，例如 `/tech/rust` -> `["tech", "rust"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// 以 `/` 切開，忽略空白片段（開頭、結尾或連續的斜線）
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('/'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// 把分類片段依序接在 `base` 之後
    pub fn join_onto(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(&self.segments);
        path
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<&str> for CategoryPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entry {
    pub body: String,
    pub category: CategoryPath,
}

impl Entry {
    pub fn new(body: impl Into<String>, category: CategoryPath) -> Self {
        Self {
            body: body.into(),
            category,
        }
    }
}

/// 單次解析出的引言檔，每次解析都重新讀取，不做快取
#[derive(Debug, Clone)]
pub struct QuoteFile {
    pub path: PathBuf,
    pub units: Vec<String>,
}

impl QuoteFile {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn choose(&self) -> Option<&str> {
        self.choose_with(&mut rand::thread_rng())
    }

    pub fn choose_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.units.choose(rng).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub markers: usize,
    pub resolved: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_category_path() {
        let category = CategoryPath::parse("/tech//rust/");
        assert_eq!(category.segments(), &["tech".to_string(), "rust".to_string()]);
        assert_eq!(category.to_string(), "/tech/rust");
        assert!(!category.is_root());

        assert!(CategoryPath::parse("").is_root());
        assert!(CategoryPath::parse("/").is_root());
        assert_eq!(CategoryPath::root().to_string(), "/");
    }

    #[test]
    fn test_join_onto() {
        let category = CategoryPath::parse("tech/rust");
        assert_eq!(
            category.join_onto(Path::new("data")),
            Path::new("data").join("tech").join("rust")
        );
        assert_eq!(CategoryPath::root().join_onto(Path::new("data")), PathBuf::from("data"));
    }

    #[test]
    fn test_choose_with_seeded_rng_is_reproducible() {
        let file = QuoteFile {
            path: PathBuf::from("fortunes"),
            units: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        };

        let first = file.choose_with(&mut StdRng::seed_from_u64(7));
        let second = file.choose_with(&mut StdRng::seed_from_u64(7));

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_choose_from_empty_file() {
        let file = QuoteFile {
            path: PathBuf::from("empty"),
            units: vec![],
        };

        assert!(file.is_empty());
        assert_eq!(file.choose(), None);
    }
}
