use crate::config::QuoteConfig;
use crate::core::resolver::QuoteResolver;
use crate::core::scanner::substitute;
use crate::core::{CategoryPath, Entry, EntryAction, QuoteSource, Storage, SubstitutionReport};
use crate::utils::error::Result;
use regex::Regex;
use std::borrow::Cow;

/// 把文章內文中的引言標記換成隨機引言的管線步驟
pub struct QuoteAction<Q: QuoteSource> {
    marker: Regex,
    source: Q,
}

impl<S: Storage> QuoteAction<QuoteResolver<S>> {
    pub fn from_config(config: &QuoteConfig, storage: S) -> Self {
        let resolver = QuoteResolver::new(
            storage,
            config.data_dir(),
            config.html_dir(),
            config.delimiter(),
        );
        Self::with_source(config.marker().clone(), resolver)
    }
}

impl<Q: QuoteSource> QuoteAction<Q> {
    pub fn with_source(marker: Regex, source: Q) -> Self {
        Self { marker, source }
    }

    pub fn process<'b>(
        &self,
        body: &'b str,
        category: &CategoryPath,
    ) -> (Cow<'b, str>, SubstitutionReport) {
        let mut report = SubstitutionReport::default();

        let output = substitute(body, &self.marker, |filename| {
            report.markers += 1;
            let result = self.source.quote(filename, category);
            match &result {
                Ok(_) => report.resolved += 1,
                Err(_) => report.failed += 1,
            }
            result
        });

        (output, report)
    }
}

impl<Q: QuoteSource> EntryAction for QuoteAction<Q> {
    fn name(&self) -> &str {
        "quote"
    }

    /// 個別標記的失敗已經寫進內文，這裡永遠回傳成功
    fn apply(&self, entry: &mut Entry) -> Result<()> {
        let (output, report) = self.process(&entry.body, &entry.category);
        let replaced = match output {
            Cow::Owned(body) => Some(body),
            Cow::Borrowed(_) => None,
        };

        if let Some(body) = replaced {
            entry.body = body;
        }

        if report.markers > 0 {
            tracing::info!(
                "Substituted {} quote markers in {} ({} resolved, {} failed)",
                report.markers,
                entry.category,
                report.resolved,
                report.failed
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MARKER_PATTERN;
    use crate::utils::error::QuoteError;
    use std::path::PathBuf;

    struct FixedSource;

    impl QuoteSource for FixedSource {
        fn quote(&self, filename: &str, category: &CategoryPath) -> Result<String> {
            match filename {
                "missing" => Err(QuoteError::NotFound {
                    path: PathBuf::from(filename),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                }),
                _ => Ok(format!("{}@{}", filename, category)),
            }
        }
    }

    fn action() -> QuoteAction<FixedSource> {
        QuoteAction::with_source(Regex::new(DEFAULT_MARKER_PATTERN).unwrap(), FixedSource)
    }

    #[test]
    fn test_process_reports_counts() {
        let (output, report) = action().process(
            "<!--quote(a)--> <!--quote(missing)--> <!--quote(b)-->",
            &CategoryPath::parse("blog"),
        );

        assert_eq!(output, "a@/blog Can't open missing: gone b@/blog");
        assert_eq!(
            report,
            SubstitutionReport {
                markers: 3,
                resolved: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_apply_rewrites_entry_body() {
        let mut entry = Entry::new("Today: <!--quote(daily)-->!", CategoryPath::parse("/news"));

        action().apply(&mut entry).unwrap();

        assert_eq!(entry.body, "Today: daily@/news!");
        assert_eq!(entry.category, CategoryPath::parse("news"));
    }

    #[test]
    fn test_apply_succeeds_when_every_marker_fails() {
        let mut entry = Entry::new("<!--quote(missing)-->", CategoryPath::root());

        assert!(action().apply(&mut entry).is_ok());
        assert_eq!(entry.body, "Can't open missing: gone");
    }

    #[test]
    fn test_apply_without_markers_leaves_body() {
        let mut entry = Entry::new("plain text", CategoryPath::root());
        action().apply(&mut entry).unwrap();
        assert_eq!(entry.body, "plain text");
    }
}
