use crate::config::toml_config::TomlConfig;
use crate::config::QuoteSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-inject")]
#[command(about = "Replace quote markers in an entry body with random quotes")]
pub struct CliConfig {
    /// Entry body file; reads stdin when omitted
    pub input: Option<PathBuf>,

    #[arg(long, help = "TOML config file with a [quote] section")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long)]
    pub html_dir: Option<String>,

    #[arg(long, default_value = "", help = "Category path of the entry, e.g. /tech/rust")]
    pub category: String,

    #[arg(long)]
    pub marker_pattern: Option<String>,

    #[arg(long, help = "Quote delimiter; accepts \\n, \\r, \\t and \\\\ escapes")]
    pub delimiter: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()
    }

    /// 設定檔的值為基底，命令列參數優先
    pub fn settings(&self, file: Option<&TomlConfig>) -> QuoteSettings {
        let mut settings = file.map(|f| f.quote.clone()).unwrap_or_default();

        if let Some(pattern) = &self.marker_pattern {
            settings.marker_pattern = pattern.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            settings.delimiter = unescape(delimiter);
        }
        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(html_dir) = &self.html_dir {
            settings.html_dir = html_dir.clone();
        }

        settings
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
