pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::TomlConfig, QuoteConfig, QuoteSettings};
pub use crate::core::{
    action::QuoteAction,
    chain::ActionChain,
    resolver::{parse_quotes, resolve, QuoteResolver},
    scanner::substitute,
};
pub use crate::domain::model::{CategoryPath, Entry, QuoteFile, SubstitutionReport};
pub use crate::domain::ports::{ConfigProvider, EntryAction, QuoteSource, Storage};
pub use crate::utils::error::{QuoteError, Result};
