pub mod action;
pub mod chain;
pub mod resolver;
pub mod scanner;

pub use crate::domain::model::{CategoryPath, Entry, QuoteFile, SubstitutionReport};
pub use crate::domain::ports::{ConfigProvider, EntryAction, QuoteSource, Storage};
pub use crate::utils::error::Result;
