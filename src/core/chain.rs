use crate::core::{Entry, EntryAction};
use crate::utils::error::Result;

/// 依序對文章執行多個 entry action
#[derive(Default)]
pub struct ActionChain {
    actions: Vec<Box<dyn EntryAction>>,
}

impl ActionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<A: EntryAction + 'static>(&mut self, action: A) -> &mut Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn run(&self, entry: &mut Entry) -> Result<()> {
        tracing::debug!(
            "Running {} entry actions for {}",
            self.actions.len(),
            entry.category
        );

        for action in &self.actions {
            tracing::debug!("Applying entry action '{}'", action.name());
            action.apply(entry)?;
        }

        Ok(())
    }
}
