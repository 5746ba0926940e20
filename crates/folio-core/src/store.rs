//! Key/value persistence seam.
//!
//! The browser build backs this with `localStorage`; tests and hosts without
//! storage use [`MemoryStore`].

use crate::error::StoreError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Session-only store. Clones share the same map, which lets a test stand in
/// for a page reload by building a second controller over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let reloaded = store.clone();

        store.save("portfolio-theme", "dark")?;

        assert_eq!(reloaded.load("portfolio-theme")?.as_deref(), Some("dark"));
        assert_eq!(reloaded.load("other")?, None);
        Ok(())
    }
}
