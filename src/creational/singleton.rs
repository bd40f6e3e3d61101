//! Singleton: one coffee configuration store per application.
//!
//! Instead of an ambient global, the single instance lives inside an
//! [`AppContext`] that `main` creates once and passes by reference. The store
//! is created lazily on first access and every later access returns the same
//! instance.

use itertools::Itertools;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct CoffeeConfigStore {
    state: RefCell<BTreeMap<String, String>>,
}

impl CoffeeConfigStore {
    fn new() -> Self {
        tracing::debug!("coffee config store initialised");
        Self::default()
    }

    /// Inserts `value` only if `key` is not set yet. Returns whether it inserted.
    pub fn set_state(&self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let mut state = self.state.borrow_mut();
        let key = key.into();
        if state.contains_key(&key) {
            tracing::debug!(%key, "key already set, keeping existing value");
            return false;
        }
        state.insert(key, value.into());
        true
    }

    /// Overwrites `key`, returning the previous value.
    pub fn replace_state(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.state.borrow_mut().insert(key.into(), value.into())
    }

    /// Empty string when `key` is missing.
    pub fn get_state(&self, key: &str) -> String {
        self.get_state_or_default(key, "")
    }

    pub fn get_state_or_default(&self, key: &str, default: &str) -> String {
        self.state
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn has_state(&self, key: &str) -> bool {
        self.state.borrow().contains_key(key)
    }

    pub fn remove_state(&self, key: &str) -> Option<String> {
        self.state.borrow_mut().remove(key)
    }

    pub fn clear_state(&self) {
        self.state.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Key/value pairs in key order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// One `key: value` line per entry, in key order.
    pub fn render(&self) -> String {
        self.state
            .borrow()
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .join("\n")
    }
}

/// Owns the process-wide state. Create one in `main` and hand out `&AppContext`.
#[derive(Debug, Default)]
pub struct AppContext {
    coffee_config: OnceCell<CoffeeConfigStore>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coffee_config(&self) -> &CoffeeConfigStore {
        self.coffee_config.get_or_init(CoffeeConfigStore::new)
    }

    pub fn is_initialised(&self) -> bool {
        self.coffee_config.get().is_some()
    }
}
