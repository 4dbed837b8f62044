//! Translated UI strings

use std::collections::HashMap;

/// Key used for the delete confirmation prompt
pub const DELETE_CONFIRM_KEY: &str = "admin.user_fields.delete_confirm";

const ENGLISH: &[(&str, &str)] = &[
    (
        DELETE_CONFIRM_KEY,
        "Are you sure you want to delete that user field?",
    ),
];

/// Key → text lookup with English defaults
///
/// Unknown keys render as `[missing "<key>" translation]` so they stand out
/// in the UI instead of disappearing.
#[derive(Debug, Clone)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Empty table; every lookup misses
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn english() -> Self {
        let mut t = Self::empty();
        for (key, text) in ENGLISH {
            t.insert(*key, *text);
        }
        t
    }

    /// Add or override a translation
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn t(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => format!("[missing \"{key}\" translation]"),
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}
