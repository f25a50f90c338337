use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::prefs::Preferences;

/// In-memory Preferences for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
