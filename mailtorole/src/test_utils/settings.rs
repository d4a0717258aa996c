// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::traits::{PropertyStore, Registry};

/// Site property sheet and registry in one.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    properties: HashMap<String, String>,
    records: HashMap<String, String>,
}

impl MemorySettings {
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_record(mut self, key: &str, value: &str) -> Self {
        self.records.insert(key.to_string(), value.to_string());
        self
    }
}

impl PropertyStore for MemorySettings {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

impl Registry for MemorySettings {
    fn record(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }
}
