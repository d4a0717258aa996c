// SPDX-License-Identifier: MIT OR Apache-2.0

/// Site property sheet. Takes precedence over the [`Registry`].
pub trait PropertyStore {
    fn property(&self, key: &str) -> Option<String>;
}

/// Site-wide key/value settings registry.
pub trait Registry {
    fn record(&self, key: &str) -> Option<String>;
}
