// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake for testing without filesystem I/O.

use drift_app_core::config::{ConfigError, ConfigStore};
use drift_app_core::{SettingsRecord, SETTINGS_KEY};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can hand one clone to a
/// [`ConfigService`](drift_app_core::config::ConfigService) and keep another
/// to inspect call counts and stored blobs.
///
/// # Example
///
/// ```
/// use drift_dry_tests::InMemoryConfigStore;
/// use drift_app_core::config::ConfigService;
/// use drift_app_core::{ConfigPort, SettingsRecord, SETTINGS_KEY};
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// service.save_settings(SETTINGS_KEY, &SettingsRecord::default());
/// assert_eq!(store.save_count(), 1);
/// assert_eq!(store.settings(), Some(SettingsRecord::default()));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `settings` under [`SETTINGS_KEY`].
    pub fn with_settings(settings: &SettingsRecord) -> Self {
        let store = Self::new();
        if let Ok(bytes) = serde_json::to_vec(settings) {
            store.put_raw(SETTINGS_KEY, &bytes);
        }
        store
    }

    /// Write a blob directly, bypassing counters and failure flags.
    pub fn put_raw(&self, key: &str, data: &[u8]) {
        self.lock().data.insert(key.to_string(), data.to_vec());
    }

    /// Read a blob directly, bypassing counters and failure flags.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().data.get(key).cloned()
    }

    /// Decode the record stored under [`SETTINGS_KEY`], if any.
    pub fn settings(&self) -> Option<SettingsRecord> {
        self.raw(SETTINGS_KEY)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }

    /// Make every later `load_raw` fail (or stop failing).
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Make every later `save_raw` fail (or stop failing).
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Number of `load_raw` attempts, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Whether `key` currently holds a blob.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated save failure".into()));
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
