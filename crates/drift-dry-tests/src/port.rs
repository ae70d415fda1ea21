// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording [`ConfigPort`] fake: captures every save call in order.

use drift_app_core::{ConfigPort, SettingsRecord};
use std::sync::{Arc, Mutex, MutexGuard};

/// One observed `save_settings` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCall {
    /// Key passed to the port.
    pub key: String,
    /// Record passed to the port.
    pub settings: SettingsRecord,
}

/// [`ConfigPort`] fake that records calls instead of touching storage.
///
/// Clones share state. With `set_fail_on_save(true)` calls are still
/// recorded but nothing becomes durable, which is how a failing disk looks
/// from behind a fire-and-forget port.
#[derive(Clone, Default)]
pub struct RecordingConfigPort {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    stored: Option<SettingsRecord>,
    saves: Vec<SaveCall>,
    loads: usize,
    fail_on_save: bool,
}

impl RecordingConfigPort {
    /// Empty port: loads return `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Port whose loads return `settings`.
    pub fn with_stored(settings: SettingsRecord) -> Self {
        let port = Self::new();
        port.lock().stored = Some(settings);
        port
    }

    /// Make later saves fail (or stop failing).
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Every save call so far, in call order.
    pub fn saves(&self) -> Vec<SaveCall> {
        self.lock().saves.clone()
    }

    /// Number of save calls so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves.len()
    }

    /// Number of load calls so far.
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    /// Last successfully persisted record.
    pub fn stored(&self) -> Option<SettingsRecord> {
        self.lock().stored.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigPort for RecordingConfigPort {
    fn load_settings(&self, _key: &str) -> Option<SettingsRecord> {
        let mut inner = self.lock();
        inner.loads += 1;
        inner.stored.clone()
    }

    fn save_settings(&self, key: &str, settings: &SettingsRecord) {
        let mut inner = self.lock();
        inner.saves.push(SaveCall {
            key: key.to_string(),
            settings: settings.clone(),
        });
        if !inner.fail_on_save {
            inner.stored = Some(settings.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_saves_in_order() {
        let port = RecordingConfigPort::new();
        let mut a = SettingsRecord::default();
        a.language = "a".into();
        let mut b = SettingsRecord::default();
        b.language = "b".into();
        port.save_settings("k", &a);
        port.save_settings("k", &b);
        let langs: Vec<_> = port.saves().into_iter().map(|c| c.settings.language).collect();
        assert_eq!(langs, vec!["a", "b"]);
        assert_eq!(port.stored(), Some(b));
    }

    #[test]
    fn failed_save_is_recorded_but_not_stored() {
        let port = RecordingConfigPort::with_stored(SettingsRecord::default());
        port.set_fail_on_save(true);
        let mut s = SettingsRecord::default();
        s.is_premium_user = true;
        port.save_settings("k", &s);
        assert_eq!(port.save_count(), 1);
        assert_eq!(port.stored(), Some(SettingsRecord::default()));
    }
}
