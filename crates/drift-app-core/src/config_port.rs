// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Key/value port used by the settings store to load and persist the record.

use crate::config::{ConfigService, ConfigStore};
use crate::settings::SettingsRecord;
use tracing::{debug, warn};

/// Storage key under which the settings record is persisted.
pub const SETTINGS_KEY: &str = "settings";

/// Persistence-facing port for the settings record.
///
/// Both operations are best-effort: implementations log failures internally
/// and never hand them back to the caller.
pub trait ConfigPort {
    /// Load the record stored under `key` (returns None if missing or unreadable).
    fn load_settings(&self, key: &str) -> Option<SettingsRecord>;
    /// Persist `settings` under `key` (fire-and-forget).
    fn save_settings(&self, key: &str, settings: &SettingsRecord);
}

impl<S> ConfigPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_settings(&self, key: &str) -> Option<SettingsRecord> {
        match self.load::<SettingsRecord>(key) {
            Ok(Some(settings)) => Some(settings),
            Ok(None) => {
                debug!(key, "no persisted settings");
                None
            }
            Err(err) => {
                warn!(key, %err, "unreadable persisted settings");
                None
            }
        }
    }

    fn save_settings(&self, key: &str, settings: &SettingsRecord) {
        match self.save(key, settings) {
            Ok(()) => debug!(key, "settings persisted"),
            Err(err) => warn!(key, %err, "failed to persist settings"),
        }
    }
}
