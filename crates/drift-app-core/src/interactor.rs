// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! App-level wiring: bootstrap the settings store and route consumer edits into it.

use std::sync::Arc;

use tracing::info;

use crate::config_port::{ConfigPort, SETTINGS_KEY};
use crate::screen::Screen;
use crate::settings::SettingsRecord;
use crate::settings_view::{reduce, SettingsEdit};
use crate::store::SettingsStore;

/// Owns the settings store and the current screen for one app session.
#[derive(Debug)]
pub struct AppInteractor {
    store: SettingsStore,
    screen: Screen,
}

impl AppInteractor {
    /// Load persisted settings (default if absent or unreadable) and arm auto-save.
    pub fn bootstrap(port: Arc<dyn ConfigPort>) -> Self {
        let initial = port.load_settings(SETTINGS_KEY).unwrap_or_else(|| {
            info!("starting with default settings");
            SettingsRecord::default()
        });
        Self {
            store: SettingsStore::new(initial, port),
            screen: Screen::default(),
        }
    }

    /// Copy of the current settings.
    pub fn settings(&self) -> SettingsRecord {
        self.store.current()
    }

    /// Read-only access to the store.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Mutable access for consumers that replace or subscribe directly.
    pub fn store_mut(&mut self) -> &mut SettingsStore {
        &mut self.store
    }

    /// Apply one settings-screen edit.
    pub fn apply(&mut self, edit: SettingsEdit) {
        let next = reduce(self.store.get(), edit);
        self.store.replace(next);
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch to `screen`.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }
}
