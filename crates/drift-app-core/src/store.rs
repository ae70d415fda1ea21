// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Observable settings holder with auto-persistence.
//!
//! [`SettingsStore`] owns the live [`SettingsRecord`] and broadcasts every
//! replacement to its listeners in registration order. The first listener is
//! the auto-save subscription, armed at construction:
//!
//! - **Replay(1)**: a new listener immediately receives the current value.
//! - **Drop-first**: auto-save skips that construction-time emission, so
//!   starting the app never rewrites what storage already holds.
//! - **No dedupe**: every later replacement is persisted, even when equal to
//!   the previous record.
//!
//! ```
//! use std::sync::Arc;
//! use drift_app_core::{ConfigPort, SettingsRecord, SettingsStore};
//!
//! struct Discard;
//! impl ConfigPort for Discard {
//!     fn load_settings(&self, _key: &str) -> Option<SettingsRecord> { None }
//!     fn save_settings(&self, _key: &str, _settings: &SettingsRecord) {}
//! }
//!
//! let mut store = SettingsStore::new(SettingsRecord::default(), Arc::new(Discard));
//! store.update(|s| s.is_premium_user = true);
//! assert!(store.current().is_premium_user);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config_port::{ConfigPort, SETTINGS_KEY};
use crate::settings::SettingsRecord;

type Listener = Box<dyn FnMut(&SettingsRecord)>;

/// Handle returned by [`SettingsStore::subscribe`]; pass it to
/// [`SettingsStore::unsubscribe`] to release the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Canonical in-memory settings record plus its change listeners.
///
/// Single-owner: listeners are not `Send`, and all reads and writes are
/// expected from one execution context.
pub struct SettingsStore {
    current: SettingsRecord,
    /// Registration order; index 0 is the auto-save listener.
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    autosave: SubscriptionId,
}

impl SettingsStore {
    /// Create a store holding `initial` and arm auto-save against `port`.
    ///
    /// The initial value is not persisted.
    pub fn new(initial: SettingsRecord, port: Arc<dyn ConfigPort>) -> Self {
        let mut store = Self {
            current: initial,
            listeners: Vec::new(),
            next_id: 0,
            autosave: SubscriptionId(0),
        };
        store.autosave = store.subscribe(autosave_listener(port));
        store
    }

    /// Copy of the present record.
    pub fn current(&self) -> SettingsRecord {
        self.current.clone()
    }

    /// Read-only view of the present record.
    pub fn get(&self) -> &SettingsRecord {
        &self.current
    }

    /// Swap in `record` and notify every listener, in registration order.
    ///
    /// Persistence happens through the auto-save listener; a failed save
    /// leaves the new record in place.
    pub fn replace(&mut self, record: SettingsRecord) {
        self.current = record;
        let current = &self.current;
        for (_, listener) in &mut self.listeners {
            listener(current);
        }
    }

    /// Apply `edit` to a copy of the current record, then [`replace`](Self::replace) with it.
    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut SettingsRecord),
    {
        let mut next = self.current.clone();
        edit(&mut next);
        self.replace(next);
    }

    /// Register a listener. It is called right away with the current record,
    /// then once per later replacement.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SettingsRecord) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut listener: Listener = Box::new(listener);
        listener(&self.current);
        self.listeners.push((id, listener));
        id
    }

    /// Release a consumer listener. Returns false if `id` is unknown or
    /// refers to the auto-save subscription, which lives as long as the store.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if id == self.autosave {
            return false;
        }
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of live consumer listeners (auto-save excluded).
    pub fn subscription_count(&self) -> usize {
        self.listeners.len().saturating_sub(1)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn autosave_listener(port: Arc<dyn ConfigPort>) -> impl FnMut(&SettingsRecord) {
    let mut past_initial = false;
    move |settings: &SettingsRecord| {
        if !past_initial {
            past_initial = true;
            return;
        }
        debug!("settings changed; saving");
        port.save_settings(SETTINGS_KEY, settings);
    }
}
