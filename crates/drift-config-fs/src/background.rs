// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fire-and-forget settings persistence on a dedicated writer thread.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use drift_app_core::config::{ConfigError, ConfigService, ConfigStore};
use drift_app_core::{ConfigPort, SettingsRecord};
use tracing::{debug, warn};

enum Job {
    Save {
        key: String,
        settings: SettingsRecord,
    },
    Flush(Sender<()>),
}

/// [`ConfigPort`] that queues saves for a single writer thread.
///
/// Writes land in submission order. Loads first wait for queued writes so a
/// load never observes an older value than the last save. Dropping the port
/// drains the queue and joins the writer.
pub struct BackgroundConfigPort<S> {
    reader: ConfigService<S>,
    tx: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl<S> BackgroundConfigPort<S>
where
    S: ConfigStore + Clone + Send + 'static,
{
    /// Start the writer thread over a clone of `store`.
    pub fn spawn(store: S) -> Result<Self, ConfigError> {
        let (tx, rx) = mpsc::channel::<Job>();
        let writer = ConfigService::new(store.clone());
        let worker = thread::Builder::new()
            .name("drift-config-writer".into())
            .spawn(move || {
                for job in rx {
                    match job {
                        Job::Save { key, settings } => writer.save_settings(&key, &settings),
                        Job::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
                debug!("config writer stopped");
            })?;
        Ok(Self {
            reader: ConfigService::new(store),
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Block until every save queued so far has been written.
    pub fn flush(&self) {
        let Some(tx) = &self.tx else { return };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl<S> ConfigPort for BackgroundConfigPort<S>
where
    S: ConfigStore + Clone + Send + 'static,
{
    fn load_settings(&self, key: &str) -> Option<SettingsRecord> {
        self.flush();
        self.reader.load_settings(key)
    }

    fn save_settings(&self, key: &str, settings: &SettingsRecord) {
        let job = Job::Save {
            key: key.to_string(),
            settings: settings.clone(),
        };
        let sent = self.tx.as_ref().is_some_and(|tx| tx.send(job).is_ok());
        if !sent {
            warn!(key, "config writer gone; settings not saved");
        }
    }
}

impl<S> Drop for BackgroundConfigPort<S> {
    fn drop(&mut self) {
        // Closing the channel ends the writer loop once the queue is empty.
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("config writer panicked");
            }
        }
    }
}
