// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for the Drift shell (settings, persistence, screens).
//! Keeps UI/platform adapters thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod interactor;
pub mod screen;
pub mod settings;
pub mod settings_view;
pub mod store;

pub use config_port::{ConfigPort, SETTINGS_KEY};
pub use interactor::AppInteractor;
pub use screen::Screen;
pub use settings::SettingsRecord;
pub use settings_view::SettingsEdit;
pub use store::{SettingsStore, SubscriptionId};
