// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Bootstrap, edit, and navigation paths of `AppInteractor`.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use drift_app_core::config::ConfigService;
use drift_app_core::{AppInteractor, Screen, SettingsEdit, SettingsRecord, SETTINGS_KEY};
use drift_dry_tests::{InMemoryConfigStore, RecordingConfigPort};

fn bootstrap_over(backing: &InMemoryConfigStore) -> AppInteractor {
    AppInteractor::bootstrap(Arc::new(ConfigService::new(backing.clone())))
}

#[test]
fn empty_storage_starts_from_defaults_without_writing() {
    let backing = InMemoryConfigStore::new();
    let app = bootstrap_over(&backing);
    assert_eq!(app.settings(), SettingsRecord::default());
    assert_eq!(backing.load_count(), 1);
    assert_eq!(backing.save_count(), 0);
}

#[test]
fn persisted_settings_are_restored() {
    let saved = SettingsRecord {
        language: "es".into(),
        enable_watermark: false,
        ..SettingsRecord::default()
    };
    let backing = InMemoryConfigStore::with_settings(&saved);
    let app = bootstrap_over(&backing);
    assert_eq!(app.settings(), saved);
    assert_eq!(backing.save_count(), 0);
}

#[test]
fn corrupt_blob_falls_back_to_defaults() {
    let backing = InMemoryConfigStore::new();
    backing.put_raw(SETTINGS_KEY, b"{\"startPage\":");
    let app = bootstrap_over(&backing);
    assert_eq!(app.settings(), SettingsRecord::default());
}

#[test]
fn failing_load_falls_back_to_defaults() {
    let backing = InMemoryConfigStore::with_settings(&SettingsRecord {
        is_premium_user: true,
        ..SettingsRecord::default()
    });
    backing.set_fail_on_load(true);
    let app = bootstrap_over(&backing);
    assert!(!app.settings().is_premium_user);
}

#[test]
fn edits_are_persisted_and_survive_restart() {
    let backing = InMemoryConfigStore::new();
    {
        let mut app = bootstrap_over(&backing);
        app.apply(SettingsEdit::SetLanguage("nl".into()));
        app.apply(SettingsEdit::SetBrowserHistory(true));
    }
    assert_eq!(backing.save_count(), 2);

    let app = bootstrap_over(&backing);
    let s = app.settings();
    assert_eq!(s.language, "nl");
    assert!(s.enable_browser_history);
}

#[test]
fn restored_value_is_not_rewritten_until_changed() {
    let port = RecordingConfigPort::with_stored(SettingsRecord::default());
    let mut app = AppInteractor::bootstrap(Arc::new(port.clone()));
    assert_eq!(port.load_count(), 1);
    assert_eq!(port.save_count(), 0);

    app.apply(SettingsEdit::ResetToDefaults);
    assert_eq!(port.save_count(), 1);
}

#[test]
fn consumers_observe_edits() {
    let port = RecordingConfigPort::new();
    let mut app = AppInteractor::bootstrap(Arc::new(port));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    app.store_mut()
        .subscribe(move |s| sink.borrow_mut().push(s.start_page.clone()));

    app.apply(SettingsEdit::SetStartPage("https://duck.example".into()));

    assert_eq!(
        *seen.borrow(),
        vec![
            "https://startpage.com".to_string(),
            "https://duck.example".to_string()
        ]
    );
    assert_eq!(app.store().subscription_count(), 1);
}

#[test]
fn navigation_starts_on_browser() {
    let mut app = AppInteractor::bootstrap(Arc::new(RecordingConfigPort::new()));
    assert_eq!(app.screen(), Screen::Browser);
    app.navigate(Screen::Settings);
    assert_eq!(app.screen(), Screen::Settings);
}
