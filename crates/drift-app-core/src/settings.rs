// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! User preferences for the browser shell, persisted as one JSON blob.

use serde::{Deserialize, Serialize};

/// Start page used until the user picks another one.
pub const DEFAULT_START_PAGE: &str = "https://startpage.com";
/// Language code used until the user picks another one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Every user-configurable preference, treated as one atomic value.
///
/// The record is always fully populated; edits produce a new record rather
/// than patching fields inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// Page opened for new tabs (URL, unvalidated).
    pub start_page: String,
    /// Record visited pages.
    pub enable_browser_history: bool,
    /// Allow push notifications.
    pub notifications_enabled: bool,
    /// UI language code (e.g. `en`).
    pub language: String,
    /// Stamp the watermark overlay on captures.
    pub enable_watermark: bool,
    /// Premium subscription flag.
    pub is_premium_user: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE.to_string(),
            enable_browser_history: false,
            notifications_enabled: true,
            language: DEFAULT_LANGUAGE.to_string(),
            enable_watermark: true,
            is_premium_user: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_fully_populated() {
        let s = SettingsRecord::default();
        assert_eq!(s.start_page, "https://startpage.com");
        assert!(!s.enable_browser_history);
        assert!(s.notifications_enabled);
        assert_eq!(s.language, "en");
        assert!(s.enable_watermark);
        assert!(!s.is_premium_user);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SettingsRecord::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startPage": "https://startpage.com",
                "enableBrowserHistory": false,
                "notificationsEnabled": true,
                "language": "en",
                "enableWatermark": true,
                "isPremiumUser": false,
            })
        );
    }

    #[test]
    fn partial_blob_is_rejected() {
        let res = serde_json::from_str::<SettingsRecord>(r#"{"startPage":"https://a"}"#);
        assert!(res.is_err());
    }
}
