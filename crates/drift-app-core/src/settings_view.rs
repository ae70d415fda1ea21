// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure edits for the settings screen.

use crate::settings::SettingsRecord;

/// One change made on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    /// New start page URL (not validated).
    SetStartPage(String),
    /// Toggle history recording.
    SetBrowserHistory(bool),
    /// Toggle notifications.
    SetNotifications(bool),
    /// New language code.
    SetLanguage(String),
    /// Toggle the watermark overlay.
    SetWatermark(bool),
    /// Premium status flag.
    SetPremium(bool),
    /// Restore every field to its default.
    ResetToDefaults,
}

/// Produce the replacement record for `edit`; `current` is left untouched.
pub fn reduce(current: &SettingsRecord, edit: SettingsEdit) -> SettingsRecord {
    let mut next = current.clone();
    match edit {
        SettingsEdit::SetStartPage(url) => next.start_page = url,
        SettingsEdit::SetBrowserHistory(on) => next.enable_browser_history = on,
        SettingsEdit::SetNotifications(on) => next.notifications_enabled = on,
        SettingsEdit::SetLanguage(code) => next.language = code,
        SettingsEdit::SetWatermark(on) => next.enable_watermark = on,
        SettingsEdit::SetPremium(on) => next.is_premium_user = on,
        SettingsEdit::ResetToDefaults => next = SettingsRecord::default(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_touches_only_its_field() {
        let base = SettingsRecord::default();
        let next = reduce(&base, SettingsEdit::SetPremium(true));
        assert!(next.is_premium_user);
        assert_eq!(
            SettingsRecord {
                is_premium_user: false,
                ..next
            },
            base
        );
    }

    #[test]
    fn malformed_start_page_is_accepted() {
        let next = reduce(
            &SettingsRecord::default(),
            SettingsEdit::SetStartPage("not a url".into()),
        );
        assert_eq!(next.start_page, "not a url");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = SettingsRecord::default();
        s.language = "ja".into();
        s.enable_watermark = false;
        assert_eq!(
            reduce(&s, SettingsEdit::ResetToDefaults),
            SettingsRecord::default()
        );
    }
}
