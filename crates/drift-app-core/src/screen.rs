// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Screen identities for shell navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Web content with the start page.
    #[default]
    Browser,
    /// Settings form.
    Settings,
    /// Premium upsell.
    Premium,
}

impl Screen {
    /// Every screen, in navigation order.
    pub const ALL: [Self; 3] = [Self::Browser, Self::Settings, Self::Premium];

    /// Stable route id.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Settings => "settings",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Route id that names no screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen route: {0}")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.route() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_back() {
        for screen in Screen::ALL {
            assert_eq!(screen.route().parse::<Screen>(), Ok(screen));
        }
    }

    #[test]
    fn unknown_route_is_rejected() {
        assert_eq!(
            "history".parse::<Screen>(),
            Err(UnknownScreen("history".into()))
        );
    }

    #[test]
    fn default_is_browser() {
        assert_eq!(Screen::default(), Screen::Browser);
    }
}
