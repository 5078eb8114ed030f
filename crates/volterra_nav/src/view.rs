use serde::{Deserialize, Serialize};

/// Top-level dashboard views. The string forms are the stable identifiers
/// used in route entries and suggestion labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Analyze,
    Dashboard,
    Scanner,
    Portfolio,
    Watchlist,
    Settings,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Analyze => "analyze",
            ViewId::Dashboard => "dashboard",
            ViewId::Scanner => "scanner",
            ViewId::Portfolio => "portfolio",
            ViewId::Watchlist => "watchlist",
            ViewId::Settings => "settings",
        }
    }
}

/// Market a symbol trades on. Bare tickers default to US.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "HK")]
    Hk,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Us => "US",
            Market::Jp => "JP",
            Market::Hk => "HK",
        }
    }

    /// Parse a market code, case-insensitive. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Market> {
        match code.to_ascii_uppercase().as_str() {
            "US" => Some(Market::Us),
            "JP" => Some(Market::Jp),
            "HK" => Some(Market::Hk),
            _ => None,
        }
    }
}

/// One entry in the top navigation bar, bound to a function key.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub view: ViewId,
    pub label: &'static str,
    pub shortcut: &'static str,
    pub command: &'static str,
}

/// Navigation bar order is function-key order: F1 maps to the first item.
/// Settings has no entry here; it is reached via Ctrl+, or the SET command.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        view: ViewId::Analyze,
        label: "Analyze",
        shortcut: "F1",
        command: "ANA",
    },
    NavItem {
        view: ViewId::Dashboard,
        label: "Dashboard",
        shortcut: "F2",
        command: "DASH",
    },
    NavItem {
        view: ViewId::Scanner,
        label: "Scanner",
        shortcut: "F3",
        command: "SCAN",
    },
    NavItem {
        view: ViewId::Portfolio,
        label: "Portfolio",
        shortcut: "F4",
        command: "PORT",
    },
    NavItem {
        view: ViewId::Watchlist,
        label: "Watchlist",
        shortcut: "F5",
        command: "WATCH",
    },
];

pub fn nav_index_for_view(view: ViewId) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.view == view)
}

pub fn nav_view_for_index(index: usize) -> Option<ViewId> {
    NAV_ITEMS.get(index).map(|item| item.view)
}

/// Label shown for a view in suggestions and the nav bar. Views without a
/// nav item fall back to their raw identifier.
pub fn nav_label_for_view(view: ViewId) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.view == view)
        .map(|item| item.label)
        .unwrap_or_else(|| view.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_items_have_unique_views_and_shortcuts() {
        let mut view_set = HashSet::new();
        let mut shortcut_set = HashSet::new();
        for item in NAV_ITEMS {
            assert!(
                view_set.insert(item.view),
                "Duplicate view in NAV_ITEMS: {:?}",
                item.view
            );
            assert!(
                shortcut_set.insert(item.shortcut),
                "Duplicate shortcut in NAV_ITEMS: {}",
                item.shortcut
            );
        }
    }

    #[test]
    fn nav_index_roundtrips() {
        for (idx, item) in NAV_ITEMS.iter().enumerate() {
            assert_eq!(nav_index_for_view(item.view), Some(idx));
            assert_eq!(nav_view_for_index(idx), Some(item.view));
        }
        assert_eq!(nav_view_for_index(NAV_ITEMS.len()), None);
    }

    #[test]
    fn settings_has_no_nav_item_but_keeps_a_label() {
        assert_eq!(nav_index_for_view(ViewId::Settings), None);
        assert_eq!(nav_label_for_view(ViewId::Settings), "settings");
        assert_eq!(nav_label_for_view(ViewId::Analyze), "Analyze");
    }

    #[test]
    fn market_codes_roundtrip() {
        for market in [Market::Us, Market::Jp, Market::Hk] {
            assert_eq!(Market::from_code(market.as_str()), Some(market));
        }
        assert_eq!(Market::from_code("hk"), Some(Market::Hk));
        assert_eq!(Market::from_code("LSE"), None);
        assert_eq!(Market::default(), Market::Us);
    }
}
