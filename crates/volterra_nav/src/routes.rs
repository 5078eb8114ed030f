use serde::Serialize;

use crate::view::ViewId;

/// One token the command bar understands, routed to a view and optional tab.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandRouteEntry {
    pub token: &'static str,
    pub view: ViewId,
    pub tab: Option<&'static str>,
}

/// Tokens are upper-case and unique; lookups ignore case. Enumeration order
/// is the order suggestions are shown in: view switches first, then tabs.
const ROUTE_ENTRIES: &[CommandRouteEntry] = &[
    CommandRouteEntry {
        token: "ANA",
        view: ViewId::Analyze,
        tab: None,
    },
    CommandRouteEntry {
        token: "DASH",
        view: ViewId::Dashboard,
        tab: None,
    },
    CommandRouteEntry {
        token: "SCAN",
        view: ViewId::Scanner,
        tab: None,
    },
    CommandRouteEntry {
        token: "PORT",
        view: ViewId::Portfolio,
        tab: None,
    },
    CommandRouteEntry {
        token: "WATCH",
        view: ViewId::Watchlist,
        tab: None,
    },
    CommandRouteEntry {
        token: "SET",
        view: ViewId::Settings,
        tab: None,
    },
    CommandRouteEntry {
        token: "OPT",
        view: ViewId::Analyze,
        tab: Some("options"),
    },
    CommandRouteEntry {
        token: "VOL",
        view: ViewId::Analyze,
        tab: Some("volatility"),
    },
    CommandRouteEntry {
        token: "GREEKS",
        view: ViewId::Analyze,
        tab: Some("greeks"),
    },
    CommandRouteEntry {
        token: "PAY",
        view: ViewId::Analyze,
        tab: Some("payoff"),
    },
    CommandRouteEntry {
        token: "REG",
        view: ViewId::Analyze,
        tab: Some("regime"),
    },
    CommandRouteEntry {
        token: "ALERTS",
        view: ViewId::Portfolio,
        tab: Some("alerts"),
    },
    CommandRouteEntry {
        token: "PAPER",
        view: ViewId::Portfolio,
        tab: Some("paper-trading"),
    },
];

/// Immutable command routing table, fixed at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    pub fn new() -> Self {
        RouteTable
    }

    /// Case-insensitive exact token lookup. A miss is not an error; the
    /// command parser treats unmatched tokens as ticker symbols.
    pub fn lookup(&self, token: &str) -> Option<&'static CommandRouteEntry> {
        ROUTE_ENTRIES
            .iter()
            .find(|entry| entry.token.eq_ignore_ascii_case(token))
    }

    pub fn entries(&self) -> &'static [CommandRouteEntry] {
        ROUTE_ENTRIES
    }
}
