//! Volterra navigation core.
//!
//! Pure view/tab navigation for the terminal dashboard: the command route
//! table, symbol/market parsing, free-text command parsing, suggestion
//! matching, keyboard-shortcut dispatch, and the dashboard state machine.
//! No I/O and no terminal dependencies live here; the binary crate feeds
//! keystrokes and command-bar text in and applies the resulting transitions.

pub mod command;
pub mod hotkeys;
pub mod routes;
pub mod state;
pub mod suggest;
pub mod symbol;
pub mod view;

pub use command::{parse, resolve, NavResolution, NavigationIntent};
pub use hotkeys::{dispatch, Key, KeyPress, ShortcutAction};
pub use routes::{CommandRouteEntry, RouteTable};
pub use state::DashboardState;
pub use suggest::{suggest, Suggestion};
pub use symbol::{parse_market, ParsedSymbol};
pub use view::{
    nav_index_for_view, nav_label_for_view, nav_view_for_index, Market, NavItem, ViewId, NAV_ITEMS,
};
