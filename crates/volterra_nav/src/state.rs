use crate::command::NavResolution;
use crate::hotkeys::ShortcutAction;
use crate::view::{Market, ViewId};

/// The dashboard's navigation state. Single-owner: the TUI app mutates it
/// from the event loop, one transition at a time.
///
/// `command_bar_open` and `help_open` are independent; nothing forces them
/// to be mutually exclusive, the renderer simply stacks help on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub active_view: ViewId,
    pub active_tab: Option<String>,
    pub selected_symbol: String,
    pub selected_market: Market,
    pub command_bar_open: bool,
    pub help_open: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        DashboardState {
            active_view: ViewId::Analyze,
            active_tab: None,
            selected_symbol: "SPY".to_string(),
            selected_market: Market::Us,
            command_bar_open: false,
            help_open: false,
        }
    }

    pub fn with_symbol(symbol: String, market: Market) -> Self {
        DashboardState {
            selected_symbol: symbol,
            selected_market: market,
            ..Self::new()
        }
    }

    /// Apply a resolved command-bar submission and close the bar.
    pub fn apply(&mut self, resolution: NavResolution) {
        self.active_view = resolution.view;
        self.active_tab = resolution.tab;
        if let Some(sym) = resolution.symbol {
            self.selected_symbol = sym.symbol;
            self.selected_market = sym.market;
        }
        self.command_bar_open = false;
    }

    /// Direct view switch (nav bar, F-keys, settings). Always clears the
    /// tab, even when re-selecting the current view.
    pub fn navigate_to(&mut self, view: ViewId) {
        self.active_view = view;
        self.active_tab = None;
    }

    /// Symbol picked from a data panel row: jump to the analyze overview.
    pub fn select_symbol(&mut self, symbol: String, market: Market) {
        self.selected_symbol = symbol;
        self.selected_market = market;
        self.active_view = ViewId::Analyze;
        self.active_tab = Some("overview".to_string());
    }

    pub fn open_command_bar(&mut self) {
        self.command_bar_open = true;
    }

    pub fn close_command_bar(&mut self) {
        self.command_bar_open = false;
    }

    pub fn open_help(&mut self) {
        self.help_open = true;
    }

    /// Close whatever overlays are up. Idempotent.
    pub fn close_overlays(&mut self) {
        self.command_bar_open = false;
        self.help_open = false;
    }

    pub fn apply_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::OpenCommandBar => self.open_command_bar(),
            ShortcutAction::OpenHelp => self.open_help(),
            ShortcutAction::CloseOverlays => self.close_overlays(),
            ShortcutAction::OpenSettings => self.navigate_to(ViewId::Settings),
            ShortcutAction::SwitchView(view) => self.navigate_to(view),
        }
    }
}
