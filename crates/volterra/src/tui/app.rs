//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use volterra_api::{
    AlertRule, ApiClient, PaperAccount, Position, Quote, ScannerRow, Sentiment, WatchlistEntry,
};
use volterra_nav::{
    dispatch, parse, resolve, DashboardState, Key, KeyPress, Market, RouteTable, ShortcutAction,
    ViewId,
};

use crate::tui::command_bar::CommandBarState;
use crate::tui::worker::{self, FetchRequest, FetchUpdate, WorkerHandle};

/// Tab cycle for the analyze view, in `[`/`]` order.
pub const ANALYZE_TABS: &[&str] = &[
    "overview",
    "options",
    "volatility",
    "greeks",
    "payoff",
    "regime",
];

/// Data fetched for the current views. Stale entries are simply overwritten
/// when the next fetch lands.
#[derive(Debug, Default)]
pub struct DataCache {
    pub quote: Option<Quote>,
    pub sentiment: Option<Sentiment>,
    pub scanner: Vec<ScannerRow>,
    pub watchlist: Vec<WatchlistEntry>,
    pub positions: Vec<Position>,
    pub alerts: Vec<AlertRule>,
    pub paper: Option<PaperAccount>,
}

pub struct App {
    pub running: bool,
    pub state: DashboardState,
    pub routes: RouteTable,
    pub command_bar: CommandBarState,
    pub data: DataCache,
    /// Row cursor for the scanner/watchlist tables
    pub table_cursor: usize,
    pub status: Option<String>,
    worker: WorkerHandle,
}

impl App {
    pub fn new(client: ApiClient, symbol: String, market: Market) -> Self {
        let mut app = App {
            running: true,
            state: DashboardState::with_symbol(symbol, market),
            routes: RouteTable::new(),
            command_bar: CommandBarState::new(),
            data: DataCache::default(),
            table_cursor: 0,
            status: None,
            worker: worker::spawn(client),
        };
        app.refresh_active_view();
        app
    }

    /// Drain worker updates. Called once per event-loop tick.
    pub fn tick(&mut self) {
        for update in self.worker.drain() {
            match update {
                FetchUpdate::Quote(quote) => self.data.quote = Some(quote),
                FetchUpdate::Sentiment(s) => self.data.sentiment = Some(s),
                FetchUpdate::Scanner(rows) => {
                    self.data.scanner = rows;
                    self.clamp_table_cursor();
                }
                FetchUpdate::Watchlist(entries) => {
                    self.data.watchlist = entries;
                    self.clamp_table_cursor();
                }
                FetchUpdate::Positions(positions) => self.data.positions = positions,
                FetchUpdate::Alerts(alerts) => self.data.alerts = alerts,
                FetchUpdate::PaperAccount(account) => self.data.paper = Some(account),
                FetchUpdate::Failed(msg) => self.status = Some(msg),
            }
        }
    }

    /// Queue fetches for whatever the active view shows.
    pub fn refresh_active_view(&mut self) {
        let symbol = self.state.selected_symbol.clone();
        let market = self.state.selected_market;
        match self.state.active_view {
            ViewId::Analyze | ViewId::Dashboard => {
                self.worker.request(FetchRequest::Quote {
                    symbol: symbol.clone(),
                    market,
                });
                self.worker.request(FetchRequest::Sentiment { symbol, market });
            }
            ViewId::Scanner => self.worker.request(FetchRequest::Scanner),
            ViewId::Watchlist => self.worker.request(FetchRequest::Watchlist),
            ViewId::Portfolio => {
                self.worker.request(FetchRequest::Positions);
                self.worker.request(FetchRequest::Alerts);
                self.worker.request(FetchRequest::PaperAccount);
            }
            ViewId::Settings => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        let editing = self.state.command_bar_open;

        // Global shortcuts first; anything they consume never reaches the
        // command bar or the views.
        if let Some(action) = dispatch(key_press_from(key), editing) {
            self.apply_shortcut(action);
            return;
        }

        if editing {
            self.handle_command_bar_key(key);
            return;
        }

        self.handle_view_key(key);
    }

    fn apply_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::OpenCommandBar => {
                self.command_bar.open();
                self.state.open_command_bar();
            }
            ShortcutAction::CloseOverlays => {
                self.command_bar.close();
                self.state.close_overlays();
            }
            ShortcutAction::OpenHelp => self.state.open_help(),
            ShortcutAction::OpenSettings | ShortcutAction::SwitchView(_) => {
                self.state.apply_shortcut(action);
                self.on_navigated();
            }
        }
    }

    fn handle_command_bar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_command_bar(),
            KeyCode::Up => self.command_bar.select_prev(),
            KeyCode::Down => self.command_bar.select_next(),
            KeyCode::Left => self.command_bar.cursor_left(),
            KeyCode::Right => self.command_bar.cursor_right(),
            KeyCode::Home => self.command_bar.cursor_home(),
            KeyCode::End => self.command_bar.cursor_end(),
            KeyCode::Backspace => self.command_bar.backspace(&self.routes),
            KeyCode::Delete => self.command_bar.delete(&self.routes),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.command_bar.clear()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.command_bar.insert_char(&self.routes, c)
            }
            _ => {}
        }
    }

    fn submit_command_bar(&mut self) {
        let text = self.command_bar.submission();
        self.command_bar.close();

        match parse(&self.routes, &text) {
            Some(intent) => {
                info!(?intent, "command");
                let resolution = resolve(&self.routes, &intent);
                self.state.apply(resolution);
                self.on_navigated();
            }
            // Empty submit: just close the bar; a help overlay underneath
            // stays up.
            None => self.state.close_command_bar(),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('r') => self.refresh_active_view(),
            KeyCode::Char(']') => self.cycle_analyze_tab(1),
            KeyCode::Char('[') => self.cycle_analyze_tab(-1),
            KeyCode::Up => self.move_table_cursor(-1),
            KeyCode::Down => self.move_table_cursor(1),
            KeyCode::Enter => self.activate_table_row(),
            _ => {}
        }
    }

    /// `[`/`]` step through the analyze tabs; no-op on other views.
    fn cycle_analyze_tab(&mut self, delta: isize) {
        if self.state.active_view != ViewId::Analyze {
            return;
        }
        let current = self
            .state
            .active_tab
            .as_deref()
            .and_then(|tab| ANALYZE_TABS.iter().position(|t| *t == tab))
            .unwrap_or(0);
        let len = ANALYZE_TABS.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.state.active_tab = Some(ANALYZE_TABS[next].to_string());
    }

    fn move_table_cursor(&mut self, delta: isize) {
        let len = self.active_table_len();
        if len == 0 {
            return;
        }
        let next = (self.table_cursor as isize + delta).clamp(0, len as isize - 1);
        self.table_cursor = next as usize;
    }

    /// Enter on a scanner/watchlist row jumps to that symbol's analyze
    /// overview.
    fn activate_table_row(&mut self) {
        let picked = match self.state.active_view {
            ViewId::Scanner => self
                .data
                .scanner
                .get(self.table_cursor)
                .map(|row| (row.symbol.clone(), row.market)),
            ViewId::Watchlist => self
                .data
                .watchlist
                .get(self.table_cursor)
                .map(|entry| (entry.symbol.clone(), entry.market)),
            _ => None,
        };
        if let Some((symbol, market)) = picked {
            self.state.select_symbol(symbol, market);
            self.on_navigated();
        }
    }

    fn active_table_len(&self) -> usize {
        match self.state.active_view {
            ViewId::Scanner => self.data.scanner.len(),
            ViewId::Watchlist => self.data.watchlist.len(),
            _ => 0,
        }
    }

    fn clamp_table_cursor(&mut self) {
        let len = self.active_table_len();
        if len == 0 {
            self.table_cursor = 0;
        } else if self.table_cursor >= len {
            self.table_cursor = len - 1;
        }
    }

    /// Common follow-up after any navigation transition.
    fn on_navigated(&mut self) {
        self.table_cursor = 0;
        self.status = None;
        self.refresh_active_view();
    }
}

/// Translate a crossterm key event into the dispatcher's key model.
fn key_press_from(key: KeyEvent) -> KeyPress {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) => Key::Function(n),
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    KeyPress {
        key: code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::new(
            ApiClient::new("http://127.0.0.1:1"),
            "SPY".to_string(),
            Market::Us,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn slash_opens_the_command_bar() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        assert!(app.state.command_bar_open);
        assert!(app.command_bar.input.is_empty());
    }

    #[test]
    fn slash_while_editing_is_just_a_character() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('/')));
        assert!(app.state.command_bar_open);
        assert_eq!(app.command_bar.input, "/");
    }

    #[test]
    fn typed_command_navigates_and_closes_the_bar() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        type_text(&mut app, "aapl opt");
        app.handle_key(press(KeyCode::Enter));

        assert!(!app.state.command_bar_open);
        assert_eq!(app.state.active_view, ViewId::Analyze);
        assert_eq!(app.state.active_tab.as_deref(), Some("options"));
        assert_eq!(app.state.selected_symbol, "AAPL");
        assert_eq!(app.state.selected_market, Market::Us);
    }

    #[test]
    fn empty_submit_only_closes_the_bar() {
        let mut app = test_app();
        app.state.active_tab = Some("greeks".to_string());
        app.handle_key(press(KeyCode::Char('?')));
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Enter));

        assert!(!app.state.command_bar_open);
        assert!(app.state.help_open);
        assert_eq!(app.state.active_view, ViewId::Analyze);
        assert_eq!(app.state.active_tab.as_deref(), Some("greeks"));
    }

    #[test]
    fn arrowed_suggestion_wins_over_raw_input() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        type_text(&mut app, "portfolio");
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));

        // First suggestion for "portfolio" is the PORT view switch.
        assert_eq!(app.state.active_view, ViewId::Portfolio);
        assert_eq!(app.state.active_tab, None);
        assert_eq!(app.state.selected_symbol, "SPY");
    }

    #[test]
    fn function_keys_switch_views_and_clear_the_tab() {
        let mut app = test_app();
        app.state.active_tab = Some("volatility".to_string());
        app.handle_key(press(KeyCode::F(2)));
        assert_eq!(app.state.active_view, ViewId::Dashboard);
        assert_eq!(app.state.active_tab, None);
    }

    #[test]
    fn function_keys_are_inert_while_editing() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::F(2)));
        assert_eq!(app.state.active_view, ViewId::Analyze);
        assert!(app.state.command_bar_open);
    }

    #[test]
    fn escape_closes_overlays_from_editing() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('?')));
        app.handle_key(press(KeyCode::Char('/')));
        type_text(&mut app, "dash");
        app.handle_key(press(KeyCode::Esc));

        assert!(!app.state.command_bar_open);
        assert!(!app.state.help_open);
        assert!(app.command_bar.input.is_empty());
        assert_eq!(app.state.active_view, ViewId::Analyze);
    }

    #[test]
    fn ctrl_comma_opens_settings() {
        let mut app = test_app();
        app.handle_key(ctrl(KeyCode::Char(',')));
        assert_eq!(app.state.active_view, ViewId::Settings);
    }

    #[test]
    fn question_mark_opens_help_only_outside_editing() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('?')));
        assert!(app.state.help_open);

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('?')));
        assert!(!app.state.help_open);
        assert_eq!(app.command_bar.input, "?");
    }

    #[test]
    fn brackets_cycle_analyze_tabs() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char(']')));
        assert_eq!(app.state.active_tab.as_deref(), Some("options"));
        app.handle_key(press(KeyCode::Char('[')));
        app.handle_key(press(KeyCode::Char('[')));
        assert_eq!(app.state.active_tab.as_deref(), Some("regime"));
    }

    #[test]
    fn enter_on_a_watchlist_row_selects_the_symbol() {
        let mut app = test_app();
        app.state.navigate_to(ViewId::Watchlist);
        app.data.watchlist = vec![volterra_api::WatchlistEntry {
            symbol: "9988".to_string(),
            market: Market::Hk,
            note: None,
            added_at: chrono_now(),
        }];
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.state.active_view, ViewId::Analyze);
        assert_eq!(app.state.active_tab.as_deref(), Some("overview"));
        assert_eq!(app.state.selected_symbol, "9988");
        assert_eq!(app.state.selected_market, Market::Hk);
    }

    #[test]
    fn q_quits_outside_editing_but_types_inside() {
        let mut app = test_app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.command_bar.input, "q");

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    fn chrono_now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}
