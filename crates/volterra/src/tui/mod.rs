//! Terminal shell: event loop, app state, rendering.

pub mod app;
pub mod command_bar;
pub mod event;
pub mod ui;
pub mod views;
pub mod worker;

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};

use volterra_api::ApiClient;
use volterra_nav::Market;

use crate::config::VolterraConfig;
use crate::tui::app::App;
use crate::tui::event::{Event, EventHandler};

/// TUI command arguments
#[derive(Debug, Args, Default)]
pub struct TuiArgs {
    /// Starting symbol (defaults to the configured default_symbol)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Starting market: US, JP or HK
    #[arg(long, value_parser = parse_market_arg)]
    pub market: Option<Market>,
}

fn parse_market_arg(value: &str) -> Result<Market, String> {
    Market::from_code(value).ok_or_else(|| format!("unknown market {:?} (expected US, JP or HK)", value))
}

/// Resolve the starting symbol/market from CLI flags over config defaults.
pub fn starting_symbol(args: &TuiArgs, config: &VolterraConfig) -> (String, Market) {
    let symbol = args
        .symbol
        .clone()
        .unwrap_or_else(|| config.default_symbol.clone())
        .to_ascii_uppercase();
    let market = args.market.unwrap_or(config.default_market);
    (symbol, market)
}

/// Run the TUI until the user quits.
pub fn run(args: TuiArgs, config: VolterraConfig) -> Result<()> {
    let (symbol, market) = starting_symbol(&args, &config);
    let client = ApiClient::new(config.api_url.clone());
    let tick_rate = Duration::from_millis(config.tick_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client, symbol, market);
    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next() {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => app.tick(),
            Event::Resize(_, _) => {} // Ratatui handles resize
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use volterra_nav::ViewId;

    fn test_app() -> App {
        // Nothing listens on this port; fetches fail fast and become
        // status-line messages.
        App::new(
            ApiClient::new("http://127.0.0.1:1"),
            "SPY".to_string(),
            Market::Us,
        )
    }

    #[test]
    fn app_starts_on_the_analyze_view() {
        let app = test_app();
        assert!(app.running);
        assert_eq!(app.state.active_view, ViewId::Analyze);
        assert_eq!(app.state.selected_symbol, "SPY");
    }

    #[test]
    fn draw_does_not_panic_on_a_small_terminal() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();
    }

    #[test]
    fn draw_renders_overlays_together() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.state.open_help();
        app.state.open_command_bar();
        terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();
    }

    #[test]
    fn market_arg_parses_known_codes() {
        assert_eq!(parse_market_arg("hk"), Ok(Market::Hk));
        assert!(parse_market_arg("LSE").is_err());
    }

    #[test]
    fn cli_symbol_wins_over_config_default() {
        let config = VolterraConfig::default();
        let args = TuiArgs {
            symbol: Some("nvda".to_string()),
            market: Some(Market::Jp),
        };
        assert_eq!(starting_symbol(&args, &config), ("NVDA".to_string(), Market::Jp));

        let args = TuiArgs::default();
        assert_eq!(starting_symbol(&args, &config), ("SPY".to_string(), Market::Us));
    }
}
