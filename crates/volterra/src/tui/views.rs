//! Per-view body rendering. Thin wrappers over the data cache; all numbers
//! come from the analysis API as-is.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
};

use volterra_nav::ViewId;

use crate::tui::app::{App, ANALYZE_TABS};

pub fn draw_active_view(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.state.active_view {
        ViewId::Analyze => draw_analyze(frame, app, area),
        ViewId::Dashboard => draw_dashboard(frame, app, area),
        ViewId::Scanner => draw_scanner(frame, app, area),
        ViewId::Portfolio => draw_portfolio(frame, app, area),
        ViewId::Watchlist => draw_watchlist(frame, app, area),
        ViewId::Settings => draw_settings(frame, app, area),
    }
}

fn draw_analyze(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let selected = app
        .state
        .active_tab
        .as_deref()
        .and_then(|tab| ANALYZE_TABS.iter().position(|t| *t == tab))
        .unwrap_or(0);
    let tabs = Tabs::new(ANALYZE_TABS.iter().map(|t| t.replace('-', " ")))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(tabs, chunks[0]);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} ({})",
            app.state.selected_symbol,
            app.state.selected_market.as_str()
        ),
        Style::default().bold(),
    ))];

    match &app.data.quote {
        Some(q) => {
            let change_style = if q.change >= 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            lines.push(Line::from(vec![
                Span::raw(format!("Last {:.2}  ", q.last)),
                Span::styled(format!("{:+.2} ({:+.2}%)", q.change, q.change_pct), change_style),
            ]));
            if let Some(iv_rank) = q.iv_rank {
                lines.push(Line::raw(format!("IV rank {:.0}", iv_rank)));
            }
            lines.push(Line::raw(format!("As of {}", q.as_of.format("%H:%M:%S"))));
        }
        None => lines.push(Line::raw("Loading quote...")),
    }

    if let Some(s) = &app.data.sentiment {
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "Sentiment {:+.2}  P/C ratio {:.2}",
            s.score, s.put_call_ratio
        )));
    }

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
    frame.render_widget(body, chunks[1]);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Market overview",
        Style::default().bold(),
    ))];
    match &app.data.quote {
        Some(q) => lines.push(Line::raw(format!(
            "{}: {:.2} ({:+.2}%)",
            q.symbol, q.last, q.change_pct
        ))),
        None => lines.push(Line::raw("Loading...")),
    }
    if let Some(s) = &app.data.sentiment {
        lines.push(Line::raw(format!("Flow sentiment {:+.2}", s.score)));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

fn draw_scanner(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .data
        .scanner
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if idx == app.table_cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                row.symbol.clone(),
                row.market.as_str().to_string(),
                format!("{:.2}", row.last),
                format!("{:.1}x", row.volume_ratio),
                format!("{:.0}", row.iv_rank),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Symbol", "Mkt", "Last", "Vol", "IVR"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::NONE).title("Unusual activity"));
    frame.render_widget(table, area);
}

fn draw_watchlist(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .data
        .watchlist
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if idx == app.table_cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                entry.symbol.clone(),
                entry.market.as_str().to_string(),
                entry.note.clone().unwrap_or_default(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["Symbol", "Mkt", "Note"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::NONE).title("Watchlist"));
    frame.render_widget(table, area);
}

fn draw_portfolio(frame: &mut Frame, app: &App, area: Rect) {
    // Tab routing: positions by default, alerts and paper-trading via the
    // ALERTS / PAPER commands.
    match app.state.active_tab.as_deref() {
        Some("alerts") => draw_alerts(frame, app, area),
        Some("paper-trading") => draw_paper(frame, app, area),
        _ => draw_positions(frame, app, area),
    }
}

fn draw_positions(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .data
        .positions
        .iter()
        .map(|p| {
            let pnl_style = if p.unrealized_pnl >= 0.0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(p.symbol.clone()),
                Cell::from(format!("{:.0}", p.quantity)),
                Cell::from(format!("{:.2}", p.avg_price)),
                Cell::from(format!("{:.2}", p.mark)),
                Cell::from(format!("{:+.2}", p.unrealized_pnl)).style(pnl_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(Row::new(vec!["Symbol", "Qty", "Avg", "Mark", "PnL"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::NONE).title("Positions"));
    frame.render_widget(table, area);
}

fn draw_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .data
        .alerts
        .iter()
        .map(|a| {
            Row::new(vec![
                a.symbol.clone(),
                format!("{:?}", a.condition),
                format!("{:.2}", a.threshold),
                if a.triggered { "fired" } else { "armed" }.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Symbol", "Condition", "Level", "State"]).style(Style::default().bold()))
    .block(Block::default().borders(Borders::NONE).title("Alerts"));
    frame.render_widget(table, area);
}

fn draw_paper(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.data.paper {
        Some(acct) => vec![
            Line::from(Span::styled("Paper account", Style::default().bold())),
            Line::raw(format!("Equity     {:.2}", acct.equity)),
            Line::raw(format!("Cash       {:.2}", acct.cash)),
            Line::raw(format!("Day PnL    {:+.2}", acct.day_pnl)),
            Line::raw(format!("Open pos   {}", acct.open_positions)),
        ],
        None => vec![Line::raw("Loading paper account...")],
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

fn draw_settings(frame: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Settings", Style::default().bold())),
        Line::raw(""),
        Line::raw("Configuration is read from ~/.volterra/config.toml"),
        Line::raw("(override the directory with VOLTERRA_HOME)."),
        Line::raw(""),
        Line::raw("api_url         analysis API base URL"),
        Line::raw("default_symbol  symbol shown at startup"),
        Line::raw("default_market  US, JP or HK"),
        Line::raw("tick_ms         event loop tick interval"),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}
