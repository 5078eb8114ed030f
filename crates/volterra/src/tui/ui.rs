//! Frame layout: nav bar, view body, footer, overlays.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use volterra_nav::{nav_index_for_view, NAV_ITEMS};

use crate::tui::app::App;
use crate::tui::views;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(0),    // View body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_nav_bar(frame, app, chunks[0]);
    views::draw_active_view(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    // Overlays stack: command bar first, help above it. Both may be open at
    // once.
    if app.state.command_bar_open {
        draw_command_bar(frame, app, area);
    }
    if app.state.help_open {
        draw_help_overlay(frame, area);
    }
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active_idx = nav_index_for_view(app.state.active_view);

    let mut spans: Vec<Span> = Vec::new();
    for (idx, item) in NAV_ITEMS.iter().enumerate() {
        let style = if Some(idx) == active_idx {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", item.shortcut, item.label), style));
        spans.push(Span::raw(" "));
    }

    let symbol = format!(
        " {} {} ",
        app.state.selected_symbol,
        app.state.selected_market.as_str()
    );
    spans.push(Span::styled(
        symbol,
        Style::default().fg(Color::Yellow).bold(),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).title(" volterra "));
    frame.render_widget(bar, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status {
        Some(status) => format!(" {} ", status),
        None => " [/] Command  [?] Help  [F1-F5] Views  [r] Refresh  [q] Quit ".to_string(),
    };
    let style = if app.status.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let footer = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn draw_command_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Input line plus up to eight suggestion rows, near the top like a
    // palette.
    let height = (3 + app.command_bar.suggestions.len() as u16).min(11);
    let width = 64.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + 2.min(area.height.saturating_sub(height));
    let bar_area = Rect::new(x, y, width, height.min(area.height));

    frame.render_widget(Clear, bar_area);
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(bar_area);
    frame.render_widget(block, bar_area);
    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let input = Paragraph::new(format!("> {}", app.command_bar.input));
    frame.render_widget(input, chunks[0]);
    frame.set_cursor_position((
        chunks[0].x + 2 + app.command_bar.cursor as u16,
        chunks[0].y,
    ));

    let items: Vec<ListItem> = app
        .command_bar
        .suggestions
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let style = if app.command_bar.selected == Some(idx) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {:<8} {}", s.command, s.label)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let help_width = 60.min(area.width.saturating_sub(4));
    let help_height = 20.min(area.height.saturating_sub(4));
    let help_x = (area.width.saturating_sub(help_width)) / 2;
    let help_y = (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(area.x + help_x, area.y + help_y, help_width, help_height);

    frame.render_widget(Clear, help_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard shortcuts",
            Style::default().bold(),
        )),
        Line::raw(""),
        Line::raw("  /        Open the command bar"),
        Line::raw("  ?        Open this help"),
        Line::raw("  Esc      Close overlays"),
        Line::raw("  Ctrl+,   Settings"),
    ];
    for item in NAV_ITEMS {
        lines.push(Line::raw(format!("  {:<8} {}", item.shortcut, item.label)));
    }
    lines.extend([
        Line::raw("  [ ]      Cycle analyze tabs"),
        Line::raw("  Up/Down  Move in tables / suggestions"),
        Line::raw("  Enter    Select row / run command"),
        Line::raw("  r        Refresh the active view"),
        Line::raw("  q        Quit"),
        Line::raw(""),
        Line::raw("  Commands: SYMBOL, TOKEN, or SYMBOL TOKEN"),
        Line::raw("  e.g. \"AAPL OPT\", \"9988 HK VOL\", \"DASH\""),
    ]);

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(help, help_area);
}
