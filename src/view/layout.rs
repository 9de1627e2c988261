//! Layout rendering (top bar, hint bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ContentState, ContentView, UiState};

pub fn render_top_bar(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(22), // Match count
        ])
        .split(area);

    let search_style = if ui_state.active_section == ActiveSection::Search {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Type to search..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if ui_state.active_section == ActiveSection::Search {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    // Server-side match total, which may exceed the page shown below
    let total = match &content_state.view {
        ContentView::MovieList { total_count, .. } => *total_count,
        _ => 0,
    };
    let count = Paragraph::new(format!("🎬 {} matches", total))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" My Movies "));
    frame.render_widget(count, chunks[1]);
}

pub fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        " Tab focus · ↑/↓ select · Enter details · Backspace back · H help · Q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
