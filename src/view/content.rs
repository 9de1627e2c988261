//! Main content area rendering (result list, movie detail)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, ContentState, ContentView, MovieDetail, MovieSummary, UiState};

use super::utils::{calculate_num_width, render_scrollable_list, truncate_string};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
) {
    let is_focused = ui_state.active_section == ActiveSection::MainContent;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if content_state.is_loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Movies ")
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    match &content_state.view {
        ContentView::Empty => {
            let content = Paragraph::new(
                "Type in search and press Enter to find movies\n\nUse Tab to switch sections\nUse ↑/↓ to select a title\nPress Enter to open its details",
            )
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
        ContentView::MovieList {
            movies,
            selected_index,
            ..
        } => {
            render_movie_list(frame, area, movies, *selected_index, is_focused);
        }
        ContentView::MovieDetail { detail } => {
            render_movie_detail(frame, area, detail, border_style);
        }
    }
}

fn render_movie_list(
    frame: &mut Frame,
    area: Rect,
    movies: &[MovieSummary],
    selected_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if movies.is_empty() {
        let empty = Paragraph::new("  No movies found. Try searching for another title")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Movies ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let num_width = calculate_num_width(movies.len());
    let poster_width = 2;
    let year_width = 4;
    let fixed_width = 1 + num_width + 3 + poster_width + 3 + 3 + year_width;
    let title_width = content_width.saturating_sub(fixed_width);

    // Create header as first item
    let mut items = vec![
        ListItem::new(format!(
            " {:<num_width$}   {}   {:<title_width$}   {:>year_width$}",
            "#",
            "  ",
            "Title",
            "Year",
            num_width = num_width,
            title_width = title_width,
            year_width = year_width
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ];

    let movie_items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == selected_index && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == selected_index {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            // Placeholder marker for titles the API ships no artwork for
            let poster_indicator = if movie.poster.is_some() { "🖼 " } else { "  " };
            let title_str = truncate_string(&movie.title, title_width);

            ListItem::new(format!(
                " {:<num_width$}   {}   {}   {:>year_width$}",
                i + 1,
                poster_indicator,
                title_str,
                movie.year,
                num_width = num_width,
                year_width = year_width
            ))
            .style(style)
        })
        .collect();

    items.extend(movie_items);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(" Movies ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // +1 for the header row
    render_scrollable_list(frame, area, items, selected_index + 1, list_block);
}

fn render_movie_detail(frame: &mut Frame, area: Rect, detail: &MovieDetail, border_style: Style) {
    // Failed lookups render the API's error text, with the fixed
    // fallback when the API sent none.
    if !detail.found {
        let error = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("⚠ {}", detail.error_text()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Backspace or Esc to go back",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Lookup Failed ")
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(error, area);
        return;
    }

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Plot:   ", label),
            Span::raw(detail.plot.as_deref().unwrap_or("No plot available")),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Year:   ", label),
            Span::raw(detail.year.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Genre:  ", label),
            Span::raw(detail.genre.as_deref().unwrap_or("-")),
        ]),
        Line::from(vec![
            Span::styled("Poster: ", label),
            Span::raw(detail.poster.as_deref().unwrap_or("No poster available")),
        ]),
        Line::from(vec![
            Span::styled("IMDb:   ", label),
            Span::raw(detail.imdb_id.as_str()),
        ]),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", detail.title))
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(card, area);
}
