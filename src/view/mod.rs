//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, hint bar)
//! - `content`: Main content area rendering
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, content_state: &ContentState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + result count
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        // Top bar: Search + match count
        layout::render_top_bar(frame, chunks[0], ui_state, content_state);

        // Main content area
        content::render_main_content(frame, chunks[1], ui_state, content_state);

        // Bottom: key hints
        layout::render_hint_bar(frame, chunks[2]);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
