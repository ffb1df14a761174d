//! Status bar component

use crate::ui::core::Tab;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints for the active tab
    pub fn hints(tab: Tab) -> &'static str {
        match tab {
            Tab::Home => "h/l: day • j/k: move • Space: toggle • g: goal • a: journal • e: edit • d: delete • K/J: sheet",
            Tab::Ponders => "n: next question • m: quote • ←/→: religion",
            Tab::Progress => "w: today/weekly • p: ponder • o: quotes",
            Tab::Resources => "j/k: move",
        }
    }

    /// Render the status bar, preferring a transient message over the hints
    pub fn render(f: &mut Frame, area: Rect, tab: Tab, message: Option<&str>, is_error: bool) {
        let status_text = match message {
            Some(message) => message.to_string(),
            None => format!("{} • ?: help • q: quit", Self::hints(tab)),
        };

        let status_color = if is_error {
            Color::Red
        } else if message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
