use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Line offset plus scrollbar state shared by the scrollable dialogs
#[derive(Debug, Clone, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Apply a scrolling key; returns false for keys that do not scroll
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.set(self.offset.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.set(self.offset.saturating_add(1)),
            KeyCode::PageUp => self.set(self.offset.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.set(self.offset.saturating_add(PAGE_SIZE)),
            KeyCode::Home => self.set(0),
            // Clamped against the content length at render time
            KeyCode::End => self.set(usize::MAX),
            _ => return false,
        }
        true
    }

    /// Clamp to the content and return the first visible line
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }
}
