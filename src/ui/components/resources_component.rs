use crate::content::RESOURCES;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Static self-care resources: titles on the left, text of the selected one on the right
pub struct ResourcesComponent {
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for ResourcesComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourcesComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected(&self) -> (&'static str, &'static str) {
        RESOURCES[self.selected_index % RESOURCES.len()]
    }
}

impl Component for ResourcesComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CursorDown => {
                self.selected_index = (self.selected_index + 1) % RESOURCES.len();
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            Action::CursorUp => {
                self.selected_index = (self.selected_index + RESOURCES.len() - 1) % RESOURCES.len();
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(rect);

        let items: Vec<ListItem> = RESOURCES.iter().map(|(title, _)| ListItem::new(*title)).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Resources "),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let (title, text) = self.selected();
        let detail = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", title))
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        f.render_widget(detail, chunks[1]);
    }
}
