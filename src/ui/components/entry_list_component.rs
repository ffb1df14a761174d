use crate::constants::{EMPTY_GOALS, EMPTY_JOURNALS, HEADER_GOALS, HEADER_JOURNALS};
use crate::entities::{Journal, Task};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, EntryKind};
use crate::utils::color::tint_color;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};
use uuid::Uuid;

/// Row the cursor is on, resolved against the visible lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedEntry {
    Task(Uuid),
    Journal(Uuid),
}

/// Goals and the current day's journals in one scrollable list.
///
/// The cursor walks goals first, then journals; section headers are skipped.
pub struct EntryListComponent {
    pub tasks: Vec<Task>,
    pub journals: Vec<Journal>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    /// Human label of the selected day ("today", "next friday", ...)
    pub day_label: String,
}

impl Default for EntryListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            journals: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            day_label: String::new(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, journals: Vec<Journal>, day_label: String) {
        self.tasks = tasks;
        self.journals = journals;
        self.day_label = day_label;
        self.update_list_state();
    }

    fn entry_count(&self) -> usize {
        self.tasks.len() + self.journals.len()
    }

    fn update_list_state(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.list_state.select(Some(self.rendered_index()));
        }
    }

    /// Index in the rendered list: the Goals header (and the empty-goals
    /// placeholder) sit in front of the rows.
    fn rendered_index(&self) -> usize {
        if self.selected_index < self.tasks.len() {
            1 + self.selected_index
        } else {
            let goals_rows = self.tasks.len().max(1);
            let journal_index = self.selected_index - self.tasks.len();
            // Goals header, goal rows, spacer, Journals header
            goals_rows + 3 + journal_index
        }
    }

    pub fn selected(&self) -> Option<SelectedEntry> {
        if let Some(task) = self.tasks.get(self.selected_index) {
            return Some(SelectedEntry::Task(task.id));
        }
        self.journals
            .get(self.selected_index.checked_sub(self.tasks.len())?)
            .map(|journal| SelectedEntry::Journal(journal.id))
    }

    fn section_header(&self, name: &str, color: Color) -> ListItem<'static> {
        ListItem::new(Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )))
    }

    fn placeholder(&self, text: &'static str) -> ListItem<'static> {
        ListItem::new(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )))
    }

    fn task_item(&self, task: &Task) -> ListItem<'static> {
        let title_style = if task.is_completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled("▌", Style::default().fg(tint_color(task.tint))),
            Span::raw(" "),
            Span::styled(
                self.icons.goal_status(task.is_completed).to_string(),
                Style::default().fg(tint_color(task.tint)),
            ),
            Span::raw(" "),
            Span::styled(task.title.clone(), title_style),
        ];
        if !task.caption.is_empty() {
            spans.push(Span::styled(
                format!("  {}", task.caption),
                Style::default().fg(Color::Gray),
            ));
        }
        ListItem::new(Line::from(spans))
    }

    fn journal_item(&self, journal: &Journal) -> ListItem<'static> {
        let mut spans = vec![
            Span::styled(self.icons.journal().to_string(), Style::default().fg(Color::Magenta)),
            Span::raw(" "),
            Span::styled(journal.title.clone(), Style::default().fg(Color::White)),
        ];
        if !journal.caption.is_empty() {
            spans.push(Span::styled(
                format!("  {}", journal.caption),
                Style::default().fg(Color::Gray),
            ));
        }
        spans.push(Span::styled(
            format!("  {}", journal.date.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
        ListItem::new(Line::from(spans))
    }

    fn create_list_items(&self) -> Vec<ListItem<'static>> {
        let mut items = vec![self.section_header(HEADER_GOALS, Color::Cyan)];
        if self.tasks.is_empty() {
            items.push(self.placeholder(EMPTY_GOALS));
        } else {
            items.extend(self.tasks.iter().map(|task| self.task_item(task)));
        }

        items.push(ListItem::new(""));
        items.push(self.section_header(HEADER_JOURNALS, Color::Magenta));
        if self.journals.is_empty() {
            items.push(self.placeholder(EMPTY_JOURNALS));
        } else {
            items.extend(self.journals.iter().map(|journal| self.journal_item(journal)));
        }
        items
    }
}

impl Component for EntryListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
            KeyCode::Char(' ') => match self.selected() {
                Some(SelectedEntry::Task(id)) => Action::ToggleTask(id),
                _ => Action::None,
            },
            KeyCode::Enter | KeyCode::Char('e') => match self.selected() {
                Some(SelectedEntry::Task(id)) => Action::EditEntry(EntryKind::Task, id),
                Some(SelectedEntry::Journal(id)) => Action::EditEntry(EntryKind::Journal, id),
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected() {
                Some(SelectedEntry::Task(id)) => Action::RequestDelete(EntryKind::Task, id),
                Some(SelectedEntry::Journal(id)) => Action::RequestDelete(EntryKind::Journal, id),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::AddJournal,
            KeyCode::Char('g') => Action::AddTask,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CursorDown => {
                let count = self.entry_count();
                if count > 0 {
                    self.selected_index = (self.selected_index + 1) % count;
                    self.update_list_state();
                }
                Action::None
            }
            Action::CursorUp => {
                let count = self.entry_count();
                if count > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        count - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items = self.create_list_items();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} Entries for {} ", self.icons.today(), self.day_label)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
