use crate::constants::DAY_CELL_WIDTH;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeSet;

/// Month header plus the horizontal day strip of the Home tab.
///
/// The strip scrolls so the current date stays visible; days holding at least
/// one journal get a dot under their number.
pub struct CalendarComponent {
    pub dates: Vec<NaiveDate>,
    pub current: NaiveDate,
    pub month_label: String,
    pub journaled_days: BTreeSet<NaiveDate>,
    pub weekday_format: String,
    today: NaiveDate,
    first_visible: usize,
    strip_area: Rect,
}

impl Default for CalendarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarComponent {
    pub fn new() -> Self {
        let today = datetime::today();
        Self {
            dates: Vec::new(),
            current: today,
            month_label: String::new(),
            journaled_days: BTreeSet::new(),
            weekday_format: "%a".to_string(),
            today,
            first_visible: 0,
            strip_area: Rect::default(),
        }
    }

    pub fn update_data(
        &mut self,
        dates: &[NaiveDate],
        current: NaiveDate,
        month_label: String,
        journaled_days: BTreeSet<NaiveDate>,
    ) {
        self.dates = dates.to_vec();
        self.current = current;
        self.month_label = month_label;
        self.journaled_days = journaled_days;
        self.today = datetime::today();
    }

    fn visible_cells(&self) -> usize {
        LayoutManager::visible_day_cells(self.strip_area.width, DAY_CELL_WIDTH).max(1)
    }

    /// Slide the visible window so the current date is on screen
    fn scroll_to_current(&mut self) {
        let Some(index) = self.dates.iter().position(|d| *d == self.current) else {
            return;
        };
        let visible = self.visible_cells();
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + visible {
            self.first_visible = index + 1 - visible;
        }
        let max_first = self.dates.len().saturating_sub(visible);
        self.first_visible = self.first_visible.min(max_first);
    }

    /// Date drawn under a terminal cell, if any
    pub fn date_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        let area = self.strip_area;
        if row < area.y || row >= area.y + area.height || column < area.x || column >= area.x + area.width {
            return None;
        }
        let cell = ((column - area.x) / DAY_CELL_WIDTH) as usize;
        self.dates.get(self.first_visible + cell).copied()
    }

    fn day_cell(&self, date: NaiveDate) -> Vec<Line<'static>> {
        let is_current = date == self.current;
        let is_today = date == self.today;

        let mut style = Style::default().fg(Color::Gray);
        if is_today {
            style = style.fg(Color::Cyan);
        }
        if is_current {
            style = Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        let weekday = datetime::format_date(date, &self.weekday_format).unwrap_or_else(|| date.weekday().to_string());
        let marker = if self.journaled_days.contains(&date) { "•" } else { " " };
        let width = DAY_CELL_WIDTH as usize - 1;

        vec![
            Line::from(Span::styled(
                format!("{:^width$}", weekday),
                style,
            )),
            Line::from(Span::styled(format!("{:^width$}", date.day()), style)),
            Line::from(Span::styled(format!("{:^width$}", marker), Style::default().fg(Color::Magenta))),
        ]
    }
}

impl Component for CalendarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousDay,
            KeyCode::Right | KeyCode::Char('l') => Action::NextDay,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        self.date_at(mouse.column, mouse.row)
            .map_or(Action::None, Action::SelectDate)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.month_label))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        self.strip_area = inner;
        self.scroll_to_current();

        let visible = self.visible_cells();
        let cells: Vec<NaiveDate> = self.dates.iter().skip(self.first_visible).take(visible).copied().collect();
        if cells.is_empty() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(cells.iter().map(|_| Constraint::Length(DAY_CELL_WIDTH)))
            .split(inner);

        for (date, area) in cells.iter().zip(chunks.iter()) {
            let paragraph = Paragraph::new(self.day_cell(*date));
            f.render_widget(paragraph, *area);
        }
    }
}
