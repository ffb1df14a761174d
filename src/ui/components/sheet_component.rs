//! Bottom sheet over the Home tab's entry lists.
//!
//! Mouse drags are measured in rows and scaled to points before reaching the
//! [`DragSheet`] controller. The drawn offset follows the pointer while
//! dragging and eases toward the controller's settled offset after release.

use crate::config::SheetConfig;
use crate::constants::{EMPTY_COMPLETED, HEADER_COMPLETED_ITEMS};
use crate::entities::{Journal, Task};
use crate::icons::IconService;
use crate::ui::core::{Action, Component, DragSheet, SheetState};
use crate::ui::layout::LayoutManager;
use crate::utils::color::tint_color;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
    Frame,
};
use std::time::{Duration, Instant};

/// Pointer gesture in progress
#[derive(Debug, Clone, Copy)]
struct DragGesture {
    last_row: u16,
    total: f32,
}

/// Eased transition between two offsets
#[derive(Debug, Clone, Copy)]
struct SheetAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SheetAnimation {
    /// Ease-out cubic position at `now`, and whether the transition finished
    fn sample(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let t = now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

pub struct SheetComponent {
    pub sheet: DragSheet,
    pub completed: Vec<Task>,
    pub journals: Vec<Journal>,
    pub icons: IconService,
    points_per_row: f32,
    bottom_inset_rows: u16,
    animation_duration: Duration,
    /// Offset currently drawn, in points
    displayed_offset: Option<f32>,
    animation: Option<SheetAnimation>,
    gesture: Option<DragGesture>,
    container: Rect,
    sheet_area: Rect,
}

impl Default for SheetComponent {
    fn default() -> Self {
        Self::new(&SheetConfig::default())
    }
}

impl SheetComponent {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            sheet: DragSheet::from_config(config),
            completed: Vec::new(),
            journals: Vec::new(),
            icons: IconService::default(),
            points_per_row: config.points_per_row,
            bottom_inset_rows: config.bottom_inset_rows,
            animation_duration: Duration::from_millis(config.animation_ms),
            displayed_offset: None,
            animation: None,
            gesture: None,
            container: Rect::default(),
            sheet_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, completed: Vec<Task>, journals: Vec<Journal>) {
        self.completed = completed;
        self.journals = journals;
    }

    pub fn state(&self) -> SheetState {
        self.sheet.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset currently drawn, in points
    pub fn displayed_offset(&self) -> Option<f32> {
        self.displayed_offset
    }

    /// Area the sheet occupied on the last render
    pub fn sheet_area(&self) -> Rect {
        self.sheet_area
    }

    fn container_height(&self) -> f32 {
        self.container.height as f32 * self.points_per_row
    }

    fn bottom_inset(&self) -> f32 {
        self.bottom_inset_rows as f32 * self.points_per_row
    }

    /// Measure the container and seed the controller on the first pass
    pub fn layout(&mut self, container: Rect) {
        self.container = container;
        self.sheet.layout(self.container_height(), self.bottom_inset());
        if self.displayed_offset.is_none() {
            self.displayed_offset = self.sheet.offset();
        }
    }

    /// Start easing from the drawn offset to wherever the controller settled
    fn animate_to_settled(&mut self) {
        let (Some(from), Some(to)) = (self.displayed_offset, self.sheet.offset()) else {
            return;
        };
        if (from - to).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(SheetAnimation {
            from,
            to,
            started: Instant::now(),
            duration: self.animation_duration,
        });
        if self.animation_duration.is_zero() {
            self.advance_animation(Instant::now());
        }
    }

    fn advance_animation(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            let (offset, finished) = animation.sample(now);
            self.displayed_offset = Some(offset);
            if finished {
                self.animation = None;
            }
        }
    }

    /// Release with a total translation in points, as a mouse-up would
    pub fn release(&mut self, total_delta_y: f32) {
        self.sheet.on_drag_end(total_delta_y);
        self.animate_to_settled();
    }

    fn offset_rows(&self) -> u16 {
        let offset = self.displayed_offset.unwrap_or(self.container_height() / 2.0);
        (offset / self.points_per_row).round().max(0.0) as u16
    }

    fn create_items(&self) -> Vec<ListItem<'static>> {
        if self.completed.is_empty() && self.journals.is_empty() {
            return vec![ListItem::new(Line::from(Span::styled(
                EMPTY_COMPLETED,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )))];
        }

        let goals = self.completed.iter().map(|task| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    self.icons.goal_completed().to_string(),
                    Style::default().fg(tint_color(task.tint)),
                ),
                Span::raw(" "),
                Span::styled(task.title.clone(), Style::default().fg(Color::Gray)),
            ]))
        });
        let journals = self.journals.iter().map(|journal| {
            ListItem::new(Line::from(vec![
                Span::styled(self.icons.journal().to_string(), Style::default().fg(Color::Magenta)),
                Span::raw(" "),
                Span::styled(journal.title.clone(), Style::default().fg(Color::Gray)),
                Span::styled(format!("  {}", journal.caption), Style::default().fg(Color::DarkGray)),
            ]))
        });
        goals.chain(journals).collect()
    }
}

impl Component for SheetComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.sheet_area;
                let on_sheet = mouse.row >= area.y
                    && mouse.row < area.y + area.height
                    && mouse.column >= area.x
                    && mouse.column < area.x + area.width;
                if on_sheet {
                    self.animation = None;
                    self.gesture = Some(DragGesture {
                        last_row: mouse.row,
                        total: 0.0,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let height = self.container_height();
                let inset = self.bottom_inset();
                if let Some(gesture) = self.gesture.as_mut() {
                    let delta = (mouse.row as f32 - gesture.last_row as f32) * self.points_per_row;
                    gesture.last_row = mouse.row;
                    gesture.total += delta;
                    let offset = self.sheet.on_drag_change(delta, height, inset);
                    self.displayed_offset = Some(offset);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(gesture) = self.gesture.take() {
                    log::debug!("Sheet: drag released after {:.1} points", gesture.total);
                    self.release(gesture.total);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FlickSheet(total) => {
                self.release(total);
                Action::None
            }
            _ => action,
        }
    }

    fn tick(&mut self) {
        self.advance_animation(Instant::now());
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.layout(rect);
        let area = LayoutManager::sheet_rect(rect, self.offset_rows());
        self.sheet_area = area;
        f.render_widget(Clear, area);

        let handle_color = if self.is_dragging() { Color::Yellow } else { Color::Gray };
        let count = self.completed.len() + self.journals.len();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(Span::styled(
                self.icons.sheet_handle(),
                Style::default().fg(handle_color),
            )))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(format!(" {} ({}) ", HEADER_COMPLETED_ITEMS, count)).left_aligned())
            .style(Style::default().fg(Color::Blue));

        let list = List::new(self.create_items()).block(block);
        f.render_widget(list, area);
    }
}
