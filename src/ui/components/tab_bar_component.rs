use crate::icons::IconService;
use crate::ui::core::{Action, Component, Tab};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

const DIVIDER: &str = " │ ";

/// Top tab strip of the shell
pub struct TabBarComponent {
    pub active: Tab,
    pub icons: IconService,
    area: Rect,
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}

impl TabBarComponent {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            icons: IconService::default(),
            area: Rect::default(),
        }
    }

    fn title(&self, tab: Tab) -> String {
        format!("{} {}", self.icons.tab(tab), tab.title())
    }

    /// Tab under a terminal column, following the widths `Tabs` draws with
    fn tab_at_column(&self, column: u16) -> Option<Tab> {
        // Border plus the leading padding space
        let mut x = self.area.x + 2;
        for tab in Tab::ALL {
            let width = Line::from(self.title(tab)).width() as u16;
            if column >= x && column < x + width {
                return Some(tab);
            }
            x += width + Line::from(DIVIDER).width() as u16 + 2;
        }
        None
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Tab::from_index(index).map_or(Action::None, Action::SwitchTab)
            }
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let inside = mouse.row >= self.area.y
            && mouse.row < self.area.y + self.area.height
            && mouse.column >= self.area.x
            && mouse.column < self.area.x + self.area.width;
        if !inside {
            return Action::None;
        }
        self.tab_at_column(mouse.column).map_or(Action::None, Action::SwitchTab)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SwitchTab(tab) => {
                self.active = tab;
                action
            }
            Action::NextTab => {
                self.active = self.active.next();
                Action::SwitchTab(self.active)
            }
            Action::PreviousTab => {
                self.active = self.active.previous();
                Action::SwitchTab(self.active)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let titles: Vec<String> = Tab::ALL.iter().map(|tab| self.title(*tab)).collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" InnerBloom ")
                    .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            )
            .select(self.active.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .divider(DIVIDER);

        f.render_widget(tabs, rect);
    }
}
