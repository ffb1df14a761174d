use crate::constants::HEADER_ADDITIONAL_STATS;
use crate::content::{MOTIVATIONAL_QUOTES, PONDER_OF_THE_DAY, RELIGIOUS_QUOTES, STAT_BOX_NAMES};
use crate::icons::IconService;
use crate::stats::ProgressStats;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Period the stat boxes count journals over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsScope {
    #[default]
    Today,
    Weekly,
}

impl StatsScope {
    pub fn toggle(self) -> Self {
        match self {
            StatsScope::Today => StatsScope::Weekly,
            StatsScope::Weekly => StatsScope::Today,
        }
    }
}

/// Greeting, stat boxes and the "Daily Love" boxes
pub struct ProgressComponent {
    pub stats: ProgressStats,
    pub user_name: String,
    pub scope: StatsScope,
    pub show_ponder: bool,
    pub show_quotes: bool,
    pub icons: IconService,
}

impl Default for ProgressComponent {
    fn default() -> Self {
        Self::new("Friend")
    }
}

impl ProgressComponent {
    pub fn new(user_name: &str) -> Self {
        Self {
            stats: ProgressStats::default(),
            user_name: user_name.to_string(),
            scope: StatsScope::default(),
            show_ponder: false,
            show_quotes: false,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, stats: ProgressStats) {
        self.stats = stats;
    }

    /// Value line for the stat box at `index`
    pub fn stat_value(&self, index: usize) -> String {
        match index {
            0 => format!("{} {} days", self.icons.streak(), self.stats.journal_streak),
            1 => match self.scope {
                StatsScope::Today => format!("{} journals today", self.stats.journals_today),
                StatsScope::Weekly => format!("{} journals this week", self.stats.journals_this_week),
            },
            2 => format!("{} / {} goals", self.stats.goals_completed, self.stats.goals_total),
            _ => format!("{} entries", self.stats.goals_total + self.stats.journals_total),
        }
    }

    fn render_scope(&self, f: &mut Frame, area: Rect) {
        let style_for = |scope: StatsScope| {
            if scope == self.scope {
                Style::default().fg(Color::Black).bg(Color::LightYellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };
        let line = Line::from(vec![
            Span::styled(" Today ", style_for(StatsScope::Today)),
            Span::raw("   "),
            Span::styled(" Weekly ", style_for(StatsScope::Weekly)),
            Span::styled("   w: switch", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_stat_boxes(&self, f: &mut Frame, area: Rect) {
        for (index, cell) in LayoutManager::grid(area, 2, 2).into_iter().enumerate() {
            let name = STAT_BOX_NAMES.get(index).copied().unwrap_or_default();
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(self.stat_value(index), Style::default().fg(Color::LightBlue))),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Blue)),
            );
            f.render_widget(paragraph, cell);
        }
    }

    fn render_daily_love(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let ponder = if self.show_ponder {
            Paragraph::new(PONDER_OF_THE_DAY)
                .style(Style::default().fg(Color::White).bg(Color::Black).add_modifier(Modifier::BOLD))
        } else {
            Paragraph::new("Ponder of the Day  (p)").style(Style::default().fg(Color::Green))
        };
        let ponder = ponder.alignment(Alignment::Center).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
        f.render_widget(ponder, chunks[0]);

        let mut lines = vec![Line::from(Span::styled(
            "Quotes  (o)",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ))];
        if self.show_quotes {
            lines.push(Line::from(format!("Motivational Quotes ({})", MOTIVATIONAL_QUOTES.len())));
            lines.push(Line::from(format!("Religious Quotes ({})", RELIGIOUS_QUOTES.len())));
        }
        let quotes = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
        f.render_widget(quotes, chunks[1]);
    }
}

impl Component for ProgressComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('w') => Action::ToggleStatsScope,
            KeyCode::Char('p') => Action::TogglePonderOfTheDay,
            KeyCode::Char('o') => Action::ToggleQuotes,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleStatsScope => {
                self.scope = self.scope.toggle();
                Action::None
            }
            Action::TogglePonderOfTheDay => {
                self.show_ponder = !self.show_ponder;
                Action::None
            }
            Action::ToggleQuotes => {
                self.show_quotes = !self.show_quotes;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Greeting
                Constraint::Length(1), // Today / Weekly
                Constraint::Min(8),    // Stat boxes
                Constraint::Length(5), // Daily love
                Constraint::Length(3), // Additional stats
            ])
            .split(rect);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled("Welcome Home,", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                self.user_name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ]);
        f.render_widget(greeting, chunks[0]);

        self.render_scope(f, chunks[1]);
        self.render_stat_boxes(f, chunks[2]);
        self.render_daily_love(f, chunks[3]);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", HEADER_ADDITIONAL_STATS)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(self.stats.completion_ratio().clamp(0.0, 1.0))
            .label(format!(
                "{:.0}% of goals completed",
                self.stats.completion_ratio() * 100.0
            ));
        f.render_widget(gauge, chunks[4]);
    }
}
