use crate::constants::{HEADER_MOTIVATIONAL, HEADER_RELIGIOUS, HEADER_TODAYS_PONDER, MOTIVATIONAL_PLACEHOLDER};
use crate::content::{self, MOTIVATIONAL_QUOTES, PONDER_QUESTIONS, RELIGIOUS_QUOTES};
use crate::ui::core::{Action, Component};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Ponder question, motivational quote and religious quotes
pub struct PondersComponent {
    pub question_index: usize,
    /// `None` until the user asks for a quote
    pub quote_index: Option<usize>,
    pub religion_index: usize,
    religions: Vec<&'static str>,
}

impl Default for PondersComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PondersComponent {
    pub fn new() -> Self {
        Self {
            question_index: content::ponder_index_for(datetime::today()),
            quote_index: None,
            religion_index: 0,
            religions: content::religions(),
        }
    }

    pub fn question(&self) -> &'static str {
        PONDER_QUESTIONS[self.question_index % PONDER_QUESTIONS.len()]
    }

    pub fn quote(&self) -> Option<&'static str> {
        self.quote_index.map(|i| MOTIVATIONAL_QUOTES[i % MOTIVATIONAL_QUOTES.len()])
    }

    pub fn religion(&self) -> Option<&'static str> {
        self.religions.get(self.religion_index).copied()
    }

    fn boxed<'a>(title: &'a str, color: Color) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(color))
    }
}

impl Component for PondersComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('n') => Action::NextPonder,
            KeyCode::Char('m') => Action::NextQuote,
            KeyCode::Right | KeyCode::Char('l') => Action::NextReligion,
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousReligion,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextPonder => {
                self.question_index = (self.question_index + 1) % PONDER_QUESTIONS.len();
                Action::None
            }
            Action::NextQuote => {
                self.quote_index = Some(self.quote_index.map_or(0, |i| (i + 1) % MOTIVATIONAL_QUOTES.len()));
                Action::None
            }
            Action::NextReligion => {
                if !self.religions.is_empty() {
                    self.religion_index = (self.religion_index + 1) % self.religions.len();
                }
                Action::None
            }
            Action::PreviousReligion => {
                if !self.religions.is_empty() {
                    self.religion_index = (self.religion_index + self.religions.len() - 1) % self.religions.len();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(6)])
            .split(rect);

        let question = Paragraph::new(vec![
            Line::from(Span::styled(self.question(), Style::default().fg(Color::White))),
            Line::from(Span::styled("n: another question", Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Self::boxed(HEADER_TODAYS_PONDER, Color::Green));
        f.render_widget(question, chunks[0]);

        let quote_line = match self.quote() {
            Some(quote) => Span::styled(format!("\u{201c}{}\u{201d}", quote), Style::default().fg(Color::White)),
            None => Span::styled(MOTIVATIONAL_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        };
        let quote = Paragraph::new(Line::from(quote_line))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Self::boxed(HEADER_MOTIVATIONAL, Color::Yellow));
        f.render_widget(quote, chunks[1]);

        let block = Self::boxed(HEADER_RELIGIOUS, Color::Magenta);
        let inner = block.inner(chunks[2]);
        f.render_widget(block, chunks[2]);

        let religious = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let tabs = Tabs::new(self.religions.clone())
            .select(self.religion_index)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, religious[0]);

        let text = self
            .religion()
            .and_then(|religion| RELIGIOUS_QUOTES.get(religion))
            .copied()
            .unwrap_or_default();
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, religious[2]);
    }
}
