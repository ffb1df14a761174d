use super::{FormEvent, FormMode, TextInput};
use crate::constants::{DEFAULT_JOURNAL_EMOJI, JOURNAL_EMOJIS};
use crate::entities::Journal;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalField {
    Title,
    Caption,
    Emoji,
}

impl JournalField {
    fn next(self) -> Self {
        match self {
            JournalField::Title => JournalField::Caption,
            JournalField::Caption => JournalField::Emoji,
            JournalField::Emoji => JournalField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            JournalField::Title => JournalField::Emoji,
            JournalField::Caption => JournalField::Title,
            JournalField::Emoji => JournalField::Caption,
        }
    }
}

/// Split a saved caption into its picker emoji and body.
///
/// Only a known picker emoji followed by a single space counts as a prefix.
pub fn split_emoji_prefix(caption: &str) -> (Option<usize>, &str) {
    for (index, emoji) in JOURNAL_EMOJIS.iter().enumerate() {
        if let Some(body) = caption.strip_prefix(emoji).and_then(|rest| rest.strip_prefix(' ')) {
            return (Some(index), body);
        }
    }
    (None, caption)
}

/// Journal editor: title, caption and a mood emoji prepended on save.
#[derive(Debug, Clone)]
pub struct JournalForm {
    bound: Journal,
    mode: FormMode,
    pub title: TextInput,
    pub caption: TextInput,
    pub emoji_index: usize,
    pub focus: JournalField,
}

impl JournalForm {
    pub fn open(journal: Journal, mode: FormMode) -> Self {
        let default_index = JOURNAL_EMOJIS
            .iter()
            .position(|e| *e == DEFAULT_JOURNAL_EMOJI)
            .unwrap_or(0);
        let (emoji_index, body) = split_emoji_prefix(&journal.caption);

        Self {
            title: TextInput::new(&journal.title),
            caption: TextInput::new(body),
            emoji_index: emoji_index.unwrap_or(default_index),
            focus: JournalField::Title,
            bound: journal,
            mode,
        }
    }

    /// "Add Journal": bind a fresh blank journal on `date`.
    pub fn create(date: DateTime<Local>) -> Self {
        Self::open(Journal::blank(date), FormMode::Create)
    }

    pub fn edit(journal: &Journal) -> Self {
        Self::open(journal.clone(), FormMode::Edit)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn bound(&self) -> &Journal {
        &self.bound
    }

    pub fn selected_emoji(&self) -> &'static str {
        JOURNAL_EMOJIS
            .get(self.emoji_index)
            .copied()
            .unwrap_or(DEFAULT_JOURNAL_EMOJI)
    }

    /// The edited value with the emoji composed into the caption.
    pub fn save(&self) -> Journal {
        Journal {
            title: self.title.value().to_string(),
            caption: format!("{} {}", self.selected_emoji(), self.caption.value()),
            ..self.bound.clone()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Esc => return FormEvent::Cancel,
            KeyCode::Enter => return FormEvent::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            _ => match self.focus {
                JournalField::Title => {
                    self.title.handle_key(key);
                }
                JournalField::Caption => {
                    self.caption.handle_key(key);
                }
                JournalField::Emoji => match key.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.emoji_index = (self.emoji_index + JOURNAL_EMOJIS.len() - 1) % JOURNAL_EMOJIS.len();
                    }
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                        self.emoji_index = (self.emoji_index + 1) % JOURNAL_EMOJIS.len();
                    }
                    _ => {}
                },
            },
        }
        FormEvent::None
    }
}
