use super::{FormEvent, FormMode, TextInput};
use crate::entities::{Task, Tint};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Caption,
    Tint,
}

impl TaskField {
    fn next(self) -> Self {
        match self {
            TaskField::Title => TaskField::Caption,
            TaskField::Caption => TaskField::Tint,
            TaskField::Tint => TaskField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            TaskField::Title => TaskField::Tint,
            TaskField::Caption => TaskField::Title,
            TaskField::Tint => TaskField::Caption,
        }
    }
}

/// Goal editor: title, caption and accent color.
#[derive(Debug, Clone)]
pub struct TaskForm {
    bound: Task,
    mode: FormMode,
    pub title: TextInput,
    pub caption: TextInput,
    pub tint: Tint,
    pub focus: TaskField,
}

impl TaskForm {
    /// Bind `task` and seed the fields from it.
    pub fn open(task: Task, mode: FormMode) -> Self {
        Self {
            title: TextInput::new(&task.title),
            caption: TextInput::new(&task.caption),
            tint: task.tint,
            focus: TaskField::Title,
            bound: task,
            mode,
        }
    }

    /// "Add Goals": bind a fresh blank task dated now.
    pub fn create() -> Self {
        Self::open(Task::blank(), FormMode::Create)
    }

    pub fn edit(task: &Task) -> Self {
        Self::open(task.clone(), FormMode::Edit)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn bound(&self) -> &Task {
        &self.bound
    }

    /// The edited value, keeping the bound task's id, date and completion.
    pub fn save(&self) -> Task {
        Task {
            title: self.title.value().to_string(),
            caption: self.caption.value().to_string(),
            tint: self.tint,
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
                TaskField::Title => {
                    self.title.handle_key(key);
                }
                TaskField::Caption => {
                    self.caption.handle_key(key);
                }
                TaskField::Tint => match key.code {
                    KeyCode::Left | KeyCode::Char('h') => self.tint = self.tint.previous(),
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.tint = self.tint.next(),
                    _ => {}
                },
            },
        }
        FormEvent::None
    }
}
