//! Modal dialog component.
//!
//! Hosts the goal and journal editors plus the system dialogs (delete
//! confirmation, error, help, logs). While a dialog is visible it takes
//! every key; the app component never sees them.

use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{entry_dialogs, scroll_behavior::DialogScroll, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::forms::{FormEvent, FormMode, JournalForm, TaskForm};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub task_form: Option<TaskForm>,
    pub journal_form: Option<JournalForm>,
    pub icons: IconService,
    pub scroll: DialogScroll,
    pub display_config: DisplayConfig,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            task_form: None,
            journal_form: None,
            icons: IconService::default(),
            scroll: DialogScroll::default(),
            display_config: DisplayConfig::default(),
            logger: None,
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.scroll.reset();
        self.task_form = None;
        self.journal_form = None;

        match &dialog_type {
            DialogType::TaskEdit { task, is_new } => {
                let mode = if *is_new { FormMode::Create } else { FormMode::Edit };
                self.task_form = Some(TaskForm::open(task.clone(), mode));
            }
            DialogType::JournalEdit { journal, is_new } => {
                let mode = if *is_new { FormMode::Create } else { FormMode::Edit };
                self.journal_form = Some(JournalForm::open(journal.clone(), mode));
            }
            _ => {}
        }
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.task_form = None;
        self.journal_form = None;
        self.scroll.reset();
    }

    fn handle_task_form_key(&mut self, key: KeyEvent) -> Action {
        let Some(form) = self.task_form.as_mut() else {
            return Action::HideDialog;
        };
        match form.handle_key(key) {
            FormEvent::Submit => Action::SaveTask(form.save()),
            FormEvent::Cancel => Action::CancelEdit,
            FormEvent::None => Action::None,
        }
    }

    fn handle_journal_form_key(&mut self, key: KeyEvent) -> Action {
        let Some(form) = self.journal_form.as_mut() else {
            return Action::HideDialog;
        };
        match form.handle_key(key) {
            FormEvent::Submit => Action::SaveJournal(form.save()),
            FormEvent::Cancel => Action::CancelEdit,
            FormEvent::None => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::TaskEdit { .. }) => self.handle_task_form_key(key),
            Some(DialogType::JournalEdit { .. }) => self.handle_journal_form_key(key),
            Some(DialogType::DeleteConfirmation { kind, id, .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::DeleteEntry(*kind, *id),
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Error(_)) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(ref dialog_type) => {
                self.open(dialog_type.clone());
                action
            }
            Action::HideDialog
            | Action::CancelEdit
            | Action::SaveTask(_)
            | Action::SaveJournal(_)
            | Action::DeleteEntry(..) => {
                self.clear_dialog();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let date_format = self.display_config.date_format.clone();
        match self.dialog_type.clone() {
            None => {}
            Some(DialogType::TaskEdit { .. }) => {
                if let Some(form) = &self.task_form {
                    entry_dialogs::render_task_dialog(f, rect, form, &date_format);
                }
            }
            Some(DialogType::JournalEdit { .. }) => {
                if let Some(form) = &self.journal_form {
                    entry_dialogs::render_journal_dialog(f, rect, form, &date_format);
                }
            }
            Some(DialogType::DeleteConfirmation { kind, title, .. }) => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, kind.label(), &title);
            }
            Some(DialogType::Error(message)) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll);
            }
        }
    }
}
