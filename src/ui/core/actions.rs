use crate::entities::{Journal, Task};
use chrono::NaiveDate;
use uuid::Uuid;

/// Top-level tabs of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Ponders,
    Progress,
    Resources,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Ponders, Tab::Progress, Tab::Resources];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Ponders => "Ponders",
            Tab::Progress => "Progress",
            Tab::Resources => "Resources",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Parse a config value such as `"home"` or `"progress"`.
    pub fn from_name(name: &str) -> Option<Tab> {
        Self::ALL.into_iter().find(|t| t.title().eq_ignore_ascii_case(name))
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which owning list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Task,
    Journal,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Task => "goal",
            EntryKind::Journal => "journal",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PreviousTab,
    SelectDate(NaiveDate),
    NextDay,
    PreviousDay,
    /// Move the cursor of the active list
    CursorDown,
    CursorUp,

    // Entry operations
    AddTask,
    AddJournal,
    EditEntry(EntryKind, Uuid),
    SaveTask(Task),
    SaveJournal(Journal),
    CancelEdit,
    ToggleTask(Uuid),
    RequestDelete(EntryKind, Uuid),
    DeleteEntry(EntryKind, Uuid),

    // Bottom sheet: synthetic release with the given total translation
    FlickSheet(f32),

    // Ponders
    NextPonder,
    NextQuote,
    NextReligion,
    PreviousReligion,

    // Progress dashboard
    TogglePonderOfTheDay,
    ToggleQuotes,
    ToggleStatsScope,

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    /// Goal editor bound to `task`; a blank task means "create".
    TaskEdit {
        task: Task,
        is_new: bool,
    },
    /// Journal editor bound to `journal`; a blank journal means "create".
    JournalEdit {
        journal: Journal,
        is_new: bool,
    },
    DeleteConfirmation {
        kind: EntryKind,
        id: Uuid,
        title: String,
    },
    Error(String),
    Help,
    Logs,
}
