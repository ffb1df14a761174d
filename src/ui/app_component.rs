use crate::config::Config;
use crate::constants::{
    ERROR_DELETE_FAILED, ERROR_ENTRY_NOT_FOUND, ERROR_TOGGLE_FAILED, SUCCESS_GOAL_CREATED, SUCCESS_GOAL_DELETED,
    SUCCESS_GOAL_UPDATED, SUCCESS_JOURNAL_CREATED, SUCCESS_JOURNAL_DELETED, SUCCESS_JOURNAL_UPDATED,
};
use crate::entities::{Journal, Task};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::repositories::{JournalRepository, RepositoryError, TaskRepository};
use crate::stats::ProgressStats;
use crate::ui::components::{
    CalendarComponent, DialogComponent, EntryListComponent, PondersComponent, ProgressComponent, ResourcesComponent,
    SheetComponent, StatusBar, TabBarComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, EntryKind, Tab},
    event_handler::EventType,
    Component, DaySelector,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use chrono::{DateTime, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use uuid::Uuid;

/// Follow-up actions applied for one input before giving up
const MAX_ACTION_CHAIN: usize = 8;

/// Application state separate from UI concerns.
///
/// The only owner of the goal and journal lists. Components get clones of what
/// they draw and hand changes back as actions.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskRepository,
    pub journals: JournalRepository,
    pub days: DaySelector,
    pub active_tab: Tab,
    pub filter_tasks_by_day: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tasks: TaskRepository::new(),
            journals: JournalRepository::new(),
            days: DaySelector::starting_today(config.ui.calendar_window_days),
            active_tab: config.ui.startup_tab(),
            filter_tasks_by_day: config.display.filter_tasks_by_day,
            error_message: None,
            info_message: None,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.days.current_date()
    }

    /// Goals shown in the Home list; every goal unless day filtering is on
    pub fn visible_tasks(&self) -> Vec<Task> {
        if self.filter_tasks_by_day {
            self.tasks.for_day(self.selected_date()).into_iter().cloned().collect()
        } else {
            self.tasks.all().to_vec()
        }
    }

    /// Journals written on the selected day
    pub fn day_journals(&self) -> Vec<Journal> {
        self.journals.for_day(self.selected_date()).into_iter().cloned().collect()
    }

    /// Timestamp for an entry created while `selected` is the current day
    fn entry_timestamp(&self, today: NaiveDate) -> DateTime<Local> {
        let selected = self.selected_date();
        if selected == today {
            Local::now()
        } else {
            datetime::start_of_day(selected)
        }
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    tab_bar: TabBarComponent,
    calendar: CalendarComponent,
    entry_list: EntryListComponent,
    sheet: SheetComponent,
    ponders: PondersComponent,
    progress: ProgressComponent,
    resources: ResourcesComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    config: Config,
    icons: IconService,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let state = AppState::new(&config);

        let mut calendar = CalendarComponent::new();
        calendar.weekday_format = config.display.weekday_format.clone();

        let mut dialog = DialogComponent::new();
        dialog.update_display_config(config.display.clone());
        dialog.set_logger(logger.clone());

        let mut app = Self {
            tab_bar: TabBarComponent::new(state.active_tab),
            calendar,
            entry_list: EntryListComponent::new(),
            sheet: SheetComponent::new(&config.sheet),
            ponders: PondersComponent::new(),
            progress: ProgressComponent::new(&config.ui.user_name),
            resources: ResourcesComponent::new(),
            dialog,
            icons: IconService::new(config.display.icon_theme),
            state,
            config,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        log::info!(
            "App: started on tab {} with {} days from {}",
            app.state.active_tab.title(),
            app.state.days.displayed_dates().len(),
            app.state.selected_date()
        );
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sheet(&self) -> &SheetComponent {
        &self.sheet
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn active_dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// The sheet is moving and should be redrawn every frame
    pub fn is_animating(&self) -> bool {
        self.sheet.is_animating() || self.sheet.is_dragging()
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let today = datetime::today();
        let selected = self.state.selected_date();
        let day_journals = self.state.day_journals();

        self.tab_bar.active = self.state.active_tab;
        self.tab_bar.icons = self.icons.clone();

        self.calendar.update_data(
            self.state.days.displayed_dates(),
            selected,
            self.state.days.month_label(&self.config.display.month_format),
            self.state.journals.journaled_days(),
        );

        self.entry_list.icons = self.icons.clone();
        self.entry_list.update_data(
            self.state.visible_tasks(),
            day_journals.clone(),
            datetime::format_human_date(selected, today),
        );

        self.sheet.icons = self.icons.clone();
        self.sheet
            .update_data(self.state.tasks.completed().cloned().collect(), day_journals);

        self.progress.icons = self.icons.clone();
        self.progress
            .update_data(ProgressStats::compute(&self.state.tasks, &self.state.journals, today));

        self.dialog.icons = self.icons.clone();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => {
                log::info!("Global key: '?' - opening help dialog");
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                log::info!("Global key: 'G' - opening logs dialog");
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => {
                log::info!("Global key: 'i' - cycling icon theme");
                Action::CycleIconTheme
            }
            KeyCode::Char('K') if self.state.active_tab == Tab::Home => {
                let flick = -(self.sheet.sheet.snap_threshold() + 1.0);
                log::info!("Global key: 'K' - flicking sheet up");
                Action::FlickSheet(flick)
            }
            KeyCode::Char('J') if self.state.active_tab == Tab::Home => {
                let flick = self.sheet.sheet.snap_threshold() + 1.0;
                log::info!("Global key: 'J' - flicking sheet down");
                Action::FlickSheet(flick)
            }
            _ => Action::None,
        }
    }

    /// Route a key through the tab bar, the active tab, then the global keys
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }

        let tab_action = self.tab_bar.handle_key_events(key);
        if !matches!(tab_action, Action::None) {
            return tab_action;
        }

        let tab_action = match self.state.active_tab {
            Tab::Home => {
                let calendar_action = self.calendar.handle_key_events(key);
                if matches!(calendar_action, Action::None) {
                    self.entry_list.handle_key_events(key)
                } else {
                    calendar_action
                }
            }
            Tab::Ponders => self.ponders.handle_key_events(key),
            Tab::Progress => self.progress.handle_key_events(key),
            Tab::Resources => self.resources.handle_key_events(key),
        };
        if !matches!(tab_action, Action::None) {
            return tab_action;
        }

        self.handle_global_key(key)
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() || !self.config.ui.mouse_enabled {
            return Action::None;
        }

        let tab_action = self.tab_bar.handle_mouse_events(mouse);
        if !matches!(tab_action, Action::None) {
            return tab_action;
        }

        if self.state.active_tab == Tab::Home {
            self.sheet.handle_mouse_events(mouse);
            if !self.sheet.is_dragging() {
                return self.calendar.handle_mouse_events(mouse);
            }
        }
        Action::None
    }

    /// Pass an action through the component hierarchy
    fn update_components(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.tab_bar.update(action);
        let action = self.sheet.update(action);
        let action = self.ponders.update(action);
        let action = self.progress.update(action);
        // Both lists move on CursorUp/Down; only the active tab's gets it
        match self.state.active_tab {
            Tab::Home => self.entry_list.update(action),
            Tab::Resources => self.resources.update(action),
            _ => action,
        }
    }

    /// Apply an action and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if matches!(action, Action::None) {
                break;
            }
            let processed = self.update_components(action);
            action = self.handle_app_action(processed);
        }
        self.sync_component_data();
    }

    fn show_error(&mut self, message: String) -> Action {
        log::warn!("{}", message);
        self.state.error_message = Some(message.clone());
        Action::ShowDialog(DialogType::Error(message))
    }

    fn set_info(&mut self, message: &str) {
        self.state.info_message = Some(message.to_string());
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SwitchTab(tab) => {
                log::info!("Navigation: switched to tab {}", tab.title());
                self.state.active_tab = tab;
                Action::None
            }
            Action::SelectDate(date) => {
                self.state.days.select(date);
                Action::None
            }
            Action::NextDay => {
                self.state.days.next();
                Action::None
            }
            Action::PreviousDay => {
                self.state.days.previous();
                Action::None
            }
            Action::AddTask => {
                let mut task = Task::blank();
                if self.state.filter_tasks_by_day {
                    task = task.with_date(self.state.entry_timestamp(datetime::today()));
                }
                log::info!("Goal: opening editor for new goal {}", task.id);
                Action::ShowDialog(DialogType::TaskEdit { task, is_new: true })
            }
            Action::AddJournal => {
                let journal = Journal::blank(self.state.entry_timestamp(datetime::today()));
                log::info!(
                    "Journal: opening editor for new journal {} on {}",
                    journal.id,
                    self.state.selected_date()
                );
                Action::ShowDialog(DialogType::JournalEdit { journal, is_new: true })
            }
            Action::EditEntry(kind, id) => self.edit_entry(kind, id),
            Action::SaveTask(task) => {
                log::info!("Goal: saving '{}' ({})", task.title, task.id);
                let replaced = self.state.tasks.upsert(task);
                self.set_info(if replaced { SUCCESS_GOAL_UPDATED } else { SUCCESS_GOAL_CREATED });
                Action::None
            }
            Action::SaveJournal(journal) => {
                log::info!("Journal: saving '{}' ({})", journal.title, journal.id);
                let replaced = self.state.journals.upsert(journal);
                self.set_info(if replaced {
                    SUCCESS_JOURNAL_UPDATED
                } else {
                    SUCCESS_JOURNAL_CREATED
                });
                Action::None
            }
            Action::CancelEdit => {
                log::info!("Editor: cancelled, nothing saved");
                Action::None
            }
            Action::ToggleTask(id) => match self.state.tasks.toggle_completed(id) {
                Ok(completed) => {
                    log::info!("Goal: {} marked {}", id, if completed { "completed" } else { "pending" });
                    Action::None
                }
                Err(e) => self.show_error(format!("{}: {}", ERROR_TOGGLE_FAILED, e)),
            },
            Action::RequestDelete(kind, id) => {
                let title = match kind {
                    EntryKind::Task => self.state.tasks.get(id).map(|t| t.title.clone()),
                    EntryKind::Journal => self.state.journals.get(id).map(|j| j.title.clone()),
                };
                match title {
                    Some(title) => Action::ShowDialog(DialogType::DeleteConfirmation { kind, id, title }),
                    None => self.show_error(ERROR_ENTRY_NOT_FOUND.to_string()),
                }
            }
            Action::DeleteEntry(kind, id) => self.delete_entry(kind, id),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("UI: icon theme is now {}", self.icons.theme().name());
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                log::info!("Dialog: showing {:?}", dialog_type);
                Action::None
            }
            Action::HideDialog => {
                log::info!("Dialog: hiding current dialog");
                Action::None
            }
            // Consumed by components; anything reaching here is a no-op
            Action::NextTab
            | Action::PreviousTab
            | Action::CursorDown
            | Action::CursorUp
            | Action::FlickSheet(_)
            | Action::NextPonder
            | Action::NextQuote
            | Action::NextReligion
            | Action::PreviousReligion
            | Action::TogglePonderOfTheDay
            | Action::ToggleQuotes
            | Action::ToggleStatsScope => Action::None,
        }
    }

    fn edit_entry(&mut self, kind: EntryKind, id: Uuid) -> Action {
        let dialog = match kind {
            EntryKind::Task => self.state.tasks.get(id).map(|task| DialogType::TaskEdit {
                task: task.clone(),
                is_new: false,
            }),
            EntryKind::Journal => self.state.journals.get(id).map(|journal| DialogType::JournalEdit {
                journal: journal.clone(),
                is_new: false,
            }),
        };
        match dialog {
            Some(dialog) => {
                log::info!("Editor: editing {} {}", kind.label(), id);
                Action::ShowDialog(dialog)
            }
            None => self.show_error(ERROR_ENTRY_NOT_FOUND.to_string()),
        }
    }

    /// Remove by index from the owning list; the id is resolved against the
    /// full list, not the filtered view the cursor was on
    fn delete_entry(&mut self, kind: EntryKind, id: Uuid) -> Action {
        let result: Result<String, RepositoryError> = match kind {
            EntryKind::Task => self
                .state
                .tasks
                .position(id)
                .ok_or(RepositoryError::NotFound(id))
                .and_then(|index| self.state.tasks.remove_at(index))
                .map(|task| task.title),
            EntryKind::Journal => self
                .state
                .journals
                .position(id)
                .ok_or(RepositoryError::NotFound(id))
                .and_then(|index| self.state.journals.remove_at(index))
                .map(|journal| journal.title),
        };

        match result {
            Ok(title) => {
                log::info!("Delete: removed {} '{}' ({})", kind.label(), title, id);
                self.set_info(match kind {
                    EntryKind::Task => SUCCESS_GOAL_DELETED,
                    EntryKind::Journal => SUCCESS_JOURNAL_DELETED,
                });
                Action::None
            }
            Err(e) => self.show_error(format!("{}: {}", ERROR_DELETE_FAILED, e)),
        }
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.state.clear_messages();
                self.route_key(key)
            }
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Tick => {
                self.sheet.tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        self.update_components(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        self.tab_bar.render(f, areas.tabs);

        match self.state.active_tab {
            Tab::Home => {
                let home = LayoutManager::home_layout(areas.body);
                self.calendar.render(f, home.calendar);
                self.entry_list.render(f, home.lists);
                self.sheet.render(f, home.lists);
            }
            Tab::Ponders => self.ponders.render(f, areas.body),
            Tab::Progress => self.progress.render(f, areas.body),
            Tab::Resources => self.resources.render(f, areas.body),
        }

        let (message, is_error) = match (&self.state.error_message, &self.state.info_message) {
            (Some(error), _) => (Some(error.as_str()), true),
            (None, Some(info)) => (Some(info.as_str()), false),
            (None, None) => (None, false),
        };
        StatusBar::render(f, areas.status, self.state.active_tab, message, is_error);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }

    fn tick(&mut self) {
        self.sheet.tick();
    }
}
