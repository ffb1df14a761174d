//! UI components

pub mod calendar_component;
pub mod dialog_component;
pub mod dialogs;
pub mod entry_list_component;
pub mod ponders_component;
pub mod progress_component;
pub mod resources_component;
pub mod sheet_component;
pub mod status_bar;
pub mod tab_bar_component;

pub use calendar_component::CalendarComponent;
pub use dialog_component::DialogComponent;
pub use entry_list_component::{EntryListComponent, SelectedEntry};
pub use ponders_component::PondersComponent;
pub use progress_component::{ProgressComponent, StatsScope};
pub use resources_component::ResourcesComponent;
pub use sheet_component::SheetComponent;
pub use status_bar::StatusBar;
pub use tab_bar_component::TabBarComponent;
