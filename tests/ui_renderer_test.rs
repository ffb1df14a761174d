use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use innerbloom::config::Config;
use innerbloom::constants::{SUCCESS_GOAL_CREATED, SUCCESS_GOAL_DELETED};
use innerbloom::logger::Logger;
use innerbloom::ui::core::event_handler::{FRAME_INTERVAL, TICK_RATE};
use innerbloom::ui::core::{Action, Component, DialogType, EntryKind, EventHandler, EventType, SheetState, Tab};
use innerbloom::ui::AppComponent;
use innerbloom::{Task, Tint};
use ratatui::{backend::TestBackend, Terminal};
use uuid::Uuid;

fn new_app() -> AppComponent {
    AppComponent::new(Config::default(), Logger::new())
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).await.unwrap();
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventType {
    EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Press on the sheet's top edge, drag by `rows` and release
async fn drag_sheet(app: &mut AppComponent, rows: i32) {
    let area = app.sheet().sheet_area();
    let column = area.x + 2;
    let start = area.y;
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), column, start))
        .await
        .unwrap();
    let step: i32 = if rows < 0 { -1 } else { 1 };
    let mut row = start as i32;
    for _ in 0..rows.abs() {
        row += step;
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), column, row as u16))
            .await
            .unwrap();
        assert!(app.sheet().is_dragging());
    }
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), column, row as u16))
        .await
        .unwrap();
}

fn render_to_string(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_event_handling() {
    let event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[test]
fn test_tick_rate_switch() {
    let mut event_handler = EventHandler::new();
    assert_eq!(event_handler.tick_rate(), TICK_RATE);

    event_handler.set_tick_rate(FRAME_INTERVAL);
    assert_eq!(event_handler.tick_rate(), FRAME_INTERVAL);
}

#[test]
fn test_home_renders() {
    let mut app = new_app();
    let screen = render_to_string(&mut app, 100, 40);
    assert!(screen.contains("InnerBloom"));
    assert!(screen.contains("Goals"));
    assert!(screen.contains("Completed Items (0)"));
}

#[test]
fn test_every_tab_renders() {
    let mut app = new_app();
    for (index, tab) in Tab::ALL.into_iter().enumerate() {
        app.dispatch(Action::SwitchTab(tab));
        assert_eq!(app.state().active_tab, tab);
        assert_eq!(tab.index(), index);
        let screen = render_to_string(&mut app, 100, 40);
        assert!(!screen.trim().is_empty());
    }
}

#[tokio::test]
async fn test_number_keys_switch_tabs() {
    let mut app = new_app();
    app.handle_event(key(KeyCode::Char('3'))).await.unwrap();
    assert_eq!(app.state().active_tab, Tab::Progress);

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().active_tab, Tab::Resources);

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().active_tab, Tab::Home);
}

#[tokio::test]
async fn test_add_goal_through_dialog() {
    let mut app = new_app();
    app.handle_event(key(KeyCode::Char('g'))).await.unwrap();
    assert!(matches!(
        app.active_dialog(),
        Some(DialogType::TaskEdit { is_new: true, .. })
    ));

    type_text(&mut app, "Run").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert!(!app.is_dialog_visible());
    assert_eq!(app.state().tasks.len(), 1);
    assert_eq!(app.state().tasks.all()[0].title, "Run");
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_GOAL_CREATED));
}

#[tokio::test]
async fn test_cancel_edit_saves_nothing() {
    let mut app = new_app();
    app.dispatch(Action::AddTask);
    type_text(&mut app, "Never mind").await;
    app.handle_event(key(KeyCode::Esc)).await.unwrap();

    assert!(!app.is_dialog_visible());
    assert!(app.state().tasks.is_empty());
}

#[tokio::test]
async fn test_editing_replaces_in_place() {
    let mut app = new_app();
    let first = Task::new("Read", "", Tint::Blue);
    let second = Task::new("Walk", "", Tint::Green);
    app.dispatch(Action::SaveTask(first.clone()));
    app.dispatch(Action::SaveTask(second.clone()));

    app.dispatch(Action::EditEntry(EntryKind::Task, first.id));
    assert!(matches!(
        app.active_dialog(),
        Some(DialogType::TaskEdit { is_new: false, .. })
    ));
    type_text(&mut app, " daily").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    let tasks = app.state().tasks.all();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, first.id);
    assert_eq!(tasks[0].title, "Read daily");
    assert_eq!(tasks[1].id, second.id);
}

#[tokio::test]
async fn test_add_journal_for_selected_day() {
    let mut app = new_app();
    app.dispatch(Action::AddJournal);
    type_text(&mut app, "Quiet morning").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.state().day_journals().len(), 1);
    let caption = &app.state().journals.all()[0].caption;
    assert!(caption.ends_with(' '));

    // The next day has none of them
    app.dispatch(Action::NextDay);
    assert!(app.state().day_journals().is_empty());
    assert_eq!(app.state().journals.len(), 1);
}

#[tokio::test]
async fn test_toggle_moves_goal_to_sheet() {
    let mut app = new_app();
    let task = Task::new("Stretch", "", Tint::Teal);
    app.dispatch(Action::SaveTask(task.clone()));

    app.dispatch(Action::ToggleTask(task.id));
    assert!(app.state().tasks.all()[0].is_completed);
    assert_eq!(app.sheet().completed.len(), 1);

    let screen = render_to_string(&mut app, 100, 40);
    assert!(screen.contains("Completed Items (1)"));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut app = new_app();
    let task = Task::new("Old habit", "", Tint::Gray);
    app.dispatch(Action::SaveTask(task.clone()));

    app.dispatch(Action::RequestDelete(EntryKind::Task, task.id));
    assert!(matches!(
        app.active_dialog(),
        Some(DialogType::DeleteConfirmation { .. })
    ));

    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert!(!app.is_dialog_visible());
    assert_eq!(app.state().tasks.len(), 1);

    app.dispatch(Action::RequestDelete(EntryKind::Task, task.id));
    app.handle_event(key(KeyCode::Char('y'))).await.unwrap();
    assert!(app.state().tasks.is_empty());
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_GOAL_DELETED));
}

#[test]
fn test_delete_of_missing_entry_shows_error() {
    let mut app = new_app();
    app.dispatch(Action::DeleteEntry(EntryKind::Journal, Uuid::new_v4()));
    assert!(app.state().error_message.is_some());
    assert!(matches!(app.active_dialog(), Some(DialogType::Error(_))));
}

#[tokio::test]
async fn test_keyboard_flick_expands_sheet() {
    let mut config = Config::default();
    config.sheet.animation_ms = 0;
    let mut app = AppComponent::new(config, Logger::new());

    // First render measures the container
    render_to_string(&mut app, 100, 40);
    assert_eq!(app.sheet().state(), SheetState::Collapsed);

    app.handle_event(key(KeyCode::Char('K'))).await.unwrap();
    assert_eq!(app.sheet().state(), SheetState::Expanded);
    assert_eq!(app.sheet().displayed_offset(), app.sheet().sheet.expanded_offset());
    assert!(!app.is_animating());

    app.handle_event(key(KeyCode::Char('J'))).await.unwrap();
    assert_eq!(app.sheet().state(), SheetState::Collapsed);
    assert_eq!(app.sheet().displayed_offset(), app.sheet().sheet.collapsed_offset());
}

#[tokio::test]
async fn test_flick_animates_until_ticks_finish() {
    let mut app = new_app();
    render_to_string(&mut app, 100, 40);

    app.dispatch(Action::FlickSheet(-200.0));
    assert!(app.is_animating());

    tokio::time::sleep(tokio::time::Duration::from_millis(350)).await;
    app.handle_event(EventType::Tick).await.unwrap();
    assert!(!app.is_animating());
    assert_eq!(app.sheet().displayed_offset(), app.sheet().sheet.expanded_offset());
}

#[tokio::test]
async fn test_icon_theme_cycles_and_quit() {
    let mut app = new_app();
    let before = app.icons().theme();
    app.handle_event(key(KeyCode::Char('i'))).await.unwrap();
    assert_ne!(app.icons().theme(), before);

    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_mouse_drag_moves_and_snaps_sheet() {
    let mut config = Config::default();
    config.sheet.animation_ms = 0;
    let mut app = AppComponent::new(config, Logger::new());
    render_to_string(&mut app, 100, 40);
    let start = app.sheet().displayed_offset().unwrap();

    // Four rows up, 64 points past the snap threshold
    let area = app.sheet().sheet_area();
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), area.x + 2, area.y))
        .await
        .unwrap();
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), area.x + 2, area.y - 1))
        .await
        .unwrap();
    assert_eq!(app.sheet().displayed_offset(), Some(start - 16.0));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), area.x + 2, area.y - 4))
        .await
        .unwrap();
    assert_eq!(app.sheet().displayed_offset(), Some(start - 64.0));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), area.x + 2, area.y - 4))
        .await
        .unwrap();

    assert!(!app.sheet().is_dragging());
    assert_eq!(app.sheet().state(), SheetState::Expanded);
    assert_eq!(app.sheet().displayed_offset(), app.sheet().sheet.expanded_offset());

    // Two rows down stays inside the threshold, so the sheet rests where it was let go
    let expanded = app.sheet().sheet.expanded_offset().unwrap();
    render_to_string(&mut app, 100, 40);
    drag_sheet(&mut app, 2).await;

    assert_eq!(app.sheet().state(), SheetState::Expanded);
    assert!(!app.is_animating());
    let rested = app.sheet().sheet.offset().unwrap();
    assert!((rested - (expanded + 32.0)).abs() < 1e-3);
    assert_eq!(app.sheet().displayed_offset(), Some(rested));
}

#[tokio::test]
async fn test_mouse_outside_sheet_does_not_drag() {
    let mut app = new_app();
    render_to_string(&mut app, 100, 40);
    let area = app.sheet().sheet_area();
    let before = app.sheet().displayed_offset();

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), area.x + 2, area.y - 3))
        .await
        .unwrap();
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), area.x + 2, area.y - 8))
        .await
        .unwrap();
    assert!(!app.sheet().is_dragging());
    assert_eq!(app.sheet().displayed_offset(), before);
    assert_eq!(app.sheet().state(), SheetState::Collapsed);
}

#[tokio::test]
async fn test_goal_filter_by_day() {
    let mut config = Config::default();
    config.display.filter_tasks_by_day = true;
    let mut app = AppComponent::new(config, Logger::new());

    app.dispatch(Action::AddTask);
    type_text(&mut app, "Swim").await;
    app.handle_event(key(KeyCode::Enter)).await.unwrap();

    let created_on = app.state().selected_date();
    assert_eq!(app.state().tasks.all()[0].date.date_naive(), created_on);
    assert_eq!(app.state().visible_tasks().len(), 1);

    app.dispatch(Action::NextDay);
    assert!(app.state().visible_tasks().is_empty());
    assert_eq!(app.state().tasks.len(), 1);

    app.dispatch(Action::PreviousDay);
    assert_eq!(app.state().visible_tasks()[0].title, "Swim");
}

#[tokio::test]
async fn test_goals_unfiltered_by_default() {
    let mut app = new_app();
    app.dispatch(Action::SaveTask(Task::new("Read", "", Tint::Blue)));
    app.dispatch(Action::NextDay);
    assert_eq!(app.state().visible_tasks().len(), 1);
}
