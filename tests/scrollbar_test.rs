use crossterm::event::KeyCode;
use innerbloom::ui::components::dialogs::scroll_behavior::DialogScroll;
use innerbloom::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_scroll_keys() {
    let mut scroll = DialogScroll::default();
    assert!(scroll.handle_key(KeyCode::Down));
    assert!(scroll.handle_key(KeyCode::Char('j')));
    assert_eq!(scroll.offset, 2);

    assert!(scroll.handle_key(KeyCode::Up));
    assert_eq!(scroll.offset, 1);

    assert!(scroll.handle_key(KeyCode::PageUp));
    assert_eq!(scroll.offset, 0);

    assert!(!scroll.handle_key(KeyCode::Char('x')));
}

#[test]
fn test_scroll_clamped_to_content() {
    let mut scroll = DialogScroll::default();
    scroll.handle_key(KeyCode::End);
    assert_eq!(scroll.clamp(50, 20), 30);

    scroll.handle_key(KeyCode::PageDown);
    assert_eq!(scroll.clamp(50, 20), 30);

    // Short content never scrolls
    assert_eq!(scroll.clamp(5, 20), 0);
}

#[test]
fn test_scroll_reset() {
    let mut scroll = DialogScroll::default();
    scroll.handle_key(KeyCode::PageDown);
    scroll.reset();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_sheet_rect_keeps_handle_visible() {
    let container = Rect::new(0, 8, 80, 30);

    let sheet = LayoutManager::sheet_rect(container, 10);
    assert_eq!(sheet.y, 18);
    assert_eq!(sheet.height, 20);

    let collapsed = LayoutManager::sheet_rect(container, 100);
    assert_eq!(collapsed.height, 2);
    assert_eq!(collapsed.y + collapsed.height, container.y + container.height);
}

#[test]
fn test_main_layout() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 100, 40));
    assert_eq!(areas.tabs.height, 3);
    assert_eq!(areas.status.height, 1);
    assert_eq!(areas.body.height, 36);

    let home = LayoutManager::home_layout(areas.body);
    assert_eq!(home.calendar.height, 5);
    assert_eq!(home.lists.height, 31);
}

#[test]
fn test_grid_and_day_cells() {
    let boxes = LayoutManager::grid(Rect::new(0, 0, 40, 20), 2, 2);
    assert_eq!(boxes.len(), 4);
    assert_eq!(boxes[0].width, 20);
    assert_eq!(boxes[3].y, 10);

    assert_eq!(LayoutManager::visible_day_cells(100, 6), 16);
    assert_eq!(LayoutManager::visible_day_cells(100, 0), 0);
}
