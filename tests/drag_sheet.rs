use innerbloom::config::SheetConfig;
use innerbloom::ui::core::{DragSheet, SheetState};

const HEIGHT: f32 = 800.0;
const INSET: f32 = 20.0;

fn measured_sheet() -> DragSheet {
    let mut sheet = DragSheet::default();
    sheet.layout(HEIGHT, INSET);
    sheet
}

#[test]
fn test_resting_offsets() {
    let sheet = measured_sheet();
    assert_eq!(sheet.offset(), Some(400.0));
    assert_eq!(sheet.expanded_offset(), Some(240.0));
    assert_eq!(sheet.collapsed_offset(), Some(780.0));
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_drag_then_flick_up_expands() {
    let mut sheet = measured_sheet();

    let offset = sheet.on_drag_change(-80.0, HEIGHT, INSET);
    assert_eq!(offset, 320.0);
    assert_eq!(sheet.offset(), Some(320.0));

    sheet.on_drag_end(-80.0);
    assert_eq!(sheet.offset(), Some(240.0));
    assert_eq!(sheet.state(), SheetState::Expanded);
    assert!(sheet.is_expanded());
}

#[test]
fn test_flick_down_collapses() {
    let mut sheet = measured_sheet();
    sheet.on_drag_end(-60.0);
    assert!(sheet.is_expanded());

    sheet.on_drag_change(60.0, HEIGHT, INSET);
    sheet.on_drag_end(60.0);
    assert_eq!(sheet.offset(), Some(780.0));
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_dead_zone_keeps_drag_position() {
    let mut sheet = measured_sheet();
    sheet.on_drag_change(30.0, HEIGHT, INSET);
    sheet.on_drag_end(30.0);
    assert_eq!(sheet.offset(), Some(430.0));
    assert_eq!(sheet.state(), SheetState::Collapsed);

    // The threshold itself is still inside the dead zone
    sheet.on_drag_end(-50.0);
    assert_eq!(sheet.offset(), Some(430.0));
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_steps_past_bounds_are_dropped() {
    let mut sheet = measured_sheet();

    // 400 - 200 = 200 is above the expanded bound
    assert_eq!(sheet.on_drag_change(-200.0, HEIGHT, INSET), 400.0);
    // 400 + 400 = 800 is below the collapsed bound
    assert_eq!(sheet.on_drag_change(400.0, HEIGHT, INSET), 400.0);
    assert_eq!(sheet.offset(), Some(400.0));
}

#[test]
fn test_bounds_are_exclusive() {
    let mut sheet = measured_sheet();
    assert_eq!(sheet.on_drag_change(-160.0, HEIGHT, INSET), 400.0);
    assert_eq!(sheet.on_drag_change(380.0, HEIGHT, INSET), 400.0);
    assert_eq!(sheet.on_drag_change(-159.0, HEIGHT, INSET), 241.0);
}

#[test]
fn test_offset_stays_in_range_during_drag() {
    let mut sheet = measured_sheet();
    for delta in [-50.0, -50.0, -50.0, -50.0, 120.0, 300.0, 300.0, -10.0] {
        let offset = sheet.on_drag_change(delta, HEIGHT, INSET);
        assert!(offset > 240.0 && offset < 780.0);
    }
}

#[test]
fn test_drag_before_layout_uses_measurements() {
    let mut sheet = DragSheet::default();
    let offset = sheet.on_drag_change(-10.0, HEIGHT, INSET);
    assert_eq!(offset, 390.0);
    assert_eq!(sheet.collapsed_offset(), Some(780.0));
}

#[test]
fn test_configured_fraction_and_threshold() {
    let config = SheetConfig {
        expanded_fraction: 0.5,
        snap_threshold: 100.0,
        ..SheetConfig::default()
    };
    let mut sheet = DragSheet::from_config(&config);
    sheet.layout(HEIGHT, INSET);
    assert_eq!(sheet.expanded_offset(), Some(400.0));
    assert_eq!(sheet.snap_threshold(), 100.0);

    // 60 is past the default threshold but not this one
    sheet.on_drag_end(-60.0);
    assert_eq!(sheet.state(), SheetState::Collapsed);
}
