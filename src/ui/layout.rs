//! Layout management and calculations

use crate::constants::{CALENDAR_HEIGHT, SHEET_MIN_VISIBLE_ROWS, TAB_BAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

/// Areas of the shell: tab bar, active tab body, status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Areas of the Home tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAreas {
    pub calendar: Rect,
    pub lists: Rect,
}

impl LayoutManager {
    /// Calculate the main layout areas (tab bar on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            tabs: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }

    /// Calculate the Home tab layout (calendar strip above the entry lists).
    ///
    /// The bottom sheet is drawn over `lists` and takes its container height
    /// from it.
    #[must_use]
    pub fn home_layout(area: Rect) -> HomeAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CALENDAR_HEIGHT), Constraint::Min(0)])
            .split(area);

        HomeAreas {
            calendar: chunks[0],
            lists: chunks[1],
        }
    }

    /// Sheet rectangle for a top offset (in rows) inside its container
    #[must_use]
    pub fn sheet_rect(container: Rect, offset_rows: u16) -> Rect {
        let max_offset = container.height.saturating_sub(SHEET_MIN_VISIBLE_ROWS);
        let offset = offset_rows.min(max_offset);
        Rect::new(
            container.x,
            container.y + offset,
            container.width,
            container.height.saturating_sub(offset),
        )
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Number of day cells that fit in the strip
    #[must_use]
    pub fn visible_day_cells(width: u16, cell_width: u16) -> usize {
        if cell_width == 0 {
            return 0;
        }
        (width / cell_width) as usize
    }

    /// Split a content area into equal-width boxes laid out in a grid
    #[must_use]
    pub fn grid(area: Rect, columns: u16, rows: u16) -> Vec<Rect> {
        let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect();
        let column_constraints: Vec<Constraint> =
            (0..columns).map(|_| Constraint::Ratio(1, columns as u32)).collect();

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area)
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(column_constraints.clone())
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }
}
