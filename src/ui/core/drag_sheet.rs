//! Draggable bottom sheet controller.
//!
//! The controller turns a drag gesture into a vertical offset (distance from
//! the top of the container) and a collapsed/expanded label. It knows nothing
//! about rendering or animation; the sheet component eases toward whatever
//! offset the controller settles on.
//!
//! Bounds for a container of height `h` with a bottom inset `i`:
//!
//! - expanded resting offset: `h * expanded_fraction`
//! - collapsed resting offset: `h - i`
//!
//! While dragging, a step is applied only when the resulting offset stays
//! strictly between those two bounds. Steps past a bound are dropped, not
//! clamped. On release, a total translation beyond the snap threshold settles
//! the sheet on the matching bound; anything inside the dead zone leaves the
//! sheet where the drag put it.

use crate::config::SheetConfig;

/// Release translation beyond which the sheet snaps.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 50.0;

/// Expanded resting offset as a fraction of the container height.
pub const DEFAULT_EXPANDED_FRACTION: f32 = 0.3;

/// Initial offset as a fraction of the first measured container height.
pub const INITIAL_OFFSET_FRACTION: f32 = 0.5;

/// Discrete label over the continuous offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetState {
    #[default]
    Collapsed,
    Expanded,
}

/// Container measurements reported by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub container_height: f32,
    pub bottom_inset: f32,
}

impl SheetGeometry {
    pub fn new(container_height: f32, bottom_inset: f32) -> Self {
        Self {
            container_height,
            bottom_inset,
        }
    }

    pub fn collapsed_offset(&self) -> f32 {
        self.container_height - self.bottom_inset
    }

    pub fn expanded_offset(&self, expanded_fraction: f32) -> f32 {
        self.container_height * expanded_fraction
    }
}

#[derive(Debug, Clone)]
pub struct DragSheet {
    offset: Option<f32>,
    state: SheetState,
    geometry: Option<SheetGeometry>,
    expanded_fraction: f32,
    snap_threshold: f32,
}

impl Default for DragSheet {
    fn default() -> Self {
        Self::new(DEFAULT_EXPANDED_FRACTION, DEFAULT_SNAP_THRESHOLD)
    }
}

impl DragSheet {
    pub fn new(expanded_fraction: f32, snap_threshold: f32) -> Self {
        Self {
            offset: None,
            state: SheetState::Collapsed,
            geometry: None,
            expanded_fraction,
            snap_threshold,
        }
    }

    pub fn from_config(config: &SheetConfig) -> Self {
        Self::new(config.expanded_fraction, config.snap_threshold)
    }

    /// Record the container measurements from a layout pass.
    ///
    /// The first call seeds the offset at half the measured height; later calls
    /// only refresh the bounds.
    pub fn layout(&mut self, container_height: f32, bottom_inset: f32) {
        self.geometry = Some(SheetGeometry::new(container_height, bottom_inset));
        if self.offset.is_none() {
            let initial = container_height * INITIAL_OFFSET_FRACTION;
            log::debug!("Sheet: initial offset {:.1} for container height {:.1}", initial, container_height);
            self.offset = Some(initial);
        }
    }

    /// Apply one drag step and return the resulting offset.
    pub fn on_drag_change(&mut self, delta_y: f32, container_height: f32, bottom_inset: f32) -> f32 {
        self.layout(container_height, bottom_inset);
        let current = self.offset.unwrap_or(container_height * INITIAL_OFFSET_FRACTION);
        let candidate = current + delta_y;
        let lower = container_height * self.expanded_fraction;
        let upper = container_height - bottom_inset;

        if lower < candidate && candidate < upper {
            self.offset = Some(candidate);
            candidate
        } else {
            current
        }
    }

    /// Settle the sheet after the pointer is released.
    ///
    /// Does nothing before the first layout pass.
    pub fn on_drag_end(&mut self, total_delta_y: f32) {
        let Some(geometry) = self.geometry else {
            log::debug!("Sheet: drag end before first layout ignored");
            return;
        };

        if total_delta_y < -self.snap_threshold {
            self.offset = Some(geometry.expanded_offset(self.expanded_fraction));
            self.state = SheetState::Expanded;
            log::info!("Sheet: expanded (drag {:.1})", total_delta_y);
        } else if total_delta_y > self.snap_threshold {
            self.offset = Some(geometry.collapsed_offset());
            self.state = SheetState::Collapsed;
            log::info!("Sheet: collapsed (drag {:.1})", total_delta_y);
        }
    }

    /// Current offset, `None` until the first layout pass.
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == SheetState::Expanded
    }

    pub fn geometry(&self) -> Option<SheetGeometry> {
        self.geometry
    }

    pub fn expanded_offset(&self) -> Option<f32> {
        self.geometry.map(|g| g.expanded_offset(self.expanded_fraction))
    }

    pub fn collapsed_offset(&self) -> Option<f32> {
        self.geometry.map(|g| g.collapsed_offset())
    }

    pub fn snap_threshold(&self) -> f32 {
        self.snap_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_unknown_before_layout() {
        let sheet = DragSheet::default();
        assert_eq!(sheet.offset(), None);
        assert_eq!(sheet.state(), SheetState::Collapsed);
    }

    #[test]
    fn test_layout_seeds_offset_once() {
        let mut sheet = DragSheet::default();
        sheet.layout(800.0, 20.0);
        assert_eq!(sheet.offset(), Some(400.0));

        sheet.layout(600.0, 20.0);
        assert_eq!(sheet.offset(), Some(400.0));
        assert_eq!(sheet.collapsed_offset(), Some(580.0));
    }

    #[test]
    fn test_drag_end_before_layout_is_ignored() {
        let mut sheet = DragSheet::default();
        sheet.on_drag_end(-200.0);
        assert_eq!(sheet.state(), SheetState::Collapsed);
        assert_eq!(sheet.offset(), None);
    }
}
