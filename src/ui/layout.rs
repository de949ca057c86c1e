//! Dashboard panel geometry.
//!
//! Pure arithmetic from terminal dimensions to panel rectangles. The renderer
//! consumes these rects verbatim, so the whole frame shape is deterministic
//! for a given terminal size.

use ratatui::layout::Rect;

/// Rows reserved at the top for the animation region. Always reserved, even
/// when nothing is animating, so panels never shift when animation starts.
pub const SPINNER_REGION_HEIGHT: u16 = 3;

/// Floor for the height of the panel row.
pub const MIN_PANEL_AREA_HEIGHT: u16 = 10;

/// Rows reserved for panel framing inside the available height.
pub const PANEL_FRAME_ROWS: u16 = 2;

/// Minimum width of the list panel.
pub const MIN_LIST_WIDTH: u16 = 25;

/// Minimum width of the detail panel.
pub const MIN_DETAIL_WIDTH: u16 = 35;

/// Width of the separator column between the panels.
pub const SEPARATOR_WIDTH: u16 = 1;

/// Defaults substituted for degenerate (zero) terminal dimensions.
pub const FALLBACK_WIDTH: u16 = 80;
pub const FALLBACK_HEIGHT: u16 = 24;

/// Computed panel rectangles for one render pass. Recomputed every frame;
/// holds no identity across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub spinner: Rect,
    pub list: Rect,
    pub separator: Rect,
    pub detail: Rect,
}

impl DashboardLayout {
    /// Compute panel geometry for a terminal of `width` x `height`.
    ///
    /// The list panel takes 35% of the width, floored at
    /// [`MIN_LIST_WIDTH`]; the detail panel takes the rest minus one
    /// separator column, floored at [`MIN_DETAIL_WIDTH`]. When both floors
    /// cannot hold, the detail floor wins and the list shrinks below its own
    /// floor (down to zero on absurdly narrow terminals).
    pub fn compute(width: u16, height: u16) -> Self {
        let width = if width == 0 { FALLBACK_WIDTH } else { width };
        let height = if height == 0 { FALLBACK_HEIGHT } else { height };

        let available_height =
            (height.saturating_sub(SPINNER_REGION_HEIGHT)).max(MIN_PANEL_AREA_HEIGHT);
        let panel_height = available_height - PANEL_FRAME_ROWS;

        // Signed math: the two-pass clamp below can push intermediate values
        // negative on narrow terminals.
        let total = width as i32;
        let mut list_width = (total * 35 / 100).max(MIN_LIST_WIDTH as i32);
        let mut detail_width = total - list_width - SEPARATOR_WIDTH as i32;
        if detail_width < MIN_DETAIL_WIDTH as i32 {
            detail_width = MIN_DETAIL_WIDTH as i32;
            list_width = (total - detail_width - SEPARATOR_WIDTH as i32).max(0);
        }
        let list_width = list_width as u16;
        let detail_width = detail_width as u16;

        let panel_y = SPINNER_REGION_HEIGHT;
        DashboardLayout {
            spinner: Rect::new(0, 0, width, SPINNER_REGION_HEIGHT),
            list: Rect::new(0, panel_y, list_width, panel_height),
            separator: Rect::new(list_width, panel_y, SEPARATOR_WIDTH, panel_height),
            detail: Rect::new(list_width + SEPARATOR_WIDTH, panel_y, detail_width, panel_height),
        }
    }
}
