//! Keyboard and tap input: event type, per-frame tap targets, pixel mapping.

use ratzilla::ratatui::layout::{Position, Rect, Size};

/// Screens narrower than this drop the log pane and wrap the shop.
const NARROW_WIDTH: u16 = 60;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Lower-cased key press.
    Key(char),
    /// Tap on a registered target, carrying its action ID.
    Click(u16),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Tap targets registered by the last draw, plus the grid size they were
/// laid out on. Shared between `draw_web` and the mouse handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    grid: Size,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            grid: Size::new(0, 0),
        }
    }

    /// Forget last frame's targets and record the grid about to be drawn.
    pub fn begin_frame(&mut self, grid: Size) {
        self.grid = grid;
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Make one row of `area` tappable. Rows outside `area` are dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if (area.y..area.bottom()).contains(&row) {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Action under a cell. Later registrations sit on top of earlier ones.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        let cell = Position::new(col, row);
        self.targets
            .iter()
            .rev()
            .find(|t| t.rect.contains(cell))
            .map(|t| t.action_id)
    }

    /// Map a pixel offset inside the grid element (`width` x `height` px)
    /// to a `(col, row)` cell. `None` before the first draw or off-grid.
    pub fn cell_at(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(u16, u16)> {
        let col = pixel_to_index(x, width, self.grid.width)?;
        let row = pixel_to_index(y, height, self.grid.height)?;
        Some((col, row))
    }
}

pub fn is_narrow_layout(width: u16) -> bool {
    width < NARROW_WIDTH
}

/// One axis of the pixel-to-cell mapping.
fn pixel_to_index(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if cells == 0 || extent <= 0.0 || !(0.0..extent).contains(&offset) {
        return None;
    }
    let index = (offset * f64::from(cells) / extent) as u16;
    Some(index.min(cells - 1))
}
