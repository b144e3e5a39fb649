//! Screen regions bound to clickable controls.

use ratatui::layout::Rect;
use tictactoe::Position;

/// Control under the mouse pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the nine cells.
    Cell(Position),
    /// The reset button.
    Reset,
    /// The game-over dialog.
    Dialog,
}

/// Dispatch table from screen regions to controls, rebuilt on every draw.
///
/// Each cell is stored next to the position it is bound to, so a click
/// resolves to a position without any shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTargets {
    cells: [(Position, Rect); 9],
    reset: Rect,
    dialog: Option<Rect>,
}

impl ClickTargets {
    /// Creates an empty table; nothing is clickable until the first draw.
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(|pos| (pos, Rect::default())),
            reset: Rect::default(),
            dialog: None,
        }
    }

    /// Binds `area` to the cell at `pos`.
    pub fn set_cell(&mut self, pos: Position, area: Rect) {
        self.cells[pos.index()] = (pos, area);
    }

    /// Binds `area` to the reset button.
    pub fn set_reset(&mut self, area: Rect) {
        self.reset = area;
    }

    /// Binds `area` to the dialog, or clears it.
    pub fn set_dialog(&mut self, area: Option<Rect>) {
        self.dialog = area;
    }

    /// Area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()].1
    }

    /// Area of the reset button.
    pub fn reset(&self) -> Rect {
        self.reset
    }

    /// Area of the dialog, if one is showing.
    pub fn dialog(&self) -> Option<Rect> {
        self.dialog
    }

    /// Resolves a terminal coordinate to the topmost control there.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(area) = self.dialog {
            if contains(area, column, row) {
                return Some(Target::Dialog);
            }
        }

        self.cells
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(pos, _)| Target::Cell(*pos))
            .or_else(|| contains(self.reset, column, row).then_some(Target::Reset))
    }
}

impl Default for ClickTargets {
    fn default() -> Self {
        Self::new()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
