//! LifeView: maps the engine's cell buffer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It reads the universe's exposed cell slice
//! in place and can be unit-tested against framebuffer contents. It also
//! owns the terminal-coordinate-to-cell mapping used for mouse input.

use tui_life_core::Universe;
use tui_life_types::Cell;

use crate::fb::{CellStyle, FrameBuffer, Rgb, TermCell};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the grid lands inside a viewport.
///
/// `origin_x`/`origin_y` address the top-left of the play area, inside the
/// border. The same layout that places cells is used to hit-test pointer
/// events, so drawing and clicking can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub rows: u16,
    pub cols: u16,
}

impl GridLayout {
    /// Map terminal coordinates to an engine `(row, col)`.
    ///
    /// Returns `None` for the border and anything outside the play area.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(u32, u32)> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = (x - self.origin_x) / self.cell_w.max(1);
        let row = y - self.origin_y;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((u32::from(row), u32::from(col)))
    }
}

/// Harness state the view renders alongside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudState {
    /// Keyboard cursor position as engine `(row, col)`.
    pub cursor: (u32, u32),
    pub paused: bool,
    /// Current frame interval in milliseconds.
    pub interval_ms: u64,
}

/// A lightweight terminal view for the Life grid.
pub struct LifeView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const ALIVE_STYLE: CellStyle = CellStyle::new(Rgb::new(235, 235, 235), Rgb::new(20, 20, 28));
const DEAD_STYLE: CellStyle = CellStyle::new(Rgb::new(70, 70, 82), Rgb::new(20, 20, 28));
const CURSOR_STYLE: CellStyle = CellStyle::new(Rgb::new(20, 20, 28), Rgb::new(210, 140, 40));
const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HUD_STYLE: CellStyle = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));

impl LifeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Compute the centered grid placement for a viewport.
    pub fn layout(&self, universe: &Universe, viewport: Viewport) -> GridLayout {
        let cols = universe.width().min(u32::from(u16::MAX)) as u16;
        let rows = universe.height().min(u32::from(u16::MAX)) as u16;
        let grid_w = cols.saturating_mul(self.cell_w);
        let grid_h = rows;
        // +2 for the border on each axis.
        let start_x = viewport.width.saturating_sub(grid_w.saturating_add(2)) / 2;
        let start_y = viewport.height.saturating_sub(grid_h.saturating_add(2)) / 2;
        GridLayout {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            rows,
            cols,
        }
    }

    /// Render the current generation into a framebuffer.
    pub fn render(&self, universe: &Universe, hud: &HudState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(TermCell::default());

        let layout = self.layout(universe, viewport);
        self.draw_border(&mut fb, layout);

        // Read the engine's buffer in place: row-major, one cell per byte.
        // Coordinate math is done in u32 and clipped to the viewport, so a
        // grid wider than the terminal never walks x past u16 range.
        let cells = universe.cells();
        let width = universe.width() as usize;
        for row in 0..u32::from(layout.rows) {
            let y = u32::from(layout.origin_y) + row;
            if y >= u32::from(fb.height()) {
                break;
            }
            for col in 0..u32::from(layout.cols) {
                let x = u32::from(layout.origin_x) + col * u32::from(layout.cell_w);
                if x >= u32::from(fb.width()) {
                    break;
                }
                let cell = cells[(row as usize) * width + (col as usize)];
                let (glyph, style) = if cell == Cell::Dead {
                    ('·', DEAD_STYLE)
                } else {
                    ('█', ALIVE_STYLE)
                };
                for dx in 0..u32::from(layout.cell_w) {
                    // Only the first column of a wide cell carries the dead dot.
                    let ch = if dx == 0 || glyph == '█' { glyph } else { ' ' };
                    put_clipped(&mut fb, x + dx, y, ch, style);
                }
            }
        }

        self.draw_cursor(&mut fb, universe, hud, layout);
        self.draw_hud(&mut fb, universe, hud, layout);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: GridLayout) {
        let left = u32::from(layout.origin_x) - 1;
        let top = u32::from(layout.origin_y) - 1;
        let right = u32::from(layout.origin_x)
            + u32::from(layout.cols) * u32::from(layout.cell_w);
        let bottom = u32::from(layout.origin_y) + u32::from(layout.rows);

        // Edges past the viewport are clipped, not drawn.
        let x_end = right.min(u32::from(fb.width()).saturating_sub(1));
        let y_end = bottom.min(u32::from(fb.height()).saturating_sub(1));
        for x in left..=x_end {
            put_clipped(fb, x, top, '─', BORDER_STYLE);
            put_clipped(fb, x, bottom, '─', BORDER_STYLE);
        }
        for y in top..=y_end {
            put_clipped(fb, left, y, '│', BORDER_STYLE);
            put_clipped(fb, right, y, '│', BORDER_STYLE);
        }
        put_clipped(fb, left, top, '┌', BORDER_STYLE);
        put_clipped(fb, right, top, '┐', BORDER_STYLE);
        put_clipped(fb, left, bottom, '└', BORDER_STYLE);
        put_clipped(fb, right, bottom, '┘', BORDER_STYLE);
    }

    fn draw_cursor(
        &self,
        fb: &mut FrameBuffer,
        universe: &Universe,
        hud: &HudState,
        layout: GridLayout,
    ) {
        let (row, col) = hud.cursor;
        if row >= universe.height() || col >= universe.width() {
            return;
        }
        let alive = universe.get(row, col).is_some_and(Cell::is_alive);
        let glyph = if alive { '█' } else { '·' };
        // Cursor coordinates come straight from the grid, which can be far
        // wider than any viewport; saturate instead of trusting the range.
        let x = u32::from(layout.origin_x)
            .saturating_add(col.saturating_mul(u32::from(layout.cell_w)));
        let y = u32::from(layout.origin_y).saturating_add(row);
        for dx in 0..u32::from(layout.cell_w) {
            let ch = if dx == 0 { glyph } else { ' ' };
            put_clipped(fb, x.saturating_add(dx), y, ch, CURSOR_STYLE);
        }
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        universe: &Universe,
        hud: &HudState,
        layout: GridLayout,
    ) {
        let status = format!(
            "gen {}  pop {}  {} ms  {}",
            universe.generation(),
            universe.live_count(),
            hud.interval_ms,
            if hud.paused { "PAUSED" } else { "RUNNING" },
        );
        let y = u32::from(layout.origin_y) + u32::from(layout.rows) + 1;
        if y + 1 >= u32::from(fb.height()) {
            return;
        }
        fb.put_str(layout.origin_x - 1, y as u16, &status, HUD_STYLE);

        let help = "space pause  n step  arrows move  t toggle  click toggle  r random  c clear  +/- speed  q quit";
        fb.put_str(layout.origin_x - 1, y as u16 + 1, help, HUD_STYLE);
    }
}

/// Write one cell if the u32 coordinates land inside the framebuffer.
fn put_clipped(fb: &mut FrameBuffer, x: u32, y: u32, ch: char, style: CellStyle) {
    if x < u32::from(fb.width()) && y < u32::from(fb.height()) {
        fb.put_char(x as u16, y as u16, ch, style);
    }
}
