/// Rendering layer — all terminal I/O lives here.
///
/// The world square `[-VIEW_HALF, VIEW_HALF]²` is stretched over the whole
/// terminal minus the hint row.  No game logic is performed; this module
/// only translates draw calls into terminal commands.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use ball_collision::compute::ARENA_BOUND;
use ball_collision::entities::Point;
use ball_collision::render::{RenderError, Renderer, Tint};

/// Half-width of the visible world.
const VIEW_HALF: f64 = 250.0;
/// World radius of a disc with relative size 1.0.
const UNIT_RADIUS: f64 = 10.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_ARENA: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

fn colour(tint: Tint) -> Color {
    match tint {
        Tint::Red => Color::Red,
        Tint::Yellow => Color::Yellow,
        Tint::Blue => Color::Blue,
        Tint::Green => Color::Green,
        Tint::Default => Color::Reset,
    }
}

// ── Terminal renderer ────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer { out, cols: 0, rows: 0 }
    }

    /// Rows available to the arena (the last row holds the hint).
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn to_cell(&self, p: Point) -> Option<(u16, u16)> {
        let cols = self.cols as f64;
        let rows = self.play_rows() as f64;
        let col = ((p.x + VIEW_HALF) / (2.0 * VIEW_HALF) * cols).floor();
        let row = ((VIEW_HALF - p.y) / (2.0 * VIEW_HALF) * rows).floor();
        if col < 0.0 || row < 0.0 || col >= cols || row >= rows {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn cell_centre(&self, col: u16, row: u16) -> Point {
        let x = (col as f64 + 0.5) / self.cols as f64 * 2.0 * VIEW_HALF - VIEW_HALF;
        let y = VIEW_HALF - (row as f64 + 0.5) / self.play_rows() as f64 * 2.0 * VIEW_HALF;
        Point::new(x, y)
    }

    fn put(&mut self, col: u16, row: u16, glyph: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn draw_arena(&mut self) -> std::io::Result<()> {
        let top_left = self.to_cell(Point::new(-ARENA_BOUND, ARENA_BOUND));
        let bottom_right = self.to_cell(Point::new(ARENA_BOUND, -ARENA_BOUND));
        let (Some((left, top)), Some((right, bottom))) = (top_left, bottom_right) else {
            return Ok(());
        };
        if right <= left || bottom <= top {
            return Ok(());
        }

        self.out.queue(style::SetForegroundColor(C_ARENA))?;
        let bar = "─".repeat((right - left - 1) as usize);
        self.put(left, top, &format!("┌{bar}┐"))?;
        self.put(left, bottom, &format!("└{bar}┘"))?;
        for row in top + 1..bottom {
            self.put(left, row, "│")?;
            self.put(right, row, "│")?;
        }
        Ok(())
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.put(1, self.rows.saturating_sub(1), "↑ ↓ ← → / W A S D : Move   Q : Quit")
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> Result<(), RenderError> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;

        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_arena()?;
        self.draw_controls_hint()?;
        Ok(())
    }

    /// Fill every cell whose centre falls inside the disc; the centre cell
    /// is always filled so small discs never vanish.
    fn draw_disc(&mut self, center: Point, size: f64, tint: Tint) -> Result<(), RenderError> {
        let radius = UNIT_RADIUS * size;
        self.out.queue(style::SetForegroundColor(colour(tint)))?;

        let corner_a = Point::new(center.x - radius, center.y + radius);
        let corner_b = Point::new(center.x + radius, center.y - radius);
        // Keep the bounding box on screen so a disc at the edge is clipped,
        // not dropped.
        let clamp = |p: Point| {
            Point::new(
                p.x.clamp(-VIEW_HALF, VIEW_HALF - 1e-6),
                p.y.clamp(-VIEW_HALF + 1e-6, VIEW_HALF),
            )
        };
        let top_left = self.to_cell(clamp(corner_a));
        let bottom_right = self.to_cell(clamp(corner_b));
        let (Some((c0, r0)), Some((c1, r1))) = (top_left, bottom_right) else {
            return Ok(());
        };

        for row in r0..=r1 {
            for col in c0..=c1 {
                if self.cell_centre(col, row).distance(&center) <= radius {
                    self.put(col, row, "█")?;
                }
            }
        }
        if let Some((col, row)) = self.to_cell(center) {
            self.put(col, row, "█")?;
        }
        Ok(())
    }

    fn draw_text(&mut self, at: Point, text: &str) -> Result<(), RenderError> {
        let Some((col, row)) = self.to_cell(at) else {
            return Ok(());
        };
        self.out.queue(style::SetForegroundColor(colour(Tint::Default)))?;
        self.put(col, row, text)?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }
}
