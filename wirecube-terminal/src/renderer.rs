/// Character-grid rasterizer for line segments
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wirecube_core::{CanvasPoint, LineSink, Segment};

/// Character used for every lit cell
const INK: char = '*';

/// Maps canvas coordinates onto terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas units spanned by the full grid width
    pub canvas_width: f64,
    /// Canvas units spanned by the full grid height
    pub canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
        }
    }

    /// Cell coordinates for a canvas point on a `columns` x `rows` grid
    pub fn to_cell(&self, point: &CanvasPoint, columns: usize, rows: usize) -> Point2<i32> {
        let x = point.x / self.canvas_width * columns as f64;
        let y = point.y / self.canvas_height * rows as f64;
        Point2::new(x.floor() as i32, y.floor() as i32)
    }
}

impl Default for Viewport {
    /// Fits the default cube at any orientation
    fn default() -> Self {
        Self::new(240.0, 240.0)
    }
}

/// A terminal-sized character canvas
pub struct CharCanvas {
    columns: usize,
    rows: usize,
    viewport: Viewport,
    cells: Vec<Option<wirecube_core::Color>>,
}

impl CharCanvas {
    pub fn new(columns: usize, rows: usize, viewport: Viewport) -> Self {
        Self {
            columns,
            rows,
            viewport,
            cells: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows && self.cells[row * self.columns + column].is_some()
    }

    /// Text content of one row, blanks as spaces
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.columns..(row + 1) * self.columns]
            .iter()
            .map(|cell| if cell.is_some() { INK } else { ' ' })
            .collect()
    }

    fn plot(&mut self, x: i32, y: i32, color: wirecube_core::Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.columns && y < self.rows {
            self.cells[y * self.columns + x] = Some(color);
        }
    }

    /// Queue the grid to `writer`, starting at terminal row `top`
    pub fn draw<W: Write>(&self, writer: &mut W, top: u16) -> std::io::Result<()> {
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, top + row as u16))?;
            let mut current = None;
            for cell in &self.cells[row * self.columns..(row + 1) * self.columns] {
                match cell {
                    Some(color) => {
                        if current != Some(*color) {
                            writer.queue(SetForegroundColor(term_color(*color)))?;
                            current = Some(*color);
                        }
                        writer.queue(Print(INK))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for CharCanvas {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn draw_segment(&mut self, segment: &Segment) {
        let start = self.viewport.to_cell(&segment.start, self.columns, self.rows);
        let end = self.viewport.to_cell(&segment.end, self.columns, self.rows);
        let color = segment.stroke.color;
        bresenham(start, end, |x, y| self.plot(x, y, color));
    }
}

/// Black is the ink color of a paper canvas; on a terminal that is the
/// default foreground.
fn term_color(color: wirecube_core::Color) -> Color {
    if color == wirecube_core::Color::BLACK {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Walk every cell on the line from `start` to `end`, inclusive
pub fn bresenham<F>(start: Point2<i32>, end: Point2<i32>, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let (mut x0, mut y0) = (start.x, start.y);
    let (x1, y1) = (end.x, end.y);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x0, y0);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
