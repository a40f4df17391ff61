//! Integer line rasterization.
//!
//! Lines are stepped with the general-octant Bresenham error accumulator. Endpoints are put
//! in lexicographic order first, so `A → B` and `B → A` touch the same cells.

use crate::{
  frame::Frame,
  geometry::{Cell, Model, Projection, Spin}
};

/// Every cell on the discrete line between `p0` and `p1`, both inclusive.
#[derive(Debug, Clone)]
pub struct LineCells {
  current: Cell,
  end: Cell,
  dx: i32,
  dy: i32,
  sx: i32,
  sy: i32,
  err: i32,
  done: bool
}

pub fn line_cells(p0: Cell, p1: Cell) -> LineCells {
  let (start, end) = if (p1.x, p1.y) < (p0.x, p0.y) { (p1, p0) } else { (p0, p1) };
  let dx = (end.x - start.x).abs();
  let dy = (end.y - start.y).abs();
  LineCells {
    current: start,
    end,
    dx,
    dy,
    sx: if start.x < end.x { 1 } else { -1 },
    sy: if start.y < end.y { 1 } else { -1 },
    err: dx - dy,
    done: false
  }
}

impl Iterator for LineCells {
  type Item = Cell;

  fn next(&mut self) -> Option<Cell> {
    if self.done {
      return None;
    }
    let cell = self.current;
    if cell == self.end {
      self.done = true;
      return Some(cell);
    }
    let e2 = 2 * self.err;
    if e2 > -self.dy {
      self.err -= self.dy;
      self.current.x += self.sx;
    }
    if e2 < self.dx {
      self.err += self.dx;
      self.current.y += self.sy;
    }
    Some(cell)
  }
}

/// Plot a line into `frame`. Returns the number of cells that landed inside the frame.
pub fn draw_line(frame: &mut Frame, p0: Cell, p1: Cell, index: u8) -> usize {
  line_cells(p0, p1)
    .filter(|&cell| frame.plot(cell, index))
    .count()
}

/// Connect consecutive points; `closed` also joins the last point to the first.
pub fn draw_polyline(frame: &mut Frame, points: &[Cell], closed: bool, index: u8) {
  points.windows(2)
    .for_each(|pair| { draw_line(frame, pair[0], pair[1], index); });
  if let (true, [first, .., last]) = (closed, points) {
    draw_line(frame, *last, *first, index);
  }
}

/// Draw every edge of `model` as seen through `spin` and `projection`.
pub fn draw_wireframe(frame: &mut Frame, model: &Model, spin: Spin, projection: &Projection, index: u8) {
  let cells: Vec<Cell> = model.vertices.iter()
    .map(|&v| projection.project(spin.apply(v)))
    .collect();
  model.edges.iter()
    .for_each(|&[a, b]| { draw_line(frame, cells[a], cells[b], index); });
}

#[cfg(test)] mod tests;
