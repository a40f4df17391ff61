use {
  crate::{
    error::{Error, Result},
    geometry::Cell
  },
  euclid::Size2D
};

/// Pixel size of one character block edge.
pub const CHAR_SIZE: u32 = 8;

/// What a single cell of a [`Frame`] stands for on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellKind {
  Pixel,
  /// 8×8 character block, colored as a whole.
  Char
}

impl CellKind {
  pub fn pixels(self) -> u32 {
    match self {
      CellKind::Pixel => 1,
      CellKind::Char => CHAR_SIZE
    }
  }
}

/// Grid of palette indices, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
  width: u32,
  height: u32,
  pub kind: CellKind,
  cells: Vec<u8>
}

impl Frame {
  pub fn new(width: u32, height: u32, kind: CellKind) -> Self {
    Self {
      width,
      height,
      kind,
      cells: vec![0; (width * height) as usize]
    }
  }

  /// Evaluate `f(x, y)` for every cell.
  pub fn from_fn(width: u32, height: u32, kind: CellKind, mut f: impl FnMut(u32, u32) -> u8) -> Self {
    let cells = itertools::iproduct!(0..height, 0..width)
      .map(|(y, x)| f(x, y))
      .collect();
    Self { width, height, kind, cells }
  }

  pub fn from_rows(rows: Vec<Vec<u8>>, kind: CellKind) -> Result<Self> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    if let Some(row) = rows.iter().find(|row| row.len() as u32 != width) {
      return Err(Error::Geometry(format!("ragged rows: {} and {} cells", width, row.len())));
    }
    Ok(Self { width, height, kind, cells: rows.concat() })
  }

  pub fn width(&self) -> u32 { self.width }
  pub fn height(&self) -> u32 { self.height }
  pub fn size(&self) -> Size2D<u32, crate::geometry::CellSpace> { Size2D::new(self.width, self.height) }

  pub fn contains(&self, cell: Cell) -> bool {
    cell.x >= 0 && cell.y >= 0 &&
    (cell.x as u32) < self.width && (cell.y as u32) < self.height
  }

  pub fn get(&self, cell: Cell) -> Option<u8> {
    self.contains(cell)
      .then(|| self.cells[self.offset(cell)])
  }

  /// Write one cell. Off-frame cells are dropped; returns whether the write landed.
  pub fn plot(&mut self, cell: Cell, index: u8) -> bool {
    if !self.contains(cell) {
      return false;
    }
    let offset = self.offset(cell);
    self.cells[offset] = index;
    true
  }

  pub fn fill(&mut self, index: u8) {
    self.cells.iter_mut().for_each(|c| *c = index);
  }

  pub fn cells(&self) -> &[u8] { &self.cells }

  pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
    self.cells.chunks(self.width.max(1) as usize)
  }

  pub fn to_rows(&self) -> Vec<Vec<u8>> {
    self.rows().map(<[u8]>::to_vec).collect()
  }

  /// Replace every index with `map[index]`, e.g. gradient position to hardware colour.
  pub fn map_indices(&self, map: &[u8]) -> Frame {
    Frame {
      cells: self.cells.iter().map(|&i| map[i as usize]).collect(),
      ..self.clone()
    }
  }

  fn offset(&self, cell: Cell) -> usize {
    cell.y as usize * self.width as usize + cell.x as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn plot_outside_is_dropped() {
    let mut frame = Frame::new(4, 2, CellKind::Pixel);
    assert!(frame.plot(Cell::new(3, 1), 7));
    assert!(!frame.plot(Cell::new(4, 1), 7));
    assert!(!frame.plot(Cell::new(-1, 0), 7));
    assert_eq!(frame.get(Cell::new(3, 1)), Some(7));
    assert_eq!(frame.get(Cell::new(0, 2)), None);
    assert_eq!(frame.cells().iter().filter(|&&c| c == 7).count(), 1);
  }

  #[test] fn rows_are_row_major() -> Result<()> {
    let frame = Frame::from_fn(3, 2, CellKind::Char, |x, y| (y * 10 + x) as u8);
    assert_eq!(frame.to_rows(), vec![vec![0, 1, 2], vec![10, 11, 12]]);
    assert_eq!(Frame::from_rows(frame.to_rows(), CellKind::Char)?, frame);
    assert!(Frame::from_rows(vec![vec![1, 2], vec![3]], CellKind::Char).is_err());
    Ok(())
  }
}
