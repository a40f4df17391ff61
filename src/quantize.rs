//! Mapping of continuous intensities onto palette indices, with optional ordered dithering.

use crate::{
  error::{Error, Result},
  palette::MAX_ENTRIES
};

/// Square grid of ranked thresholds; each value in `0..n²` appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMatrix {
  size: usize,
  thresholds: Vec<u16>
}

impl ThresholdMatrix {
  /// Validates the permutation invariant.
  pub fn new(size: usize, thresholds: Vec<u16>) -> Result<Self> {
    if size == 0 || thresholds.len() != size * size {
      return Err(Error::InvalidMatrix(format!(
        "{} thresholds do not form a {}×{} matrix", thresholds.len(), size, size
      )));
    }
    let mut seen = vec![false; thresholds.len()];
    for &t in &thresholds {
      match seen.get_mut(t as usize) {
        None => return Err(Error::InvalidMatrix(format!("threshold {} out of range", t))),
        Some(slot) if *slot => return Err(Error::InvalidMatrix(format!("threshold {} repeats", t))),
        Some(slot) => *slot = true
      }
    }
    Ok(Self { size, thresholds })
  }

  /// Recursive Bayer matrix; `size` must be a power of two, up to 256.
  pub fn bayer(size: usize) -> Result<Self> {
    if !size.is_power_of_two() || size > 256 {
      return Err(Error::InvalidMatrix(format!("bayer size {} is not a power of two <= 256", size)));
    }
    Ok(bayer_unchecked(size))
  }

  pub fn bayer8() -> Self {
    bayer_unchecked(8)
  }

  pub fn size(&self) -> usize { self.size }

  pub fn cell_count(&self) -> usize { self.thresholds.len() }

  /// Threshold at `(x mod size, y mod size)`.
  pub fn threshold(&self, x: u32, y: u32) -> u16 {
    let (x, y) = (x as usize % self.size, y as usize % self.size);
    self.thresholds[y * self.size + x]
  }
}

/// Maps intensities in `[0, 1]` onto `0..levels`.
#[derive(Debug, Clone)]
pub struct Quantizer {
  levels: usize,
  matrix: Option<ThresholdMatrix>
}

impl Quantizer {
  /// `levels` is the palette length, clamped into `1..=MAX_ENTRIES`.
  pub fn new(levels: usize) -> Self {
    Self { levels: levels.clamp(1, MAX_ENTRIES), matrix: None }
  }

  pub fn dithered(levels: usize, matrix: ThresholdMatrix) -> Self {
    Self { matrix: Some(matrix), ..Self::new(levels) }
  }

  pub fn levels(&self) -> usize { self.levels }

  fn max_index(&self) -> f32 { (self.levels - 1) as f32 }

  /// Nearest palette index.
  pub fn quantize(&self, intensity: f32) -> usize {
    let intensity = sanitize(intensity);
    ((intensity * self.max_index()).round() as usize)
      .min(self.levels - 1)
  }

  /// Floor of the continuous index, promoted by one step where the matrix threshold at the
  /// cell is below the fractional part.
  pub fn dithered_quantize(&self, intensity: f32, x: u32, y: u32) -> usize {
    let matrix = match &self.matrix {
      Some(matrix) => matrix,
      None => return self.quantize(intensity)
    };
    let idx = sanitize(intensity) * self.max_index();
    let base = idx.floor();
    let frac = idx - base;
    let promote = (matrix.threshold(x, y) as f32) < frac * matrix.cell_count() as f32;
    (base as usize + promote as usize).min(self.levels - 1)
  }

  /// Uses the matrix when present.
  pub fn apply(&self, intensity: f32, x: u32, y: u32) -> u8 {
    self.dithered_quantize(intensity, x, y) as u8
  }
}

// M(2n) = 4·M(n) tiled, plus the 2×2 offsets [[0, 2], [3, 1]] per quadrant
fn bayer_unchecked(size: usize) -> ThresholdMatrix {
  let mut m = vec![0u16];
  let mut n = 1;
  while n < size {
    let next = n * 2;
    m = itertools::iproduct!(0..next, 0..next)
      .map(|(y, x)| m[(y % n) * n + x % n] * 4 + match (x / n, y / n) {
        (0, 0) => 0,
        (1, 0) => 2,
        (0, _) => 3,
        _ => 1
      })
      .collect();
    n = next;
  }
  ThresholdMatrix { size, thresholds: m }
}

fn sanitize(intensity: f32) -> f32 {
  if intensity.is_finite() { intensity.clamp(0.0, 1.0) } else { 0.0 }
}
