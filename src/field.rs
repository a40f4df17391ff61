//! Radial light field: soft round light sources summed into a single intensity, with a rough
//! shadow heuristic between pairs of sources.

use {
  crate::geometry::CellSpace,
  euclid::Point2D
};

/// Light reaches `radius * FALLOFF` from the centre.
pub const FALLOFF: f32 = 1.5;
/// Fraction of the radius counted as the bright core, never shadowed.
pub const CORE: f32 = 0.7;
/// A cell is "between" two sources when its summed distance to them is below this multiple
/// of the distance between the centres.
pub const BETWEEN: f32 = 1.4;
/// Multiplier applied once per shadowing pair.
pub const SHADOW: f32 = 0.6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Source {
  pub center: Point2D<f32, CellSpace>,
  pub radius: f32
}

impl Source {
  pub fn new(x: f32, y: f32, radius: f32) -> Self {
    Self { center: Point2D::new(x, y), radius }
  }

  /// `(1 - d / reach)²` inside the reach, zero outside.
  pub fn contribution(&self, cell: Point2D<f32, CellSpace>) -> f32 {
    let reach = self.radius * FALLOFF;
    let d = cell.distance_to(self.center);
    if d < reach {
      let falloff = 1.0 - d / reach;
      falloff * falloff
    } else {
      0.0
    }
  }
}

/// Sum of all contributions, clamped to 1.
pub fn field_intensity(cell: Point2D<f32, CellSpace>, sources: &[Source]) -> f32 {
  sources.iter()
    .map(|s| s.contribution(cell))
    .sum::<f32>()
    .min(1.0)
}

/// Multiplicative darkening for cells lying between two sources, outside both cores.
pub fn shadow_factor(cell: Point2D<f32, CellSpace>, sources: &[Source]) -> f32 {
  let mut factor = 1.0;
  for (i, a) in sources.iter().enumerate() {
    for b in &sources[i + 1..] {
      let (da, db) = (cell.distance_to(a.center), cell.distance_to(b.center));
      let outside_cores = da > a.radius * CORE && db > b.radius * CORE;
      if outside_cores && da + db < a.center.distance_to(b.center) * BETWEEN {
        factor *= SHADOW;
      }
    }
  }
  factor
}

/// Lit and shadowed intensity in `[0, 1]`.
pub fn shaded_intensity(cell: Point2D<f32, CellSpace>, sources: &[Source]) -> f32 {
  field_intensity(cell, sources) * shadow_factor(cell, sources)
}
