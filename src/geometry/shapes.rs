use {
  super::P3,
  std::f32::consts::PI
};

/// A set of model-space vertices joined by edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
  pub vertices: Vec<P3<f32>>,
  /// Pairs of indices into `vertices`.
  pub edges: Vec<[usize; 2]>
}

impl Model {
  /// Cube of side 2, centered in the origin.
  pub fn cube() -> Self {
    let vertices = [
      [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0], // back
      [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]      // front
    ].iter()
      .map(|&[x, y, z]| P3::new(x, y, z))
      .collect();
    let edges = vec![
      [0, 1], [1, 2], [2, 3], [3, 0],
      [4, 5], [5, 6], [6, 7], [7, 4],
      [0, 4], [1, 5], [2, 6], [3, 7]
    ];
    Self { vertices, edges }
  }

  /// Open polyline through all vertices, in order.
  pub fn strip(vertices: Vec<P3<f32>>) -> Self {
    let edges = (1..vertices.len())
      .map(|i| [i - 1, i])
      .collect();
    Self { vertices, edges }
  }
}

/// A rope wrapped around a cylinder, top to bottom, with sine wobble on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RopeCylinder {
  pub points: usize,
  pub radius: f32,
  pub height: f32,
  /// Full turns around the axis over the whole height.
  pub wraps: f32
}

impl Default for RopeCylinder {
  fn default() -> Self {
    Self { points: 108, radius: 8.0, height: 30.0, wraps: 4.5 }
  }
}

impl RopeCylinder {
  /// Vertices rounded to the integer lattice.
  pub fn vertices(&self) -> Vec<P3<i32>> {
    let last = self.points.saturating_sub(1).max(1) as f32;
    (0..self.points).map(|i| {
      let t = i as f32 / last;
      let y = self.height / 2.0 - self.height * t
        + 0.5 * (t * 8.0 * PI).sin();
      let angle = t * self.wraps * 2.0 * PI
        + 0.3 * (t * 5.0 * PI).sin();
      let radius = self.radius + (t * 7.0 * PI).sin();
      let x = radius * angle.cos() + 0.5 * (t * 6.0 * PI + angle).sin();
      let z = radius * angle.sin() + 0.5 * (t * 6.0 * PI + angle).cos();
      P3::new(x.round() as i32, y.round() as i32, z.round() as i32)
    }).collect()
  }

  pub fn model(&self) -> Model {
    Model::strip(self.vertices().into_iter()
      .map(|p| p.to_f32())
      .collect())
  }
}
