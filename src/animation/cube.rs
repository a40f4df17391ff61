//! A tumbling wireframe cube squeezed into a small pupil window.

use {
  super::Animation,
  crate::{
    emit::AsmTable,
    frame::{CellKind, Frame},
    geometry::{Cell, Model, Projection},
    raster,
    sampler::{progress, Tumble}
  },
  euclid::{Box2D, Vector2D}
};

#[derive(Debug, Clone, PartialEq)]
pub struct CubeConfig {
  pub frames: usize,
  pub tumble: Tumble,
  pub projection: Projection,
  pub model: Model,
  /// Palette index of the wireframe when rasterized.
  pub ink: u8
}

impl Default for CubeConfig {
  fn default() -> Self {
    Self {
      frames: 64,
      tumble: Tumble::default(),
      projection: Projection {
        distance: 4.0,
        scale: 3.0,
        offset: Vector2D::new(12.0, 4.0),
        window: Some(Box2D::new(Cell::new(0, 0), Cell::new(23, 7)))
      },
      model: Model::cube(),
      ink: 1
    }
  }
}

#[derive(Debug, Clone)]
pub struct CubeSpin {
  pub config: CubeConfig
}

impl CubeSpin {
  pub fn new(config: CubeConfig) -> Self {
    Self { config }
  }

  /// Projected, clamped vertices of frame `t`.
  pub fn vertices(&self, t: usize) -> Vec<Cell> {
    let spin = self.config.tumble.sample(progress(t, self.config.frames));
    self.config.model.vertices.iter()
      .map(|&v| self.config.projection.project(spin.apply(v)))
      .collect()
  }

  /// `x0, y0, x1, y1, ...` of frame `t`.
  pub fn vertex_bytes(&self, t: usize) -> Vec<u8> {
    self.vertices(t).into_iter()
      .flat_map(|c| [c.x.clamp(0, 255) as u8, c.y.clamp(0, 255) as u8])
      .collect()
  }

  /// Size of the raster frames, from the projection window.
  pub fn window_size(&self) -> (u32, u32) {
    match self.config.projection.window {
      Some(window) => ((window.max.x - window.min.x + 1) as u32, (window.max.y - window.min.y + 1) as u32),
      None => (40, 25)
    }
  }

  /// The projection moved so that the window's top-left cell lands on `(0, 0)`.
  pub fn window_projection(&self) -> Projection {
    let projection = self.config.projection;
    match projection.window {
      Some(window) => {
        let origin = window.min.to_vector();
        Projection {
          offset: projection.offset - origin.to_f32(),
          window: Some(window.translate(-origin)),
          ..projection
        }
      }
      None => projection
    }
  }

  /// One `!byte` row of vertex pairs per frame.
  pub fn to_asm(&self) -> String {
    let vertices = self.config.model.vertices.len();
    (0..self.config.frames)
      .fold(
        AsmTable::new()
          .comment(format!("Cube rotation data - {} frames, {} bytes each", self.config.frames, vertices * 2))
          .comment(format!("Format: x0,y0, x1,y1, ..., x{n},y{n} for each frame", n = vertices.saturating_sub(1))),
        |table, t| table.frame(&self.vertex_bytes(t), vertices * 2)
      )
      .build()
  }
}

impl Animation for CubeSpin {
  fn frame_count(&self) -> usize { self.config.frames }

  /// The wireframe, rasterized into the projection window.
  fn frame(&self, t: usize) -> Frame {
    let (w, h) = self.window_size();
    let mut frame = Frame::new(w, h, CellKind::Pixel);
    let spin = self.config.tumble.sample(progress(t, self.config.frames));
    raster::draw_wireframe(&mut frame, &self.config.model, spin, &self.window_projection(), self.config.ink);
    frame
  }
}
