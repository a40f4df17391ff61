//! Rope wrapped around a spinning cylinder: a static vertex table plus polyline frames.

use {
  super::Animation,
  crate::{
    emit::AsmTable,
    frame::{CellKind, Frame},
    geometry::{Cell, Projection, RopeCylinder},
    raster,
    sampler::{progress, Oscillator, Tumble}
  },
  euclid::{Box2D, Vector2D}
};

#[derive(Debug, Clone, PartialEq)]
pub struct RopeConfig {
  pub frames: usize,
  pub rope: RopeCylinder,
  pub tumble: Tumble,
  pub projection: Projection,
  pub ink: u8
}

impl Default for RopeConfig {
  fn default() -> Self {
    Self {
      frames: 64,
      rope: RopeCylinder::default(),
      // one turn around the cylinder axis per loop
      tumble: Tumble {
        x: Oscillator::new(0.0, 0.0),
        y: Oscillator::new(1.0, 0.0),
        z: Oscillator::new(0.0, 0.0)
      },
      projection: Projection {
        distance: 60.0,
        scale: 2.5,
        offset: Vector2D::new(60.0, 50.0),
        window: Some(Box2D::new(Cell::new(0, 0), Cell::new(119, 99)))
      },
      ink: 1
    }
  }
}

#[derive(Debug, Clone)]
pub struct RopeSpin {
  pub config: RopeConfig
}

impl RopeSpin {
  pub fn new(config: RopeConfig) -> Self {
    Self { config }
  }

  /// `x, y, z` of every vertex as two's complement bytes, four vertices per row.
  pub fn to_asm(&self) -> String {
    let vertices = self.config.rope.vertices();
    let bytes = vertices.iter()
      .flat_map(|v| [v.x as i8 as u8, v.y as i8 as u8, v.z as i8 as u8])
      .collect::<Vec<_>>();
    AsmTable::new()
      .comment(format!("Rope around a cylinder, radius ~{}, height {}", self.config.rope.radius, self.config.rope.height))
      .comment("Format: x, y, z signed bytes per vertex")
      .constant("NUM_VERTICES", vertices.len() as i64)
      .label("rope_vertices")
      .frame(&bytes, 12)
      .build()
  }

  fn frame_size(&self) -> (u32, u32) {
    match self.config.projection.window {
      Some(window) => ((window.max.x + 1).max(0) as u32, (window.max.y + 1).max(0) as u32),
      None => (320, 200)
    }
  }
}

impl Animation for RopeSpin {
  fn frame_count(&self) -> usize { self.config.frames }

  fn frame(&self, t: usize) -> Frame {
    let (w, h) = self.frame_size();
    let mut frame = Frame::new(w, h, CellKind::Pixel);
    let spin = self.config.tumble.sample(progress(t, self.config.frames));
    let points = self.config.rope.model().vertices.into_iter()
      .map(|v| self.config.projection.project(spin.apply(v)))
      .collect::<Vec<_>>();
    raster::draw_polyline(&mut frame, &points, false, self.config.ink);
    frame
  }
}
