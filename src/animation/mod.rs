//! Complete generators, each a pure function from frame index to [`Frame`].

use {
  crate::frame::Frame,
  rayon::prelude::*
};

pub mod floodlights;
pub mod cube;
pub mod zoom;
pub mod rope;

pub use {
  floodlights::{Floodlights, FloodlightConfig},
  cube::{CubeSpin, CubeConfig},
  zoom::{MandelbrotZoom, ZoomAnimationConfig},
  rope::{RopeSpin, RopeConfig}
};

pub trait Animation: Sync {
  fn frame_count(&self) -> usize;
  fn frame(&self, t: usize) -> Frame;
}

/// All frames, generated in parallel and returned in index order.
pub fn generate<A: Animation + ?Sized>(animation: &A) -> Vec<Frame> {
  let count = animation.frame_count();
  log::info!("generating {} frames", count);
  (0..count).into_par_iter()
    .map(|t| {
      log::debug!("frame {}/{}", t, count);
      animation.frame(t)
    })
    .collect()
}

/// Human readable size of `frames` as raw table data.
pub fn table_size(frames: &[Frame]) -> String {
  use humansize::{FileSize, file_size_opts as options};

  let bytes: usize = frames.iter().map(|f| f.cells().len()).sum();
  bytes.file_size(options::BINARY)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
