//! PNG previews of generated frames.

use {
  crate::{
    error::Result,
    frame::Frame,
    palette::{Palette, Rgb8}
  },
  image::RgbImage,
  std::path::{Path, PathBuf}
};

mod impl_draw_rgbimage;
#[cfg(test)] mod tests;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A frame seen through a palette, every cell blown up to `cell.kind` pixels times `scale`.
#[derive(Debug, Copy, Clone)]
pub struct Preview<'a> {
  pub frame: &'a Frame,
  pub palette: &'a Palette<Rgb8>,
  pub scale: u32
}

impl<'a> Preview<'a> {
  pub fn new(frame: &'a Frame, palette: &'a Palette<Rgb8>) -> Self {
    Self { frame, palette, scale: 1 }
  }

  pub fn scale(self, scale: u32) -> Self {
    Self { scale: scale.max(1), ..self }
  }

  /// Edge length of one cell in output pixels.
  pub fn cell_pixels(&self) -> u32 {
    self.frame.kind.pixels() * self.scale
  }

  pub fn dimensions(&self) -> (u32, u32) {
    let side = self.cell_pixels();
    (self.frame.width() * side, self.frame.height() * side)
  }

  pub fn render(&self) -> RgbImage {
    let (w, h) = self.dimensions();
    let mut image = RgbImage::new(w, h);
    self.draw(&mut image);
    image
  }
}

/// `frame_0000.png`, `frame_0001.png`, ...
pub fn frame_file_name(index: usize) -> String {
  format!("frame_{:04}.png", index)
}

/// Render and write every frame into `dir`, in parallel. Returns the written paths in frame
/// order.
pub fn save_frames(
  dir: impl AsRef<Path>,
  frames: &[Frame],
  palette: &Palette<Rgb8>,
  scale: u32
) -> Result<Vec<PathBuf>> {
  use rayon::prelude::*;

  let dir = dir.as_ref();
  std::fs::create_dir_all(dir)?;
  let paths = frames.par_iter().enumerate()
    .map(|(i, frame)| {
      let path = dir.join(frame_file_name(i));
      Preview::new(frame, palette).scale(scale).render().save(&path)?;
      Ok(path)
    })
    .collect::<Result<Vec<_>>>()?;
  log::info!("wrote {} preview frames to {}", paths.len(), dir.display());
  Ok(paths)
}
