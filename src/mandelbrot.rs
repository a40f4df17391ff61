//! Escape-time Mandelbrot sampling for the endless zoom.

use {
  crate::{
    frame::{CellKind, Frame},
    palette::MAX_ENTRIES
  },
  euclid::Point2D
};

/// Complex plane
#[derive(Debug, Copy, Clone)]
pub struct PlaneSpace;

/// Iterations before `|z|` exceeds 2, or `max_iter` for points inside the set.
pub fn escape_time(c: Point2D<f64, PlaneSpace>, max_iter: u32) -> u32 {
  let (mut re, mut im) = (0.0f64, 0.0f64);
  for i in 0..max_iter {
    if re * re + im * im > 4.0 {
      return i;
    }
    let next_re = re * re - im * im + c.x;
    im = 2.0 * re * im + c.y;
    re = next_re;
  }
  max_iter
}

/// Cycling band colouring: index 0 inside the set, otherwise a position in `0..levels`.
/// `levels` is capped at [`MAX_ENTRIES`].
pub fn band(iterations: u32, max_iter: u32, levels: usize) -> u8 {
  if iterations >= max_iter || levels == 0 {
    return 0;
  }
  let levels = levels.min(MAX_ENTRIES);
  let smooth = iterations as f64 + 1.0 - std::f64::consts::LN_2.ln() / std::f64::consts::LN_2;
  ((smooth * 2.0) as usize % levels) as u8
}

/// Zooming view onto the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomConfig {
  pub center: Point2D<f64, PlaneSpace>,
  /// Height of the initial view on the plane.
  pub initial_scale: f64,
  /// Magnification per frame.
  pub zoom_factor: f64,
  pub max_iter: u32
}

impl Default for ZoomConfig {
  fn default() -> Self {
    Self {
      // seahorse valley
      center: Point2D::new(-0.743643887037151, 0.131825904205330),
      initial_scale: 3.0,
      zoom_factor: 1.02,
      max_iter: 256
    }
  }
}

impl ZoomConfig {
  pub fn scale(&self, frame: usize) -> f64 {
    self.initial_scale / self.zoom_factor.powi(frame as i32)
  }

  /// Plane coordinate of pixel `(px, py)` on a `width × height` frame.
  pub fn to_plane(&self, frame: usize, px: u32, py: u32, width: u32, height: u32) -> Point2D<f64, PlaneSpace> {
    let (w, h) = (width as f64, height as f64);
    let scale = self.scale(frame);
    let x_ratio = (px as f64 - w / 2.0) / (w / 2.0);
    let y_ratio = (py as f64 - h / 2.0) / (h / 2.0);
    Point2D::new(
      self.center.x + x_ratio * scale * (w / h),
      self.center.y + y_ratio * scale
    )
  }

  /// Band index per pixel, for a palette of `levels` entries.
  pub fn render(&self, frame: usize, width: u32, height: u32, levels: usize) -> Frame {
    Frame::from_fn(width, height, CellKind::Pixel, |x, y| {
      let c = self.to_plane(frame, x, y, width, height);
      band(escape_time(c, self.max_iter), self.max_iter, levels)
    })
  }
}
