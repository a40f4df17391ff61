use {
  super::Animation,
  crate::{
    error::Result,
    frame::Frame,
    mandelbrot::ZoomConfig,
    palette::{C64Color, Palette, MANDELBROT_GRADIENT}
  }
};

#[derive(Debug, Clone)]
pub struct ZoomAnimationConfig {
  pub width: u32,
  pub height: u32,
  pub frames: usize,
  pub zoom: ZoomConfig,
  pub gradient: Palette<C64Color>
}

impl ZoomAnimationConfig {
  /// Full-screen 320×200 zoom.
  pub fn new(frames: usize) -> Result<Self> {
    Ok(Self {
      width: 320,
      height: 200,
      frames,
      zoom: ZoomConfig::default(),
      gradient: Palette::c64(&MANDELBROT_GRADIENT)?
    })
  }
}

/// Endless zoom into the Mandelbrot set; frames hold gradient positions.
#[derive(Debug, Clone)]
pub struct MandelbrotZoom {
  pub config: ZoomAnimationConfig
}

impl MandelbrotZoom {
  pub fn new(config: ZoomAnimationConfig) -> Self {
    Self { config }
  }
}

impl Animation for MandelbrotZoom {
  fn frame_count(&self) -> usize { self.config.frames }

  fn frame(&self, t: usize) -> Frame {
    let ZoomAnimationConfig { width, height, zoom, gradient, .. } = &self.config;
    zoom.render(t, *width, *height, gradient.len())
  }
}
