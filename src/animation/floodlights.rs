//! Moving, breathing floodlights on a character screen, as colour-RAM frames.

use {
  super::{Animation, table_size},
  crate::{
    emit::AsmTable,
    error::Result,
    field,
    frame::{CellKind, Frame},
    palette::{C64Color, Palette, FLOODLIGHT_GRADIENT},
    quantize::{Quantizer, ThresholdMatrix},
    sampler::{progress, OrbitingSource}
  },
  euclid::Point2D
};

#[derive(Debug, Clone)]
pub struct FloodlightConfig {
  /// Screen size in characters.
  pub width: u32,
  pub height: u32,
  pub frames: usize,
  pub lights: Vec<OrbitingSource>,
  /// Dark to bright.
  pub gradient: Palette<C64Color>,
  /// Ordered dithering between gradient steps.
  pub dither: Option<ThresholdMatrix>,
  pub shadows: bool
}

impl FloodlightConfig {
  /// Three lights over a 32×10 character window, 64 frames.
  pub fn new() -> Result<Self> {
    let (width, height) = (32, 10);
    Ok(Self {
      width,
      height,
      frames: 64,
      lights: (0..3)
        .map(|i| OrbitingSource::floodlight(i, width as f32, height as f32))
        .collect(),
      gradient: Palette::c64(&FLOODLIGHT_GRADIENT)?,
      dither: None,
      shadows: true
    })
  }
}

#[derive(Debug, Clone)]
pub struct Floodlights {
  pub config: FloodlightConfig,
  quantizer: Quantizer
}

impl Floodlights {
  pub fn new(config: FloodlightConfig) -> Self {
    let levels = config.gradient.len();
    let quantizer = match &config.dither {
      Some(matrix) => Quantizer::dithered(levels, matrix.clone()),
      None => Quantizer::new(levels)
    };
    Self { config, quantizer }
  }

  /// Intensity in `[0, 1]` of character `(x, y)` under `sources`.
  pub fn intensity(&self, x: u32, y: u32, sources: &[field::Source]) -> f32 {
    let cell = Point2D::new(x as f32, y as f32);
    if self.config.shadows {
      field::shaded_intensity(cell, sources)
    } else {
      field::field_intensity(cell, sources)
    }
  }

  /// Gradient positions to hardware colours, ready for colour RAM.
  pub fn color_ram(&self, frames: &[Frame]) -> Vec<Frame> {
    let map = self.config.gradient.hardware_indices();
    frames.iter().map(|f| f.map_indices(&map)).collect()
  }

  /// Include file with the colour RAM of every frame, one `!byte` row per screen row.
  pub fn to_asm(&self, frames: &[Frame]) -> String {
    let FloodlightConfig { width, height, lights, .. } = &self.config;
    let size = (width * height) as i64;
    AsmTable::new()
      .comment("Floodlight animation data")
      .comment(format!("{} moving and zooming lights with shadows", lights.len()))
      .comment(format!("{} frames, {}x{} characters ({} bytes per frame, {} total)",
        frames.len(), width, height, size, table_size(frames)))
      .constant("FRAME_COUNT", frames.len() as i64)
      .constant("FRAME_SIZE", size)
      .constant("SCREEN_WIDTH", *width as i64)
      .constant("SCREEN_HEIGHT", *height as i64)
      .label("animation_data")
      .frames(&self.color_ram(frames))
      .build()
  }
}

impl Animation for Floodlights {
  fn frame_count(&self) -> usize { self.config.frames }

  fn frame(&self, t: usize) -> Frame {
    let p = progress(t, self.config.frames);
    let sources = self.config.lights.iter()
      .map(|light| light.sample(p))
      .collect::<Vec<_>>();
    Frame::from_fn(self.config.width, self.config.height, CellKind::Char, |x, y|
      self.quantizer.apply(self.intensity(x, y, &sources), x, y)
    )
  }
}
