//! Deterministic per-frame parameters.
//!
//! Everything here is a closed-form function of the frame progress `p = t / total`, so any
//! frame can be generated independently of the others.

use {
  crate::{field::Source, geometry::Spin},
  std::f32::consts::{PI, TAU}
};

/// Animation progress of frame `t`, in `[0, 1)` for `t < total`.
pub fn progress(t: usize, total: usize) -> f32 {
  if total == 0 { 0.0 } else { t as f32 / total as f32 }
}

/// Sinusoid in whole cycles per animation loop.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Oscillator {
  pub frequency: f32,
  /// Radians.
  pub phase: f32
}

impl Oscillator {
  pub fn new(frequency: f32, phase: f32) -> Self {
    Self { frequency, phase }
  }

  /// `sin(p·frequency·2π + phase)`
  pub fn value(&self, p: f32) -> f32 {
    (p * self.frequency * TAU + self.phase).sin()
  }

  /// Raw angle accumulator, `p·2π·frequency`.
  pub fn angle(&self, p: f32) -> f32 {
    p * TAU * self.frequency
  }

  /// `value` remapped from `[-1, 1]` onto `[lo, hi]`.
  pub fn between(&self, p: f32, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * (0.5 + 0.5 * self.value(p))
  }
}

/// A light source wandering around a rest position while its radius breathes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitingSource {
  pub rest: (f32, f32),
  pub amplitude: (f32, f32),
  pub x: Oscillator,
  pub y: Oscillator,
  pub radius: Oscillator,
  pub min_radius: f32,
  pub max_radius: f32
}

impl OrbitingSource {
  /// Source `index` of a floodlight rig on a `width × height` grid: every source gets its
  /// own frequencies and phase offsets so the lights never move in lockstep.
  pub fn floodlight(index: usize, width: f32, height: f32) -> Self {
    let i = index as f32;
    Self {
      rest: (width / 2.0, height / 2.0),
      amplitude: (width / 3.0, height / 3.0),
      x: Oscillator::new(2.0 + i, i * PI * 0.66),
      y: Oscillator::new(1.0 + i, i * PI * 0.44),
      radius: Oscillator::new(3.0 + i, i * PI * 0.33),
      min_radius: 3.0,
      max_radius: 10.0
    }
  }

  /// A source that never moves.
  pub fn fixed(source: Source) -> Self {
    Self {
      rest: (source.center.x, source.center.y),
      amplitude: (0.0, 0.0),
      x: Oscillator::default(),
      y: Oscillator::default(),
      radius: Oscillator::default(),
      min_radius: source.radius,
      max_radius: source.radius
    }
  }

  pub fn sample(&self, p: f32) -> Source {
    Source::new(
      self.rest.0 + self.x.value(p) * self.amplitude.0,
      self.rest.1 + self.y.value(p) * self.amplitude.1,
      self.radius.between(p, self.min_radius, self.max_radius)
    )
  }
}

/// Per-axis rotation rates, in turns per animation loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tumble {
  pub x: Oscillator,
  pub y: Oscillator,
  pub z: Oscillator
}

impl Default for Tumble {
  fn default() -> Self {
    Self {
      x: Oscillator::new(0.7, 0.0),
      y: Oscillator::new(1.0, 0.0),
      z: Oscillator::new(0.5, 0.0)
    }
  }
}

impl Tumble {
  pub fn sample(&self, p: f32) -> Spin {
    Spin { x: self.x.angle(p), y: self.y.angle(p), z: self.z.angle(p) }
  }
}

/// Scroll tables for a sine-driven `$d016`/`$d018` effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTables {
  /// Fine scroll, `value mod 8`.
  pub fine: Vec<u8>,
  /// Screen/charset bank byte selected by `value / 8`.
  pub bank: Vec<u8>
}

/// Screen bank bytes for `$d018`, indexed by coarse position.
pub const BANK_BYTES: [u8; 14] = [32, 48, 64, 80, 96, 112, 128, 144, 160, 176, 192, 208, 224, 240];

/// `steps` values rising along `sin(i / 64)` then the same values falling back; values are
/// `round(sin·amplitude) + offset`, coarse positions are clamped into the bank table.
pub fn scroll_tables(steps: usize, amplitude: f32, offset: i32) -> ScrollTables {
  let value = |i: usize| ((i as f32 / 64.0).sin() * amplitude).round() as i32 + offset;
  let values = (0..steps).map(value)
    .chain((1..=steps).rev().map(value))
    .collect::<Vec<_>>();
  let coarse = |v: i32| ((v as f32 / 8.0).round().max(0.0) as usize).min(BANK_BYTES.len() - 1);
  ScrollTables {
    fine: values.iter().map(|&v| v.rem_euclid(8) as u8).collect(),
    bank: values.iter().map(|&v| BANK_BYTES[coarse(v)]).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn oscillator_closed_form() {
    let osc = Oscillator::new(2.0, PI / 2.0);
    assert!((osc.value(0.0) - 1.0).abs() < 1e-6);
    assert!((osc.value(0.25) + 1.0).abs() < 1e-5);
    assert!((osc.angle(0.5) - TAU).abs() < 1e-6);
    assert!((osc.between(0.0, 3.0, 10.0) - 10.0).abs() < 1e-5);
  }

  #[test] fn progress_loops() {
    assert_eq!(progress(0, 64), 0.0);
    assert_eq!(progress(32, 64), 0.5);
    assert_eq!(progress(3, 0), 0.0);
  }

  #[test] fn floodlights_loop_seamlessly() {
    (0..3).map(|i| OrbitingSource::floodlight(i, 32.0, 10.0))
      .for_each(|light| {
        let (a, b) = (light.sample(0.0), light.sample(1.0));
        assert!(a.center.distance_to(b.center) < 1e-4);
        assert!((a.radius - b.radius).abs() < 1e-4);
        (0..64).map(|t| light.sample(progress(t, 64)))
          .for_each(|s| assert!(s.radius >= 3.0 - 1e-5 && s.radius <= 10.0 + 1e-5));
      });
  }

  #[test] fn fixed_source() {
    let source = Source::new(1.0, 1.0, 0.6);
    let light = OrbitingSource::fixed(source);
    (0..5).for_each(|t| assert_eq!(light.sample(progress(t, 5)), source));
  }

  #[test] fn scroll_table_shape() {
    let tables = scroll_tables(128, 100.0, 1);
    assert_eq!(tables.fine.len(), 256);
    assert_eq!(tables.fine[0], 1);
    assert_eq!(tables.bank[0], 32);
    assert!(tables.fine.iter().all(|&v| v < 8));
    // the falling half runs 128 down to 1
    assert_eq!(tables.fine[255], tables.fine[1]);
    assert_eq!(tables.bank[129], tables.bank[127]);
  }
}
