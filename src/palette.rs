//! Palettes and the C64 hardware colour tables.
//!
//! A [`Palette`] is ordered dark to bright, so that walking its indices approximates a
//! perceptual gradient. Quantizers only ever see its length.

use {
  crate::error::{Error, Result},
  std::{ops::Index, sync::Arc}
};

/// 8-bit RGB triple
pub type Rgb8 = [u8; 3];

/// Index into the 16-entry VIC-II colour table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct C64Color(u8);

impl C64Color {
  pub const BLACK: Self = Self(0x00);
  pub const WHITE: Self = Self(0x01);

  pub fn new(index: u8) -> Result<Self> {
    if index < 16 {
      Ok(Self(index))
    } else {
      Err(Error::InvalidPalette(format!("hardware colour ${:02x} out of range", index)))
    }
  }

  pub fn index(self) -> u8 { self.0 }

  pub fn rgb(self, table: &HardwarePalette) -> Rgb8 {
    table.0[self.0 as usize]
  }
}

/// RGB values of the 16 hardware colours.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HardwarePalette(pub [Rgb8; 16]);

pub const COLODORE: HardwarePalette = HardwarePalette([
  [0x00, 0x00, 0x00], [0xff, 0xff, 0xff], [0x81, 0x33, 0x38], [0x75, 0xce, 0xc8],
  [0x8e, 0x3c, 0x97], [0x56, 0xac, 0x4d], [0x2e, 0x2c, 0x9b], [0xed, 0xf1, 0x71],
  [0x8e, 0x50, 0x29], [0x55, 0x38, 0x00], [0xc4, 0x6c, 0x71], [0x4a, 0x4a, 0x4a],
  [0x7b, 0x7b, 0x7b], [0xa9, 0xff, 0x9f], [0x70, 0x6d, 0xeb], [0xb2, 0xb2, 0xb2],
]);

pub const PEPTO: HardwarePalette = HardwarePalette([
  [0x00, 0x00, 0x00], [0xff, 0xff, 0xff], [0x88, 0x00, 0x00], [0xaa, 0xff, 0xee],
  [0xcc, 0x44, 0xcc], [0x00, 0xcc, 0x55], [0x00, 0x00, 0xaa], [0xee, 0xee, 0x77],
  [0xdd, 0x88, 0x55], [0x66, 0x44, 0x00], [0xff, 0x77, 0x77], [0x33, 0x33, 0x33],
  [0x77, 0x77, 0x77], [0xaa, 0xff, 0x66], [0x00, 0x88, 0xff], [0xbb, 0xbb, 0xbb],
]);

/// Black through warm shadows to a white hotspot.
pub const FLOODLIGHT_GRADIENT: [u8; 10] = [
  0x00, 0x0b, 0x0c, 0x02, 0x0f, 0x09, 0x08, 0x0a, 0x07, 0x01
];

/// Cycled by the escape-time colouring.
pub const MANDELBROT_GRADIENT: [u8; 9] = [
  0x00, 0x06, 0x0b, 0x04, 0x0e, 0x0a, 0x0f, 0x0d, 0x01
];

/// Frame cells are bytes, so no palette can be longer.
pub const MAX_ENTRIES: usize = 256;

/// Ordered, immutable list of entries. Cloning shares the storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<T> {
  entries: Arc<[T]>
}

impl<T> Palette<T> {
  /// Between one and [`MAX_ENTRIES`] entries.
  pub fn new(entries: Vec<T>) -> Result<Self> {
    if entries.is_empty() {
      return Err(Error::InvalidPalette("palette has no entries".into()));
    }
    if entries.len() > MAX_ENTRIES {
      return Err(Error::InvalidPalette(format!(
        "{} entries, frames address at most {}", entries.len(), MAX_ENTRIES
      )));
    }
    Ok(Self { entries: entries.into() })
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Highest valid index.
  pub fn max_index(&self) -> usize { self.entries.len() - 1 }

  pub fn get(&self, index: usize) -> Option<&T> { self.entries.get(index) }

  pub fn iter(&self) -> impl Iterator<Item = &T> { self.entries.iter() }
}

impl<T> Index<usize> for Palette<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T { &self.entries[index] }
}

impl Palette<C64Color> {
  /// Palette of hardware colour indices, validated.
  pub fn c64(indices: &[u8]) -> Result<Self> {
    Self::new(indices.iter()
      .map(|&i| C64Color::new(i))
      .collect::<Result<Vec<_>>>()?)
  }

  /// Expand to RGB with the given hardware table.
  pub fn to_rgb(&self, table: &HardwarePalette) -> Palette<Rgb8> {
    Palette { entries: self.iter().map(|c| c.rgb(table)).collect() }
  }

  /// Hardware colour index of every palette index.
  pub fn hardware_indices(&self) -> Vec<u8> {
    self.iter().map(|c| c.index()).collect()
  }
}

impl Palette<Rgb8> {
  /// The 16 hardware colours, in hardware order.
  pub fn hardware(table: &HardwarePalette) -> Self {
    Self { entries: table.0.to_vec().into() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn rejects_out_of_range_colour() {
    assert!(C64Color::new(15).is_ok());
    assert!(matches!(C64Color::new(16), Err(Error::InvalidPalette(_))));
    assert!(Palette::c64(&[0, 1, 0x1f]).is_err());
  }

  #[test] fn rejects_empty_palette() {
    assert!(Palette::<Rgb8>::new(vec![]).is_err());
  }

  #[test] fn palette_fits_in_a_byte() {
    assert!(Palette::new(vec![[0u8; 3]; MAX_ENTRIES]).is_ok());
    assert!(matches!(Palette::new(vec![[0u8; 3]; MAX_ENTRIES + 1]), Err(Error::InvalidPalette(_))));
  }

  #[test] fn gradient_to_rgb() -> Result<()> {
    let gradient = Palette::c64(&FLOODLIGHT_GRADIENT)?;
    assert_eq!(gradient.len(), 10);
    assert_eq!(gradient.max_index(), 9);
    let rgb = gradient.to_rgb(&PEPTO);
    assert_eq!(rgb[0], [0, 0, 0]);
    assert_eq!(rgb[9], [0xff, 0xff, 0xff]);
    assert_eq!(gradient.hardware_indices(), FLOODLIGHT_GRADIENT.to_vec());
    Ok(())
  }
}
