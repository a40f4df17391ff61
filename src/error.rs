//! .
//!
//! Every fallible operation in this crate returns [`Result`]. Conditions which the generators
//! tolerate by design (off-canvas plots, degenerate projections) are not errors and never
//! surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  /// A `!byte` token that is not a `$`-prefixed hexadecimal byte.
  #[error("line {line}: malformed byte token `{token}`")]
  MalformedToken { line: usize, token: String },
  /// A table has a different number of rows than its frame geometry requires.
  #[error("frame {frame}: expected {expected} rows, found {found}")]
  RowCount { frame: usize, expected: usize, found: usize },
  #[error("line {line}: expected {expected} bytes per row, found {found}")]
  RowWidth { line: usize, expected: usize, found: usize },
  #[error("invalid palette: {0}")]
  InvalidPalette(String),
  #[error("invalid threshold matrix: {0}")]
  InvalidMatrix(String),
  #[error("`{opcode}` has no {mode} addressing mode")]
  InvalidOpcode { opcode: &'static str, mode: &'static str },
  #[error("frame geometry mismatch: {0}")]
  Geometry(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
