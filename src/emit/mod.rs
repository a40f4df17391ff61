//! Assembler include files: `!byte $hh,...` tables with frame comments.
//!
//! Output is ACME-flavoured text:
//! ```text
//! ; Floodlight animation
//!
//! FRAME_COUNT = 2
//!
//! animation_data:
//! ; Frame 0
//! !byte $00,$01
//! !byte $0f,$0e
//!
//! ; Frame 1
//! ...
//! ```

use {
  crate::frame::Frame,
  itertools::Itertools
};

pub mod parse;
pub use parse::{parse_bytes, parse_frames};

/// Row marker token.
pub const BYTE_MARKER: &str = "!byte";

/// `!byte $hh,$hh,...` for one row; lowercase, no trailing comma.
pub fn byte_row(bytes: &[u8]) -> String {
  format!("{} {}", BYTE_MARKER, bytes.iter().map(|b| format!("${:02x}", b)).join(","))
}

/// Builder for a whole include file.
#[derive(Debug, Clone, Default)]
pub struct AsmTable {
  header: Vec<String>,
  constants: Vec<(String, i64)>,
  label: Option<String>,
  row_comments: bool,
  body: String,
  frames: usize
}

impl AsmTable {
  pub fn new() -> Self { Self::default() }

  /// `;`-prefixed line at the top of the file.
  pub fn comment(mut self, text: impl Into<String>) -> Self {
    self.header.push(text.into());
    self
  }

  /// `NAME = value` declaration, written after the header comments.
  pub fn constant(mut self, name: impl Into<String>, value: i64) -> Self {
    self.constants.push((name.into(), value));
    self
  }

  /// Label in front of the first data row.
  pub fn label(mut self, label: impl Into<String>) -> Self {
    self.label = Some(label.into());
    self
  }

  /// Annotate every row with `; row N`.
  pub fn row_comments(mut self, enabled: bool) -> Self {
    self.row_comments = enabled;
    self
  }

  /// Append one frame, `row_width` bytes per `!byte` row.
  pub fn frame(mut self, cells: &[u8], row_width: usize) -> Self {
    if self.frames > 0 {
      self.body.push('\n');
    }
    self.body += &format!("; Frame {}\n", self.frames);
    cells.chunks(row_width.max(1)).enumerate().for_each(|(row, bytes)| {
      if self.row_comments {
        self.body += &format!("; row {}\n", row);
      }
      self.body.push_str(&byte_row(bytes));
      self.body.push('\n');
    });
    self.frames += 1;
    self
  }

  pub fn frames<'a>(self, frames: impl IntoIterator<Item = &'a Frame>) -> Self {
    frames.into_iter()
      .fold(self, |table, frame| table.frame(frame.cells(), frame.width() as usize))
  }

  /// Number of frames appended so far.
  pub fn frame_count(&self) -> usize { self.frames }

  pub fn build(self) -> String {
    let mut out = String::new();
    self.header.iter().for_each(|line| out += &format!("; {}\n", line));
    if !self.header.is_empty() {
      out.push('\n');
    }
    self.constants.iter().for_each(|(name, value)| out += &format!("{} = {}\n", name, value));
    if !self.constants.is_empty() {
      out.push('\n');
    }
    if let Some(label) = &self.label {
      out += &format!("{}:\n", label);
    }
    out.push_str(&self.body);
    out
  }
}

/// Frames as a bare table: a frame comment followed by rows of `row_width` bytes.
pub fn emit(frames: &[Frame], row_width: usize) -> String {
  frames.iter()
    .fold(AsmTable::new(), |table, frame| table.frame(frame.cells(), row_width))
    .build()
}
