use {
  super::BYTE_MARKER,
  crate::{
    error::{Error, Result},
    frame::{CellKind, Frame}
  }
};

/// One row of bytes per `!byte` line, in file order. Other lines are skipped; a trailing
/// `; comment` on a data line is ignored.
pub fn parse_bytes(text: &str) -> Result<Vec<Vec<u8>>> {
  data_lines(text)
    .map(|(line, data)| parse_row(line, data))
    .collect()
}

/// Group rows into `width × height` frames. When the text carries `; Frame N` comments, each
/// comment starts a new frame; otherwise every `height` rows form one.
pub fn parse_frames(text: &str, width: usize, height: usize, kind: CellKind) -> Result<Vec<Frame>> {
  let mut frames: Vec<Vec<Vec<u8>>> = vec![];
  let mut marked = false;
  for (line, raw) in text.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
    if is_frame_comment(raw) {
      marked = true;
      frames.push(vec![]);
      continue;
    }
    let data = match raw.strip_prefix(BYTE_MARKER) {
      Some(data) => data,
      None => continue
    };
    let row = parse_row(line, data)?;
    if row.len() != width {
      return Err(Error::RowWidth { line, expected: width, found: row.len() });
    }
    match frames.last_mut() {
      Some(frame) if marked || frame.len() < height => frame.push(row),
      _ => frames.push(vec![row])
    }
  }

  frames.into_iter().enumerate()
    .map(|(i, rows)| {
      if rows.len() != height {
        return Err(Error::RowCount { frame: i, expected: height, found: rows.len() });
      }
      Frame::from_rows(rows, kind)
    })
    .collect()
}

/// `; Frame <n>`, as written by the emitter.
fn is_frame_comment(line: &str) -> bool {
  line.strip_prefix(';')
    .and_then(|rest| rest.trim_start().strip_prefix("Frame"))
    .map_or(false, |n| n.starts_with(char::is_whitespace) && n.trim().parse::<usize>().is_ok())
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
  text.lines().enumerate()
    .filter_map(|(i, line)| line.trim()
      .strip_prefix(BYTE_MARKER)
      .map(|data| (i + 1, data)))
}

fn parse_row(line: usize, data: &str) -> Result<Vec<u8>> {
  let data = data.split(';').next().unwrap_or_default().trim();
  data.split(',')
    .map(|token| parse_token(line, token))
    .collect()
}

fn parse_token(line: usize, token: &str) -> Result<u8> {
  let token = token.trim();
  let malformed = || Error::MalformedToken { line, token: token.to_string() };
  let hex = token.strip_prefix('$').ok_or_else(malformed)?;
  if hex.is_empty() || hex.len() > 2 {
    return Err(malformed());
  }
  u8::from_str_radix(hex, 16).map_err(|_| malformed())
}
