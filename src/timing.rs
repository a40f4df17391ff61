//! Cycle-counted raster-line code: labelled register writes padded with `nop`s so that every
//! raster line takes the same time.

use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode { Lda, Ldx, Ldy, Sta, Stx, Sty, Nop }

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressMode { Implied, Immediate, ZeroPage, Absolute }

impl Opcode {
  pub fn mnemonic(self) -> &'static str {
    match self {
      Opcode::Lda => "lda", Opcode::Ldx => "ldx", Opcode::Ldy => "ldy",
      Opcode::Sta => "sta", Opcode::Stx => "stx", Opcode::Sty => "sty",
      Opcode::Nop => "nop"
    }
  }

  /// 6510 cycle cost, `None` for combinations the CPU does not have.
  pub fn cycles(self, mode: AddressMode) -> Option<u32> {
    use {AddressMode::*, Opcode::*};
    match (self, mode) {
      (Lda | Ldx | Ldy, Immediate) => Some(2),
      (Lda | Ldx | Ldy | Sta | Stx | Sty, ZeroPage) => Some(3),
      (Lda | Ldx | Ldy | Sta | Stx | Sty, Absolute) => Some(4),
      (Nop, Implied) => Some(2),
      _ => None
    }
  }
}

impl AddressMode {
  fn name(self) -> &'static str {
    match self {
      AddressMode::Implied => "implied",
      AddressMode::Immediate => "immediate",
      AddressMode::ZeroPage => "zero page",
      AddressMode::Absolute => "absolute"
    }
  }
}

/// An opcode with a valid addressing mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Instruction {
  pub opcode: Opcode,
  pub mode: AddressMode,
  cycles: u32
}

impl Instruction {
  pub fn new(opcode: Opcode, mode: AddressMode) -> Result<Self> {
    opcode.cycles(mode)
      .map(|cycles| Self { opcode, mode, cycles })
      .ok_or(Error::InvalidOpcode { opcode: opcode.mnemonic(), mode: mode.name() })
  }

  pub fn cycles(&self) -> u32 { self.cycles }
}

/// Load a value, store it into a register; the load is labelled for self-modifying code.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterWrite {
  pub label: String,
  pub load: Instruction,
  /// Operand text, e.g. `#$0b`.
  pub value: String,
  pub store: Instruction,
  pub address: u16
}

impl RegisterWrite {
  pub fn new(label: &str, value: &str, address: u16) -> Result<Self> {
    Ok(Self {
      label: label.to_string(),
      load: Instruction::new(Opcode::Lda, AddressMode::Immediate)?,
      value: value.to_string(),
      store: Instruction::new(Opcode::Sta, AddressMode::Absolute)?,
      address
    })
  }

  pub fn cycles(&self) -> u32 {
    self.load.cycles() + self.store.cycles()
  }
}

/// Next free number of every register label, threaded through generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounters(Vec<usize>);

impl LabelCounters {
  pub fn new(registers: usize) -> Self { Self(vec![0; registers]) }

  /// Current number for register `i`, then advance it.
  pub fn take(&mut self, i: usize) -> usize {
    let n = self.0[i];
    self.0[i] += 1;
    n
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
  /// Character rows; each row spans eight raster lines.
  pub char_lines: usize,
  /// 1-based raster line within a row that is a bad line, 0 for none.
  pub bad_line: usize,
  pub cycles_line: u32,
  pub cycles_bad_line: u32,
  pub registers: Vec<RegisterWrite>
}

impl TimingConfig {
  pub fn new(registers: Vec<RegisterWrite>) -> Self {
    Self {
      char_lines: 9,
      bad_line: 1,
      cycles_line: 63,
      cycles_bad_line: 20,
      registers
    }
  }

  /// Charset offset, fine scroll and background colour per raster line.
  pub fn split_screen() -> Result<Self> {
    Ok(Self::new(vec![
      RegisterWrite::new("charset_map_offset", "#%00100000", 0xd018)?,
      RegisterWrite::new("scroll_offset", "#0", 0xd016)?,
      RegisterWrite::new("background_color", "#$0b", 0xd021)?
    ]))
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineTiming {
  pub register_cycles: u32,
  pub nops: u32
}

impl LineTiming {
  pub fn total(&self) -> u32 {
    self.register_cycles + self.nops * 2
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingListing {
  pub source: String,
  pub lines: Vec<LineTiming>
}

/// `nop`s that fill `budget` after `used` cycles; the bad line gets two extra.
pub fn nop_padding(used: u32, budget: u32, bad_line: bool) -> u32 {
  let nops = budget.saturating_sub(used) / 2;
  if bad_line { nops + 2 } else { nops }
}

pub fn generate(config: &TimingConfig) -> TimingListing {
  let mut counters = LabelCounters::new(config.registers.len());
  let mut source = String::new();
  let mut lines = vec![];
  for _ in 0..config.char_lines {
    for raster_line in 0..8 {
      let timing = raster_line_code(config, raster_line, &mut counters, &mut source);
      log::debug!("raster line {}: {} cycles, {} nops", lines.len(), timing.total(), timing.nops);
      lines.push(timing);
    }
  }
  TimingListing { source, lines }
}

fn raster_line_code(
  config: &TimingConfig,
  raster_line: usize,
  counters: &mut LabelCounters,
  out: &mut String
) -> LineTiming {
  let register_cycles = config.registers.iter().enumerate()
    .map(|(i, reg)| {
      *out += &format!(
        "{}{}\n  {} {}\n  {} ${:04x}\n",
        reg.label, counters.take(i),
        reg.load.opcode.mnemonic(), reg.value,
        reg.store.opcode.mnemonic(), reg.address
      );
      reg.cycles()
    })
    .sum();
  let bad = config.bad_line > 0 && raster_line + 1 == config.bad_line;
  let budget = if bad { config.cycles_bad_line } else { config.cycles_line };
  let nops = nop_padding(register_cycles, budget, bad);
  (0..nops).for_each(|_| out.push_str("  nop\n"));
  LineTiming { register_cycles, nops }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn invalid_modes_fail_at_construction() {
    assert!(Instruction::new(Opcode::Sta, AddressMode::Immediate).is_err());
    assert!(Instruction::new(Opcode::Nop, AddressMode::Absolute).is_err());
    assert_eq!(Instruction::new(Opcode::Lda, AddressMode::Immediate).map(|i| i.cycles()).ok(), Some(2));
    assert_eq!(Instruction::new(Opcode::Sta, AddressMode::Absolute).map(|i| i.cycles()).ok(), Some(4));
  }

  #[test] fn split_screen_listing() -> Result<()> {
    let config = TimingConfig::split_screen()?;
    let listing = generate(&config);
    assert_eq!(listing.lines.len(), 72);
    assert_eq!(listing.lines[0], LineTiming { register_cycles: 18, nops: 3 });
    assert_eq!(listing.lines[1], LineTiming { register_cycles: 18, nops: 22 });
    assert!(listing.lines.iter().enumerate()
      .all(|(i, l)| l.total() == if i % 8 == 0 { 24 } else { 62 }));
    assert!(listing.source.starts_with(
      "charset_map_offset0\n  lda #%00100000\n  sta $d018\nscroll_offset0\n"
    ));
    assert!(listing.source.contains("background_color71\n  lda #$0b\n  sta $d021\n"));
    assert_eq!(listing.source.matches("  nop\n").count(), 9 * (3 + 7 * 22));
    Ok(())
  }

  #[test] fn counters_are_per_register() {
    let mut counters = LabelCounters::new(2);
    assert_eq!((counters.take(0), counters.take(0), counters.take(1)), (0, 1, 0));
  }
}
