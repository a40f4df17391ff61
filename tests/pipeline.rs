use c64_gfx::{
  animation::{self, Animation, FloodlightConfig, Floodlights},
  emit,
  error::{Error, Result},
  field::Source,
  frame::{CellKind, Frame},
  geometry::Cell,
  quantize::{Quantizer, ThresholdMatrix},
  sampler::OrbitingSource,
  timing::{self, TimingConfig}
};

/// 2×2 screen, 3 frames, one static light at (1, 1).
#[test] fn static_light_table() -> Result<()> {
  let floodlights = Floodlights::new(FloodlightConfig {
    width: 2,
    height: 2,
    frames: 3,
    lights: vec![OrbitingSource::fixed(Source::new(1.0, 1.0, 0.6))],
    ..FloodlightConfig::new()?
  });
  let frames = animation::generate(&floodlights);
  let bare = emit::emit(&frames, 2);
  assert_eq!(bare.matches("; Frame ").count(), 3);
  assert_eq!(bare.lines().filter(|l| l.starts_with("!byte")).count(), 6);

  let parsed = emit::parse_frames(&bare, 2, 2, CellKind::Char)?;
  assert_eq!(parsed, frames);
  let max = floodlights.config.gradient.max_index() as u8;
  parsed.iter().for_each(|f| {
    assert_eq!(f.get(Cell::new(0, 0)), Some(0));
    assert_eq!(f.get(Cell::new(1, 1)), Some(max));
  });
  Ok(())
}

#[test] fn dithered_gradient_is_monotone_on_average() {
  let q = Quantizer::dithered(10, ThresholdMatrix::bayer8());
  let mean = |i: f32| {
    let frame = Frame::from_fn(8, 8, CellKind::Pixel, |x, y| q.apply(i, x, y));
    frame.cells().iter().map(|&c| c as f32).sum::<f32>() / 64.0
  };
  let means = (0..=20).map(|s| mean(s as f32 / 20.0)).collect::<Vec<_>>();
  assert!(means.windows(2).all(|w| w[0] <= w[1] + 1e-6));
  assert_eq!(means[0], 0.0);
  assert_eq!(means[20], 9.0);
}

#[test] fn rejects_short_table() {
  let text = "; Frame 0\n!byte $00,$01\n";
  match emit::parse_frames(text, 2, 2, CellKind::Char) {
    Err(Error::RowCount { expected: 2, found: 1, .. }) => (),
    other => panic!("unexpected {:?}", other)
  }
}

#[test] fn raster_code_is_cycle_exact() -> Result<()> {
  let config = TimingConfig::split_screen()?;
  let listing = timing::generate(&config);
  assert_eq!(listing.lines.len(), config.char_lines * 8);
  assert!(listing.source.starts_with("charset_map_offset0\n  lda #%00100000\n  sta $d018\n"));
  assert!(listing.source.contains("background_color71\n"));
  Ok(())
}

#[test] fn frames_match_single_frame_generation() -> Result<()> {
  let floodlights = Floodlights::new(FloodlightConfig { frames: 6, ..FloodlightConfig::new()? });
  let frames = animation::generate(&floodlights);
  frames.iter().enumerate()
    .for_each(|(t, frame)| assert_eq!(frame, &floodlights.frame(t)));
  Ok(())
}
