use {
  anyhow::{Context, Result},
  clap::{Parser, Subcommand},
  std::{fs, path::{Path, PathBuf}},
  c64_gfx::{
    animation::{
      self, CubeConfig, CubeSpin, FloodlightConfig, Floodlights, MandelbrotZoom, RopeConfig, RopeSpin,
      ZoomAnimationConfig
    },
    drawing,
    emit::AsmTable,
    frame::{CellKind, Frame},
    geometry::Cell,
    palette::{Palette, PEPTO},
    quantize::ThresholdMatrix,
    raster,
    sampler,
    timing::{self, TimingConfig}
  }
};

#[derive(Parser)]
#[command(author, version, about = "Commodore 64 demo asset generator", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands
}

#[derive(Subcommand)]
enum Commands {
  /// Colour-RAM frames of moving floodlights
  Floodlights {
    #[arg(short, long, default_value = "floodlight_data.asm")]
    output: PathBuf,
    #[arg(long)]
    png: Option<PathBuf>,
    #[arg(short, long, default_value_t = 64)]
    frames: usize,
    /// Ordered dithering between gradient steps
    #[arg(short, long, default_value_t = false)]
    dither: bool,
    #[arg(long, default_value_t = false)]
    no_shadows: bool
  },
  /// Vertex table of a rotating cube
  Cube {
    #[arg(short, long, default_value = "cube_data.asm")]
    output: PathBuf,
    #[arg(long)]
    png: Option<PathBuf>,
    #[arg(short, long, default_value_t = 64)]
    frames: usize
  },
  /// Vertex table of a rope wrapped around a cylinder
  Cylinder {
    #[arg(short, long, default_value = "cylinder_data.asm")]
    output: PathBuf,
    #[arg(long)]
    png: Option<PathBuf>,
    #[arg(short, long, default_value_t = 64)]
    frames: usize
  },
  /// Mandelbrot zoom preview frames
  Mandelbrot {
    #[arg(long, default_value = "mandelbrot_frames")]
    png: PathBuf,
    #[arg(short, long, default_value_t = 100)]
    frames: usize,
    /// Preview pixel scale
    #[arg(short, long, default_value_t = 2)]
    scale: u32
  },
  /// Cycle-counted split-screen raster code
  RasterTiming {
    #[arg(short, long, default_value = "raster_timing.asm")]
    output: PathBuf,
    #[arg(long, default_value_t = 9)]
    char_lines: usize
  },
  /// Fine-scroll and bank tables following a sine curve
  Sine {
    #[arg(short, long, default_value = "sine_tables.asm")]
    output: PathBuf,
    #[arg(long, default_value_t = 128)]
    steps: usize,
    #[arg(long, default_value_t = 100.0)]
    amplitude: f32,
    #[arg(long, default_value_t = 1)]
    offset: i32
  },
  /// Bresenham line fan, written as a single PNG frame
  Lines {
    #[arg(long, default_value = "lines")]
    png: PathBuf,
    #[arg(long, default_value_t = 32)]
    spokes: usize
  }
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  match Cli::parse().command {
    Commands::Floodlights { output, png, frames, dither, no_shadows } => {
      let floodlights = Floodlights::new(FloodlightConfig {
        frames,
        dither: dither.then(ThresholdMatrix::bayer8),
        shadows: !no_shadows,
        ..FloodlightConfig::new()?
      });
      let data = animation::generate(&floodlights);
      write_text(&output, &floodlights.to_asm(&data))?;
      if let Some(dir) = png {
        let palette = floodlights.config.gradient.to_rgb(&PEPTO);
        drawing::save_frames(&dir, &data, &palette, 2)?;
      }
    }
    Commands::Cube { output, png, frames } => {
      let cube = CubeSpin::new(CubeConfig { frames, ..Default::default() });
      write_text(&output, &cube.to_asm())?;
      if let Some(dir) = png {
        drawing::save_frames(&dir, &animation::generate(&cube), &Palette::hardware(&PEPTO), 8)?;
      }
    }
    Commands::Cylinder { output, png, frames } => {
      let rope = RopeSpin::new(RopeConfig { frames, ..Default::default() });
      write_text(&output, &rope.to_asm())?;
      if let Some(dir) = png {
        drawing::save_frames(&dir, &animation::generate(&rope), &Palette::hardware(&PEPTO), 2)?;
      }
    }
    Commands::Mandelbrot { png, frames, scale } => {
      let zoom = MandelbrotZoom::new(ZoomAnimationConfig::new(frames)?);
      let data = animation::generate(&zoom);
      let palette = zoom.config.gradient.to_rgb(&PEPTO);
      drawing::save_frames(&png, &data, &palette, scale)?;
    }
    Commands::RasterTiming { output, char_lines } => {
      let config = TimingConfig { char_lines, ..TimingConfig::split_screen()? };
      let listing = timing::generate(&config);
      log::info!("{} raster lines", listing.lines.len());
      write_text(&output, &listing.source)?;
    }
    Commands::Sine { output, steps, amplitude, offset } => {
      let tables = sampler::scroll_tables(steps, amplitude, offset);
      let fine = AsmTable::new()
        .comment(format!("Fine scroll, {} entries", tables.fine.len()))
        .label("scroll_fine")
        .frame(&tables.fine, 16)
        .build();
      let bank = AsmTable::new()
        .comment(format!("Screen bank, {} entries", tables.bank.len()))
        .label("scroll_bank")
        .frame(&tables.bank, 16)
        .build();
      write_text(&output, &format!("{}\n{}", fine, bank))?;
    }
    Commands::Lines { png, spokes } => {
      let frame = line_fan(spokes);
      drawing::save_frames(&png, &[frame], &Palette::hardware(&PEPTO), 2)?;
    }
  }
  Ok(())
}

/// `spokes` lines from the centre of a hires screen, some of them leaving it.
fn line_fan(spokes: usize) -> Frame {
  use std::f32::consts::TAU;

  let mut frame = Frame::new(320, 200, CellKind::Pixel);
  let center = Cell::new(160, 100);
  (0..spokes).for_each(|i| {
    let angle = i as f32 / spokes as f32 * TAU;
    let end = Cell::new(
      160 + (angle.cos() * 200.0) as i32,
      100 + (angle.sin() * 120.0) as i32
    );
    // skip black
    raster::draw_line(&mut frame, center, end, (i % 15 + 1) as u8);
  });
  frame
}

fn write_text(path: &Path, text: &str) -> Result<()> {
  fs::write(path, text)
    .with_context(|| format!("writing {}", path.display()))?;
  log::info!("wrote {} ({} bytes)", path.display(), text.len());
  Ok(())
}
