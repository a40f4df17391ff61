//! Offline asset generators for Commodore 64 demo productions.
//!
//! Every generator is a pure function from a frame index to a [`Frame`](frame::Frame) of
//! palette indices. The building blocks are:
//! - [`sampler`]: closed-form oscillators and 3-D rotation parameters per frame;
//! - [`field`]: soft radial light sources summed into an intensity;
//! - [`quantize`]: intensity to palette index, with optional Bayer dithering;
//! - [`raster`]: integer Bresenham lines;
//! - [`emit`]: `!byte` tables for assembler includes, and their parser.
//!
//! [`animation`] combines them into complete generators, [`drawing`] renders PNG previews
//! (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use c64_gfx::{
//! #   animation::{self, Floodlights, FloodlightConfig},
//! #   error::Result
//! # };
//! # fn main() -> Result<()> {
//! let floodlights = Floodlights::new(FloodlightConfig {
//!   frames: 4,
//!   ..FloodlightConfig::new()?
//! });
//! // frames are generated in parallel, but returned in order
//! let frames = animation::generate(&floodlights);
//! let include = floodlights.to_asm(&frames);
//! assert!(include.contains("; Frame 3\n!byte $"));
//! # Ok(())
//! # }
//! ```
//!
//! Lines are drawn straight into a frame; whatever falls outside is dropped:
//! ```
//! # use c64_gfx::{frame::{Frame, CellKind}, geometry::Cell, raster};
//! let mut frame = Frame::new(320, 200, CellKind::Pixel);
//! let visible = raster::draw_line(&mut frame, Cell::new(-10, 100), Cell::new(330, 100), 1);
//! assert_eq!(visible, 320);
//! ```

pub mod error;
pub mod geometry;
pub mod palette;
pub mod frame;
pub mod raster;
pub mod quantize;
pub mod field;
pub mod sampler;
pub mod mandelbrot;
pub mod emit;
pub mod timing;
pub mod animation;
#[cfg(feature = "drawing")]
pub mod drawing;
