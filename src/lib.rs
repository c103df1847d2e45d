//! Fractal gradient noise texture synthesis.
//!
//! A texture is built by stacking octaves of 2D gradient ("Perlin") noise. Each octave is a
//! grid of random gradients ([`noise::GradientField`]) sampled at every pixel with smoothstep
//! blending ([`noise::sample`]). Octaves are composited on top of each other as signed offsets
//! around mid-gray ([`compositor::accumulate`]), each one with twice the frequency and half the
//! amplitude of the previous ([`synth`]).
//!
//! # Basic usage
//! ```no_run
//! # use perlin_texture::{error::Result, synth::synthesize};
//! # fn main() -> Result<()> {
//! // 512x512 RGB, 4x4 sectors in the first octave, seed 42
//! let synthesis = synthesize(512, 512, 4, 4, 3, 42)?;
//! println!("depth: {}", synthesis.octaves);
//! synthesis.image.save("out.png")?; // requires `drawing` feature
//! # Ok(())
//! # }
//! ```
//! Octave stacking can be tuned with [`synth::SynthConfig`]:
//! ```
//! # use perlin_texture::{error::Result, raster::Channels, synth::{Synthesizer, SynthConfig}};
//! # use euclid::Size2D;
//! # fn main() -> Result<()> {
//! let synth = Synthesizer::new(SynthConfig {
//!   resolution: Size2D::new(64, 64),
//!   base_sectors: Size2D::new(2, 2),
//!   channels: Channels::Gray,
//!   persistence: 0.6,
//!   ..Default::default()
//! })?;
//! let synthesis = synth.run()?;
//! assert_eq!(synthesis.image.as_raw().len(), 64 * 64);
//! # Ok(())
//! # }
//! ```
//!
//! Channels of one octave are independent until they are composited, and are rendered in
//! parallel on the `rayon` thread pool, each with its own generator.

pub mod error;
pub mod geometry;
pub mod raster;
pub mod noise;
pub mod compositor;
pub mod synth;
mod util;
