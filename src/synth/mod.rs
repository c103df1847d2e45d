//! Fractal (1/f) stacking of noise octaves.
//!
//! Octave 0 is written directly into the accumulator at full amplitude. Every following octave
//! multiplies the sector count by the lacunarity and the amplitude by the persistence, is
//! rendered into a scratch raster and composited onto the accumulator. Stacking stops as soon
//! as a sector count would reach the image dimension or the amplitude falls to the floor.

use {
  crate::{
    compositor,
    error::{Error, Result},
    geometry::{PixelSpace, SectorSpace},
    noise::{self, OctaveParams},
    raster::{Channels, Raster}
  },
  euclid::Size2D
};

#[cfg(test)] mod tests;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SynthConfig {
  pub resolution: Size2D<u32, PixelSpace>,
  /// Sector count of octave 0.
  pub base_sectors: Size2D<u32, SectorSpace>,
  pub channels: Channels,
  pub seed: u64,
  /// Sector multiplier between consecutive octaves.
  pub lacunarity: u32,
  /// Amplitude multiplier between consecutive octaves.
  pub persistence: f64,
  /// Octaves at or below this amplitude are not generated.
  pub min_amplitude: f64,
  /// Sector multiplier applied between octave 0 and octave 1.
  /// `1` keeps octave 1 at the base frequency.
  pub first_octave_scale: u32,
  pub max_octaves: Option<u32>
}

impl Default for SynthConfig {
  fn default() -> Self {
    Self {
      resolution: Size2D::new(512, 512),
      base_sectors: Size2D::new(4, 4),
      channels: Channels::Rgb,
      seed: 0,
      lacunarity: 2,
      persistence: 0.5,
      min_amplitude: 1.0 / 256.0,
      first_octave_scale: 2,
      max_octaves: None
    }
  }
}

impl SynthConfig {
  pub fn validate(&self) -> Result<()> {
    let (res, base) = (self.resolution, self.base_sectors);
    if base.width == 0 || base.height == 0 || base.width >= res.width || base.height >= res.height {
      return Err(Error::InvalidSectors { x: base.width, y: base.height });
    }
    if self.lacunarity == 0 || self.first_octave_scale == 0 {
      return Err(Error::InvalidConfig("sector multipliers must be at least 1"));
    }
    if !(self.persistence > 0.0 && self.persistence < 1.0) {
      return Err(Error::InvalidConfig("persistence must lie in (0, 1)"));
    }
    if !(self.min_amplitude > 0.0 && self.min_amplitude.is_finite()) {
      return Err(Error::InvalidConfig("amplitude floor must be positive"));
    }
    if self.max_octaves == Some(0) {
      return Err(Error::InvalidConfig("at least one octave is required"));
    }
    Ok(())
  }
}

/// Finished image and the number of octaves composited into it, octave 0 included.
#[derive(Debug)]
pub struct Synthesis {
  pub image: Raster,
  pub octaves: u32
}

/// Seed of channel `channel` in octave `octave`. Octave 0 uses `seed + channel`.
pub fn derive_seed(seed: u64, octave: u32, channel: usize) -> u64 {
  seed
    .wrapping_add((octave as u64) << 8)
    .wrapping_add(channel as u64)
}

fn scale_sectors(sectors: Size2D<u32, SectorSpace>, k: u32) -> Option<Size2D<u32, SectorSpace>> {
  Some(Size2D::new(sectors.width.checked_mul(k)?, sectors.height.checked_mul(k)?))
}

pub struct Synthesizer {
  config: SynthConfig
}

impl Synthesizer {
  pub fn new(config: SynthConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &SynthConfig {
    &self.config
  }

  /// Parameters of every octave the run will generate, octave 0 first.
  pub fn schedule(&self) -> Vec<(Size2D<u32, SectorSpace>, f64)> {
    let cfg = &self.config;
    let mut schedule = vec![(cfg.base_sectors, 1.0)];
    let mut sectors = match scale_sectors(cfg.base_sectors, cfg.first_octave_scale) {
      Some(sectors) => sectors,
      None => return schedule
    };
    let mut amplitude = cfg.persistence;

    while sectors.width < cfg.resolution.width
      && sectors.height < cfg.resolution.height
      && amplitude > cfg.min_amplitude
      && cfg.max_octaves.map_or(true, |max| (schedule.len() as u32) < max)
    {
      schedule.push((sectors, amplitude));
      amplitude *= cfg.persistence;
      sectors = match scale_sectors(sectors, cfg.lacunarity) {
        Some(sectors) => sectors,
        None => break
      };
    }
    schedule
  }

  fn octave_params(&self, octave: u32, sectors: Size2D<u32, SectorSpace>, amplitude: f64) -> Vec<OctaveParams> {
    (0..self.config.channels.count())
      .map(|channel| OctaveParams {
        sectors,
        seed: derive_seed(self.config.seed, octave, channel),
        amplitude
      })
      .collect()
  }

  /// Run the whole pipeline. Either the complete image is returned or nothing is.
  pub fn run(&self) -> Result<Synthesis> {
    let cfg = &self.config;
    let _span = tracing::info_span!("synthesize", seed = cfg.seed).entered();
    let mut accumulator = Raster::new(cfg.resolution.width, cfg.resolution.height, cfg.channels)?;
    let schedule = self.schedule();
    tracing::info!(
      width = cfg.resolution.width,
      height = cfg.resolution.height,
      octaves = schedule.len(),
      "starting synthesis"
    );

    let mut octaves = 0u32;
    for (octave, &(sectors, amplitude)) in schedule.iter().enumerate() {
      let octave = octave as u32;
      let params = self.octave_params(octave, sectors, amplitude);
      tracing::debug!(
        octave,
        sectors_x = sectors.width,
        sectors_y = sectors.height,
        amplitude,
        "generating octave"
      );
      crate::profile!("octave", {
        if octave == 0 {
          noise::generate_octave_channels(&mut accumulator, &params)?;
        } else {
          let mut scratch = Raster::new(cfg.resolution.width, cfg.resolution.height, cfg.channels)?;
          noise::generate_octave_channels(&mut scratch, &params)?;
          compositor::accumulate(&mut accumulator, &scratch)?;
        }
      });
      octaves += 1;
    }

    tracing::info!(octaves, "synthesis finished");
    Ok(Synthesis { image: accumulator, octaves })
  }
}

/// Synthesize a `width × height` texture with `channels` samples per pixel, starting from
/// `base_sectors_x × base_sectors_y` sectors and default octave stacking.
pub fn synthesize(
  width: u32,
  height: u32,
  base_sectors_x: u32,
  base_sectors_y: u32,
  channels: u8,
  seed_base: u64
) -> Result<Synthesis> {
  Synthesizer::new(SynthConfig {
    resolution: Size2D::new(width, height),
    base_sectors: Size2D::new(base_sectors_x, base_sectors_y),
    channels: Channels::try_from(channels)?,
    seed: seed_base,
    ..Default::default()
  })?.run()
}
