use {
  super::{GradientField, sample},
  crate::{
    error::{self, Error, Result},
    geometry::{self, PixelSpace, SectorSpace},
    raster::Raster
  },
  euclid::{Point2D, Size2D},
  rayon::prelude::*
};

/// Frequency, randomness and strength of one octave of one channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OctaveParams {
  pub sectors: Size2D<u32, SectorSpace>,
  pub seed: u64,
  pub amplitude: f64
}

/// Map a noise value to a sample centered at mid-gray.
#[inline]
pub fn to_sample(noise: f64) -> u8 {
  (noise * 128.0 + 128.0)
    .round()
    .clamp(0.0, 255.0) as u8
}

/// Render one octave as a single-channel plane of `resolution.area()` samples, row-major.
pub fn render_plane(resolution: Size2D<u32, PixelSpace>, params: OctaveParams) -> Result<Vec<u8>> {
  let field = GradientField::build(
    params.sectors.width,
    params.sectors.height,
    params.seed,
    params.amplitude
  )?;
  let cell = geometry::cell_size(resolution, params.sectors);

  let mut plane = error::try_alloc(resolution.width as usize * resolution.height as usize, 0u8)?;
  itertools::iproduct!(0..resolution.height, 0..resolution.width)
    .map(|(y, x)| Point2D::new(x, y))
    .zip(plane.iter_mut())
    .try_for_each(|(pixel, value)| {
      *value = to_sample(sample(geometry::to_sector_space(pixel, cell), &field)?);
      Ok::<_, Error>(())
    })?;
  Ok(plane)
}

/// Fill channel `channel_offset` of `image` with one octave of noise.
pub fn generate_octave(image: &mut Raster, channel_offset: usize, params: OctaveParams) -> Result<()> {
  if channel_offset >= image.channels().count() {
    return Err(Error::CoordinateOutOfRange {
      x: channel_offset as f64,
      y: 0.0,
      bounds: Size2D::new(image.channels().count() as u32, 1)
    });
  }
  let plane = render_plane(image.size(), params)?;
  image.write_channel(channel_offset, &plane)
}

/// Generate one octave for every channel of `image` concurrently, `params[ch]` for channel `ch`.
///
/// Each channel owns its generator, all planes are joined before any is written, and the image
/// is left untouched if any channel fails.
pub fn generate_octave_channels(image: &mut Raster, params: &[OctaveParams]) -> Result<()> {
  if params.len() != image.channels().count() {
    return Err(Error::InvalidConfig("exactly one parameter set per channel is required"));
  }
  let resolution = image.size();
  let planes = params.par_iter()
    .map(|&params| render_plane(resolution, params))
    .collect::<Result<Vec<_>>>()?;

  planes.iter()
    .enumerate()
    .try_for_each(|(channel, plane)| image.write_channel(channel, plane))
}
