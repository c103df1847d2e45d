//! Owned, interleaved 8-bit image buffer.

use {
  crate::{
    error::{self, Error, Result},
    geometry::PixelSpace
  },
  euclid::{Point2D, Size2D},
  humansize::{FileSize, file_size_opts}
};

#[cfg(feature = "drawing")]
pub mod writer;

/// Number of interleaved samples per pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channels {
  Gray = 1,
  Rgb = 3
}

impl Channels {
  pub fn count(self) -> usize {
    self as usize
  }
}

impl TryFrom<u8> for Channels {
  type Error = Error;

  fn try_from(n: u8) -> Result<Self> {
    match n {
      1 => Ok(Channels::Gray),
      3 => Ok(Channels::Rgb),
      n => Err(Error::InvalidChannels(n))
    }
  }
}

/// `width × height` pixels, `channels` samples each, row stride `width × channels`.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
  size: Size2D<u32, PixelSpace>,
  channels: Channels,
  data: Vec<u8>
}

impl std::fmt::Debug for Raster {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_struct("Raster")
      .field("size", &self.size)
      .field("channels", &self.channels)
      .field("bytes", &self.data.len())
      .finish()
  }
}

impl Raster {
  /// Allocate a raster filled with zeros. Fails with `OutOfMemory` instead of aborting.
  pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
    let len = (width as usize)
      .checked_mul(height as usize)
      .and_then(|n| n.checked_mul(channels.count()))
      .ok_or(Error::OutOfMemory { bytes: usize::MAX })?;
    let data = error::try_alloc(len, 0u8)?;
    tracing::trace!(
      width, height, channels = channels.count(),
      size = %len.file_size(file_size_opts::CONVENTIONAL).unwrap_or_default(),
      "allocated raster"
    );
    Ok(Self { size: Size2D::new(width, height), channels, data })
  }

  /// Wrap an existing buffer. Returns `None` if its length is not `width × height × channels`.
  pub fn from_raw(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Option<Self> {
    (data.len() == width as usize * height as usize * channels.count())
      .then(|| Self { size: Size2D::new(width, height), channels, data })
  }

  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }
  pub fn channels(&self) -> Channels { self.channels }

  /// Row stride in bytes.
  pub fn pitch(&self) -> usize {
    self.size.width as usize * self.channels.count()
  }

  pub fn pixel_count(&self) -> usize {
    self.size.width as usize * self.size.height as usize
  }

  /// Shape used for compatibility checks: dimensions and channel count.
  pub fn shape(&self) -> (Size2D<u32, PixelSpace>, u8) {
    (self.size, self.channels as u8)
  }

  fn index(&self, pixel: Point2D<u32, PixelSpace>, channel: usize) -> Result<usize> {
    if pixel.x >= self.size.width || pixel.y >= self.size.height || channel >= self.channels.count() {
      return Err(Error::CoordinateOutOfRange {
        x: pixel.x as f64,
        y: pixel.y as f64,
        bounds: self.size.cast_unit()
      });
    }
    Ok(pixel.y as usize * self.pitch() + pixel.x as usize * self.channels.count() + channel)
  }

  pub fn get(&self, pixel: Point2D<u32, PixelSpace>, channel: usize) -> Result<u8> {
    self.index(pixel, channel).map(|i| self.data[i])
  }

  pub fn set(&mut self, pixel: Point2D<u32, PixelSpace>, channel: usize, value: u8) -> Result<()> {
    let i = self.index(pixel, channel)?;
    self.data[i] = value;
    Ok(())
  }

  /// Overwrite one channel with a plane of `width × height` samples.
  pub fn write_channel(&mut self, channel: usize, plane: &[u8]) -> Result<()> {
    if channel >= self.channels.count() {
      return Err(Error::CoordinateOutOfRange {
        x: channel as f64,
        y: 0.0,
        bounds: Size2D::new(self.channels.count() as u32, 1)
      });
    }
    if plane.len() != self.pixel_count() {
      return Err(Error::DimensionMismatch {
        base: (self.size, 1),
        overlay: (Size2D::new(plane.len() as u32, 1), 1)
      });
    }
    self.data
      .chunks_exact_mut(self.channels.count())
      .zip(plane)
      .for_each(|(pixel, &value)| pixel[channel] = value);
    Ok(())
  }

  /// Iterate over the samples of one channel, row-major.
  pub fn channel(&self, channel: usize) -> impl Iterator<Item = u8> + '_ {
    self.data.iter()
      .skip(channel)
      .step_by(self.channels.count())
      .copied()
  }

  pub fn as_raw(&self) -> &[u8] { &self.data }
  pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] { &mut self.data }
  pub fn into_raw(self) -> Vec<u8> { self.data }
}
