//! Error type shared by every stage of the synthesis pipeline.
//!
//! None of these errors are recoverable mid-run: a partially composited image is not a
//! meaningful artifact, so each stage fails fast and the whole run is aborted.

use {
  std::fmt,
  euclid::Size2D,
  crate::geometry::{PixelSpace, SectorSpace}
};

#[derive(Debug)]
pub enum Error {
  /// Allocation of an image, gradient field or scratch buffer failed.
  OutOfMemory { bytes: usize },
  /// Two images of unequal shape were composited.
  DimensionMismatch {
    base: (Size2D<u32, PixelSpace>, u8),
    overlay: (Size2D<u32, PixelSpace>, u8)
  },
  /// Sampling or writing outside the valid grid.
  CoordinateOutOfRange { x: f64, y: f64, bounds: Size2D<u32, SectorSpace> },
  InvalidChannels(u8),
  InvalidSectors { x: u32, y: u32 },
  InvalidAmplitude(f64),
  InvalidConfig(&'static str),
  Io(std::io::Error),
  #[cfg(feature = "drawing")]
  Encode(image::ImageError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      OutOfMemory { bytes } => write!(f, "memory error: unable to allocate {} bytes", bytes),
      DimensionMismatch { base, overlay } => write!(
        f, "dimension mismatch: base is {}x{}x{}, overlay is {}x{}x{}",
        base.0.width, base.0.height, base.1,
        overlay.0.width, overlay.0.height, overlay.1
      ),
      CoordinateOutOfRange { x, y, bounds } => write!(
        f, "coordinate ({}, {}) is outside of the {}x{} grid",
        x, y, bounds.width, bounds.height
      ),
      InvalidChannels(n) => write!(f, "unsupported channel count {}, expected 1 or 3", n),
      InvalidSectors { x, y } => write!(f, "invalid sector count {}x{}", x, y),
      InvalidAmplitude(a) => write!(f, "amplitude must be positive and finite, got {}", a),
      InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
      Io(err) => write!(f, "{}", err),
      #[cfg(feature = "drawing")]
      Encode(err) => write!(f, "{}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(err) => Some(err),
      #[cfg(feature = "drawing")]
      Error::Encode(err) => Some(err),
      _ => None
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::Io(e)
  }
}

#[cfg(feature = "drawing")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::Encode(e)
  }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Allocate a buffer of `len` copies of `value`, reporting failure instead of aborting.
pub(crate) fn try_alloc<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
  let mut buf = Vec::new();
  buf.try_reserve_exact(len)
    .map_err(|_| Error::OutOfMemory { bytes: len.saturating_mul(std::mem::size_of::<T>()) })?;
  buf.resize(len, value);
  Ok(buf)
}
