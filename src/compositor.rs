//! Accumulation of octaves.
//!
//! An overlay sample of 128 is a zero offset; anything above or below it brightens or darkens
//! the accumulated image by the difference, saturating at the ends of the 8-bit range.

use {
  crate::{
    error::{Error, Result},
    raster::Raster
  },
  rayon::prelude::*
};

const MID_GRAY: i16 = 128;
const PAR_CHUNK: usize = 1 << 14;

#[inline]
pub fn blend_sample(base: u8, overlay: u8) -> u8 {
  (base as i16 + overlay as i16 - MID_GRAY).clamp(0, u8::MAX as i16) as u8
}

/// `base[k] = clamp(base[k] + overlay[k] - 128)`, in place.
/// Both images must have the same dimensions and channel count.
pub fn accumulate(base: &mut Raster, overlay: &Raster) -> Result<()> {
  if base.shape() != overlay.shape() {
    return Err(Error::DimensionMismatch {
      base: base.shape(),
      overlay: overlay.shape()
    });
  }
  base.as_raw_mut()
    .par_chunks_mut(PAR_CHUNK)
    .zip(overlay.as_raw().par_chunks(PAR_CHUNK))
    .for_each(|(base, overlay)| base.iter_mut()
      .zip(overlay)
      .for_each(|(b, &o)| *b = blend_sample(*b, o)));
  Ok(())
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::raster::Channels,
    anyhow::Result
  };

  fn filled(width: u32, height: u32, value: u8) -> Raster {
    Raster::from_raw(width, height, Channels::Rgb, vec![value; (width * height * 3) as usize])
      .unwrap()
  }

  #[test] fn clamps_high() -> Result<()> {
    let mut base = filled(4, 4, 255);
    accumulate(&mut base, &filled(4, 4, 255))?;
    assert!(base.as_raw().iter().all(|&v| v == 255));
    Ok(())
  }

  #[test] fn clamps_low() -> Result<()> {
    let mut base = filled(4, 4, 0);
    accumulate(&mut base, &filled(4, 4, 0))?;
    assert!(base.as_raw().iter().all(|&v| v == 0));
    Ok(())
  }

  #[test] fn mid_gray_is_identity() -> Result<()> {
    let mut base = Raster::from_raw(2, 1, Channels::Gray, vec![17, 200]).unwrap();
    accumulate(&mut base, &Raster::from_raw(2, 1, Channels::Gray, vec![128, 128]).unwrap())?;
    assert_eq!(base.as_raw(), &[17, 200]);
    Ok(())
  }

  #[test] fn signed_offsets() {
    assert_eq!(blend_sample(100, 150), 122);
    assert_eq!(blend_sample(100, 28), 0);
    assert_eq!(blend_sample(10, 0), 0);
    assert_eq!(blend_sample(250, 140), 255);
  }

  #[test] fn dimension_mismatch() -> Result<()> {
    let mut base = Raster::new(512, 512, Channels::Rgb)?;
    let overlay = Raster::new(256, 256, Channels::Rgb)?;
    let err = accumulate(&mut base, &overlay).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }), "{}", err);
    assert!(base.as_raw().iter().all(|&v| v == 0));
    Ok(())
  }

  #[test] fn channel_mismatch() -> Result<()> {
    let mut base = Raster::new(8, 8, Channels::Rgb)?;
    let overlay = Raster::new(8, 8, Channels::Gray)?;
    assert!(matches!(accumulate(&mut base, &overlay), Err(Error::DimensionMismatch { .. })));
    Ok(())
  }
}
