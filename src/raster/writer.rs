//! Boundary image writer.
//!
//! Only ever receives a complete raster. The encoded image is written to a sibling temporary
//! file first and renamed into place, so a failed write leaves the destination untouched.

use {
  super::{Channels, Raster},
  crate::error::{Error, Result},
  image::{DynamicImage, GrayImage, ImageFormat, RgbImage},
  std::{io::Cursor, path::Path}
};

impl Raster {
  pub fn to_dynamic_image(&self) -> DynamicImage {
    let (w, h, raw) = (self.width(), self.height(), self.as_raw().to_vec());
    let image = match self.channels() {
      Channels::Gray => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
      Channels::Rgb => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
    };
    // buffer length is an invariant of `Raster`
    image.unwrap_or_else(|| unreachable!("raster buffer does not match its dimensions"))
  }

  /// Encode and save, the format is deduced from the file extension.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    save(self, path)
  }
}

pub fn save(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  let format = ImageFormat::from_path(path)?;

  let mut encoded = Vec::new();
  raster.to_dynamic_image()
    .write_to(&mut Cursor::new(&mut encoded), format)?;

  let file_name = path.file_name()
    .ok_or_else(|| Error::Io(std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("{} is not a file path", path.display())
    )))?;
  let mut tmp_name = std::ffi::OsString::from(".");
  tmp_name.push(file_name);
  tmp_name.push(".part");
  let tmp = path.with_file_name(tmp_name);

  std::fs::write(&tmp, &encoded)
    .and_then(|_| std::fs::rename(&tmp, path))
    .map_err(|e| {
      std::fs::remove_file(&tmp).ok();
      Error::Io(e)
    })?;
  tracing::info!(path = %path.display(), bytes = encoded.len(), "image written");
  Ok(())
}
