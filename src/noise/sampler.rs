use {
  super::{GradientField, ease, lerp},
  crate::{
    error::{Error, Result},
    geometry::{Coordinate, Gradient}
  }
};

/// Noise value at a fractional grid coordinate, roughly within `[-amplitude, amplitude]`.
///
/// The four gradients around the cell are dotted with the offsets from their corners to
/// `coord`, then blended with [`ease`]d bilinear interpolation. The column right of the last
/// one wraps around to column 0, so the noise tiles horizontally.
pub fn sample(coord: Coordinate, field: &GradientField) -> Result<f64> {
  let sectors = field.sectors();
  let out_of_range = || Error::CoordinateOutOfRange { x: coord.x, y: coord.y, bounds: sectors };

  if !(coord.x.is_finite() && coord.y.is_finite()) || coord.x < 0.0 || coord.y < 0.0 {
    return Err(out_of_range());
  }
  let cell = coord.floor();
  if cell.x >= sectors.width as f64 || cell.y >= sectors.height as f64 {
    return Err(out_of_range());
  }
  let (x0, y0) = (cell.x as u32, cell.y as u32);
  let (x1, y1) = ((x0 + 1) % sectors.width, y0 + 1);

  let a = field.get(x0, y0)?;
  let b = field.get(x1, y0)?;
  let c = field.get(x0, y1)?;
  let d = field.get(x1, y1)?;

  let e = coord - cell;
  let f = e - Gradient::new(1.0, 0.0);
  let g = e - Gradient::new(0.0, 1.0);
  let h = e - Gradient::new(1.0, 1.0);

  let (s, t, u, v) = (a.dot(e), b.dot(f), c.dot(g), d.dot(h));
  let (sx, sy) = (ease(e.x), ease(e.y));

  Ok(lerp(
    lerp(s, t, sx),
    lerp(u, v, sx),
    sy
  ))
}
