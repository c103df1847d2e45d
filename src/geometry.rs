//! .
//!
//! Two coordinate bases are in use: pixel space, with the origin in the top-left corner of the
//! image, and sector space, where one unit spans one cell of the gradient field.

use euclid::{Point2D, Size2D, Vector2D as V2};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Gradient grid coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct SectorSpace;

/// Continuous point addressing the gradient field fractionally.
pub type Coordinate = Point2D<f64, SectorSpace>;
/// Gradient at one grid corner, scaled by the octave amplitude.
pub type Gradient = V2<f64, SectorSpace>;

/// Size of one sector, in pixels. Computed in floating point so that every pixel of the image
/// maps strictly below `sectors`.
pub fn cell_size(
  resolution: Size2D<u32, PixelSpace>,
  sectors: Size2D<u32, SectorSpace>
) -> Size2D<f64, PixelSpace> {
  resolution.to_f64()
    .to_vector()
    .component_div(sectors.to_f64().to_vector().cast_unit())
    .to_size()
}

pub fn to_sector_space(
  pixel: Point2D<u32, PixelSpace>,
  cell: Size2D<f64, PixelSpace>
) -> Coordinate {
  pixel.to_f64().to_vector()
    .component_div(cell.to_vector())
    .cast_unit()
    .to_point()
}

