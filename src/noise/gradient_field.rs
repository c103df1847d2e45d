use {
  crate::{
    error::{self, Error, Result},
    geometry::{Gradient, SectorSpace}
  },
  euclid::{Angle, Size2D},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64
};

/// Grid of random gradients, `sectors.width` columns and `sectors.height + 1` rows.
/// The extra row lets the sampler interpolate up to the bottom edge of the last cell.
#[derive(Debug, Clone)]
pub struct GradientField {
  sectors: Size2D<u32, SectorSpace>,
  grid: Vec<Gradient>
}

impl GradientField {
  /// Same seed, same field.
  pub fn build(sectors_x: u32, sectors_y: u32, seed: u64, amplitude: f64) -> Result<Self> {
    let mut rng = Pcg64::seed_from_u64(seed);
    Self::from_rng(Size2D::new(sectors_x, sectors_y), &mut rng, amplitude)
  }

  pub fn from_rng(
    sectors: Size2D<u32, SectorSpace>,
    rng: &mut impl Rng,
    amplitude: f64
  ) -> Result<Self> {
    if sectors.width == 0 || sectors.height == 0 {
      return Err(Error::InvalidSectors { x: sectors.width, y: sectors.height });
    }
    if !amplitude.is_finite() || amplitude <= 0.0 {
      return Err(Error::InvalidAmplitude(amplitude));
    }
    let len = (sectors.width as usize)
      .checked_mul(sectors.height as usize + 1)
      .ok_or(Error::OutOfMemory { bytes: usize::MAX })?;

    let mut grid = error::try_alloc(len, Gradient::zero())?;
    grid.iter_mut().for_each(|gradient| {
      let (sin, cos) = Angle::degrees(rng.gen_range(0.0f64..360.0)).radians.sin_cos();
      *gradient = Gradient::new(cos, sin) * amplitude;
    });
    Ok(Self { sectors, grid })
  }

  pub fn sectors(&self) -> Size2D<u32, SectorSpace> {
    self.sectors
  }

  /// Row stride of the flat grid.
  pub fn pitch(&self) -> usize {
    self.sectors.width as usize
  }

  /// Gradient at corner `(x, y)`, `x < sectors.width`, `y <= sectors.height`.
  pub fn get(&self, x: u32, y: u32) -> Result<Gradient> {
    if x >= self.sectors.width || y > self.sectors.height {
      return Err(Error::CoordinateOutOfRange {
        x: x as f64,
        y: y as f64,
        bounds: self.sectors
      });
    }
    Ok(self.grid[x as usize + y as usize * self.pitch()])
  }

  pub fn iter(&self) -> impl Iterator<Item = &Gradient> {
    self.grid.iter()
  }
}
