/// Horizontal tiling: the gradient field wraps around its last column, so two copies of a
/// texture placed next to each other join without a seam.

use {
  perlin_texture::{
    noise::{self, OctaveParams},
    raster::{Channels, Raster}
  },
  anyhow::Result,
  euclid::{Point2D, Size2D}
};

fn main() -> Result<()> {
  let (width, height) = (384, 128);
  let mut tile = Raster::new(width, height, Channels::Gray)?;
  noise::generate_octave(&mut tile, 0, OctaveParams {
    sectors: Size2D::new(6, 2),
    seed: std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(0),
    amplitude: 1.0
  })?;

  let mut tiled = Raster::new(width * 2, height, Channels::Gray)?;
  for (x, y) in itertools::iproduct!(0..width * 2, 0..height) {
    tiled.set(Point2D::new(x, y), 0, tile.get(Point2D::new(x % width, y), 0)?)?;
  }
  tiled.save("tiles.png")?;
  Ok(())
}
