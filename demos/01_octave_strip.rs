/// Render every octave of a run on its own, side by side, followed by the composited result.
/// Useful to see how each octave contributes to the final texture.

use {
  perlin_texture::{
    compositor,
    noise::{self, OctaveParams},
    raster::{Channels, Raster},
    synth::{self, SynthConfig, Synthesizer}
  },
  anyhow::Result,
  euclid::{Point2D, Size2D}
};

fn main() -> Result<()> {
  let size = 256;
  let synth = Synthesizer::new(SynthConfig {
    resolution: Size2D::splat(size),
    base_sectors: Size2D::splat(2),
    channels: Channels::Gray,
    seed: 7,
    ..Default::default()
  })?;
  let schedule = synth.schedule();
  let mut strip = Raster::new(size * (schedule.len() as u32 + 1), size, Channels::Gray)?;
  let mut accumulator = Raster::new(size, size, Channels::Gray)?;

  for (octave, &(sectors, amplitude)) in schedule.iter().enumerate() {
    let mut layer = Raster::new(size, size, Channels::Gray)?;
    noise::generate_octave(&mut layer, 0, OctaveParams {
      sectors,
      seed: synth::derive_seed(7, octave as u32, 0),
      amplitude
    })?;
    blit(&mut strip, &layer, octave as u32 * size)?;
    if octave == 0 {
      accumulator = layer;
    } else {
      compositor::accumulate(&mut accumulator, &layer)?;
    }
  }
  blit(&mut strip, &accumulator, schedule.len() as u32 * size)?;

  strip.save("octaves.png")?;
  println!("{} octaves -> octaves.png", schedule.len());
  Ok(())
}

fn blit(dst: &mut Raster, src: &Raster, offset_x: u32) -> Result<()> {
  for (x, y) in itertools::iproduct!(0..src.width(), 0..src.height()) {
    let value = src.get(Point2D::new(x, y), 0)?;
    dst.set(Point2D::new(x + offset_x, y), 0, value)?;
  }
  Ok(())
}
