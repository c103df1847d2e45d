//! `perlin <sectors-x> <sectors-y> <outfile>`
//!
//! Renders a 512x512 RGB fractal noise texture. The two numbers are the sector counts of the
//! first octave. The seed is taken from `PERLIN_SEED`, or from the clock when unset.

use {
  perlin_texture::{
    error::Error,
    raster::Channels,
    synth::{SynthConfig, Synthesizer}
  },
  anyhow::{Context, Result, bail},
  euclid::Size2D,
  std::{process::ExitCode, time::{SystemTime, UNIX_EPOCH}},
  tracing_subscriber::EnvFilter
};

const RESOLUTION: u32 = 512;

struct Args {
  sectors: Size2D<u32, perlin_texture::geometry::SectorSpace>,
  output: String
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
  let args = args.collect::<Vec<_>>();
  if args.len() != 3 {
    bail!("syntax: perlin xsize ysize outfile");
  }
  let number = |s: &str| s.parse::<u32>()
    .with_context(|| format!("invalid size {:?}", s));
  Ok(Args {
    sectors: Size2D::new(number(&args[0])?, number(&args[1])?),
    output: args[2].clone()
  })
}

fn seed() -> u64 {
  std::env::var("PERLIN_SEED").ok()
    .and_then(|s| s.parse().ok())
    .unwrap_or_else(|| SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|t| t.as_secs())
      .unwrap_or_default())
}

fn run() -> Result<()> {
  let args = parse_args(std::env::args().skip(1))?;
  let synth = Synthesizer::new(SynthConfig {
    resolution: Size2D::splat(RESOLUTION),
    base_sectors: args.sectors,
    channels: Channels::Rgb,
    seed: seed(),
    ..Default::default()
  })?;

  let synthesis = synth.run().map_err(|e| match e {
    Error::OutOfMemory { .. } => anyhow::anyhow!("memory error :("),
    e => e.into()
  })?;
  println!("depth: {}", synthesis.octaves);

  synthesis.image.save(&args.output)
    .with_context(|| format!("could not open file {}", args.output))?;
  Ok(())
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(v: &[&str]) -> impl Iterator<Item = String> {
    v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
  }

  #[test] fn three_arguments() -> Result<()> {
    let parsed = parse_args(args(&["4", "8", "out.jpg"]))?;
    assert_eq!((parsed.sectors.width, parsed.sectors.height), (4, 8));
    assert_eq!(parsed.output, "out.jpg");
    Ok(())
  }

  #[test] fn argument_count() {
    assert!(parse_args(args(&["4", "4"])).is_err());
    assert!(parse_args(args(&["4", "4", "a", "b"])).is_err());
  }

  #[test] fn non_numeric() {
    assert!(parse_args(args(&["four", "4", "out.png"])).is_err());
  }
}
