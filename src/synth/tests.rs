use {
  super::*,
  anyhow::Result,
  proptest::prelude::*
};

#[test] fn end_to_end() -> Result<()> {
  let a = synthesize(512, 512, 4, 4, 3, 42)?;
  assert_eq!(a.image.as_raw().len(), 512 * 512 * 3);
  assert!((1..=8).contains(&a.octaves), "{}", a.octaves);

  let b = synthesize(512, 512, 4, 4, 3, 42)?;
  assert_eq!(a.octaves, b.octaves);
  assert!(a.image == b.image);
  Ok(())
}

#[test] fn seed_changes_output() -> Result<()> {
  let a = synthesize(64, 64, 4, 4, 1, 1)?;
  let b = synthesize(64, 64, 4, 4, 1, 2)?;
  assert!(a.image != b.image);
  Ok(())
}

#[test] fn termination() -> Result<()> {
  let synth = Synthesizer::new(SynthConfig::default())?;
  let schedule = synth.schedule();
  // 4, 8, .. 256 sectors; 512 would reach the image width
  assert_eq!(schedule.len(), 7);
  assert!(schedule.len() <= 8);
  assert!(schedule.iter().all(|(s, _)| s.width < 512 && s.height < 512));
  assert_eq!(schedule[0], (Size2D::new(4, 4), 1.0));
  assert_eq!(schedule[1], (Size2D::new(8, 8), 0.5));
  assert!(schedule.iter().all(|&(_, a)| a > 1.0 / 256.0));
  Ok(())
}

#[test] fn amplitude_floor() -> Result<()> {
  let synth = Synthesizer::new(SynthConfig {
    resolution: Size2D::new(1 << 20, 1 << 20),
    base_sectors: Size2D::new(1, 1),
    ..Default::default()
  })?;
  // amplitudes 1, 1/2 .. 1/128
  assert_eq!(synth.schedule().len(), 8);
  Ok(())
}

#[test] fn first_octave_scale() -> Result<()> {
  let synth = Synthesizer::new(SynthConfig {
    first_octave_scale: 1,
    ..Default::default()
  })?;
  let schedule = synth.schedule();
  assert_eq!(schedule[1], (Size2D::new(4, 4), 0.5));
  assert_eq!(schedule[2], (Size2D::new(8, 8), 0.25));
  assert_eq!(schedule.len(), 8);
  Ok(())
}

#[test] fn max_octaves() -> Result<()> {
  let synth = Synthesizer::new(SynthConfig {
    resolution: Size2D::new(64, 64),
    max_octaves: Some(2),
    ..Default::default()
  })?;
  assert_eq!(synth.run()?.octaves, 2);
  Ok(())
}

#[test] fn single_octave() -> Result<()> {
  // 8 sectors would reach the width: only the base octave is generated
  let synthesis = synthesize(8, 64, 4, 4, 1, 0)?;
  assert_eq!(synthesis.octaves, 1);

  let plane = crate::noise::render_plane(
    Size2D::new(8, 64),
    OctaveParams { sectors: Size2D::new(4, 4), seed: derive_seed(0, 0, 0), amplitude: 1.0 }
  )?;
  assert_eq!(synthesis.image.as_raw(), plane.as_slice());
  Ok(())
}

#[test] fn seeds() {
  assert_eq!(derive_seed(42, 0, 0), 42);
  assert_eq!(derive_seed(42, 0, 2), 44);
  assert_ne!(derive_seed(42, 1, 0), derive_seed(42, 0, 1));
  assert_eq!(derive_seed(u64::MAX, 0, 1), 0);
}

#[test] fn rejects_invalid_config() {
  let invalid = [
    SynthConfig { base_sectors: Size2D::new(0, 4), ..Default::default() },
    SynthConfig { base_sectors: Size2D::new(512, 4), ..Default::default() },
    SynthConfig { lacunarity: 0, ..Default::default() },
    SynthConfig { persistence: 1.0, ..Default::default() },
    SynthConfig { min_amplitude: 0.0, ..Default::default() },
    SynthConfig { max_octaves: Some(0), ..Default::default() },
  ];
  for config in invalid {
    assert!(Synthesizer::new(config).is_err(), "{:?}", config);
  }
  assert!(matches!(synthesize(64, 64, 4, 4, 2, 0), Err(Error::InvalidChannels(2))));
  assert!(matches!(synthesize(64, 64, 64, 4, 3, 0), Err(Error::InvalidSectors { .. })));
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(16))]

  #[test]
  fn sectors_stay_below_resolution(
    width in 2u32..4096,
    height in 2u32..4096,
    sx in 1u32..64,
    sy in 1u32..64,
    lacunarity in 1u32..4
  ) {
    prop_assume!(sx < width && sy < height);
    let synth = Synthesizer::new(SynthConfig {
      resolution: Size2D::new(width, height),
      base_sectors: Size2D::new(sx, sy),
      lacunarity,
      ..Default::default()
    }).unwrap();
    let schedule = synth.schedule();
    prop_assert!(!schedule.is_empty() && schedule.len() <= 8);
    for (sectors, _) in schedule {
      prop_assert!(sectors.width < width && sectors.height < height);
    }
  }

  #[test]
  fn composited_output_is_deterministic(
    width in 8u32..48,
    height in 8u32..48,
    seed in any::<u64>(),
    rgb in any::<bool>()
  ) {
    let channels = if rgb { 3 } else { 1 };
    let a = synthesize(width, height, 2, 2, channels, seed).unwrap();
    let b = synthesize(width, height, 2, 2, channels, seed).unwrap();
    prop_assert_eq!(a.image.as_raw().len(), (width * height) as usize * channels as usize);
    prop_assert!(a.image == b.image);
  }
}
