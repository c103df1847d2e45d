//! Gradient noise: a random gradient field, a sampler that blends it smoothly, and the octave
//! generator that fills an image channel from the two.

use num_traits::Float;

pub mod gradient_field;
pub use gradient_field::GradientField;

pub mod sampler;
pub use sampler::sample;

pub mod octave;
pub use octave::{OctaveParams, generate_octave, generate_octave_channels, render_plane};


/// Cubic smoothstep, `3p² − 2p³`. Zero first derivative at `p = 0` and `p = 1`, which hides
/// the grid lines between cells.
#[inline]
pub fn ease<F: Float>(p: F) -> F {
  let two = F::one() + F::one();
  let three = two + F::one();
  p * p * (three - two * p)
}

#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
  a + t * (b - a)
}
