//! Noise generation for the initial grid heights.
//!
//! The grid builder only needs a deterministic, continuous 2D field, so the
//! generator sits behind [`HeightNoise`] and any implementation can be plugged in.

use noise::{NoiseFn, Perlin};

/// Deterministic 2D coherent noise
pub trait HeightNoise {
    /// Sample the field at `(x, z)`; equal inputs must give equal outputs
    fn sample(&self, x: f64, z: f64) -> f32;
}

/// Perlin noise remapped to the unit range
pub struct PerlinHeight {
    perlin: Perlin,
}

impl PerlinHeight {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl HeightNoise for PerlinHeight {
    /// Returns value in range [0, 1]
    fn sample(&self, x: f64, z: f64) -> f32 {
        let raw = self.perlin.get([x, z]) as f32;
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl<F> HeightNoise for F
where
    F: Fn(f64, f64) -> f32,
{
    fn sample(&self, x: f64, z: f64) -> f32 {
        self(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_is_deterministic() {
        let a = PerlinHeight::new(7);
        let b = PerlinHeight::new(7);
        for i in 0..32 {
            let (x, z) = (i as f64 * 0.37, i as f64 * 0.91);
            assert_eq!(a.sample(x, z).to_bits(), b.sample(x, z).to_bits());
        }
    }

    #[test]
    fn test_perlin_is_bounded() {
        let noise = PerlinHeight::new(42);
        for i in 0..64 {
            for j in 0..64 {
                let v = noise.sample(i as f64 * 0.13, j as f64 * 0.29);
                assert!((0.0..=1.0).contains(&v), "sample {} out of range", v);
            }
        }
    }

    #[test]
    fn test_perlin_is_continuous() {
        let noise = PerlinHeight::new(3);
        let a = noise.sample(1.25, 2.5);
        let b = noise.sample(1.25 + 1e-4, 2.5);
        assert!((a - b).abs() < 1e-2);
    }

    #[test]
    fn test_closure_as_noise() {
        let flat = |_x: f64, _z: f64| 0.5_f32;
        assert_eq!(flat.sample(3.0, 4.0), 0.5);
    }
}
