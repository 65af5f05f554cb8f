//! Per-vertex Gerstner wave displacement.
//!
//! Each wave travels radially away from the grid origin: the direction for a
//! vertex is its own normalized `(x, z)` position. Both waves are evaluated
//! against the base coordinates, never against a partially displaced vertex,
//! and their offsets are summed.

use glam::{Vec2, Vec3};

use crate::params::{IndexingMode, WaveParams};

/// Offset produced by one Gerstner wave at `vertex`.
///
/// A vertex at the origin has no defined direction; it gets a zero direction,
/// so it still rises and falls but never moves horizontally.
pub fn gerstner(vertex: Vec3, wave: &WaveParams, time: f32) -> Vec3 {
    let pos = Vec2::new(vertex.x, vertex.z);
    let d = pos.normalize_or_zero();
    let k = wave.wave_number();
    let c = wave.phase_speed();
    let f = k * (d.dot(pos) - c * time);
    let amplitude = wave.amplitude();

    Vec3::new(
        d.x * amplitude * f.cos(),
        amplitude * f.sin(),
        d.y * amplitude * f.cos(),
    )
}

/// Compute a fresh displaced buffer from the base vertices.
///
/// The result always has the same length as `base`. Under
/// [`IndexingMode::Reference`] the final slot is not evaluated and stays at
/// `Vec3::ZERO`.
pub fn evaluate(
    base: &[Vec3],
    primary: &WaveParams,
    secondary: &WaveParams,
    time: f32,
    indexing: IndexingMode,
) -> Vec<Vec3> {
    let evaluated = match indexing {
        IndexingMode::Reference => base.len().saturating_sub(1),
        IndexingMode::Corrected => base.len(),
    };

    let mut displaced = vec![Vec3::ZERO; base.len()];
    for (out, &v) in displaced.iter_mut().zip(&base[..evaluated]) {
        *out = v + gerstner(v, primary, time) + gerstner(v, secondary, time);
    }

    log::trace!(
        "Evaluated {}/{} vertices at t={:.3}s",
        evaluated,
        base.len(),
        time
    );

    displaced
}
