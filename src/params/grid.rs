//! Grid construction parameters.

use crate::error::OceanError;

/// Vertex buffer layout and iteration bounds.
///
/// `Reference` keeps the legacy layout: `(x_size + 1) * (z_size + 1)` slots are
/// allocated but only the first `x_size * z_size` are populated, and the wave
/// pass stops one short of the final slot. `Corrected` allocates exactly the
/// populated region and displaces every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexingMode {
    #[default]
    Reference,
    Corrected,
}

/// Grid topology and initial terrain parameters (immutable once built)
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Vertices along X in the populated region (must be >= 2)
    pub x_size: usize,

    /// Vertices along Z in the populated region (must be >= 2)
    pub z_size: usize,

    /// Noise sampling frequency (noise units per grid step)
    pub noise_scale: f32,

    /// Height multiplier applied to the noise sample (meters)
    pub height_scale: f32,

    /// Perlin noise seed
    pub noise_seed: u32,

    /// Buffer layout, see [`IndexingMode`]
    pub indexing: IndexingMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_size: 64,
            z_size: 64,
            noise_scale: 0.3,
            height_scale: 2.0,
            noise_seed: 0,
            indexing: IndexingMode::Reference,
        }
    }
}

impl GridConfig {
    /// Number of vertex slots the builder allocates for this config
    pub fn vertex_capacity(&self) -> usize {
        match self.indexing {
            IndexingMode::Reference => (self.x_size + 1) * (self.z_size + 1),
            IndexingMode::Corrected => self.x_size * self.z_size,
        }
    }

    /// Number of vertices that receive a noise-derived position
    pub fn populated_len(&self) -> usize {
        self.x_size * self.z_size
    }

    /// Number of triangles emitted (two per interior quad)
    pub fn triangle_count(&self) -> usize {
        self.x_size.saturating_sub(1) * self.z_size.saturating_sub(1) * 2
    }

    /// Reject configurations that cannot form at least one quad
    pub fn validate(&self) -> Result<(), OceanError> {
        if self.x_size < 2 || self.z_size < 2 {
            return Err(OceanError::InvalidConfig(format!(
                "grid must be at least 2x2, got {}x{}",
                self.x_size, self.z_size
            )));
        }
        if !self.noise_scale.is_finite() || !self.height_scale.is_finite() {
            return Err(OceanError::InvalidConfig(format!(
                "noise_scale and height_scale must be finite, got {} and {}",
                self.noise_scale, self.height_scale
            )));
        }
        // Indices are u32 on the host side
        let capacity = (self.x_size as u64 + 1).checked_mul(self.z_size as u64 + 1);
        if capacity.map_or(true, |c| c > u32::MAX as u64) {
            return Err(OceanError::InvalidConfig(format!(
                "grid {}x{} exceeds u32 index range",
                self.x_size, self.z_size
            )));
        }
        Ok(())
    }
}
