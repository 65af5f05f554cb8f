//! Static grid topology with noise-derived initial heights.

use glam::Vec3;

use crate::error::OceanError;
use crate::noise::{HeightNoise, PerlinHeight};
use crate::params::GridConfig;

/// Base vertices and fixed connectivity for an `x_size × z_size` grid.
///
/// Vertex `(x, z)` lives at index `z * x_size + x`. Neither buffer changes
/// after construction.
#[derive(Debug, Clone)]
pub struct OceanGrid {
    config: GridConfig,
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl OceanGrid {
    /// Build the grid with seeded Perlin heights
    pub fn build(config: &GridConfig) -> Result<Self, OceanError> {
        Self::build_with(config, &PerlinHeight::new(config.noise_seed))
    }

    /// Build the grid sampling heights from `noise`
    pub fn build_with(config: &GridConfig, noise: &impl HeightNoise) -> Result<Self, OceanError> {
        config.validate()?;

        let x_size = config.x_size;
        let z_size = config.z_size;

        // Slots past the populated region stay at the origin
        let mut vertices = vec![Vec3::ZERO; config.vertex_capacity()];
        for z in 0..z_size {
            for x in 0..x_size {
                let height = config.height_scale
                    * noise.sample(
                        x as f64 * config.noise_scale as f64,
                        z as f64 * config.noise_scale as f64,
                    );
                vertices[z * x_size + x] = Vec3::new(x as f32, height, z as f32);
            }
        }

        let mut indices = Vec::with_capacity(config.triangle_count() * 3);
        for z in 0..z_size - 1 {
            for x in 0..x_size - 1 {
                let i = (z * x_size + x) as u32;
                let up = i + x_size as u32;

                // Clockwise seen from +Y in a left-handed frame
                indices.extend_from_slice(&[i, up, i + 1, i + 1, up, up + 1]);
            }
        }

        log::debug!(
            "Built {}x{} grid: {} vertex slots, {} triangles",
            x_size,
            z_size,
            vertices.len(),
            indices.len() / 3
        );

        Ok(Self {
            config: config.clone(),
            vertices,
            indices,
        })
    }

    /// Configuration the grid was built from
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All allocated vertex slots, including unpopulated slack
    pub fn base_vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Flat triangle index list, three per triangle
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Index triples, one per triangle, in emission order
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Number of vertices that received a noise-derived position
    pub fn populated_len(&self) -> usize {
        self.config.populated_len()
    }
}
