//! Host-side mesh that receives displaced positions every tick.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::mesh::OceanGrid;

/// Vertex data for upload (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Axis-aligned bounding box
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Zero-size box at the origin, used when there are no points
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Smallest box containing every point
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::ZERO;
        };
        rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, &p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            },
        )
    }

    /// Midpoint of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// The rendering side of the ocean: owns the live vertex buffer.
///
/// The evaluator hands over a complete replacement buffer each tick, then asks
/// for derived geometry to be rebuilt from it.
pub trait MeshHost {
    /// Swap in a complete buffer with the same length as the base vertices
    fn replace_vertices(&mut self, positions: Vec<Vec3>);
    fn recalculate_normals(&mut self);
    fn recalculate_bounds(&mut self);
}

/// In-process mesh host with CPU normals and bounds
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    uvs: Vec<[f32; 2]>,
    bounds: Bounds,
}

impl SurfaceMesh {
    /// Create a mesh holding the grid's base vertices and connectivity.
    ///
    /// The mesh keeps this grid's index buffer, so it must only be driven by an
    /// [`OceanSystem`](super::OceanSystem) built on the same grid: every
    /// replacement buffer needs the same vertex count.
    pub fn from_grid(grid: &OceanGrid) -> Self {
        let config = grid.config();
        let (x_size, z_size) = (config.x_size, config.z_size);

        let uvs = (0..grid.base_vertices().len())
            .map(|i| {
                if i < grid.populated_len() {
                    [
                        (i % x_size) as f32 / (x_size - 1) as f32,
                        (i / x_size) as f32 / (z_size - 1) as f32,
                    ]
                } else {
                    [0.0, 0.0]
                }
            })
            .collect();

        let mut mesh = Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: grid.indices().to_vec(),
            uvs,
            bounds: Bounds::ZERO,
        };
        mesh.replace_vertices(grid.base_vertices().to_vec());
        mesh.recalculate_normals();
        mesh.recalculate_bounds();
        mesh
    }

    /// Current vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Unit normals, one per vertex
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle indices copied from the grid
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Bounds of the current positions
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Interleaved vertex buffer ready for upload
    pub fn gpu_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: *uv,
            })
            .collect()
    }

    /// Index buffer as raw bytes (u32 per index)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl MeshHost for SurfaceMesh {
    fn replace_vertices(&mut self, positions: Vec<Vec3>) {
        assert_eq!(
            positions.len(),
            self.uvs.len(),
            "replacement buffer does not match the mesh topology"
        );
        self.positions = positions;
    }

    /// Area-weighted vertex normals; vertices outside any triangle point up
    fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for n in &mut normals {
            *n = n.try_normalize().unwrap_or(Vec3::Y);
        }
        self.normals = normals;
    }

    fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.positions);
    }
}
