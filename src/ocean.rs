//! Ocean surface: static noise-height grid animated by two Gerstner waves.

mod mesh;
mod surface;
mod system;
pub mod waves;

// Re-export public types
pub use mesh::OceanGrid;
pub use surface::{Bounds, MeshHost, SurfaceMesh, Vertex};
pub use system::OceanSystem;
