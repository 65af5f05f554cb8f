//! Parameter definitions with physical units and documented semantics.

mod grid;
mod snapshot;
mod wave;

pub use grid::{GridConfig, IndexingMode};
pub use snapshot::SnapshotConfig;
pub use wave::{SharedWaveSettings, WaveParams, WaveSettings, GRAVITY};
