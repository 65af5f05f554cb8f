//! Headless run and heightmap export configuration.

use std::path::PathBuf;

/// Fixed-step simulation run with an optional heightmap written at the end
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Duration to simulate (seconds)
    pub duration_secs: f32,

    /// Tick rate (frames per second)
    pub fps: u32,

    /// Grayscale PNG of the final displaced surface
    pub output: Option<PathBuf>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            fps: 60,
            output: None,
        }
    }
}

impl SnapshotConfig {
    /// Total number of ticks to run
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Seconds between ticks
    pub fn tick_s(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Simulation time at the given tick
    pub fn time_at(&self, frame: usize) -> f32 {
        frame as f32 * self.tick_s()
    }
}
