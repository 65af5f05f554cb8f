//! High-level ocean system: build once, evaluate every tick.

use glam::Vec3;

use super::mesh::OceanGrid;
use super::surface::MeshHost;
use super::waves;
use crate::error::OceanError;
use crate::params::{GridConfig, SharedWaveSettings, WaveSettings};

/// Static grid plus the wave settings controllers may change at runtime
pub struct OceanSystem {
    grid: OceanGrid,
    waves: SharedWaveSettings,
}

impl OceanSystem {
    /// Build the grid for `config`; fails before allocating if it is invalid
    pub fn build(config: &GridConfig, waves: WaveSettings) -> Result<Self, OceanError> {
        Ok(Self::with_grid(OceanGrid::build(config)?, SharedWaveSettings::new(waves)))
    }

    /// Wrap an existing grid and settings handle
    pub fn with_grid(grid: OceanGrid, waves: SharedWaveSettings) -> Self {
        Self { grid, waves }
    }

    /// Static grid the surface is evaluated from
    pub fn grid(&self) -> &OceanGrid {
        &self.grid
    }

    /// Handle for external controllers; clone it to share across threads
    pub fn waves(&self) -> &SharedWaveSettings {
        &self.waves
    }

    /// Displaced positions for `time_s` without touching any host
    pub fn displaced(&self, time_s: f32) -> Vec<Vec3> {
        let settings = self.waves.snapshot();
        waves::evaluate(
            self.grid.base_vertices(),
            settings.primary(),
            settings.secondary(),
            time_s,
            self.grid.config().indexing,
        )
    }

    /// Evaluate the surface at `time_s` and push it into `host`
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    /// * `host` - Mesh that receives the replacement buffer
    pub fn evaluate(&self, time_s: f32, host: &mut impl MeshHost) {
        host.replace_vertices(self.displaced(time_s));
        host.recalculate_normals();
        host.recalculate_bounds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::surface::SurfaceMesh;
    use crate::params::IndexingMode;

    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<&'static str>,
        positions: Vec<Vec3>,
    }

    impl MeshHost for RecordingHost {
        fn replace_vertices(&mut self, positions: Vec<Vec3>) {
            self.calls.push("replace");
            self.positions = positions;
        }

        fn recalculate_normals(&mut self) {
            self.calls.push("normals");
        }

        fn recalculate_bounds(&mut self) {
            self.calls.push("bounds");
        }
    }

    fn small_config() -> GridConfig {
        GridConfig {
            x_size: 6,
            z_size: 5,
            ..GridConfig::default()
        }
    }

    #[test]
    fn test_evaluate_replaces_then_recomputes() {
        let ocean = OceanSystem::build(&small_config(), WaveSettings::default()).unwrap();
        let mut host = RecordingHost::default();

        ocean.evaluate(0.5, &mut host);

        assert_eq!(host.calls, vec!["replace", "normals", "bounds"]);
        assert_eq!(host.positions.len(), ocean.grid().base_vertices().len());
    }

    #[test]
    fn test_setter_applies_on_next_evaluation() {
        let ocean = OceanSystem::build(&small_config(), WaveSettings::default()).unwrap();
        let before = ocean.displaced(1.0);

        ocean.waves().set_amplitude(0.0).unwrap();
        let after = ocean.displaced(1.0);

        let populated = ocean.grid().populated_len();
        assert_ne!(before[..populated], after[..populated]);
        assert_eq!(
            after[..populated],
            ocean.grid().base_vertices()[..populated]
        );
    }

    #[test]
    fn test_rejected_setter_keeps_surface() {
        let ocean = OceanSystem::build(&small_config(), WaveSettings::default()).unwrap();
        let before = ocean.displaced(2.0);

        assert!(ocean.waves().set_secondary_wavelength(0.0).is_err());
        assert_eq!(ocean.displaced(2.0), before);
    }

    #[test]
    fn test_successive_frames_are_independent() {
        let config = GridConfig {
            indexing: IndexingMode::Corrected,
            ..small_config()
        };
        let ocean = OceanSystem::build(&config, WaveSettings::default()).unwrap();
        let mut mesh = SurfaceMesh::from_grid(ocean.grid());

        ocean.evaluate(0.25, &mut mesh);
        let first = mesh.positions().to_vec();
        ocean.evaluate(3.0, &mut mesh);
        ocean.evaluate(0.25, &mut mesh);

        assert_eq!(mesh.positions(), first.as_slice());
    }

    #[test]
    fn test_invalid_grid_fails_build() {
        let config = GridConfig {
            x_size: 1,
            ..small_config()
        };
        assert!(OceanSystem::build(&config, WaveSettings::default()).is_err());
    }

    #[test]
    fn test_zero_wavelength_fails_build() {
        let built = WaveSettings::new(0.4, 0.0, 5.0)
            .and_then(|waves| OceanSystem::build(&small_config(), waves));
        assert!(matches!(
            built,
            Err(OceanError::InvalidParameter {
                name: "wavelength",
                ..
            })
        ));
    }

    #[test]
    fn test_displaced_vertices_stay_finite() {
        let ocean = OceanSystem::build(&small_config(), WaveSettings::default()).unwrap();
        for result in [
            ocean.waves().set_wavelength(0.0),
            ocean.waves().set_secondary_wavelength(f32::NAN),
            ocean.waves().set_amplitude(f32::INFINITY),
        ] {
            assert!(result.is_err());
        }
        for t in [0.0, 1.0, 17.5] {
            assert!(ocean.displaced(t).iter().all(|v| v.is_finite()));
        }
    }
}
