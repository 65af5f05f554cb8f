//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::OceanError;
use crate::params::{GridConfig, IndexingMode, SnapshotConfig, WaveSettings};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavegrid")]
#[command(about = "Headless Gerstner ocean surface simulator", long_about = None)]
pub struct Args {
    /// Vertices along X
    #[arg(long, default_value_t = 64)]
    pub x_size: usize,

    /// Vertices along Z
    #[arg(long, default_value_t = 64)]
    pub z_size: usize,

    /// Noise sampling frequency per grid step
    #[arg(long, default_value_t = 0.3)]
    pub noise_scale: f32,

    /// Height multiplier for the initial noise terrain (meters)
    #[arg(long, default_value_t = 2.0)]
    pub height_scale: f32,

    /// Perlin noise seed
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Amplitude shared by both waves (meters)
    #[arg(long, default_value_t = 0.4)]
    pub amplitude: f32,

    /// Primary wavelength (meters)
    #[arg(long, default_value_t = 12.0)]
    pub wavelength: f32,

    /// Secondary wavelength (meters)
    #[arg(long, default_value_t = 5.0)]
    pub secondary_wavelength: f32,

    /// Buffer layout: reference keeps the legacy slack slots, corrected drops them
    #[arg(long, value_enum, default_value_t = Indexing::Reference)]
    pub indexing: Indexing,

    /// Seconds to simulate
    #[arg(long, value_name = "SECONDS", default_value_t = 2.0)]
    pub duration: f32,

    /// Ticks per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Write the final surface as a grayscale PNG heightmap
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indexing {
    Reference,
    Corrected,
}

impl From<Indexing> for IndexingMode {
    fn from(value: Indexing) -> Self {
        match value {
            Indexing::Reference => IndexingMode::Reference,
            Indexing::Corrected => IndexingMode::Corrected,
        }
    }
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            x_size: self.x_size,
            z_size: self.z_size,
            noise_scale: self.noise_scale,
            height_scale: self.height_scale,
            noise_seed: self.seed,
            indexing: self.indexing.into(),
        }
    }

    pub fn wave_settings(&self) -> Result<WaveSettings, OceanError> {
        WaveSettings::new(self.amplitude, self.wavelength, self.secondary_wavelength)
    }

    pub fn snapshot_config(&self) -> SnapshotConfig {
        SnapshotConfig {
            duration_secs: self.duration,
            fps: self.fps,
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["wavegrid"]);
        let grid = args.grid_config();
        let defaults = GridConfig::default();

        assert_eq!(grid.x_size, defaults.x_size);
        assert_eq!(grid.noise_scale, defaults.noise_scale);
        assert_eq!(grid.indexing, IndexingMode::Reference);
        assert_eq!(args.wave_settings().unwrap(), WaveSettings::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "wavegrid",
            "--x-size",
            "10",
            "--indexing",
            "corrected",
            "--wavelength",
            "20",
            "--output",
            "out.png",
        ]);
        assert_eq!(args.grid_config().x_size, 10);
        assert_eq!(args.grid_config().indexing, IndexingMode::Corrected);
        assert_eq!(args.wave_settings().unwrap().primary().wavelength(), 20.0);
        assert_eq!(
            args.snapshot_config().output,
            Some(PathBuf::from("out.png"))
        );
    }

    #[test]
    fn test_zero_wavelength_argument_rejected() {
        let args = Args::parse_from(["wavegrid", "--secondary-wavelength", "0"]);
        assert!(args.wave_settings().is_err());
    }
}
