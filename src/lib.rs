//! wavegrid - procedural ocean grid animated by superposed Gerstner waves

pub mod cli;
pub mod error;
pub mod export;
pub mod noise;
pub mod ocean;
pub mod params;

pub use error::OceanError;
