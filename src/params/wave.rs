//! Gerstner wave parameters and their runtime setters.

use std::f32::consts::PI;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::OceanError;

/// Gravity constant for the deep-water dispersion relation (m/s²)
pub const GRAVITY: f32 = 9.8;

/// Parameters for a single Gerstner wave.
///
/// Fields are private so every instance has passed validation: wavelength is
/// finite and positive, amplitude finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Crest-to-crest distance in meters
    wavelength: f32,

    /// Wave height in meters
    amplitude: f32,
}

impl WaveParams {
    /// Validated wave; fails with `InvalidParameter` on a bad value
    pub fn new(wavelength: f32, amplitude: f32) -> Result<Self, OceanError> {
        Ok(Self {
            wavelength: check_wavelength("wavelength", wavelength)?,
            amplitude: check_amplitude(amplitude)?,
        })
    }

    /// Crest-to-crest distance (meters)
    pub fn wavelength(&self) -> f32 {
        self.wavelength
    }

    /// Wave height (meters)
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Wave number (k = 2π / wavelength)
    #[inline(always)]
    pub fn wave_number(&self) -> f32 {
        2.0 * PI / self.wavelength
    }

    /// Phase speed from the dispersion relation (c = sqrt(g / k))
    #[inline(always)]
    pub fn phase_speed(&self) -> f32 {
        (GRAVITY / self.wave_number()).sqrt()
    }

    /// Time for the phase to advance one full cycle (seconds)
    pub fn period(&self) -> f32 {
        self.wavelength / self.phase_speed()
    }
}

fn check_wavelength(name: &'static str, value: f32) -> Result<f32, OceanError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OceanError::InvalidParameter { name, value })
    }
}

fn check_amplitude(value: f32) -> Result<f32, OceanError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(OceanError::InvalidParameter {
            name: "amplitude",
            value,
        })
    }
}

/// The two active waves.
///
/// Amplitude is shared: `set_amplitude` writes both waves, so the primary and
/// secondary wave always carry the same height and differ only in wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSettings {
    primary: WaveParams,
    secondary: WaveParams,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            primary: WaveParams {
                wavelength: 12.0,
                amplitude: 0.4,
            },
            secondary: WaveParams {
                wavelength: 5.0,
                amplitude: 0.4,
            },
        }
    }
}

impl WaveSettings {
    /// Both waves with one shared amplitude; every value is validated
    pub fn new(
        amplitude: f32,
        wavelength: f32,
        secondary_wavelength: f32,
    ) -> Result<Self, OceanError> {
        Ok(Self {
            primary: WaveParams::new(wavelength, amplitude)?,
            secondary: WaveParams::new(secondary_wavelength, amplitude)?,
        })
    }

    /// Longer, dominant wave
    pub fn primary(&self) -> &WaveParams {
        &self.primary
    }

    /// Second wave, summed with the primary
    pub fn secondary(&self) -> &WaveParams {
        &self.secondary
    }

    /// Amplitude shared by both waves (meters)
    pub fn amplitude(&self) -> f32 {
        self.primary.amplitude
    }

    /// Replace the shared amplitude; a rejected value leaves both waves untouched
    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<(), OceanError> {
        let amplitude = check_amplitude(amplitude).inspect_err(log_rejected)?;
        self.primary.amplitude = amplitude;
        self.secondary.amplitude = amplitude;
        Ok(())
    }

    /// Replace the primary wavelength; a rejected value keeps the old one
    pub fn set_wavelength(&mut self, wavelength: f32) -> Result<(), OceanError> {
        self.primary.wavelength =
            check_wavelength("wavelength", wavelength).inspect_err(log_rejected)?;
        Ok(())
    }

    /// Replace the secondary wavelength; a rejected value keeps the old one
    pub fn set_secondary_wavelength(&mut self, wavelength: f32) -> Result<(), OceanError> {
        self.secondary.wavelength =
            check_wavelength("secondary_wavelength", wavelength).inspect_err(log_rejected)?;
        Ok(())
    }
}

fn log_rejected(err: &OceanError) {
    log::warn!("Rejected wave update, keeping previous value: {}", err);
}

/// Wave settings shared between an external controller and the tick loop.
///
/// Setters and [`snapshot`](Self::snapshot) take the same lock, so an
/// evaluation never observes a half-applied update.
#[derive(Debug, Clone, Default)]
pub struct SharedWaveSettings {
    inner: Arc<Mutex<WaveSettings>>,
}

impl SharedWaveSettings {
    /// Wrap already-validated settings
    pub fn new(settings: WaveSettings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(settings)),
        }
    }

    /// Copy of the current settings, taken once per evaluation
    pub fn snapshot(&self) -> WaveSettings {
        *self.lock()
    }

    /// See [`WaveSettings::set_amplitude`]
    pub fn set_amplitude(&self, amplitude: f32) -> Result<(), OceanError> {
        self.lock().set_amplitude(amplitude)
    }

    /// See [`WaveSettings::set_wavelength`]
    pub fn set_wavelength(&self, wavelength: f32) -> Result<(), OceanError> {
        self.lock().set_wavelength(wavelength)
    }

    /// See [`WaveSettings::set_secondary_wavelength`]
    pub fn set_secondary_wavelength(&self, wavelength: f32) -> Result<(), OceanError> {
        self.lock().set_secondary_wavelength(wavelength)
    }

    fn lock(&self) -> MutexGuard<'_, WaveSettings> {
        // Settings are plain Copy data, a poisoned lock still holds a valid value
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
