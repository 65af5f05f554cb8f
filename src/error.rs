//! Errors raised while configuring the ocean surface.

/// Errors related to grid construction and wave parameter updates.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OceanError {
    /// Grid configuration cannot produce a valid mesh
    #[error("invalid grid config: {0}")]
    InvalidConfig(String),
    /// Wave parameter rejected by a setter; the previous value is kept
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}
