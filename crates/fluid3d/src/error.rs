//! Error types.

use thiserror::Error;

/// Errors raised while configuring a [`crate::FluidGrid`].
#[derive(Error, Debug)]
pub enum FluidError {
    #[error("grid size must be ≥ 3, got {size}")]
    GridTooSmall { size: usize },

    #[error("grid size {size} is too large: size³ overflows")]
    GridTooLarge { size: usize },

    #[error("timestep must be positive and finite, got {dt}")]
    InvalidTimestep { dt: f32 },

    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("{name} must be non-negative and finite, got {value}")]
    NegativeRate { name: &'static str, value: f32 },

    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
