//! Error types. Only construction and the presentation hand-off can fail;
//! the simulation itself treats out-of-range accesses as no-ops.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid width must be non-zero")]
    ZeroWidth,
    #[error("grid height must be non-zero")]
    ZeroHeight,
    #[error("grid of {width}x{height} cells overflows usize")]
    TooLarge { width: usize, height: usize },
    #[error("gravity {0} must be finite")]
    NonFiniteGravity(f32),
    #[error("velocity clamp {0} must be finite and non-negative")]
    InvalidVelocityClamp(f32),
    #[error("spawn radius {0} must be non-negative")]
    NegativeSpawnRadius(i32),
    #[error("spawn stride {0} must be positive")]
    NonPositiveSpawnStride(i32),
}

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("could not allocate a grid of {cells} cells")]
    Allocation { cells: usize },
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    FrameSize { expected: usize, actual: usize },
}
