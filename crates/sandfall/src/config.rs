//! Simulation parameters.
//!
//! The constants are the values the simulation is tuned for; `SimConfig`
//! bundles them so several simulations (and tests) can run with their own.

use crate::cell::Color;
use crate::error::ConfigError;

pub const WIDTH: usize = 600;
pub const HEIGHT: usize = 480;
/// Velocity gained per second of frame time.
pub const GRAVITY: f32 = 9.8;
/// Vertical velocity is clamped to `[-MAX_VELOCITY, MAX_VELOCITY]`.
pub const MAX_VELOCITY: f32 = 10.0;
pub const SPAWN_RADIUS: i32 = 50;
/// Only every `SPAWN_STRIDE`-th offset of the disc is stamped.
pub const SPAWN_STRIDE: i32 = 3;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub gravity: f32,
    pub max_velocity: f32,
    pub spawn_radius: i32,
    pub spawn_stride: i32,
    pub background: Color,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            gravity: GRAVITY,
            max_velocity: MAX_VELOCITY,
            spawn_radius: SPAWN_RADIUS,
            spawn_stride: SPAWN_STRIDE,
            background: Color::BACKGROUND,
        }
    }
}

impl SimConfig {
    /// Default physics on a grid of the given size.
    #[must_use]
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // Coordinates travel as i32 through the move API.
        let fits_i32 = i32::try_from(self.width).is_ok() && i32::try_from(self.height).is_ok();
        if !fits_i32 || self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity(self.gravity));
        }
        if !self.max_velocity.is_finite() || self.max_velocity < 0.0 {
            return Err(ConfigError::InvalidVelocityClamp(self.max_velocity));
        }
        if self.spawn_radius < 0 {
            return Err(ConfigError::NegativeSpawnRadius(self.spawn_radius));
        }
        if self.spawn_stride <= 0 {
            return Err(ConfigError::NonPositiveSpawnStride(self.spawn_stride));
        }
        Ok(())
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
