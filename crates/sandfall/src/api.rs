//! Relative-offset move API for element update functions.

use crate::config::SimConfig;
use crate::grid::Grid;

/// A particle at `(x, y)` being updated in generation `generation`.
/// Offsets that fall outside the grid are skipped, never wrapped.
#[derive(Debug)]
pub struct MoveApi<'a> {
    pub grid: &'a mut Grid,
    pub config: &'a SimConfig,
    pub x: i32,
    pub y: i32,
    pub generation: u8,
    pub dt: f32,
}

impl<'a> MoveApi<'a> {
    pub fn new(
        grid: &'a mut Grid,
        config: &'a SimConfig,
        x: i32,
        y: i32,
        generation: u8,
        dt: f32,
    ) -> Self {
        Self {
            grid,
            config,
            x,
            y,
            generation,
            dt,
        }
    }

    /// Integrate gravity into the particle's vertical velocity, then swap it
    /// into the first Empty cell among `candidates` (tried in order).
    ///
    /// Displacement is always one cell; the velocity does not influence it.
    /// A particle that already rose this generation only tries the downward
    /// candidates. Returns whether the particle moved.
    pub fn try_move(&mut self, candidates: &[(i32, i32)]) -> bool {
        let Some(src) = self.grid.index(self.x, self.y) else {
            return false;
        };
        let gravity = self.config.gravity;
        let limit = self.config.max_velocity;
        let dt = self.dt;
        let Some(me) = self.grid.cell_mut(src) else {
            return false;
        };
        me.velocity.y = (me.velocity.y + gravity * dt).clamp(-limit, limit);
        me.lifetime = me.lifetime.saturating_add(1);
        let rose = me.rising && me.clock == self.generation;

        for &(dx, dy) in candidates {
            if rose && dy < 0 {
                continue;
            }
            let Some(dst) = self.grid.index(self.x + dx, self.y + dy) else {
                continue;
            };
            if self.grid.cell(dst).is_some_and(|c| c.is_empty()) {
                self.grid.swap(src, dst);
                if let Some(moved) = self.grid.cell_mut(dst) {
                    moved.clock = self.generation;
                    moved.rising = dy < 0;
                }
                return true;
            }
        }
        false
    }
}
