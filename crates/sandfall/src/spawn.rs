//! Spawn tool: stamps a sparse disc of particles under the pointer.

use crate::cell::{Color, Species};
use crate::config::SimConfig;
use crate::grid::Grid;

/// Pointer state polled once per frame. Coordinates are grid cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PointerInput {
    pub x: i32,
    pub y: i32,
    /// Spawns sand.
    pub primary: bool,
    /// Spawns water.
    pub secondary: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    pub radius: i32,
    pub stride: i32,
}

impl Brush {
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            radius: config.spawn_radius,
            stride: config.spawn_stride,
        }
    }

    /// Offsets `(dx, dy)` the brush covers: every `stride`-th step of
    /// `-radius..radius` on both axes, kept if inside the disc.
    pub fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        let Self { radius, stride } = self;
        let step = stride.max(1) as usize;
        (-radius..radius).step_by(step).flat_map(move |dy| {
            (-radius..radius)
                .step_by(step)
                .filter(move |dx| dx * dx + dy * dy <= radius * radius)
                .map(move |dx| (dx, dy))
        })
    }
}

/// Overwrite every in-grid brush cell around `(cx, cy)` with `species`/`color`,
/// whatever it held before. Off-grid cells are skipped. Returns the count written.
pub fn stamp_disc(
    grid: &mut Grid,
    cx: i32,
    cy: i32,
    brush: Brush,
    species: Species,
    color: Color,
    generation: u8,
) -> usize {
    let mut written = 0;
    for (dx, dy) in brush.offsets() {
        let Some(idx) = grid.index(cx + dx, cy + dy) else {
            continue;
        };
        if let Some(cell) = grid.cell_mut(idx) {
            cell.species = species;
            cell.color = color;
            cell.lifetime = 0;
            // The next tick uses generation + 1, so the new particle is dispatched.
            cell.clock = generation;
            cell.rising = false;
            written += 1;
        }
    }
    log::debug!("stamped {written} {species} cells at ({cx}, {cy})");
    written
}
