//! Falling sand simulation engine.
//!
//! Sand and water particles on a fixed grid. Each frame the host reports the
//! pointer, [`Simulation::frame`] stamps particles and advances one tick, and
//! [`render::write_rgba`] hands the result to the presentation layer.

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod error;
pub mod grid;
pub mod render;
pub mod spawn;
pub mod universe;

use cell::{Cell, Color, Species};
use config::SimConfig;
use error::SimError;
use grid::Grid;
use spawn::{Brush, PointerInput};

pub use universe::Universe;

/// Owns the grid and the parameters it is simulated with.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    generation: u8,
}

impl Simulation {
    /// # Errors
    ///
    /// Fails if `config` does not validate or the grid cannot be allocated.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height, config.background)?;
        log::info!(
            "simulation {}x{}, {} cells (gravity {}, velocity clamp ±{})",
            config.width,
            config.height,
            config.cell_count(),
            config.gravity,
            config.max_velocity,
        );
        Ok(Self {
            config,
            grid,
            generation: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Advance the simulation by one tick of `dt` seconds.
    ///
    /// Scans rows bottom-to-top starting one above the floor, columns left to
    /// right. Particles only move down or sideways into rows already scanned,
    /// except water rising into the next row. Moved cells are stamped with the
    /// generation and skipped; a particle that rose is dispatched once more and
    /// may only fall, so a resting surface drops back within the same tick.
    pub fn tick(&mut self, dt: f32) {
        self.generation = self.generation.wrapping_add(1);
        let gen = self.generation;
        let w = self.grid.width() as i32;
        let h = self.grid.height() as i32;

        for y in (0..h - 1).rev() {
            for x in 0..w {
                let Some(cell) = self.grid.get(x, y) else {
                    continue;
                };
                if cell.is_empty() || (cell.clock == gen && !cell.rising) {
                    continue;
                }
                let mut api = api::MoveApi::new(&mut self.grid, &self.config, x, y, gen, dt);
                elements::update_cell(cell.species, &mut api);
            }
        }
    }

    /// Stamp a disc of `species` in its default color centred on `(x, y)`.
    /// Returns the number of cells written.
    pub fn spawn(&mut self, x: i32, y: i32, species: Species) -> usize {
        let color = species
            .default_color()
            .unwrap_or(self.config.background);
        self.spawn_with_color(x, y, species, color)
    }

    pub fn spawn_with_color(&mut self, x: i32, y: i32, species: Species, color: Color) -> usize {
        let brush = Brush::from_config(&self.config);
        spawn::stamp_disc(&mut self.grid, x, y, brush, species, color, self.generation)
    }

    /// Primary spawns sand, secondary spawns water; both may fire in one frame.
    pub fn apply_input(&mut self, input: &PointerInput) {
        if input.primary {
            self.spawn(input.x, input.y, Species::Sand);
        }
        if input.secondary {
            self.spawn(input.x, input.y, Species::Water);
        }
    }

    /// One control-loop iteration: spawn from input, then tick.
    pub fn frame(&mut self, input: &PointerInput, dt: f32) {
        self.apply_input(input);
        self.tick(dt);
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        self.grid.set(x, y, cell);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }
}
