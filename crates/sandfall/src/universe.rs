//! WASM entry point: the browser drives the simulation through `Universe`.

use wasm_bindgen::prelude::*;

use crate::cell::{Cell, Species};
use crate::config::SimConfig;
use crate::render;
use crate::spawn::PointerInput;
use crate::Simulation;

/// Simulation plus the RGBA frame the host blits each frame.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    frame: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// A message describing why the simulation could not be created.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Universe, String> {
        Self::with_config(SimConfig::with_size(width as usize, height as usize))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.grid().width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.grid().height() as u32
    }

    #[must_use]
    pub fn generation(&self) -> u8 {
        self.sim.generation()
    }

    /// Place a single particle. Unknown species ids are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, species: u8) {
        let Some(species) = Species::from_u8(species) else {
            log::debug!("ignoring unknown species id {species} at ({x}, {y})");
            return;
        };
        let cell = match species {
            Species::Empty => Cell::empty(self.sim.grid().background()),
            _ => Cell::particle(species),
        };
        self.sim.set(x, y, cell);
    }

    /// Apply one frame of pointer input without ticking.
    pub fn pointer(&mut self, x: i32, y: i32, primary: bool, secondary: bool) {
        self.sim.apply_input(&PointerInput {
            x,
            y,
            primary,
            secondary,
        });
    }

    pub fn tick(&mut self, dt: f32) {
        self.sim.tick(dt);
    }

    /// Pointer input followed by a tick: one full control-loop iteration.
    pub fn step(&mut self, x: i32, y: i32, primary: bool, secondary: bool, dt: f32) {
        let input = PointerInput {
            x,
            y,
            primary,
            secondary,
        };
        self.sim.frame(&input, dt);
    }

    /// Refresh the frame buffer from the grid.
    pub fn render(&mut self) {
        // The buffer is sized from the same grid at construction.
        if let Err(err) = render::write_rgba(self.sim.grid(), &mut self.frame) {
            log::warn!("render skipped: {err}");
        }
    }

    #[must_use]
    pub fn frame_ptr(&self) -> *const u8 {
        self.frame.as_ptr()
    }

    #[must_use]
    pub fn frame_len(&self) -> usize {
        self.frame.len()
    }

    pub fn clear(&mut self) {
        self.sim.clear();
    }
}

impl Universe {
    /// # Errors
    ///
    /// A message describing why the simulation could not be created.
    pub fn with_config(config: SimConfig) -> Result<Self, String> {
        let sim = Simulation::new(config).map_err(|err| {
            log::warn!("failed to create simulation: {err}");
            err.to_string()
        })?;
        let frame = vec![0; config.cell_count() * 4];
        Ok(Self { sim, frame })
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[must_use]
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }
}
