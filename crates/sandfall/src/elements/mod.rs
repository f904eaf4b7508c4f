//! Per-element update functions dispatched from the tick loop.

mod sand;
mod water;


use crate::api::MoveApi;
use crate::cell::Species;

pub use sand::CANDIDATES as SAND_CANDIDATES;
pub use water::CANDIDATES as WATER_CANDIDATES;

/// Dispatch to the appropriate element update function.
///
/// Empty is a no-op and should be skipped before calling this.
pub fn update_cell(species: Species, api: &mut MoveApi) {
    match species {
        Species::Sand => sand::update_sand(api),
        Species::Water => water::update_water(api),
        Species::Empty => {}
    }
}
