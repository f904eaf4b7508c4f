//! Water element: falls like sand, and rises one cell when everything below is taken.
//!
//! The rise only succeeds with Empty above. A risen particle is dispatched
//! again when its new row is scanned, with the rise disabled, so a pool
//! surface drops back within the same tick unless its old cell was taken.

use crate::api::MoveApi;

pub const CANDIDATES: [(i32, i32); 4] = [(0, 1), (-1, 1), (1, 1), (0, -1)];

pub fn update_water(api: &mut MoveApi) {
    api.try_move(&CANDIDATES);
}
