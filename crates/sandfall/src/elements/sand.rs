//! Sand element: falls straight down, then diagonally down-left, then down-right.
//!
//! Trying left before right makes piles spread slightly to the left.

use crate::api::MoveApi;

pub const CANDIDATES: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

pub fn update_sand(api: &mut MoveApi) {
    api.try_move(&CANDIDATES);
}
