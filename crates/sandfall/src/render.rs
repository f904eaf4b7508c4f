//! Presentation hand-off: cell colors as pixels.
//!
//! Grid row `y` is written to buffer row `height - 1 - y`; the host presents
//! the buffer bottom-up, so row 0 of the grid ends up on top of the screen.

use crate::cell::Color;
use crate::error::SimError;
use crate::grid::Grid;

/// `(x, y, color)` for every cell in row-major order.
pub fn pixels(grid: &Grid) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
    let w = grid.width();
    grid.cells()
        .iter()
        .enumerate()
        .map(move |(i, cell)| (i % w, i / w, cell.color))
}

#[must_use]
pub fn frame_len(grid: &Grid) -> usize {
    grid.cells().len() * 4
}

/// Fill `buf` with RGBA8 pixels.
///
/// # Errors
///
/// `SimError::FrameSize` if `buf` is not exactly `width * height * 4` bytes.
pub fn write_rgba(grid: &Grid, buf: &mut [u8]) -> Result<(), SimError> {
    let expected = frame_len(grid);
    if buf.len() != expected {
        return Err(SimError::FrameSize {
            expected,
            actual: buf.len(),
        });
    }
    let w = grid.width();
    let h = grid.height();
    if w == 0 {
        return Ok(());
    }
    for (y, row) in grid.cells().chunks_exact(w).enumerate() {
        let dst_row = h - 1 - y;
        let dst = &mut buf[dst_row * w * 4..(dst_row + 1) * w * 4];
        for (px, cell) in dst.chunks_exact_mut(4).zip(row) {
            px.copy_from_slice(&cell.color.to_array());
        }
    }
    Ok(())
}
