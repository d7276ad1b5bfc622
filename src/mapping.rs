//! Grid to shift register coordinate mapping
//!
//! Registers are numbered bottom to top inside a rack column, then left to
//! right across the four rack columns:
//!
//! ```text
//! 7, 15, 23, 31,
//! 6, 14, 22, 30,
//! ...
//! 0,  8, 16, 24,
//! ```
//!
//! Inside a register the 2x4 block slots are numbered
//!
//! ```text
//! 4, 5, 6, 7,
//! 0, 1, 2, 3,
//! ```

use crate::topology::{
    BLOCK_COLS, BLOCK_ROWS, MATRIX_DIM, RACK_ROWS, REGISTER_COUNT, SLOTS_PER_REGISTER,
};

/// Returns `(register, slot)` of the LED at grid position `(col, row)`.
///
/// # Panics
///
/// Panics if either coordinate is outside the grid.
pub const fn grid_to_register(col: usize, row: usize) -> (usize, usize) {
    assert!(col < MATRIX_DIM && row < MATRIX_DIM, "grid coordinate out of range");
    let register = row / BLOCK_ROWS + (col / BLOCK_COLS) * RACK_ROWS;
    let slot = col % BLOCK_COLS + (row % BLOCK_ROWS) * BLOCK_COLS;
    (register, slot)
}

/// Returns the grid position `(col, row)` of a register slot.
///
/// # Panics
///
/// Panics if the register or the slot index is out of range.
pub const fn register_to_grid(register: usize, slot: usize) -> (usize, usize) {
    assert!(
        register < REGISTER_COUNT && slot < SLOTS_PER_REGISTER,
        "register coordinate out of range"
    );
    let col = (register / RACK_ROWS) * BLOCK_COLS + slot % BLOCK_COLS;
    let row = (register % RACK_ROWS) * BLOCK_ROWS + slot / BLOCK_COLS;
    (col, row)
}
