//! Logical LED grid
//!
//! The outer axis of a [`GridMask`] is the wiring's column axis (`col`),
//! the inner axis is the row axis (`row`).

use core::fmt;

use crate::error::PatternError;
use crate::topology::MATRIX_DIM;

/// Cell types accepted when building a mask from untyped rows
pub trait CellValue: Copy {
    /// Returns the lit state, or the raw value if it is not a valid cell
    fn to_lit(self) -> Result<bool, u8>;
}

impl CellValue for bool {
    fn to_lit(self) -> Result<bool, u8> {
        Ok(self)
    }
}

impl CellValue for u8 {
    fn to_lit(self) -> Result<bool, u8> {
        match self {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(other),
        }
    }
}

/// 16x16 grid of lit/dark LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridMask {
    cells: [[bool; MATRIX_DIM]; MATRIX_DIM],
}

impl GridMask {
    /// Create a mask with every LED dark
    pub const fn new() -> Self {
        Self {
            cells: [[false; MATRIX_DIM]; MATRIX_DIM],
        }
    }

    pub const fn from_cells(cells: [[bool; MATRIX_DIM]; MATRIX_DIM]) -> Self {
        Self { cells }
    }

    /// Build a mask from untyped rows of `0`/`1` bytes or booleans.
    ///
    /// Fails if the input is not exactly 16x16 or a byte is not 0 or 1.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self, PatternError>
    where
        R: AsRef<[T]>,
        T: CellValue,
    {
        if rows.len() != MATRIX_DIM {
            return Err(PatternError::InvalidShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |row| row.as_ref().len()),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.as_ref().len() != MATRIX_DIM) {
            return Err(PatternError::InvalidShape {
                rows: rows.len(),
                cols: bad.as_ref().len(),
            });
        }

        let mut mask = Self::new();
        for (col, cells) in rows.iter().enumerate() {
            for (row, &value) in cells.as_ref().iter().enumerate() {
                let lit = value
                    .to_lit()
                    .map_err(|value| PatternError::InvalidCell { col, row, value })?;
                mask.cells[col][row] = lit;
            }
        }
        Ok(mask)
    }

    /// Check if the LED at `(col, row)` is lit
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub const fn get(&self, col: usize, row: usize) -> bool {
        self.cells[col][row]
    }

    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, lit: bool) {
        self.cells[col][row] = lit;
    }

    pub const fn cells(&self) -> &[[bool; MATRIX_DIM]; MATRIX_DIM] {
        &self.cells
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Iterate over the `(col, row)` positions of lit LEDs
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(col, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &lit)| lit)
                .map(move |(row, _)| (col, row))
        })
    }

    /// Cells lit in both masks
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for (col, row) in self.lit() {
            if other.get(col, row) {
                out.set(col, row, true);
            }
        }
        out
    }
}

impl fmt::Display for GridMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, cells) in self.cells.iter().enumerate() {
            if col > 0 {
                f.write_str("\n")?;
            }
            for &lit in cells {
                f.write_str(if lit { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
