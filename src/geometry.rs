//! Annulus illumination masks
//!
//! Rings are centered between the four middle LEDs and tested with squared
//! distances, so no square roots are taken. Radii are squared in `f64`, where
//! every `f32` radius squares exactly.
//!
//! The DPC ring includes its outer edge while the focus ring excludes it.
//! Both exclude the inner edge.

use crate::mask::GridMask;
use crate::topology::{GRID_CENTER, MATRIX_DIM};

/// The four half-ring DPC masks
///
/// Masks overlap: a ring cell in the upper left is lit in both `upper`
/// and `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpcPatterns {
    pub upper: GridMask,
    pub lower: GridMask,
    pub left: GridMask,
    pub right: GridMask,
}

impl DpcPatterns {
    /// Masks in playback order: upper, lower, left, right
    pub const fn to_array(self) -> [GridMask; 4] {
        [self.upper, self.lower, self.left, self.right]
    }
}

impl IntoIterator for DpcPatterns {
    type Item = GridMask;
    type IntoIter = core::array::IntoIter<GridMask, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

/// Half ring used for focusing.
///
/// Lights cells strictly between both radii on the `i > center` side.
pub fn focus_pattern(outer_radius: f32, inner_radius: f32) -> GridMask {
    let outer_sq = square(outer_radius);
    let inner_sq = square(inner_radius);

    let mut mask = GridMask::new();
    for i in 0..MATRIX_DIM {
        for j in 0..MATRIX_DIM {
            let (di, dj) = offset(i, j);
            let d2 = di * di + dj * dj;
            if inner_sq < d2 && d2 < outer_sq && di > 0.0 {
                mask.set(i, j, true);
            }
        }
    }
    mask
}

/// Upper, lower, left and right half rings for differential phase contrast
pub fn dpc_patterns(outer_radius: f32, inner_radius: f32) -> DpcPatterns {
    let outer_sq = square(outer_radius);
    let inner_sq = square(inner_radius);

    let mut patterns = DpcPatterns {
        upper: GridMask::new(),
        lower: GridMask::new(),
        left: GridMask::new(),
        right: GridMask::new(),
    };
    for i in 0..MATRIX_DIM {
        for j in 0..MATRIX_DIM {
            let (di, dj) = offset(i, j);
            let d2 = di * di + dj * dj;
            if d2 > outer_sq || d2 <= inner_sq {
                continue;
            }
            if di > 0.0 {
                patterns.left.set(i, j, true);
            }
            if di < 0.0 {
                patterns.right.set(i, j, true);
            }
            if dj > 0.0 {
                patterns.upper.set(i, j, true);
            }
            if dj < 0.0 {
                patterns.lower.set(i, j, true);
            }
        }
    }
    patterns
}

#[inline]
fn square(radius: f32) -> f64 {
    let radius = f64::from(radius);
    radius * radius
}

/// Offset of a cell from the grid center
#[inline]
#[allow(clippy::cast_precision_loss)]
fn offset(i: usize, j: usize) -> (f64, f64) {
    (i as f64 - GRID_CENTER, j as f64 - GRID_CENTER)
}
