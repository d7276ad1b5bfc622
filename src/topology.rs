//! Hardware topology of the LED matrix board
//!
//! A 16x16 LED grid is driven by a chain of 32 shift registers. Every
//! register owns a 2-row by 4-column block of LEDs and the blocks sit on a
//! rack that is 8 registers tall and 4 registers wide.

/// Side length of the square LED grid
pub const MATRIX_DIM: usize = 16;

/// Number of shift registers in the chain
pub const REGISTER_COUNT: usize = 32;

/// Outputs (LEDs) driven by a single shift register
pub const SLOTS_PER_REGISTER: usize = 8;

/// Columns covered by one register block
pub const BLOCK_COLS: usize = 4;

/// Rows covered by one register block
pub const BLOCK_ROWS: usize = 2;

/// Registers stacked along one column of the rack
pub const RACK_ROWS: usize = MATRIX_DIM / BLOCK_ROWS;

/// Maximum number of LEDs that may be lit at the same time.
///
/// Exceeding it overloads the board supply.
pub const POWER_BUDGET: usize = 164;

/// Center of the grid on both axes, offset by half a pixel.
pub const GRID_CENTER: f64 = 7.5;

/// Physical output bit for every block slot.
///
/// Slots `0..4` are the lower block row from left to right, slots `4..8`
/// the upper one. The board routes the upper row in reverse order onto the
/// first four outputs.
pub const LED_MAP: [usize; SLOTS_PER_REGISTER] = [4, 5, 6, 7, 3, 2, 1, 0];

/// Block slot for every physical output bit
pub const LED_MAP_INVERSE: [usize; SLOTS_PER_REGISTER] = invert(&LED_MAP);

const _: () = assert!(is_permutation(&LED_MAP), "LED_MAP must be a permutation");
const _: () = assert!(RACK_ROWS * (MATRIX_DIM / BLOCK_COLS) == REGISTER_COUNT);
const _: () = assert!(BLOCK_ROWS * BLOCK_COLS == SLOTS_PER_REGISTER);

/// Byte mask of a physical output bit.
///
/// Output 0 is shifted out first, so it lives in the most significant bit.
#[inline]
pub const fn bit_mask(bit: usize) -> u8 {
    0x80 >> bit
}

const fn is_permutation(map: &[usize; SLOTS_PER_REGISTER]) -> bool {
    let mut seen = [false; SLOTS_PER_REGISTER];
    let mut slot = 0;
    while slot < SLOTS_PER_REGISTER {
        let bit = map[slot];
        if bit >= SLOTS_PER_REGISTER || seen[bit] {
            return false;
        }
        seen[bit] = true;
        slot += 1;
    }
    true
}

const fn invert(map: &[usize; SLOTS_PER_REGISTER]) -> [usize; SLOTS_PER_REGISTER] {
    let mut inverse = [0; SLOTS_PER_REGISTER];
    let mut slot = 0;
    while slot < SLOTS_PER_REGISTER {
        inverse[map[slot]] = slot;
        slot += 1;
    }
    inverse
}
