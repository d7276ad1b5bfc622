//! Register byte codec
//!
//! Packs a [`GridMask`] into one byte per shift register and unpacks it
//! again. Encoding checks the power budget first and verifies the packed
//! bit count afterwards.

use crate::error::PatternError;
use crate::mapping::{grid_to_register, register_to_grid};
use crate::mask::{CellValue, GridMask};
use crate::topology::{
    LED_MAP, LED_MAP_INVERSE, POWER_BUDGET, REGISTER_COUNT, SLOTS_PER_REGISTER, bit_mask,
};

/// One byte per shift register, in chain order
pub type RegisterBytes = [u8; REGISTER_COUNT];

/// Encode a mask into register bytes
pub fn encode(mask: &GridMask) -> Result<RegisterBytes, PatternError> {
    encode_with_map(mask, &LED_MAP)
}

fn encode_with_map(
    mask: &GridMask,
    led_map: &[usize; SLOTS_PER_REGISTER],
) -> Result<RegisterBytes, PatternError> {
    let lit = mask.lit_count();
    if lit > POWER_BUDGET {
        return Err(PatternError::PowerBudgetExceeded { lit });
    }

    let bytes = pack(mask, led_map);

    let actual = set_bits(&bytes);
    if actual != lit {
        return Err(PatternError::EncodingMismatch {
            expected: lit,
            actual,
        });
    }
    Ok(bytes)
}

/// Validate untyped rows and encode them
pub fn encode_rows<R, T>(rows: &[R]) -> Result<RegisterBytes, PatternError>
where
    R: AsRef<[T]>,
    T: CellValue,
{
    encode(&GridMask::from_rows(rows)?)
}

/// Decode register bytes back into a mask.
///
/// The power budget is not checked, any register state can be decoded.
pub fn decode(bytes: &RegisterBytes) -> GridMask {
    let mut mask = GridMask::new();
    for (register, &byte) in bytes.iter().enumerate() {
        for (bit, &slot) in LED_MAP_INVERSE.iter().enumerate() {
            if byte & bit_mask(bit) != 0 {
                let (col, row) = register_to_grid(register, slot);
                mask.set(col, row, true);
            }
        }
    }
    mask
}

fn pack(mask: &GridMask, led_map: &[usize; SLOTS_PER_REGISTER]) -> RegisterBytes {
    let mut bytes = [0u8; REGISTER_COUNT];
    for (col, row) in mask.lit() {
        let (register, slot) = grid_to_register(col, row);
        bytes[register] |= bit_mask(led_map[slot]);
    }
    bytes
}

fn set_bits(bytes: &RegisterBytes) -> usize {
    bytes.iter().map(|byte| byte.count_ones() as usize).sum()
}
