#![no_std]

pub mod codec;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod mapping;
pub mod mask;
pub mod player;
pub mod sequence;
pub mod topology;

pub use codec::{RegisterBytes, decode, encode, encode_rows};
pub use controller::{ActiveLevel, Automatrix, AutomatrixConfig, ControllerError, Program};
pub use error::{ErrorKind, PatternError};
pub use geometry::{DpcPatterns, dpc_patterns, focus_pattern};
pub use mapping::{grid_to_register, register_to_grid};
pub use mask::{CellValue, GridMask};
pub use player::{PatternPlayer, PlaybackStep};
pub use sequence::PatternSequence;

pub use embassy_time::{Duration, Instant};

/// Abstract matrix driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Shift a pattern into the register chain
    fn write(&mut self, pattern: &RegisterBytes) -> Result<(), Self::Error>;

    /// Drive the trigger pin high (`true`) or low (`false`)
    fn set_trigger(&mut self, high: bool) -> Result<(), Self::Error>;
}
