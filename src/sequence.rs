use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::codec::{RegisterBytes, decode, encode};
use crate::error::PatternError;
use crate::mask::GridMask;

/// Ordered illumination program
///
/// N is the maximum number of patterns in the program.
/// Patterns are played back in the order they were appended.
#[derive(Debug, Clone, Default)]
pub struct PatternSequence<const N: usize> {
    patterns: Vec<RegisterBytes, N>,
}

impl<const N: usize> PatternSequence<N> {
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Encode a mask and append it to the program
    ///
    /// Nothing is stored if the mask is rejected or the program is full.
    pub fn append(&mut self, mask: &GridMask) -> Result<(), PatternError> {
        let bytes = encode(mask)?;
        self.patterns
            .push(bytes)
            .map_err(|_| PatternError::SequenceFull)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternSequence.append] pattern {} encoded as {:02x?}",
            self.patterns.len() - 1,
            bytes
        );
        Ok(())
    }

    /// Remove all patterns
    pub fn clear(&mut self) {
        self.patterns.clear();
    }

    /// Decode every pattern back into a mask, in playback order
    pub fn as_masks(&self) -> Vec<GridMask, N> {
        self.patterns.iter().map(decode).collect()
    }

    pub fn patterns(&self) -> &[RegisterBytes] {
        &self.patterns
    }

    pub fn get(&self, index: usize) -> Option<&RegisterBytes> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisterBytes> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}
